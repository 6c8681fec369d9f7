//! Item table backends.
//!
//! This module provides concrete implementations of
//! `notes_core::storage::ItemTable`.
//!
//! - `inmemory`: always available, used for tests and local experiments
//! - `dynamodb` (feature `dynamodb`): AWS DynamoDB using `aws-sdk-dynamodb`
//!
//! Build without DynamoDB:
//! ```bash
//! cargo build -p notes --no-default-features
//! ```

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub use inmemory::InMemoryTable;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbTable;
