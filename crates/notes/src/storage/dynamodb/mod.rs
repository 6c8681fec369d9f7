//! DynamoDB storage backend implementation.
//!
//! Items live in one table keyed by `pk` (owning user) and `sk` (tagged item
//! id), using `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;
pub mod schema;
mod table;

pub use client::create_client;
pub use error::SchemaError;
pub use table::DynamoDbTable;
