//! In-memory storage backend for testing.
//!
//! Stores items in a `BTreeMap` keyed by `(partition_key, sort_key)` and
//! wrapped in `Arc<RwLock<_>>`. Queries return items in sort-key order, like
//! DynamoDB does. Data is lost when the table is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use notes::storage::InMemoryTable;
//!
//! let table = InMemoryTable::new();
//! // Use table for testing...
//! ```

mod table;

pub use table::InMemoryTable;
