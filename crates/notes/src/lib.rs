//! notes - storage backends, configuration and CLI plumbing for the note store.

pub mod cli;
pub mod config;
pub mod ids;
pub mod output;
pub mod storage;

pub use config::Config;
pub use ids::UuidIdGenerator;
