//! Application services for reading ingestion.

mod store;

pub use store::{IngestionError, IngestionResult, ReadingStore};
