//! Port contracts for reading ingestion.
//!
//! Ports define infrastructure-agnostic interfaces used by reading services.

pub mod repository;
pub mod validator;

pub use repository::{ReadingRepository, ReadingRepositoryError, ReadingRepositoryResult};
pub use validator::{ReadingValidator, ValidationResult};
