//! `PostgreSQL` adapters for reading persistence.

mod models;
mod repository;
mod schema;

pub use repository::{CREATE_READINGS_SQL, PostgresReadingRepository, ReadingPgPool};
