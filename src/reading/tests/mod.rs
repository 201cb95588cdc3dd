//! Unit tests for the reading module.
//!
//! Tests are organised by concern: domain value construction, payload
//! validation, and store orchestration.
