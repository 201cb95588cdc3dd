//! Step definitions for sensor ingestion BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
