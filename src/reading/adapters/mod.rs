//! Adapter implementations of the reading ports.

pub mod memory;
pub mod postgres;
