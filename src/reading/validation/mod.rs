//! Reading validation implementation.
//!
//! This module provides the field rules and the composite validator service
//! that gates every inbound "create reading" payload.

pub mod rules;
pub mod service;

pub use service::DefaultReadingValidator;
