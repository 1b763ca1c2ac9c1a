//! Validation Engine
//!
//! Clean separation of validation logic from transport and configuration
//! concerns.

pub mod engine;

pub use engine::{validate_content, validate_line};
