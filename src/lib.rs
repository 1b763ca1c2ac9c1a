//! File Line Validator
//!
//! Line-by-line validation of structured record files against an ordered
//! set of field rules.
//!
//! This library provides:
//! - The data-parallel validation engine
//! - Built-in field rules and ruleset loading from TOML
//! - An HTTP upload surface returning the validation report as JSON
//! - Configuration management

pub mod api;
pub mod config;
pub mod core;
pub mod rules;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use core::{Line, LineOutcome, ValidationReport};
pub use rules::{RuleRegistry, RulesetFile, ValidationRule};
pub use validation::{validate_content, validate_line};
