//! Validation Rules
//!
//! The rule capability, the built-in field rules, and the machinery that
//! turns a ruleset definition into an ordered list of live rules.

pub mod account;
pub mod registry;
pub mod schema;

pub use account::{AccountNameRule, AccountNumberRule};
pub use registry::RuleRegistry;
pub use schema::{RulesetDef, RulesetFile};

/// A named predicate over a single whitespace-delimited field.
///
/// Implementations are pure functions of their input: stateless, total, and
/// non-panicking over any `&str` including the empty string. Absence of a
/// value is a validation failure, never an error. The rule at position *i*
/// of a ruleset judges field *i* of every line, so the order rules are
/// supplied in is part of the contract.
pub trait ValidationRule: Send + Sync + std::fmt::Debug {
    /// Display name used when composing failure messages.
    fn name(&self) -> &str;

    /// Judge one field. `false` means the field is invalid.
    fn validate(&self, field: &str) -> bool;
}
