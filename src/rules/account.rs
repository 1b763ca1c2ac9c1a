//! Built-in Account Rules
//!
//! The two reference rules for name/account-number record files.

use std::sync::LazyLock;

use regex::Regex;

use super::ValidationRule;

static ALPHABETIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z]+$").expect("alphabetic pattern is valid"));

// Account number is a 7 digit number starting with 3 or 4 (ex. 3293982),
// optionally with a literal 'p' appended (ex. 4113902p).
static ACCOUNT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[34]\d{6}(p)?$").expect("account number pattern is valid"));

/// Passes iff the field is non-empty, all ASCII letters, and starts with an
/// uppercase letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountNameRule;

impl AccountNameRule {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationRule for AccountNameRule {
    fn name(&self) -> &str {
        "Account name"
    }

    fn validate(&self, field: &str) -> bool {
        let mut chars = field.chars();
        match chars.next() {
            Some(first) if first.is_ascii_uppercase() => ALPHABETIC.is_match(field),
            _ => false,
        }
    }
}

/// Passes iff the field matches `^[34]\d{6}(p)?$`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountNumberRule;

impl AccountNumberRule {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationRule for AccountNumberRule {
    fn name(&self) -> &str {
        "Account number"
    }

    fn validate(&self, field: &str) -> bool {
        ACCOUNT_NUMBER.is_match(field)
    }
}
