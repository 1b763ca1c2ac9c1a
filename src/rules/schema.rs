//! Ruleset Schema Types
//!
//! Serde types for ruleset definitions loaded from TOML.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root ruleset file structure (matches TOML).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RulesetFile {
    pub ruleset: RulesetDef,
}

/// A named, ordered list of rule identifiers.
///
/// Order is load-bearing: the rule at position *i* validates field *i* of
/// every line, and failure messages list rule names in this order.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RulesetDef {
    pub name: String,
    pub description: Option<String>,
    pub rules: Vec<String>,
}

impl RulesetFile {
    /// Parse a ruleset definition from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("parsing ruleset TOML")
    }

    /// The ruleset compiled into the binary, used when no file is supplied.
    pub fn embedded_default() -> Result<Self> {
        const EMBEDDED: &str = include_str!("../../resources/rulesets/account-records.toml");
        Self::from_toml(EMBEDDED).context("parsing embedded default ruleset")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ruleset_preserves_order() {
        let raw = r#"
            [ruleset]
            name = "test"
            rules = ["account-number", "account-name"]
        "#;

        let file = RulesetFile::from_toml(raw).expect("parse ruleset");
        assert_eq!(file.ruleset.name, "test");
        assert_eq!(file.ruleset.description, None);
        assert_eq!(file.ruleset.rules, vec!["account-number", "account-name"]);
    }

    #[test]
    fn test_parse_rejects_missing_rules_key() {
        let raw = r#"
            [ruleset]
            name = "test"
        "#;

        assert!(RulesetFile::from_toml(raw).is_err());
    }

    #[test]
    fn test_embedded_default_parses() {
        let file = RulesetFile::embedded_default().expect("embedded ruleset parses");
        assert_eq!(file.ruleset.name, "account-records");
        assert_eq!(file.ruleset.rules, vec!["account-name", "account-number"]);
    }
}
