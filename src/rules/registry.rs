//! Rule Registry
//!
//! Simple in-memory table of built-in rule constructors, keyed by the
//! identifiers used in ruleset files.

use std::collections::HashMap;

use anyhow::{Result, bail};

use super::schema::RulesetFile;
use super::{AccountNameRule, AccountNumberRule, ValidationRule};

type RuleBuilder = fn() -> Box<dyn ValidationRule>;

/// Maps rule identifiers to rule constructors.
#[derive(Clone)]
pub struct RuleRegistry {
    builders: HashMap<String, RuleBuilder>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Registry preloaded with every built-in rule.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("account-name", || Box::new(AccountNameRule::new()));
        registry.register("account-number", || Box::new(AccountNumberRule::new()));
        registry
    }

    /// Register a rule constructor under an identifier.
    pub fn register(&mut self, id: &str, builder: RuleBuilder) {
        self.builders.insert(id.to_string(), builder);
    }

    /// List all known rule identifiers.
    pub fn known_rules(&self) -> Vec<&str> {
        self.builders.keys().map(|id| id.as_str()).collect()
    }

    /// Materialize an ordered list of rules from identifiers.
    ///
    /// Rejects an empty list — a ruleset with zero rules has no meaningful
    /// per-field semantics, so it must never reach the engine — and any
    /// identifier the registry does not know.
    pub fn build(&self, ids: &[String]) -> Result<Vec<Box<dyn ValidationRule>>> {
        if ids.is_empty() {
            bail!("ruleset contains no rules; at least one rule is required");
        }

        ids.iter()
            .map(|id| match self.builders.get(id.as_str()) {
                Some(builder) => Ok(builder()),
                None => bail!("unknown rule '{id}'"),
            })
            .collect()
    }

    /// Materialize the rules of a parsed ruleset file.
    pub fn build_ruleset(&self, file: &RulesetFile) -> Result<Vec<Box<dyn ValidationRule>>> {
        self.build(&file.ruleset.rules)
    }
}
