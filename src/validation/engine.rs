//! Validation Engine
//!
//! Core validation logic: apply an ordered ruleset to every line of a
//! content blob, in parallel, and fold the outcomes into one report.

use std::num::NonZero;
use std::thread;

use crate::core::{Line, LineOutcome, ValidationReport, split_fields, split_lines};
use crate::rules::ValidationRule;

/// Inputs below this many lines are validated on the calling thread. The
/// outcomes are merged and sorted the same way on both paths, so the report
/// is identical regardless of which path ran.
const PARALLEL_CUTOFF: usize = 64;

/// Validate an entire content blob against an ordered ruleset.
///
/// Lines are numbered 1-based among non-blank lines and validated
/// independently: each line's outcome depends only on its own fields, which
/// is what allows arbitrary evaluation order across lines. The returned
/// report is always sorted by line number.
///
/// The engine holds no state between calls; concurrent callers share
/// nothing but the read-only rules. `rules` must be non-empty — the
/// registry guarantees this for every ruleset it builds.
pub fn validate_content(content: &str, rules: &[Box<dyn ValidationRule>]) -> ValidationReport {
    let lines = split_lines(content);

    let outcomes = if lines.len() <= PARALLEL_CUTOFF {
        lines.iter().map(|line| validate_line(line, rules)).collect()
    } else {
        validate_parallel(&lines, rules)
    };

    ValidationReport::from_outcomes(outcomes)
}

/// Validate a single line against the ruleset.
///
/// A field-count mismatch short-circuits the line: no rule is applied,
/// because rule *i* is positionally bound to field *i* and the binding is
/// meaningless when the counts differ. Otherwise every rule runs in
/// configured order and the names of the failing ones are joined into one
/// message.
pub fn validate_line(line: &Line<'_>, rules: &[Box<dyn ValidationRule>]) -> LineOutcome {
    let fields = split_fields(line.text);

    if fields.len() != rules.len() {
        return LineOutcome::failed(
            line.number,
            format!(
                "Values in line does not match validation rules count for {} line '{}'",
                line.number, line.text
            ),
        );
    }

    let failed_names: Vec<&str> = rules
        .iter()
        .zip(&fields)
        .filter(|(rule, field)| !rule.validate(field))
        .map(|(rule, _)| rule.name())
        .collect();

    if failed_names.is_empty() {
        LineOutcome::clean(line.number)
    } else {
        LineOutcome::failed(
            line.number,
            format!(
                "{} not valid for {} line '{}'",
                failed_names.join(", "),
                line.number,
                line.text
            ),
        )
    }
}

/// Fork-join evaluation: contiguous chunks of lines go to scoped worker
/// threads, each worker returns its own outcome vector, and the scope exit
/// is the single join barrier. No shared mutable state anywhere.
fn validate_parallel(lines: &[Line<'_>], rules: &[Box<dyn ValidationRule>]) -> Vec<LineOutcome> {
    let workers = thread::available_parallelism()
        .map_or(1, NonZero::get)
        .min(lines.len());
    let chunk_len = lines.len().div_ceil(workers);

    thread::scope(|scope| {
        let handles: Vec<_> = lines
            .chunks(chunk_len)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|line| validate_line(line, rules))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut outcomes = Vec::with_capacity(lines.len());
        for handle in handles {
            match handle.join() {
                Ok(mut chunk_outcomes) => outcomes.append(&mut chunk_outcomes),
                // A worker only panics if a rule broke its non-panicking
                // contract; re-raise on the calling thread.
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        outcomes
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{AccountNameRule, AccountNumberRule};

    fn account_rules() -> Vec<Box<dyn ValidationRule>> {
        vec![
            Box::new(AccountNameRule::new()),
            Box::new(AccountNumberRule::new()),
        ]
    }

    #[test]
    fn test_valid_line_produces_clean_outcome() {
        let line = Line {
            number: 1,
            text: "Rob 3113902p",
        };

        let outcome = validate_line(&line, &account_rules());
        assert!(!outcome.is_failure());
    }

    #[test]
    fn test_failing_rules_listed_in_configured_order() {
        let line = Line {
            number: 2,
            text: "XAEA-12 8293982",
        };

        let outcome = validate_line(&line, &account_rules());
        assert_eq!(
            outcome.message.as_deref(),
            Some("Account name, Account number not valid for 2 line 'XAEA-12 8293982'")
        );
    }

    #[test]
    fn test_field_count_mismatch_message() {
        let line = Line {
            number: 1,
            text: "Rose 329a982 Randoooooom",
        };

        let outcome = validate_line(&line, &account_rules());
        assert_eq!(
            outcome.message.as_deref(),
            Some(
                "Values in line does not match validation rules count for 1 line 'Rose 329a982 Randoooooom'"
            )
        );
    }

    #[test]
    fn test_validate_content_empty_blob_is_valid() {
        let report = validate_content("", &account_rules());
        assert!(report.file_valid);
        assert!(report.invalid_lines.is_empty());
    }

    #[test]
    fn test_parallel_path_matches_sequential_ordering() {
        // Enough lines to cross the cutoff, with every third line invalid.
        let content: String = (0..PARALLEL_CUTOFF * 4)
            .map(|i| {
                if i % 3 == 0 {
                    "lowercase 3113902\n"
                } else {
                    "Rob 3113902p\n"
                }
            })
            .collect();

        let report = validate_content(&content, &account_rules());

        assert!(!report.file_valid);
        let expected: Vec<String> = (0..PARALLEL_CUTOFF * 4)
            .filter(|i| i % 3 == 0)
            .map(|i| {
                format!(
                    "Account name not valid for {} line 'lowercase 3113902'",
                    i + 1
                )
            })
            .collect();
        assert_eq!(report.invalid_lines, expected);
    }
}
