//! Validation Report
//!
//! Per-line outcomes and their deterministic aggregation.

use serde::Serialize;

/// The result of validating one line: clean, or carrying a failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    pub line_number: usize,
    pub message: Option<String>,
}

impl LineOutcome {
    pub fn clean(line_number: usize) -> Self {
        Self {
            line_number,
            message: None,
        }
    }

    pub fn failed(line_number: usize, message: String) -> Self {
        Self {
            line_number,
            message: Some(message),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.message.is_some()
    }
}

/// Aggregated result for an entire content blob.
///
/// `invalid_lines` is sorted by ascending line number no matter in which
/// order the per-line outcomes were produced. Serializes to the wire shape
/// `{"fileValid": …, "invalidLines": […]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub file_valid: bool,
    pub invalid_lines: Vec<String>,
}

impl ValidationReport {
    /// Merge per-line outcomes into the final report.
    ///
    /// Line numbers are unique, so the sort is a total order and the output
    /// is identical across runs regardless of scheduling.
    pub fn from_outcomes(mut outcomes: Vec<LineOutcome>) -> Self {
        outcomes.sort_unstable_by_key(|outcome| outcome.line_number);

        let invalid_lines: Vec<String> = outcomes
            .into_iter()
            .filter_map(|outcome| outcome.message)
            .collect();

        Self {
            file_valid: invalid_lines.is_empty(),
            invalid_lines,
        }
    }
}
