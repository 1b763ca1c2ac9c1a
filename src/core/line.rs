//! Line Extraction
//!
//! Fast, simple splitting of raw content into numbered lines.
//! Focus: borrow from the input, no per-line allocations.

/// A non-blank line of input: its 1-based sequence number and trimmed text.
///
/// Numbering counts only lines that survive trimming. Blank lines, including
/// whitespace-only lines and artifacts of `\r\n` terminators, are never
/// numbered and never reach validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Split raw content into numbered, trimmed lines.
///
/// Handles `\r\n`, `\r`, and `\n` terminators in any mixture. Splitting on
/// the individual characters turns every `\r\n` into one empty fragment,
/// which the blank filter discards along with genuinely empty lines.
pub fn split_lines(content: &str) -> Vec<Line<'_>> {
    content
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .zip(1..)
        .map(|(text, number)| Line { number, text })
        .collect()
}

/// Split a trimmed line into its fields on single-space separators.
///
/// Consecutive spaces yield empty fields on purpose: an empty field counts
/// against the field tally and fails whatever rule it is bound to.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(' ').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_mixed_terminators() {
        let lines = split_lines("one\r\ntwo\rthree\nfour");

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], Line { number: 1, text: "one" });
        assert_eq!(lines[1], Line { number: 2, text: "two" });
        assert_eq!(lines[2], Line { number: 3, text: "three" });
        assert_eq!(lines[3], Line { number: 4, text: "four" });
    }

    #[test]
    fn test_split_lines_skips_blanks_in_numbering() {
        let lines = split_lines("\n\none\r\n\r\ntwo\n\n");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], Line { number: 1, text: "one" });
        assert_eq!(lines[1], Line { number: 2, text: "two" });
    }

    #[test]
    fn test_split_lines_trims_and_skips_whitespace_only() {
        let lines = split_lines("  padded  \n   \nnext");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], Line { number: 1, text: "padded" });
        assert_eq!(lines[1], Line { number: 2, text: "next" });
    }

    #[test]
    fn test_split_lines_empty_content() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\r\n\r\n").is_empty());
    }

    #[test]
    fn test_split_fields_single_spaces() {
        assert_eq!(split_fields("Rob 3113902p"), vec!["Rob", "3113902p"]);
    }

    #[test]
    fn test_split_fields_consecutive_spaces_yield_empty_fields() {
        assert_eq!(split_fields("Rob  3113902p"), vec!["Rob", "", "3113902p"]);
    }

    #[test]
    fn test_split_fields_single_token() {
        assert_eq!(split_fields("Rob"), vec!["Rob"]);
    }
}
