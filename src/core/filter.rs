// linesieve - core/filter.rs
//
// Line splitting and literal substring filtering.
// Core layer: pure logic, no I/O.

use crate::core::model::FilteredSequence;

/// Split text into lines, keeping each line's terminator.
///
/// A line ends after `\n`, after `\r\n`, or after a lone `\r`. The
/// terminator bytes are kept unchanged. A final line without a terminator
/// is kept as-is. Empty input yields no lines.
pub fn split_lines(content: &str) -> Vec<String> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        let line_ends = match b {
            b'\n' => true,
            b'\r' => bytes.get(i + 1) != Some(&b'\n'),
            _ => false,
        };
        if line_ends {
            // '\r' and '\n' are ASCII, so `i + 1` is a char boundary.
            lines.push(content[start..=i].to_owned());
            start = i + 1;
        }
    }
    if start < bytes.len() {
        lines.push(content[start..].to_owned());
    }
    lines
}

/// Keep, in original order, every line containing `needle`.
///
/// Matching is literal and case-sensitive.
pub fn filter_lines<I, S>(lines: I, needle: &str) -> FilteredSequence
where
    I: IntoIterator<Item = S>,
    S: Into<String> + AsRef<str>,
{
    FilteredSequence::new(
        lines
            .into_iter()
            .filter(|line| line.as_ref().contains(needle))
            .map(Into::into)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEEDLE: &str = "TILE0 L1.5 th";

    #[test]
    fn test_split_keeps_terminators() {
        let lines = split_lines("one\ntwo\r\nthree");
        assert_eq!(lines, vec!["one\n", "two\r\n", "three"]);
    }

    #[test]
    fn test_split_lone_carriage_return_ends_a_line() {
        let lines = split_lines("a\rb\r\nc\nd\r");
        assert_eq!(lines, vec!["a\r", "b\r\n", "c\n", "d\r"]);
    }

    #[test]
    fn test_split_carriage_return_only_file() {
        let lines = split_lines("one\rtwo\rthree");
        assert_eq!(lines, vec!["one\r", "two\r", "three"]);
        assert_eq!(lines.concat(), "one\rtwo\rthree");
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_blank_lines() {
        assert_eq!(split_lines("\n\nx\n"), vec!["\n", "\n", "x\n"]);
    }

    #[test]
    fn test_filter_preserves_order_and_bytes() {
        let input = split_lines(
            "TILE0 L1.5 th0: Received A\n\
             TILE1 L1.5 th0: Received B\n\
             noise\n\
             [42] TILE0 L1.5 th1: Sent C\r\n\
             TILE0 L1.5 th2 tail",
        );
        let filtered = filter_lines(input, NEEDLE);
        assert_eq!(
            filtered.lines(),
            &[
                "TILE0 L1.5 th0: Received A\n".to_string(),
                "[42] TILE0 L1.5 th1: Sent C\r\n".to_string(),
                "TILE0 L1.5 th2 tail".to_string(),
            ]
        );
    }

    #[test]
    fn test_filter_is_case_sensitive_and_literal() {
        let input = vec![
            "tile0 l1.5 th0\n",
            "TILE0 L1.5 TH0\n",
            "TILE0 L1x5 th0\n",
            "TILE0  L1.5 th0\n",
        ];
        assert!(filter_lines(input, NEEDLE).is_empty());
    }

    #[test]
    fn test_filter_empty_input() {
        let filtered = filter_lines(Vec::<String>::new(), NEEDLE);
        assert!(filtered.is_empty());
    }
}
