//! Line splitting for file content.

/// Splits content into lines on `\n`.
///
/// CRLF content is normalized: the `\r` before each `\n` is dropped, so a
/// matched line never carries it. A final line without a terminator is
/// kept; a trailing terminator does not produce an extra empty line. Empty
/// content has no lines.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn unterminated_content_is_one_line() {
        assert_eq!(split_lines("just text"), vec!["just text"]);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(
            split_lines("Hello World\nSecond line\n"),
            vec!["Hello World", "Second line"]
        );
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn crlf_is_stripped() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
    }
}
