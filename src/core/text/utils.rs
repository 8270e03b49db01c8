//! Row splitting helpers.

use unicode_segmentation::UnicodeSegmentation;

pub const ROW_SEPARATOR: char = '\n';

pub fn grapheme_segments(text: &str) -> unicode_segmentation::Graphemes<'_> {
    UnicodeSegmentation::graphemes(text, true)
}

/// Split output text into display rows.
///
/// Empty segments are dropped wherever they occur, so a terminal newline does not produce a
/// trailing blank row and `"a\n\nb"` yields two rows.
pub fn split_rows(text: &str) -> Vec<&str> {
    text.split(ROW_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{grapheme_segments, split_rows};

    #[test]
    fn terminal_newline_does_not_add_a_row() {
        assert_eq!(split_rows("hello\nworld\n"), vec!["hello", "world"]);
    }

    #[test]
    fn empty_segments_are_dropped_everywhere() {
        assert_eq!(split_rows("\n\na\n\n\nb"), vec!["a", "b"]);
        assert!(split_rows("").is_empty());
        assert!(split_rows("\n").is_empty());
    }

    #[test]
    fn whitespace_rows_are_kept() {
        assert_eq!(split_rows("  \nx"), vec!["  ", "x"]);
    }

    #[test]
    fn graphemes_keep_combining_marks_together() {
        let segments: Vec<&str> = grapheme_segments("e\u{301}x").collect();
        assert_eq!(segments, vec!["e\u{301}", "x"]);
    }
}
