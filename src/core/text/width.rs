//! Grapheme width helpers.

use unicode_width::UnicodeWidthChar;

use super::utils::grapheme_segments;

const TAB_WIDTH: usize = 3;

pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() {
        return 0;
    }
    if grapheme == "\t" {
        return TAB_WIDTH;
    }

    let mut width = 0;
    for ch in grapheme.chars() {
        if ch == '\t' {
            width += TAB_WIDTH;
            continue;
        }
        width += UnicodeWidthChar::width(ch).unwrap_or(0);
    }
    width
}

/// Number of monospace columns `input` occupies.
pub fn text_columns(input: &str) -> usize {
    grapheme_segments(input).map(grapheme_width).sum()
}
