//! Column padding measured in user-perceived characters
//!
//! Widths count extended grapheme clusters, so "ü" written as `u` plus a
//! combining diaeresis still occupies one column.

use unicode_segmentation::UnicodeSegmentation;

/// Number of grapheme clusters in `text`
#[must_use]
pub fn display_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// The first `width` grapheme clusters of `text`
#[must_use]
pub fn truncate(text: &str, width: usize) -> &str {
    match text.grapheme_indices(true).nth(width) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Right-align `text` in a column of `width`, cutting off the tail if it is too long
#[must_use]
pub fn pad_left(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let fill = width.saturating_sub(display_len(cut));
    format!("{}{cut}", " ".repeat(fill))
}

/// Left-align `text` in a column of `width`, cutting off the tail if it is too long
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let fill = width.saturating_sub(display_len(cut));
    format!("{cut}{}", " ".repeat(fill))
}
