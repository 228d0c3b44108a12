use std::ops::Range;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns taken by `s`. Wide characters such as most emoji count
/// as two; combining marks and variation selectors count as zero.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Truncate a string to `max` terminal columns, appending "…" if truncated.
/// The result is at most `max` columns wide (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if display_width(s) <= max {
        return s.to_string();
    }
    let budget = max - 1;
    let mut truncated = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        truncated.push(c);
        used += w;
    }
    format!("{truncated}…")
}

/// The end of `s` that fits in `max` terminal columns.
pub(crate) fn tail(s: &str, max: usize) -> &str {
    let mut used = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        let w = char_width(c);
        if used + w > max {
            break;
        }
        used += w;
        start = i;
    }
    &s[start..]
}

/// Greedy word wrap to `width` terminal columns. Words wider than a line are
/// split. Always yields at least one (possibly empty) line.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        for piece in split_to_width(word, width) {
            let piece_width = display_width(&piece);
            if line_width > 0 && line_width + 1 + piece_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(&piece);
            line_width += piece_width;
        }
    }

    if line_width > 0 || lines.is_empty() {
        lines.push(line);
    }
    lines
}

// A character wider than `width` still gets a piece of its own.
fn split_to_width(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut used = 0;
    for c in word.chars() {
        let w = char_width(c);
        if used + w > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            used = 0;
        }
        piece.push(c);
        used += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// The slice of `total` lines shown in a pane of `height` rows when the view
/// is scrolled `back` lines up from the bottom.
pub(crate) fn visible_window(total: usize, height: usize, back: usize) -> Range<usize> {
    let end = total.saturating_sub(back.min(max_scroll_back(total, height)));
    end.saturating_sub(height)..end
}

/// How far the view can scroll up before the first line reaches the top.
pub(crate) fn max_scroll_back(total: usize, height: usize) -> usize {
    total.saturating_sub(height)
}
