//! Display-width aware text helpers.
//!
//! Widths are terminal cells, not bytes or code points: CJK characters and
//! most emoji count as two, combining marks as zero. ANSI escape sequences
//! are kept in the output but take no cells.
//!
//! ```
//! use prettygrid::util::{display_width, pad_center};
//!
//! assert_eq!(display_width("日本"), 4);
//! assert_eq!(pad_center("ab", 5), " ab  ");
//! ```

use console::measure_text_width;

use crate::types::Align;

/// Number of terminal cells `s` occupies, ignoring ANSI escape codes.
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Widest line of a possibly multi-line string.
pub fn max_line_width(s: &str) -> usize {
    s.split('\n').map(display_width).max().unwrap_or(0)
}

/// Pads on the left so the text ends at `width`.
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Pads on the right so the text fills `width`.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Centers the text in `width`; an odd leftover space goes right.
pub fn pad_center(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let left = fill / 2;
    let right = fill - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Pads `s` to `width` according to `align`.
pub fn align_text(s: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => pad_right(s, width),
        Align::Center => pad_center(s, width),
        Align::Right => pad_left(s, width),
    }
}

/// Replaces line breaks with their two-character escapes so the text stays
/// on one physical line.
pub fn escape_line_breaks(s: &str) -> String {
    if !s.contains(['\n', '\r']) {
        return s.to_string();
    }
    s.replace('\r', "\\r").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_of_ascii_and_wide_text() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("日本語"), 6);
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("e\u{301}"), 1);
    }

    #[test]
    fn width_ignores_ansi_codes() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(display_width("\x1b[1m日本\x1b[0m"), 4);

        let padded = pad_left("\x1b[31mab\x1b[0m", 5);
        assert_eq!(padded, "   \x1b[31mab\x1b[0m");
    }

    #[test]
    fn width_of_border_glyphs() {
        assert_eq!(display_width("┌─┬─┐"), 5);
        assert_eq!(display_width("⋮"), 1);
        assert_eq!(display_width("⋯"), 1);
    }

    #[test]
    fn max_line_width_uses_widest_line() {
        assert_eq!(max_line_width("ab\nabcd\nc"), 4);
        assert_eq!(max_line_width(""), 0);
    }

    #[test]
    fn padding() {
        assert_eq!(pad_left("ab", 5), "   ab");
        assert_eq!(pad_right("ab", 5), "ab   ");
        assert_eq!(pad_center("ab", 5), " ab  ");
        assert_eq!(pad_center("ab", 6), "  ab  ");
    }

    #[test]
    fn padding_wide_text() {
        let padded = pad_left("日本", 6);
        assert_eq!(padded, "  日本");
        assert_eq!(display_width(&padded), 6);
    }

    #[test]
    fn padding_never_truncates() {
        assert_eq!(pad_right("abcdef", 3), "abcdef");
    }

    #[test]
    fn align_text_dispatch() {
        assert_eq!(align_text("x", 3, Align::Left), "x  ");
        assert_eq!(align_text("x", 3, Align::Center), " x ");
        assert_eq!(align_text("x", 3, Align::Right), "  x");
    }

    #[test]
    fn escape_breaks() {
        assert_eq!(escape_line_breaks("a\nb"), "a\\nb");
        assert_eq!(escape_line_breaks("a\r\nb"), "a\\r\\nb");
        assert_eq!(escape_line_breaks("plain"), "plain");
    }
}
