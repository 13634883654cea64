//! Width helpers for fitting text into terminal columns.
//!
//! Widths are measured in terminal columns via `unicode-width`, not in
//! Unicode scalar values, so wide characters take two columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ANSI_RESET: &str = "\x1b[0m";

/// Truncates text to `max_width` columns, ending with `...` when cut.
///
/// Widths of three or fewer columns fall back to dots only.
pub(crate) fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut truncated = take_columns(text, max_width.saturating_sub(3));
    truncated.push_str("...");
    truncated
}

/// Pads or truncates one rendered line to exactly `width` columns.
///
/// ANSI escape sequences pass through without counting towards the width,
/// and a reset is appended when a styled line is cut short.
pub(crate) fn fit_line(line: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut output = String::new();
    let mut visible = 0_usize;
    let mut in_escape = false;
    let mut had_ansi = false;
    let mut ended_with_reset = false;

    for ch in line.chars() {
        if in_escape {
            output.push(ch);
            ended_with_reset = ch == 'm';
            in_escape = !ch.is_ascii_alphabetic();
            continue;
        }
        if ch == '\x1b' {
            in_escape = true;
            had_ansi = true;
            ended_with_reset = false;
            output.push(ch);
            continue;
        }

        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        ended_with_reset = false;
        visible = visible.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible)));
    if had_ansi && !ended_with_reset {
        output.push_str(ANSI_RESET);
    }
    output
}

fn take_columns(text: &str, columns: usize) -> String {
    let mut taken = String::new();
    let mut used = 0_usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > columns {
            break;
        }
        taken.push(ch);
        used = used.saturating_add(char_width);
    }
    taken
}
