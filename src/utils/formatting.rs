//! Formatting utilities for CLI output.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Right-pad to `width` display columns. CJK labels occupy two columns
/// per character, so byte- or char-based padding misaligns the grid.
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Weekday header cells, Sunday first.
pub fn weekday_headers(lang: &str) -> [&'static str; 7] {
    match lang {
        "en" => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
        _ => ["日", "月", "火", "水", "木", "金", "土"],
    }
}
