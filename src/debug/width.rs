//! Display width helpers for overlay text.
//!
//! Labels may carry ANSI highlighting, so widths are measured after the
//! escapes are stripped.

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Right-pad `line` with spaces until it occupies `width` columns.
pub fn pad_to(line: &mut String, width: usize) {
    let current = display_width(line);
    if current < width {
        line.extend(std::iter::repeat_n(' ', width - current));
    }
}
