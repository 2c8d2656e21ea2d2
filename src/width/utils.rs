//! ANSI-aware width calculation so padded rows stay aligned even when
//! occupants render colored or double-width symbols.

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Append `text` to `out`, then `fill` until `width` display columns are used.
pub fn pad_to_width(out: &mut String, text: &str, width: usize, fill: char) {
    out.push_str(text);
    let used = display_width(text);
    let fill_width = unicode_width::UnicodeWidthChar::width(fill).unwrap_or(1).max(1);
    let mut remaining = width.saturating_sub(used);
    while remaining >= fill_width {
        out.push(fill);
        remaining -= fill_width;
    }
}
