//! Text helpers shared by explanation and reporting.

/// Collapse runs of whitespace into single spaces and trim.
pub fn normalize_inline_whitespace<T: AsRef<str>>(text: T) -> String {
    let mut normalized = String::new();
    let mut seen_space = false;
    for ch in text.as_ref().chars() {
        if ch.is_whitespace() {
            if !seen_space {
                normalized.push(' ');
                seen_space = true;
            }
        } else {
            normalized.push(ch);
            seen_space = false;
        }
    }
    normalized.trim().to_string()
}

/// First `max_chars` characters of `text`, with `...` when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

/// Pad or cut `text` to exactly `width` characters.
pub fn fit_column(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let keep = width.saturating_sub(3);
        let mut out: String = text.chars().take(keep).collect();
        out.push_str(&".".repeat(width - keep));
        return out;
    }
    let mut out = text.to_string();
    out.push_str(&" ".repeat(width - count));
    out
}
