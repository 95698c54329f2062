// src/core/sanitize.rs
use crate::config::consts::PLACEHOLDER;

/// Collapse every whitespace run to a single space and trim the ends.
/// `&nbsp;` arrives from the parser as U+00A0, which counts as whitespace.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Trimmed field, or the `N/A` placeholder when nothing is left.
pub fn or_placeholder(s: &str) -> String {
    let t = s.trim();
    if t.is_empty() { s!(PLACEHOLDER) } else { s!(t) }
}
