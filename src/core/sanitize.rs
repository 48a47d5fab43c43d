// src/core/sanitize.rs

/// Single-line, trimmed cell text.
///
/// Any run of whitespace, `;` or `:` becomes one space. Idempotent, so it can be
/// applied again at every layer without drift.
pub fn clean_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut gap = false;
    for ch in s.chars() {
        if ch.is_whitespace() || ch == ';' || ch == ':' {
            gap = true;
        } else {
            if gap && !out.is_empty() { out.push(' '); }
            gap = false;
            out.push(ch);
        }
    }
    out
}

/// `"CS/123 (2023)"` → `"CS_123_2023"`; falls back to `fallback` when nothing survives.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            out.push(ch);
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}
