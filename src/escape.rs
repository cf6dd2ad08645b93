//! HTML escaping for text that ends up inside element content or attribute
//! values.
//!
//! Four characters are replaced, `&` first: `&` → `&amp;`, `<` → `&lt;`,
//! `>` → `&gt;`, `"` → `&quot;`. Each input character is visited exactly
//! once, so the `&` of an inserted entity is never escaped a second time.
//!
//! Template text rendered through Maud is escaped by Maud itself. This module
//! exists for text assembled outside the templates, chiefly the output of
//! [`crate::render::render_value`], which is spliced into the page
//! pre-escaped.

use std::fmt::Display;

/// Escape `text` for inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an optional value via its `Display` form. `None` is the empty string.
pub fn escape_value<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => escape_html(&v.to_string()),
        None => String::new(),
    }
}
