//! Structured-value renderer.
//!
//! Turns a [`Value`] into indented, bracket-delimited text for reading inside
//! a documentation page. The output looks like JSON but is not meant to be
//! parsed: keys and text leaves are HTML-escaped so the block can be spliced
//! into the page as-is.
//!
//! ```text
//! {
//!   "message": "login_success",
//!   "data": {
//!     "user_id": 1
//!   }
//! }
//! ```
//!
//! Indentation is two spaces per nesting level. A closing bracket sits at the
//! level of the line that opened it, and an empty container puts its two
//! brackets on adjacent lines.

use crate::escape::{escape_html, escape_value};
use crate::value::Value;

const INDENT_UNIT: &str = "  ";

/// Render `value` with its opening bracket at nesting level `indent`.
///
/// The first line carries no leading indentation; the caller positions it.
pub fn render_value(value: &Value, indent: usize) -> String {
    match value {
        Value::Mapping(entries) => {
            let lines = entries.iter().map(|(key, v)| {
                format!("\"{}\": {}", escape_html(key), render_value(v, indent + 1))
            });
            bracketed('{', '}', lines, indent)
        }
        Value::Sequence(items) => {
            let lines = items.iter().map(|item| render_value(item, indent + 1));
            bracketed('[', ']', lines, indent)
        }
        Value::Text(s) => format!("\"{}\"", escape_html(s)),
        Value::Null => "null".to_string(),
        Value::Scalar(scalar) => escape_value(Some(scalar)),
    }
}

fn bracketed(
    open: char,
    close: char,
    lines: impl Iterator<Item = String>,
    indent: usize,
) -> String {
    let inner = INDENT_UNIT.repeat(indent + 1);
    let body = lines
        .map(|line| format!("{inner}{line}"))
        .collect::<Vec<_>>()
        .join(",\n");

    let mut out = String::new();
    out.push(open);
    out.push('\n');
    if !body.is_empty() {
        out.push_str(&body);
        out.push('\n');
    }
    out.push_str(&INDENT_UNIT.repeat(indent));
    out.push(close);
    out
}
