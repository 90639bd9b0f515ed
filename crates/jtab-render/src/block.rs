//! Recursive block layout.

use serde_json::Value;

use crate::options::RenderOptions;
use crate::scalar;
use crate::style;
use crate::table;

/// Renders `value` as indented multi-line text starting at `indent`
/// levels (two spaces each).
///
/// Records print one `key: value` line per field, keys bold, nested
/// containers on the following lines one level deeper. Sequences print
/// one element per line, except that a non-empty sequence of
/// same-shaped records becomes a box-drawn table. Rendering never
/// fails; unexpected shapes fall back to their compact JSON form.
pub fn render(value: &Value, indent: usize, opts: &RenderOptions) -> String {
    let pad = crate::INDENT.repeat(indent);
    match value {
        Value::Array(items) if items.is_empty() => format!("{pad}[]"),
        Value::Object(fields) if fields.is_empty() => format!("{pad}{{}}"),
        Value::Array(items) => match table::uniform_records(items) {
            Some(rows) => table::render(&rows, indent),
            None => items
                .iter()
                .map(|item| render(item, indent + 1, opts))
                .collect::<Vec<_>>()
                .join("\n"),
        },
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| render_field(key, value, indent, opts))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => format!("{pad}{}", scalar::format_scalar(value, opts)),
    }
}

fn render_field(key: &str, value: &Value, indent: usize, opts: &RenderOptions) -> String {
    let pad = crate::INDENT.repeat(indent);
    let label = style::paint(style::BOLD, key);
    match value {
        Value::Array(_) | Value::Object(_) => {
            let nested = render(value, indent + 1, opts);
            // A table block arrives with its own leading line break.
            if nested.starts_with('\n') {
                format!("{pad}{label}:{nested}")
            } else {
                format!("{pad}{label}:\n{nested}")
            }
        }
        _ => format!("{pad}{label}: {}", scalar::format_scalar(value, opts)),
    }
}
