//! Scalar formatting: turning a single leaf value into styled text.

use serde_json::Value;

use crate::options::RenderOptions;
use crate::style;
use crate::text::{self, Truncated};

/// Splits a value into its color code and unstyled display text.
///
/// Strings display as their raw contents, without quotes. Numbers keep
/// the notation they were parsed with. Containers fall back to their
/// compact JSON form and stay uncolored; [`crate::render`] only sends
/// them here from table cells, where nothing better fits.
pub(crate) fn scalar_parts(value: &Value) -> (Option<&'static str>, String) {
    match value {
        Value::Null => (Some(style::NULL), "null".to_string()),
        Value::Bool(true) => (Some(style::TRUE), "true".to_string()),
        Value::Bool(false) => (Some(style::FALSE), "false".to_string()),
        Value::Number(n) => (Some(style::NUMBER), n.to_string()),
        Value::String(s) => (Some(style::STRING), s.clone()),
        Value::Array(_) | Value::Object(_) => (None, value.to_string()),
    }
}

/// Renders one scalar: truncate the plain text first, then wrap it in
/// its color span. An overflow note lands after the closing reset so
/// it shows up unstyled.
pub(crate) fn format_scalar(value: &Value, opts: &RenderOptions) -> String {
    let (code, raw) = scalar_parts(value);
    let Truncated { text, note } = text::truncate(&raw, opts.max_scalar_len, opts.annotate_overflow);
    let span = match code {
        Some(code) => style::paint(code, &text),
        None => text,
    };
    match note {
        Some(note) => format!("{span}{note}"),
        None => span,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_scalar_colors() {
        let opts = RenderOptions::default();
        assert_eq!(format_scalar(&Value::Null, &opts), "\x1b[90mnull\x1b[0m");
        assert_eq!(format_scalar(&json!(true), &opts), "\x1b[32mtrue\x1b[0m");
        assert_eq!(format_scalar(&json!(false), &opts), "\x1b[31mfalse\x1b[0m");
        assert_eq!(format_scalar(&json!(42), &opts), "\x1b[36m42\x1b[0m");
        assert_eq!(format_scalar(&json!("hi"), &opts), "\x1b[93mhi\x1b[0m");
    }

    #[test]
    fn test_strings_are_unquoted() {
        let rendered = format_scalar(&json!("plain"), &RenderOptions::default());
        assert!(!rendered.contains('"'));
    }

    #[test]
    fn test_number_notation_survives() {
        let value: Value = serde_json::from_str("0.30000000000000004").unwrap();
        let rendered = format_scalar(&value, &RenderOptions::default());
        assert_eq!(rendered, "\x1b[36m0.30000000000000004\x1b[0m");
    }

    #[test]
    fn test_truncation_happens_inside_the_span() {
        let opts = RenderOptions {
            max_scalar_len: Some(10),
            annotate_overflow: false,
        };
        let rendered = format_scalar(&json!("abcdefghijklmnop"), &opts);
        assert_eq!(rendered, "\x1b[93mabcdefg...\x1b[0m");
    }

    #[test]
    fn test_overflow_note_lands_after_reset() {
        let opts = RenderOptions {
            max_scalar_len: None,
            annotate_overflow: true,
        };
        let rendered = format_scalar(&json!("line1\nline2"), &opts);
        assert_eq!(rendered, "\x1b[93mline1\x1b[0m (+1 more lines)");
    }

    #[test]
    fn test_containers_fall_back_to_compact_json() {
        let opts = RenderOptions::default();
        assert_eq!(format_scalar(&json!([1, 2]), &opts), "[1,2]");
        assert_eq!(format_scalar(&json!({"a": 1}), &opts), "{\"a\":1}");
    }
}
