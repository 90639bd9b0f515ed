//! Tabular layout for uniform record sequences.

use serde_json::{Map, Value};

use crate::scalar;
use crate::style;
use crate::text;

/// Cells never grow past this many characters. Headers may: a column is
/// always at least as wide as its name.
const MAX_CELL_WIDTH: usize = 50;

/// Returns the records of `items` when the whole sequence qualifies for
/// table layout: non-empty, records only, every record carrying the
/// same key set, and that set non-empty. Key order may differ between
/// records; columns follow the first record.
pub(crate) fn uniform_records(items: &[Value]) -> Option<Vec<&Map<String, Value>>> {
    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Object(fields) => rows.push(fields),
            _ => return None,
        }
    }
    let first = *rows.first()?;
    if first.is_empty() {
        return None;
    }
    rows.iter().all(|row| same_shape(first, row)).then_some(rows)
}

fn same_shape(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    a.len() == b.len() && a.keys().all(|key| b.contains_key(key))
}

/// Draws `rows` as a boxed table. The result starts with a line break
/// so it reads cleanly after a `key:` line, and every line carries the
/// indent prefix.
pub(crate) fn render(rows: &[&Map<String, Value>], indent: usize) -> String {
    let pad = crate::INDENT.repeat(indent);
    let columns: Vec<&String> = rows[0].keys().collect();
    let widths = column_widths(&columns, rows);
    let inner: usize = widths.iter().sum::<usize>() + 3 * widths.len() - 1;

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(format!("{pad}┌{}┐", "─".repeat(inner)));

    let header = columns
        .iter()
        .zip(&widths)
        .map(|(name, width)| {
            pad_cell(&style::paint(style::BOLD, name), name.chars().count(), *width)
        })
        .collect::<Vec<_>>()
        .join("│");
    lines.push(format!("{pad}│{header}│"));
    lines.push(format!("{pad}{}", rule('├', '┬', '┤', &widths)));

    for row in rows {
        let cells = columns
            .iter()
            .zip(&widths)
            .map(|(name, width)| {
                let value = row.get(name.as_str()).unwrap_or(&Value::Null);
                let (code, raw) = scalar::scalar_parts(value);
                let cut = text::truncate(&raw, Some(*width), false);
                let plain_len = cut.text.chars().count();
                let painted = match code {
                    Some(code) => style::paint(code, &cut.text),
                    None => cut.text,
                };
                pad_cell(&painted, plain_len, *width)
            })
            .collect::<Vec<_>>()
            .join("│");
        lines.push(format!("{pad}│{cells}│"));
    }

    lines.push(format!("{pad}{}", rule('└', '┴', '┘', &widths)));
    format!("\n{}", lines.join("\n"))
}

/// Width per column: the widest cell's unstyled, untruncated length,
/// capped at [`MAX_CELL_WIDTH`], but never narrower than the header.
fn column_widths(columns: &[&String], rows: &[&Map<String, Value>]) -> Vec<usize> {
    columns
        .iter()
        .map(|name| {
            let widest = rows
                .iter()
                .map(|row| {
                    let value = row.get(name.as_str()).unwrap_or(&Value::Null);
                    scalar::scalar_parts(value).1.chars().count()
                })
                .max()
                .unwrap_or(0);
            widest.min(MAX_CELL_WIDTH).max(name.chars().count())
        })
        .collect()
}

/// One padded cell: a leading and trailing space around the styled
/// content, filled out to `width` using the unstyled length.
fn pad_cell(painted: &str, plain_len: usize, width: usize) -> String {
    format!(" {painted}{} ", " ".repeat(width.saturating_sub(plain_len)))
}

fn rule(left: char, joint: char, right: char, widths: &[usize]) -> String {
    let segments = widths
        .iter()
        .map(|width| "─".repeat(width + 2))
        .collect::<Vec<_>>()
        .join(&joint.to_string());
    format!("{left}{segments}{right}")
}
