use super::args::Cli;
use anyhow::{Context, Result};
use jtab_render::{RenderOptions, Value, render};
use owo_colors::OwoColorize;
use std::io::Read;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let raw = read_input(cli.input.as_deref())?;
    let value: Value = serde_json::from_str(&raw).context("Failed to parse input as JSON")?;

    let opts = RenderOptions {
        max_scalar_len: cli.max_len,
        annotate_overflow: cli.annotate,
    };

    match &value {
        // An empty result set deserves a notice, not a bare `[]`.
        Value::Array(items) if items.is_empty() => {
            println!("{}", "(no rows)".bright_black());
        }
        _ => println!("{}", render(&value, cli.indent, &opts)),
    }

    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}
