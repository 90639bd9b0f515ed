use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jtab")]
#[command(about = "Render JSON as colorized, indented text with tables for uniform arrays", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(help = "Input file; reads stdin when omitted or '-'")]
    pub input: Option<PathBuf>,

    #[arg(
        long,
        value_name = "CHARS",
        help = "Truncate each scalar to at most this many characters"
    )]
    pub max_len: Option<usize>,

    #[arg(long, help = "Note how much was cut instead of marking it with '...'")]
    pub annotate: bool,

    #[arg(
        long,
        default_value = "0",
        value_name = "LEVEL",
        help = "Start output at this indent level (two spaces each)"
    )]
    pub indent: usize,
}
