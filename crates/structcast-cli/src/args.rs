use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "structcast")]
#[command(about = "Render a nested record as an indented chat-markdown report", version)]
pub struct Cli {
    /// Indent unit repeated once per nesting level
    #[arg(long, default_value = "  ")]
    pub indent: String,

    /// Maximum traversal depth; 0 falls back to the built-in default of 3
    #[arg(long, default_value_t = 3)]
    pub max_depth: usize,

    /// Field-name exclusion pattern, regex, repeatable
    #[arg(long = "exclude", default_value = "XXX_.*")]
    pub exclude: Vec<String>,

    /// Output file; created if absent, truncated otherwise
    #[arg(long, default_value = "./test.md")]
    pub output: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
