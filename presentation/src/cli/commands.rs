//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for detection results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON document
    Json,
}

impl From<OutputFormat> for intentai_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => intentai_domain::OutputFormat::Text,
            OutputFormat::Json => intentai_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for intentai
#[derive(Parser, Debug)]
#[command(name = "intentai")]
#[command(author, version, about = "Deterministic tool and parameter detection from natural language")]
#[command(long_about = r#"
intentai routes a natural-language request to one of a set of registered
tools and extracts the tool's parameters from the text, using trigger
phrases and fixed scoring rules. No model, no network.

Tools come from (in registration order):
1. Built-in demo tools (calculator, get_weather, lookup_stock, search_web)
2. [[tools]] tables in the configuration file
3. --tools <path> catalog files

Configuration files are loaded from (in priority order):
1. INTENTAI_* environment variables
2. --config <path>     Explicit config file
3. ./intentai.toml     Project-level config
4. ~/.config/intentai/config.toml   Global config

Example:
  intentai "Calculate 5 * 13"
  intentai --output json "Weather in London"
  intentai --tools my_tools.toml --min-confidence 0.3 "create user Alice"
  intentai --schema
"#)]
pub struct Cli {
    /// The request to route (not required with --schema or --list-tools)
    pub input: Option<String>,

    /// Tool catalog file with [[tools]] tables (can be specified multiple times)
    #[arg(short, long, value_name = "PATH")]
    pub tools: Vec<PathBuf>,

    /// Minimum confidence for a detection (0.0 - 1.0)
    #[arg(long, value_name = "F")]
    pub min_confidence: Option<f64>,

    /// Number of ranked candidates to show
    #[arg(short = 'n', long, value_name = "N")]
    pub candidates: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print the JSON Schema of all registered tools and exit
    #[arg(long)]
    pub schema: bool,

    /// List registered tools and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
