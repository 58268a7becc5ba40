//! CLI entrypoint for intentai
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use intentai_application::{DetectIntentInput, DetectIntentUseCase, ExportSchemaUseCase};
use intentai_domain::{ConfigIssue, OutputFormat, Severity};
use intentai_infrastructure::{ConfigLoader, JsonSchemaToolConverter, ToolCatalog, ToolRegistry};
use intentai_presentation::{Cli, ConsoleFormatter, OutputFormatter};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Tool registration ===
    let mut registry = ToolRegistry::new().register_config(&config);
    report_issues(registry.issues())?;

    for path in &cli.tools {
        let catalog = ToolCatalog::load(path)?;
        info!("Loaded {} tools from {}", catalog.len(), path.display());
        registry = registry.register_catalog(catalog);
    }

    let spec = registry.build();
    let formatter: &dyn OutputFormatter = &ConsoleFormatter;

    if cli.list_tools {
        print!("{}", formatter.format_tools(&spec));
        return Ok(ExitCode::SUCCESS);
    }

    if cli.schema {
        let export = ExportSchemaUseCase::new(Arc::new(JsonSchemaToolConverter));
        println!("{}", ConsoleFormatter::format_schema(&export.execute(&spec)));
        return Ok(ExitCode::SUCCESS);
    }

    let text = match cli.input {
        Some(text) => text,
        None => bail!("Input text is required. Use --schema or --list-tools to inspect tools."),
    };

    // CLI flags override file values
    let mut params = config.detection.to_params();
    if let Some(min_confidence) = cli.min_confidence {
        params = params.with_min_confidence(min_confidence);
    }
    if let Some(max) = cli.candidates {
        params = params.with_max_candidates(max);
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let use_case = DetectIntentUseCase::new(Arc::new(spec));
    let output = use_case.execute(DetectIntentInput::new(text).with_params(params))?;

    match format {
        OutputFormat::Text => print!("{}", formatter.format(&output)),
        OutputFormat::Json => println!("{}", formatter.format_json(&output)),
    }

    Ok(if output.is_detected() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Log warnings and fail on configuration errors
fn report_issues(issues: &[ConfigIssue]) -> Result<()> {
    let mut errors = Vec::new();
    for issue in issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => errors.push(issue.message.as_str()),
        }
    }
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}
