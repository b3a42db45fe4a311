use clap::Parser;
use color_eyre::eyre::{Context, Result};
use fenceline_cli::{Cli, parse_config};
use fenceline_lib::markdown::highlighting::CodeHighlighter;
use fenceline_lib::markdown::{RenderOptions, highlight_markdown, html_fragments};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber based on verbosity level.
///
/// Verbosity levels:
/// - 0 (default): no subscriber
/// - 1 (-v): INFO
/// - 2 (-vv): DEBUG (transform summaries, plain-text fallbacks)
/// - 3 (-vvv): TRACE
/// - 4+ (-vvvv): TRACE with file/line numbers
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            1 => "warn,fenceline=info,fenceline_lib=info".to_string(),
            2 => "warn,fenceline=debug,fenceline_lib=debug".to_string(),
            _ => "debug,fenceline=trace,fenceline_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_file(verbose >= 4)
                .with_line_number(verbose >= 4)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = cli.apply_overrides(load_options(cli.config.as_ref())?);
    tracing::info!(
        class_prefix = %options.class_prefix,
        aliases = options.aliases.len(),
        "Options resolved"
    );

    let content = read_input(cli.input.as_ref())?;
    let highlighter = CodeHighlighter::new();
    let ast = highlight_markdown(&content, &options, &highlighter)
        .context("Failed to highlight document")?;

    if cli.ast {
        println!("{}", serde_json::to_string_pretty(&ast)?);
        return Ok(());
    }

    for fragment in html_fragments(&ast) {
        println!("{}", fragment);
    }

    Ok(())
}

/// Loads options from the config file, or defaults when none is given.
fn load_options(path: Option<&PathBuf>) -> Result<RenderOptions> {
    let Some(path) = path else {
        return Ok(RenderOptions::default());
    };

    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read config file: {:?}", path))?;
    parse_config(path, &content).wrap_err_with(|| format!("Invalid config file: {:?}", path))
}

/// Reads markdown from a file, or stdin when no path (or `-`) is given.
fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.to_str() != Some("-") => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read input file: {:?}", path)),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
