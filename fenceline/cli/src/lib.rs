//! # Fenceline CLI
//!
//! Rewrites the code blocks of a markdown document into line-highlighted
//! HTML.
//!
//! ## Usage
//!
//! ```bash
//! # Print the highlighted fragment of every code node
//! fenceline README.md
//!
//! # Pipe content from stdin
//! cat README.md | fenceline
//!
//! # Print the transformed MDAST as JSON
//! fenceline README.md --ast
//!
//! # Load options from a file and override some of them
//! fenceline README.md --config fenceline.yaml --alias js=javascript --inline-marker '|'
//!
//! # Verbose output for debugging
//! fenceline README.md -v      # INFO level
//! fenceline README.md -vv     # DEBUG level
//! ```
//!
//! ## Configuration file
//!
//! YAML (default) or JSON, selected by extension:
//!
//! ```yaml
//! classPrefix: language-
//! inlineCodeMarker: "|"
//! aliases:
//!   js: javascript
//!   sh: bash
//! ```

// Re-export the CLI struct for programmatic access
pub use cli::Cli;

use std::path::Path;

use fenceline_lib::markdown::{HighlightResult, RenderOptions};

mod cli {
    use clap::Parser;
    use std::path::PathBuf;

    /// Command-line interface for the fenceline code highlighter.
    ///
    /// Use `fenceline --help` to see all available options.
    #[derive(Parser, Debug)]
    #[command(name = "fenceline", about = "Line-highlighted HTML for markdown code blocks", version)]
    pub struct Cli {
        /// Input file path (reads from stdin if not provided, use "-" for explicit stdin)
        pub input: Option<PathBuf>,

        /// Options file (YAML, or JSON when the extension is .json)
        #[arg(long, value_name = "FILE")]
        pub config: Option<PathBuf>,

        /// Prefix for the language class on pre and code elements
        #[arg(long, value_name = "PREFIX")]
        pub class_prefix: Option<String>,

        /// Delimiter between an explicit language and inline code text
        #[arg(long, value_name = "MARKER")]
        pub inline_marker: Option<String>,

        /// Language alias as FROM=TO (repeatable)
        #[arg(long = "alias", value_name = "FROM=TO", value_parser = super::parse_alias)]
        pub aliases: Vec<(String, String)>,

        /// Output the transformed MDAST as JSON
        #[arg(long)]
        pub ast: bool,

        /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE, -vvvv TRACE with file/line)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        pub verbose: u8,
    }
}

/// Parses a `FROM=TO` alias argument.
fn parse_alias(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => {
            Ok((from.trim().to_string(), to.trim().to_string()))
        }
        _ => Err(format!("expected FROM=TO, got {:?}", s)),
    }
}

/// Parses an options file, choosing JSON or YAML by extension.
///
/// ## Errors
///
/// Returns the YAML or JSON parse error from the library.
pub fn parse_config(path: &Path, content: &str) -> HighlightResult<RenderOptions> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        RenderOptions::from_json(content)
    } else {
        RenderOptions::from_yaml(content)
    }
}

impl Cli {
    /// Applies command-line overrides on top of options loaded from a file.
    pub fn apply_overrides(&self, mut options: RenderOptions) -> RenderOptions {
        if let Some(prefix) = &self.class_prefix {
            options.class_prefix = prefix.clone();
        }
        if let Some(marker) = &self.inline_marker {
            options.inline_code_marker = Some(marker.clone());
        }
        for (from, to) in &self.aliases {
            options.aliases.insert(from, to);
        }
        options
    }
}
