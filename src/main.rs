use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scriptscan::config::{
    Anchor, Margins, ScanConfig, DEFAULT_LEFT_MARGIN, DEFAULT_QUOTED_MARKER,
    DEFAULT_RIGHT_MARGIN, ENDPOINT_PATTERN,
};
use scriptscan::report::*;
use scriptscan::scanner::Scanner;
use scriptscan::types::OutputFormat;

/// Inspect minified scripts for identifiers and endpoints.
#[derive(Parser)]
#[command(
    name = "scriptscan",
    about = "Inspect minified scripts for identifiers and endpoints"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args)]
struct SourceArgs {
    /// Artifact to scan
    file: PathBuf,
    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,
    /// Replace invalid UTF-8 instead of failing
    #[arg(long)]
    lossy: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the context around every occurrence of one or more terms
    Context {
        #[command(flatten)]
        source: SourceArgs,
        /// Term to search for (repeatable)
        #[arg(short, long = "term", required = true)]
        terms: Vec<String>,
        /// Characters of context before each match
        #[arg(short, long, default_value_t = DEFAULT_LEFT_MARGIN)]
        before: usize,
        /// Characters of context after each match
        #[arg(short, long, default_value_t = DEFAULT_RIGHT_MARGIN)]
        after: usize,
        /// Count the trailing context from the end of the match
        #[arg(long)]
        anchor_end: bool,
        /// Treat terms as regular expressions
        #[arg(short, long)]
        regex: bool,
    },
    /// List every distinct token matched by a pattern, sorted
    Harvest {
        #[command(flatten)]
        source: SourceArgs,
        /// Regular expression; group 1 is the token when present
        #[arg(short, long, default_value = ENDPOINT_PATTERN)]
        pattern: String,
        /// Print tokens without a bullet marker
        #[arg(long)]
        plain: bool,
    },
    /// List every distinct quoted string containing a marker, sorted
    Quoted {
        #[command(flatten)]
        source: SourceArgs,
        /// Substring a quoted string must contain
        #[arg(short, long, default_value = DEFAULT_QUOTED_MARKER)]
        marker: String,
        /// Print strings without a bullet marker
        #[arg(long)]
        plain: bool,
    },
    /// Show size and fingerprint of the artifact
    Info {
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);
    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn run(command: Commands) -> scriptscan::errors::Result<()> {
    let output = match command {
        Commands::Context {
            source,
            terms,
            before,
            after,
            anchor_end,
            regex,
        } => {
            let anchor = if anchor_end {
                Anchor::MatchEnd
            } else {
                Anchor::MatchStart
            };
            let mut config = scan_config(&source);
            config.margins = Margins::new(before, after).anchored(anchor);
            let scanner = Scanner::open(config)?;
            let terms: Vec<&str> = terms.iter().map(String::as_str).collect();
            let results = if regex {
                scanner.pattern_contexts(&terms)?
            } else {
                scanner.contexts(&terms)?
            };
            match output_format(&source) {
                OutputFormat::Json => format_as_json(&results)?,
                OutputFormat::Text => format_contexts_as_text(&results),
            }
        }
        Commands::Harvest {
            source,
            pattern,
            plain,
        } => {
            let scanner = Scanner::open(scan_config(&source))?;
            let report = scanner.harvest(&pattern)?;
            match output_format(&source) {
                OutputFormat::Json => format_as_json(&report)?,
                OutputFormat::Text => format_harvest_as_text(&report, !plain),
            }
        }
        Commands::Quoted {
            source,
            marker,
            plain,
        } => {
            let scanner = Scanner::open(scan_config(&source))?;
            let report = scanner.quoted(&marker)?;
            match output_format(&source) {
                OutputFormat::Json => format_as_json(&report)?,
                OutputFormat::Text => format_harvest_as_text(&report, !plain),
            }
        }
        Commands::Info { source } => {
            let scanner = Scanner::open(scan_config(&source))?;
            let info = scanner.info();
            match output_format(&source) {
                OutputFormat::Json => format_as_json(&info)?,
                OutputFormat::Text => format_info_as_text(&info),
            }
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

fn scan_config(source: &SourceArgs) -> ScanConfig {
    ScanConfig {
        lossy_decoding: source.lossy,
        ..ScanConfig::for_path(&source.file)
    }
}

/// Resolves the `--format` flag, falling back to text for unknown values.
fn output_format(source: &SourceArgs) -> OutputFormat {
    OutputFormat::from_str(&source.format).unwrap_or_else(|| {
        let fallback = OutputFormat::default();
        tracing::warn!(
            requested = %source.format,
            using = fallback.as_str(),
            "unknown output format"
        );
        fallback
    })
}
