use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use marketplace_lint::{Config, Reporter};

mod summary;

#[derive(Parser)]
#[command(
    name = "marketplace-lint",
    version,
    about = "Validate a Claude plugin marketplace: manifest, plugin descriptors, and skills"
)]
pub struct Cli {
    /// Repository root containing .claude-plugin/marketplace.json
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Additional directory names to skip during protocol discovery
    #[arg(long, value_name = "NAME")]
    exclude: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Output format for the lint report.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Colored human-readable report (default)
    #[default]
    Text,
    /// Single JSON document with per-target checks
    Json,
}

pub fn run(cli: Cli) {
    init_tracing(cli.verbose);
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let config = Config::new(cli.root).with_excluded(cli.exclude);
    tracing::debug!(root = %config.root.display(), "starting lint run");

    let mut reporter = match cli.format {
        Format::Text => Reporter::echoing(),
        Format::Json => Reporter::silent(),
    };

    let summary = match marketplace_lint::run(&config, &mut reporter) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("marketplace-lint: {e}");
            std::process::exit(1);
        }
    };

    match cli.format {
        Format::Text => summary::print_text(&summary),
        Format::Json => summary::print_json(&summary),
    }

    if !summary.success() {
        std::process::exit(1);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "warn,marketplace_lint=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
