//! growdash - Seller growth dashboard.
//!
//! Interactive TUI over a deterministically generated seller analytics
//! dataset: goal tracking, recruitment pipeline, onboarding progress,
//! and feature adoption wins.

use std::fs::File;
use std::path::PathBuf;
use std::process::exit;
use std::time::Duration;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use growdash_core::generate::DEFAULT_SEED;
use growdash_core::provider::SellerDataProvider;
use growdash_core::tui::{App, Tab};

/// Seller growth dashboard.
#[derive(Parser)]
#[command(name = "growdash", about = "Seller growth dashboard", version)]
struct Args {
    /// Seed for dataset generation. The same seed always produces the
    /// same tables.
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Tab to open: goal, recruitment, onboarding, or win.
    #[arg(short, long, default_value = "goal")]
    tab: String,

    /// Dump the generated dataset as JSON to stdout and exit.
    #[arg(long)]
    dump: bool,

    /// UI tick interval in milliseconds.
    #[arg(long, default_value = "1000")]
    tick_ms: u64,

    /// Write logs to this file instead of discarding them.
    /// Stdout is owned by the TUI, so there is no console logging.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initializes the tracing subscriber writing to the given file.
fn init_logging(log_file: &PathBuf, verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("growdash={}", level).parse()?)
        .add_directive(format!("growdash_core={}", level).parse()?);

    let file = File::create(log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        if let Err(e) = init_logging(log_file, args.verbose) {
            eprintln!("Error: failed to open log file: {}", e);
            exit(1);
        }
    }

    let provider = SellerDataProvider::new(args.seed);

    if args.dump {
        let dataset = provider.ensure_generated();
        match serde_json::to_string_pretty(dataset) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to serialize dataset: {}", e);
                exit(1);
            }
        }
        return;
    }

    let initial_tab = match Tab::from_name(&args.tab) {
        Some(tab) => tab,
        None => {
            eprintln!(
                "Error: unknown tab '{}' (expected goal, recruitment, onboarding, or win)",
                args.tab
            );
            exit(1);
        }
    };

    info!(seed = args.seed, tab = initial_tab.name(), "starting");

    let app = App::new(provider, initial_tab);
    if let Err(e) = app.run(Duration::from_millis(args.tick_ms)) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
