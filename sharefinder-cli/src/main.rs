//! `sharefinder` looks up shares outstanding for an ETF or fund.
//!
//! ```bash
//! # Credentials come from the environment or a .env file:
//! #   FMP_API_KEY, ALPHA_VANTAGE_API_KEY, WHALE_WISDOM_SHARED_KEY,
//! #   WHALE_WISDOM_SECRET_KEY, OPENAI_API_KEY (unless --no-llm)
//! sharefinder VOO
//! sharefinder arkk --format json
//! RUST_LOG=sharefinder=debug sharefinder SPY --no-llm
//! ```

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use sharefinder_cli::{render, wiring};
use sharefinder_core::{Credentials, Endpoints, SharefinderConfig, Symbol};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sharefinder")]
#[command(about = "Find shares outstanding for ETFs and funds", long_about = None)]
#[command(version)]
struct Cli {
    /// Ticker symbol (e.g. VOO, SPY, ARKK)
    #[arg(value_parser = parse_symbol)]
    ticker: Symbol,

    /// Skip the language-model fallback (OPENAI_API_KEY not required)
    #[arg(long)]
    no_llm: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn parse_symbol(raw: &str) -> Result<Symbol, String> {
    Symbol::new(raw).map_err(|e| e.to_string())
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    init_logging();
    let cli = Cli::parse();

    let creds = match Credentials::from_env(!cli.no_llm) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let cfg = SharefinderConfig {
        llm_fallback: !cli.no_llm,
        endpoints: Endpoints::default().with_overrides(env_var),
    };
    let finder = match wiring::build_finder(&creds, cfg) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(symbol = %cli.ticker, llm = finder.will_estimate(), "starting lookup");
    let report = finder.lookup(&cli.ticker).await;

    match cli.format {
        Format::Text => print!("{}", render::text(&report)),
        Format::Json => match render::json(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
    }

    if report.outcome.is_not_found() {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}
