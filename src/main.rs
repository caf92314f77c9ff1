mod config;
mod dimension;
mod input;
mod report;
mod scorer;
mod tier;

use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::dimension::Dimension;
use crate::input::ProtocolInput;
use crate::report::Reporter;

const DEFAULT_INPUT_PATH: &str = "protocol.toml";
const DEFAULT_CONFIG_PATH: &str = "defi-risk-score.toml";

fn main() -> anyhow::Result<()> {
    let input_arg = std::env::args().nth(1);

    // An explicitly given config must exist
    let config = match std::env::args().nth(2) {
        Some(path) => Config::load(&path)?,
        None => Config::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    init_tracing(&config);
    info!("defi-risk-score v{} starting...", env!("CARGO_PKG_VERSION"));

    let input = match input_arg {
        Some(path) => {
            info!("Loading protocol data from {}", path);
            ProtocolInput::load(&path)?
        }
        None if Path::new(DEFAULT_INPUT_PATH).exists() => {
            info!("Loading protocol data from {}", DEFAULT_INPUT_PATH);
            ProtocolInput::load(DEFAULT_INPUT_PATH)?
        }
        None => {
            info!("No input given, scoring the built-in Uniswap V3 example");
            uniswap_v3_example()
        }
    };

    let assessment = scorer::score(&input);
    info!(
        "{}: {}/{} -> {}",
        assessment.protocol_name,
        assessment.total_score,
        assessment.max_score,
        assessment.risk_level
    );

    let reporter = Reporter::new(&config.report);
    println!("{}", reporter.render(&assessment)?);

    Ok(())
}

/// Logs go to stderr so stdout carries only the report
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "defi_risk_score=info".into());

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn uniswap_v3_example() -> ProtocolInput {
    ProtocolInput::new("Uniswap V3")
        .with_score(Dimension::Decentralization, 18)
        .with_score(Dimension::TransactionMonitoring, 2)
        .with_score(Dimension::UserIdentification, 0)
        .with_score(Dimension::TokenClassification, 10)
        .with_score(Dimension::JurisdictionalExposure, 5)
        .with_score(Dimension::GovernanceDisclosure, 7)
}
