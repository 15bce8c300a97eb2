//! Kjør demo-pakkene, eller en JSON-batch gitt som argument:
//!
//! ```text
//! fitness-tracker '[{"workout_type": "RUN", "data": [15000, 1, 75]}]'
//! fitness-tracker --json
//! ```
//!
//! `--json` skriver rapportene som en JSON-liste i stedet for tekstlinjer.

use anyhow::Context;
use fitness_tracker_core::{cli, metrics, parse_packages};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (flags, inputs): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|a| a.starts_with("--"));
    let as_json = flags.iter().any(|f| f == "--json");
    if let Some(unknown) = flags.iter().find(|f| *f != "--json") {
        anyhow::bail!("unknown flag {unknown}");
    }

    let packages = match inputs.first() {
        Some(json_in) => parse_packages(json_in).context("invalid package batch")?,
        None => cli::demo_packages(),
    };

    cli::print_report(&packages, as_json)?;

    if log::log_enabled!(log::Level::Debug) {
        let text = metrics::global()
            .gather_text()
            .map_err(|e| anyhow::anyhow!("gather metrics: {e}"))?;
        log::debug!("{text}");
    }
    Ok(())
}
