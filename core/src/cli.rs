use std::io::Write;

use anyhow::Context;

use crate::types::Package;

/// Demo-pakkene fra sensoren: svømming, løp og sportsgange.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Skriv én rapportlinje per pakke til `out`.
///
/// Stopper på første ugyldige pakke; linjer som allerede er skrevet blir stående.
pub fn run<W: Write>(out: &mut W, packages: &[Package]) -> anyhow::Result<()> {
    for (i, p) in packages.iter().enumerate() {
        let line = crate::process_package(&p.workout_type, &p.data)
            .with_context(|| format!("package #{i} ({})", p.workout_type))?;
        writeln!(out, "{line}").context("failed to write report line")?;
    }
    Ok(())
}

/// Hele batchen som JSON-liste av `InfoMessage`; ingenting skrives hvis én pakke feiler.
pub fn run_json<W: Write>(out: &mut W, packages: &[Package]) -> anyhow::Result<()> {
    let infos = crate::training_infos(packages).context("invalid package in batch")?;
    serde_json::to_writer_pretty(&mut *out, &infos).context("failed to serialize report")?;
    writeln!(out).context("failed to write report")?;
    Ok(())
}

pub fn print_report(packages: &[Package], as_json: bool) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    if as_json {
        run_json(&mut lock, packages)
    } else {
        run(&mut lock, packages)
    }
}
