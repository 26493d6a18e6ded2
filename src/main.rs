use anyhow::{ensure, Result};
use tracing_subscriber::{prelude::*, EnvFilter};

use aoc2015::{default_input, harness::run_all, DAYS};

fn main() -> Result<()> {
    init_tracing()?;

    let summary = run_all(DAYS, default_input, &mut std::io::stdout().lock())?;
    ensure!(
        summary.failed == 0,
        "{} of {} days failed verification",
        summary.failed,
        summary.passed + summary.failed
    );
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_tracing() -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}
