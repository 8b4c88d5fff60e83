use crate::di::{Repositories, UseCases};
use ferrous_pdns_application::ports::IngestReport;
use ferrous_pdns_domain::Config;
use ferrous_pdns_jobs::{BulkLoadJob, BulkLoadOutcome};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

pub async fn run(
    config: &Config,
    repos: &Repositories,
    use_cases: &UseCases,
    inputs: &[PathBuf],
) -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after the current chunk");
            signal_token.cancel();
        }
    });

    let job = BulkLoadJob::new(
        use_cases.ingest.clone(),
        repos.cells.clone(),
        use_cases.counters.clone(),
    )
    .with_chunk_size(config.ingest.chunk_size)
    .with_workers(config.ingest.workers)
    .with_cancellation(shutdown);

    let outcome = job.run(inputs).await.map_err(|e| {
        error!(error = %e, "Bulk load failed");
        anyhow::anyhow!(e)
    })?;

    print_report(&outcome)?;
    Ok(())
}

#[derive(Serialize)]
struct LoadSummary<'a> {
    #[serde(flatten)]
    report: &'a IngestReport,
    cells_persisted: u64,
    cancelled: bool,
}

fn render_report(outcome: &BulkLoadOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&LoadSummary {
        report: &outcome.report,
        cells_persisted: outcome.cells_persisted,
        cancelled: outcome.cancelled,
    })
}

fn print_report(outcome: &BulkLoadOutcome) -> anyhow::Result<()> {
    let rendered = render_report(outcome)?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", rendered)?;
    if outcome.cancelled {
        warn!("Load was interrupted before all input was read");
    }
    Ok(())
}
