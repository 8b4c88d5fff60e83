use ferrous_pdns_application::ports::{CellWriter, IngestCounters, IngestReport};
use ferrous_pdns_application::use_cases::IngestCaptureLineUseCase;
use ferrous_pdns_domain::{Cell, DomainError};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const DEFAULT_CHUNK_SIZE: usize = 4_096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkLoadOutcome {
    pub report: IngestReport,
    /// Running total reported by the writer after the final flush.
    pub cells_persisted: u64,
    pub cancelled: bool,
}

/// Loads capture files into the cell store.
///
/// Lines are read in chunks; each chunk is processed in parallel on a rayon
/// pool and its cells are handed to the writer before the next chunk is
/// read. Cancellation is checked between chunks.
pub struct BulkLoadJob {
    ingest: Arc<IngestCaptureLineUseCase>,
    writer: Arc<dyn CellWriter>,
    counters: Arc<dyn IngestCounters>,
    chunk_size: usize,
    workers: usize,
    shutdown: CancellationToken,
}

impl BulkLoadJob {
    pub fn new(
        ingest: Arc<IngestCaptureLineUseCase>,
        writer: Arc<dyn CellWriter>,
        counters: Arc<dyn IngestCounters>,
    ) -> Self {
        Self {
            ingest,
            writer,
            counters,
            chunk_size: DEFAULT_CHUNK_SIZE,
            workers: 0,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// `0` uses rayon's global pool.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn run(&self, inputs: &[PathBuf]) -> Result<BulkLoadOutcome, DomainError> {
        let pool = self.build_pool()?;
        info!(
            files = inputs.len(),
            chunk_size = self.chunk_size,
            workers = self.workers,
            "Starting bulk load"
        );

        let mut cancelled = false;
        for path in inputs {
            if !self.load_file(path, pool.clone()).await? {
                cancelled = true;
                break;
            }
        }

        let cells_persisted = self.writer.flush().await?;
        let report = self.counters.snapshot();

        info!(
            lines_read = report.lines_read,
            parse_errors = report.parse_errors,
            groups_packed = report.groups_packed,
            groups_rejected = report.groups_rejected,
            cells_persisted,
            cancelled,
            "Bulk load finished"
        );

        Ok(BulkLoadOutcome {
            report,
            cells_persisted,
            cancelled,
        })
    }

    fn build_pool(&self) -> Result<Option<Arc<rayon::ThreadPool>>, DomainError> {
        if self.workers == 0 {
            return Ok(None);
        }
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("pdns-ingest-{}", i))
            .build()
            .map(|pool| Some(Arc::new(pool)))
            .map_err(|e| DomainError::ConfigError(format!("Failed to build worker pool: {}", e)))
    }

    /// Returns `false` when the load was cancelled part way through.
    async fn load_file(
        &self,
        path: &Path,
        pool: Option<Arc<rayon::ThreadPool>>,
    ) -> Result<bool, DomainError> {
        let file = File::open(path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let mut reader = BufReader::new(file);
        info!(path = %path.display(), "Loading capture file");

        let mut chunk: Vec<String> = Vec::with_capacity(self.chunk_size);
        let mut buf = Vec::new();

        loop {
            if self.shutdown.is_cancelled() {
                warn!(path = %path.display(), "Bulk load cancelled");
                return Ok(false);
            }

            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).await.map_err(|e| {
                DomainError::IoError(format!("Failed to read {}: {}", path.display(), e))
            })?;

            if read > 0 {
                let line = String::from_utf8_lossy(&buf);
                chunk.push(line.trim_end_matches(['\r', '\n']).to_string());
            }

            if chunk.len() >= self.chunk_size || (read == 0 && !chunk.is_empty()) {
                let lines = std::mem::replace(&mut chunk, Vec::with_capacity(self.chunk_size));
                let cells = self.process_chunk(lines, pool.clone()).await?;
                self.writer.put_cells(cells).await?;
            }

            if read == 0 {
                return Ok(true);
            }
        }
    }

    async fn process_chunk(
        &self,
        lines: Vec<String>,
        pool: Option<Arc<rayon::ThreadPool>>,
    ) -> Result<Vec<Cell>, DomainError> {
        let ingest = self.ingest.clone();
        let count = lines.len();

        let cells = tokio::task::spawn_blocking(move || {
            let run = || {
                lines
                    .par_iter()
                    .flat_map_iter(|line| match ingest.execute(line) {
                        Ok(cells) => cells,
                        Err(e) => {
                            if !e.is_line_scoped() {
                                warn!(error = %e, "Unexpected failure while ingesting line");
                            }
                            Vec::new()
                        }
                    })
                    .collect::<Vec<Cell>>()
            };
            match pool {
                Some(pool) => pool.install(run),
                None => run(),
            }
        })
        .await
        .map_err(|e| DomainError::IoError(format!("Ingest worker failed: {}", e)))?;

        debug!(lines = count, cells = cells.len(), "Chunk processed");
        Ok(cells)
    }
}
