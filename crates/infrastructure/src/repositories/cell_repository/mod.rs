mod reader;
mod writer;

use async_trait::async_trait;
use ferrous_pdns_application::ports::{CellWriter, ObservationRepository};
use ferrous_pdns_domain::{config::DatabaseConfig, Cell, DomainError, StoredRow};
use sqlx::SqlitePool;
use tokio::sync::{mpsc, oneshot};
use tracing::{error, info};
use writer::WriterCommand;

/// Column-cell store on SQLite.
///
/// Writes are queued to a background flush loop that batches them into
/// multi-row upserts; reads project `rrtype`/`rdata` cell pairs back into one
/// row per rdata value.
pub struct SqliteCellRepository {
    pool: SqlitePool,
    sender: mpsc::Sender<WriterCommand>,
    column_family: String,
}

impl SqliteCellRepository {
    /// Must be called from within a tokio runtime; the flush loop is spawned
    /// here.
    pub fn new(pool: SqlitePool, cfg: &DatabaseConfig, column_family: impl Into<String>) -> Self {
        let channel_capacity = cfg.cell_channel_capacity;
        let max_batch_size = cfg.cell_max_batch_size;
        let flush_interval_ms = cfg.cell_flush_interval_ms;

        let (sender, receiver) = mpsc::channel(channel_capacity);

        let write_pool = pool.clone();
        tokio::spawn(async move {
            writer::flush_loop(write_pool, receiver, max_batch_size, flush_interval_ms).await;
        });

        info!(
            channel_capacity,
            batch_size = max_batch_size,
            flush_interval_ms,
            "Cell write batching enabled"
        );

        Self {
            pool,
            sender,
            column_family: column_family.into(),
        }
    }

    fn closed() -> DomainError {
        error!("Cell writer channel closed");
        DomainError::DatabaseError("Cell writer is no longer running".to_string())
    }
}

#[async_trait]
impl CellWriter for SqliteCellRepository {
    async fn put_cells(&self, cells: Vec<Cell>) -> Result<(), DomainError> {
        if cells.is_empty() {
            return Ok(());
        }
        self.sender
            .send(WriterCommand::Put(cells))
            .await
            .map_err(|_| Self::closed())
    }

    async fn flush(&self) -> Result<u64, DomainError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(WriterCommand::Flush(reply))
            .await
            .map_err(|_| Self::closed())?;
        response.await.map_err(|_| Self::closed())?
    }
}

#[async_trait]
impl ObservationRepository for SqliteCellRepository {
    async fn find_rrset(
        &self,
        rrname: &str,
        rrtype: &str,
    ) -> Result<Vec<StoredRow>, DomainError> {
        reader::find_rrset(&self.pool, &self.column_family, rrname, rrtype).await
    }

    async fn find_by_rdata(&self, rdata: &str) -> Result<Vec<StoredRow>, DomainError> {
        reader::find_by_rdata(&self.pool, &self.column_family, rdata).await
    }
}
