use async_trait::async_trait;
use ferrous_pdns_domain::{Cell, DomainError};

/// Write path of the column-cell store.
#[async_trait]
pub trait CellWriter: Send + Sync {
    /// Queues cells for writing. Cells at an existing coordinate replace it.
    async fn put_cells(&self, cells: Vec<Cell>) -> Result<(), DomainError>;

    /// Waits until every queued cell is persisted and returns the number of
    /// cells written since the writer started. Fails with the first store
    /// error seen since the previous flush.
    async fn flush(&self) -> Result<u64, DomainError>;
}
