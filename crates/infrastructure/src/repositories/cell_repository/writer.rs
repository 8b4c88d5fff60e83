use ferrous_pdns_domain::{Cell, DomainError};
use sqlx::SqlitePool;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

const COLS_PER_ROW: usize = 5;
const ROWS_PER_CHUNK: usize = 999 / COLS_PER_ROW;

pub(super) enum WriterCommand {
    Put(Vec<Cell>),
    /// Persist everything queued before this command, then reply with the
    /// running total or the first error since the last flush.
    Flush(oneshot::Sender<Result<u64, DomainError>>),
}

#[derive(Default)]
struct WriterState {
    written: u64,
    first_error: Option<DomainError>,
}

impl WriterState {
    fn record_error(&mut self, e: DomainError) {
        if self.first_error.is_none() {
            self.first_error = Some(e);
        }
    }

    fn take_result(&mut self) -> Result<u64, DomainError> {
        match self.first_error.take() {
            Some(e) => Err(e),
            None => Ok(self.written),
        }
    }
}

fn build_multi_insert_sql(n: usize) -> String {
    debug_assert!(n > 0 && n <= ROWS_PER_CHUNK);
    const HEADER: &str = "INSERT INTO cells \
        (row_key, column_family, column_name, version, value) \
        VALUES ";
    const PLACEHOLDER: &str = "(?,?,?,?,?)";
    const UPSERT: &str = " ON CONFLICT (row_key, column_family, column_name, version) \
        DO UPDATE SET value = excluded.value";
    let mut sql =
        String::with_capacity(HEADER.len() + n * (PLACEHOLDER.len() + 1) + UPSERT.len());
    sql.push_str(HEADER);
    for i in 0..n {
        if i > 0 {
            sql.push(',');
        }
        sql.push_str(PLACEHOLDER);
    }
    sql.push_str(UPSERT);
    sql
}

pub(super) async fn flush_loop(
    pool: SqlitePool,
    mut receiver: mpsc::Receiver<WriterCommand>,
    max_batch_size: usize,
    flush_interval_ms: u64,
) {
    let mut batch: Vec<Cell> = Vec::with_capacity(max_batch_size);
    let mut state = WriterState::default();
    let mut flush_interval =
        tokio::time::interval(Duration::from_millis(flush_interval_ms.max(1)));

    loop {
        tokio::select! {
            maybe_command = receiver.recv() => {
                match maybe_command {
                    Some(WriterCommand::Put(cells)) => {
                        batch.extend(cells);
                        if batch.len() >= max_batch_size {
                            flush_batch(&pool, &mut batch, &mut state).await;
                        }
                    }
                    Some(WriterCommand::Flush(reply)) => {
                        flush_batch(&pool, &mut batch, &mut state).await;
                        if reply.send(state.take_result()).is_err() {
                            debug!("Flush requester went away");
                        }
                    }
                    None => {
                        flush_batch(&pool, &mut batch, &mut state).await;
                        info!(written = state.written, "Cell flush task shutting down");
                        return;
                    }
                }
            }
            _ = flush_interval.tick() => {
                flush_batch(&pool, &mut batch, &mut state).await;
            }
        }
    }
}

async fn flush_batch(pool: &SqlitePool, batch: &mut Vec<Cell>, state: &mut WriterState) {
    let count = batch.len();
    if count == 0 {
        return;
    }

    let start = std::time::Instant::now();

    let mut tx = match pool.begin().await {
        Ok(tx) => tx,
        Err(e) => {
            error!(error = %e, count, "Failed to begin transaction for cell flush");
            state.record_error(DomainError::DatabaseError(e.to_string()));
            batch.clear();
            return;
        }
    };

    let mut inserted = 0u64;
    let mut failed = false;

    // A batch commits as a whole; one failed chunk discards every chunk of it.
    for chunk in batch.chunks(ROWS_PER_CHUNK) {
        let sql = build_multi_insert_sql(chunk.len());
        let mut q = sqlx::query(&sql);
        for cell in chunk {
            q = q
                .bind(&cell.row_key[..])
                .bind(cell.column_family.as_str())
                .bind(cell.column.as_str())
                .bind(cell.version.as_str())
                .bind(&cell.value[..]);
        }
        match q.execute(&mut *tx).await {
            Ok(_) => inserted += chunk.len() as u64,
            Err(e) => {
                warn!(error = %e, count, "Failed to insert cell chunk, discarding batch");
                state.record_error(DomainError::DatabaseError(e.to_string()));
                failed = true;
                break;
            }
        }
    }

    if failed {
        if let Err(e) = tx.rollback().await {
            error!(error = %e, "Failed to roll back cell batch");
        }
        batch.clear();
        return;
    }

    match tx.commit().await {
        Ok(_) => {
            state.written += inserted;
            let elapsed = start.elapsed();
            debug!(
                count = inserted,
                duration_ms = elapsed.as_millis(),
                "Cell batch flushed"
            );
        }
        Err(e) => {
            error!(error = %e, count, "Failed to commit cell batch");
            state.record_error(DomainError::DatabaseError(e.to_string()));
        }
    }

    batch.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_insert_sql_placeholders() {
        let sql = build_multi_insert_sql(3);
        assert_eq!(sql.matches("(?,?,?,?,?)").count(), 3);
        assert!(sql.ends_with("DO UPDATE SET value = excluded.value"));
    }

    #[test]
    fn test_chunk_fits_sqlite_variable_limit() {
        assert!(ROWS_PER_CHUNK * COLS_PER_ROW <= 999);
    }
}
