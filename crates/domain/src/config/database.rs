use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,

    /// Cells buffered between the ingest workers and the flush task.
    #[serde(default = "default_cell_channel_capacity")]
    pub cell_channel_capacity: usize,

    #[serde(default = "default_cell_max_batch_size")]
    pub cell_max_batch_size: usize,

    #[serde(default = "default_cell_flush_interval_ms")]
    pub cell_flush_interval_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
            cell_channel_capacity: default_cell_channel_capacity(),
            cell_max_batch_size: default_cell_max_batch_size(),
            cell_flush_interval_ms: default_cell_flush_interval_ms(),
        }
    }
}

fn default_db_path() -> String {
    "./ferrous-pdns.db".to_string()
}

fn default_max_connections() -> u32 {
    4
}

fn default_busy_timeout_secs() -> u64 {
    30
}

fn default_cell_channel_capacity() -> usize {
    10_000
}

fn default_cell_max_batch_size() -> usize {
    500
}

fn default_cell_flush_interval_ms() -> u64 {
    100
}
