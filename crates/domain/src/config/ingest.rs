use serde::{Deserialize, Serialize};

use crate::cell::DEFAULT_COLUMN_FAMILY;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    /// Column family every emitted cell is written under.
    #[serde(default = "default_column_family")]
    pub column_family: String,

    /// Capture lines handed to the worker pool per round.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Worker threads for decoding; 0 lets rayon pick one per core.
    #[serde(default)]
    pub workers: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            column_family: default_column_family(),
            chunk_size: default_chunk_size(),
            workers: 0,
        }
    }
}

fn default_column_family() -> String {
    DEFAULT_COLUMN_FAMILY.to_string()
}

fn default_chunk_size() -> usize {
    4_096
}
