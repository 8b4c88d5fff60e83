use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid capture line: {0}")]
    InvalidCaptureLine(String),

    #[error("Invalid DNS packet: {0}")]
    InvalidDnsPacket(String),

    #[error("Malformed answer record ({fields} fields): {line}")]
    MalformedRecord { fields: usize, line: String },

    #[error("Inconsistent record group: {column} '{found}' does not match '{expected}'")]
    InconsistentGroup {
        column: &'static str,
        expected: String,
        found: String,
    },

    #[error("Invalid rdata blob: {0}")]
    InvalidRdataBlob(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Errors that void a single capture line without touching the rest of the batch.
    pub fn is_line_scoped(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidCaptureLine(_)
                | DomainError::InvalidDnsPacket(_)
                | DomainError::MalformedRecord { .. }
                | DomainError::InconsistentGroup { .. }
        )
    }
}
