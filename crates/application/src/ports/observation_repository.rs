use async_trait::async_trait;
use ferrous_pdns_domain::{DomainError, StoredRow};

/// Query path of the column-cell store, projected to one row per rdata value.
#[async_trait]
pub trait ObservationRepository: Send + Sync {
    /// Rows whose owner name and type both match exactly.
    async fn find_rrset(&self, rrname: &str, rrtype: &str)
        -> Result<Vec<StoredRow>, DomainError>;

    /// Rows carrying exactly this rdata value, under any name or type.
    async fn find_by_rdata(&self, rdata: &str) -> Result<Vec<StoredRow>, DomainError>;
}
