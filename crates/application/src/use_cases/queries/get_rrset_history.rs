use crate::ports::ObservationRepository;
use crate::services::TemporalAggregator;
use ferrous_pdns_domain::{DomainError, RrsetQuery, RrsetSummary};
use std::sync::Arc;
use tracing::{debug, instrument};

/// How the value set published under one name and type changed over time.
pub struct GetRrsetHistoryUseCase {
    repository: Arc<dyn ObservationRepository>,
}

impl GetRrsetHistoryUseCase {
    pub fn new(repository: Arc<dyn ObservationRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, query), fields(rrname = %query.rrname, rrtype = %query.rrtype))]
    pub async fn execute(&self, query: &RrsetQuery) -> Result<Vec<RrsetSummary>, DomainError> {
        let rows = self
            .repository
            .find_rrset(&query.lookup_name(), &query.rrtype)
            .await?;

        for row in &rows {
            debug!(
                timestamp = %row.timestamp,
                rrname = %row.rrname,
                rrtype = %row.rrtype,
                rdata = %row.rdata,
                "Matched row"
            );
        }

        let summaries =
            TemporalAggregator::summarize_by_timestamp(&rows, &query.rrname, &query.rrtype);
        debug!(rows = rows.len(), summaries = summaries.len(), "Rrset history built");
        Ok(summaries)
    }
}
