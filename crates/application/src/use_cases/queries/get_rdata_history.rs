use crate::ports::ObservationRepository;
use crate::services::TemporalAggregator;
use ferrous_pdns_domain::{DomainError, RdataQuery, RdataSummary};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct GetRdataHistoryUseCase {
    repository: Arc<dyn ObservationRepository>,
}

impl GetRdataHistoryUseCase {
    pub fn new(repository: Arc<dyn ObservationRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, query), fields(rdata = %query.rdata, rrtype = %query.rrtype))]
    pub async fn execute(&self, query: &RdataQuery) -> Result<Vec<RdataSummary>, DomainError> {
        let rows = self.repository.find_by_rdata(query.lookup_value()).await?;

        for row in &rows {
            debug!(
                timestamp = %row.timestamp,
                rrname = %row.rrname,
                rrtype = %row.rrtype,
                rdata = %row.rdata,
                "Matched row"
            );
        }

        Ok(TemporalAggregator::summarize_by_name(&rows, query))
    }
}
