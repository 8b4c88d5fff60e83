use super::Repositories;
use ferrous_pdns_application::use_cases::{
    GetRdataHistoryUseCase, GetRrsetHistoryUseCase, IngestCaptureLineUseCase,
};
use ferrous_pdns_domain::{CellEmitter, Config};
use ferrous_pdns_infrastructure::dns::HickoryPacketDecoder;
use ferrous_pdns_infrastructure::metrics::AtomicIngestCounters;
use std::sync::Arc;

pub struct UseCases {
    pub ingest: Arc<IngestCaptureLineUseCase>,
    pub counters: Arc<AtomicIngestCounters>,
    pub rrset_history: Arc<GetRrsetHistoryUseCase>,
    pub rdata_history: Arc<GetRdataHistoryUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> Self {
        let counters = Arc::new(AtomicIngestCounters::new());
        let emitter = CellEmitter::new(config.ingest.column_family.clone());

        Self {
            ingest: Arc::new(IngestCaptureLineUseCase::new(
                Arc::new(HickoryPacketDecoder::new()),
                counters.clone(),
                emitter,
            )),
            counters,
            rrset_history: Arc::new(GetRrsetHistoryUseCase::new(repos.cells.clone())),
            rdata_history: Arc::new(GetRdataHistoryUseCase::new(repos.cells.clone())),
        }
    }
}
