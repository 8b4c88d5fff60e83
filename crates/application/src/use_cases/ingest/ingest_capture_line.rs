use crate::ports::{IngestCounters, PacketDecoder};
use ferrous_pdns_domain::{
    AnswerScanner, CaptureLine, Cell, CellEmitter, DomainError, RecordGrouper,
};
use std::sync::Arc;
use tracing::debug;

/// Runs one capture line through decode, answer scan, group packing and
/// cell emission.
///
/// Stateless apart from the injected counters, so one instance is shared by
/// every worker of a load.
pub struct IngestCaptureLineUseCase {
    decoder: Arc<dyn PacketDecoder>,
    counters: Arc<dyn IngestCounters>,
    emitter: CellEmitter,
}

impl IngestCaptureLineUseCase {
    pub fn new(
        decoder: Arc<dyn PacketDecoder>,
        counters: Arc<dyn IngestCounters>,
        emitter: CellEmitter,
    ) -> Self {
        Self {
            decoder,
            counters,
            emitter,
        }
    }

    /// Returns the cells for the line, or the error that voided it. Errors
    /// are already counted and logged; callers move on to the next line.
    pub fn execute(&self, raw_line: &str) -> Result<Vec<Cell>, DomainError> {
        self.counters.record_line_read();

        let line = match CaptureLine::parse(raw_line) {
            Ok(line) => line,
            Err(e) => {
                self.counters.record_line_skipped();
                debug!(error = %e, "Skipping capture line");
                return Err(e);
            }
        };

        let message = match self.decoder.decode(&line.packet_hex) {
            Ok(message) => message,
            Err(e) => {
                self.counters.record_parse_error();
                debug!(
                    error = %e,
                    timestamp = %line.timestamp,
                    source = %line.source_address,
                    "Failed to decode packet"
                );
                return Err(e);
            }
        };
        self.counters.record_message_decoded();

        let Some(records) = AnswerScanner::scan(message.lines()) else {
            return Ok(Vec::new());
        };
        self.counters.record_answer_records(records.len() as u64);

        let group = match RecordGrouper::pack(&records) {
            Ok(Some(group)) => group,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => {
                self.counters.record_group_rejected();
                debug!(error = %e, timestamp = %line.timestamp, "Rejected answer group");
                return Err(e);
            }
        };
        self.counters.record_group_packed();

        let cells = self.emitter.emit(&group, &line.timestamp);
        self.counters.record_cells(&group.record_type, &cells);

        Ok(cells)
    }
}
