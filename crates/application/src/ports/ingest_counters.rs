use ferrous_pdns_domain::Cell;
use serde::Serialize;
use std::collections::BTreeMap;

/// Totals of one bulk load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub lines_read: u64,
    pub lines_skipped: u64,
    pub parse_errors: u64,
    pub messages_decoded: u64,
    pub answer_records: u64,
    pub groups_packed: u64,
    pub groups_rejected: u64,
    pub cells_written: u64,
    pub cells_by_rrtype: BTreeMap<String, u64>,
}

/// Counters shared by every worker of a load; increments must not be lost
/// under concurrent use.
pub trait IngestCounters: Send + Sync {
    fn record_line_read(&self);
    fn record_line_skipped(&self);
    fn record_parse_error(&self);
    fn record_message_decoded(&self);
    fn record_answer_records(&self, count: u64);
    fn record_group_packed(&self);
    fn record_group_rejected(&self);
    /// `rrtype` is the record type of the group the cells were emitted for.
    fn record_cells(&self, rrtype: &str, cells: &[Cell]);
    fn snapshot(&self) -> IngestReport;
}
