use dashmap::DashMap;
use ferrous_pdns_application::ports::{IngestCounters, IngestReport};
use ferrous_pdns_domain::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Lock-free counters shared across the workers of a load.
#[derive(Clone, Default)]
pub struct AtomicIngestCounters {
    lines_read: Arc<AtomicU64>,

    lines_skipped: Arc<AtomicU64>,

    parse_errors: Arc<AtomicU64>,

    messages_decoded: Arc<AtomicU64>,

    answer_records: Arc<AtomicU64>,

    groups_packed: Arc<AtomicU64>,

    groups_rejected: Arc<AtomicU64>,

    cells_written: Arc<AtomicU64>,

    cells_by_rrtype: Arc<DashMap<String, u64>>,
}

impl AtomicIngestCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_errors(&self) -> u64 {
        self.parse_errors.load(Ordering::Relaxed)
    }

    pub fn rrtype_count(&self, rrtype: &str) -> u64 {
        self.cells_by_rrtype.get(rrtype).map(|v| *v).unwrap_or(0)
    }
}

impl IngestCounters for AtomicIngestCounters {
    fn record_line_read(&self) {
        self.lines_read.fetch_add(1, Ordering::Relaxed);
    }

    fn record_line_skipped(&self) {
        self.lines_skipped.fetch_add(1, Ordering::Relaxed);
    }

    fn record_parse_error(&self) {
        self.parse_errors.fetch_add(1, Ordering::Relaxed);
    }

    fn record_message_decoded(&self) {
        self.messages_decoded.fetch_add(1, Ordering::Relaxed);
    }

    fn record_answer_records(&self, count: u64) {
        self.answer_records.fetch_add(count, Ordering::Relaxed);
    }

    fn record_group_packed(&self) {
        self.groups_packed.fetch_add(1, Ordering::Relaxed);
    }

    fn record_group_rejected(&self) {
        self.groups_rejected.fetch_add(1, Ordering::Relaxed);
    }

    fn record_cells(&self, rrtype: &str, cells: &[Cell]) {
        if cells.is_empty() {
            return;
        }
        let count = cells.len() as u64;
        self.cells_written.fetch_add(count, Ordering::Relaxed);
        self.cells_by_rrtype
            .entry(rrtype.to_string())
            .and_modify(|c| *c += count)
            .or_insert(count);
    }

    fn snapshot(&self) -> IngestReport {
        IngestReport {
            lines_read: self.lines_read.load(Ordering::Relaxed),
            lines_skipped: self.lines_skipped.load(Ordering::Relaxed),
            parse_errors: self.parse_errors.load(Ordering::Relaxed),
            messages_decoded: self.messages_decoded.load(Ordering::Relaxed),
            answer_records: self.answer_records.load(Ordering::Relaxed),
            groups_packed: self.groups_packed.load(Ordering::Relaxed),
            groups_rejected: self.groups_rejected.load(Ordering::Relaxed),
            cells_written: self.cells_written.load(Ordering::Relaxed),
            cells_by_rrtype: self
                .cells_by_rrtype
                .iter()
                .map(|entry| (entry.key().clone(), *entry.value()))
                .collect(),
        }
    }
}
