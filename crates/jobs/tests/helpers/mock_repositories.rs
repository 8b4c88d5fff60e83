#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_pdns_application::ports::{CellWriter, IngestCounters, IngestReport, PacketDecoder};
use ferrous_pdns_application::use_cases::IngestCaptureLineUseCase;
use ferrous_pdns_domain::{
    Cell, CellEmitter, DecodedMessage, DomainError, MessageSection, SectionKind,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct MockCellWriter {
    cells: Mutex<Vec<Cell>>,
    puts: Mutex<usize>,
    fail_flush: Mutex<bool>,
}

impl MockCellWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> Vec<Cell> {
        self.cells.lock().unwrap().clone()
    }

    pub fn puts(&self) -> usize {
        *self.puts.lock().unwrap()
    }

    pub fn set_fail_flush(&self, fail: bool) {
        *self.fail_flush.lock().unwrap() = fail;
    }
}

#[async_trait]
impl CellWriter for MockCellWriter {
    async fn put_cells(&self, cells: Vec<Cell>) -> Result<(), DomainError> {
        *self.puts.lock().unwrap() += 1;
        self.cells.lock().unwrap().extend(cells);
        Ok(())
    }

    async fn flush(&self) -> Result<u64, DomainError> {
        if *self.fail_flush.lock().unwrap() {
            return Err(DomainError::DatabaseError("disk full".to_string()));
        }
        Ok(self.cells.lock().unwrap().len() as u64)
    }
}

/// Decoder keyed by packet hex; unknown packets fail to decode.
#[derive(Default)]
pub struct TableDecoder {
    messages: HashMap<String, DecodedMessage>,
}

impl TableDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers(mut self, packet_hex: &str, answers: &[&str]) -> Self {
        let message = DecodedMessage {
            id: 1,
            response_code: "NOERROR".to_string(),
            truncated: false,
            sections: vec![
                MessageSection::new(SectionKind::Question, Vec::new()),
                MessageSection::new(
                    SectionKind::Answer,
                    answers.iter().map(|a| a.to_string()).collect(),
                ),
            ],
        };
        self.messages.insert(packet_hex.to_string(), message);
        self
    }
}

impl PacketDecoder for TableDecoder {
    fn decode(&self, packet_hex: &str) -> Result<DecodedMessage, DomainError> {
        self.messages
            .get(packet_hex)
            .cloned()
            .ok_or_else(|| DomainError::InvalidDnsPacket(packet_hex.to_string()))
    }
}

#[derive(Default)]
pub struct SharedCounters {
    report: Mutex<IngestReport>,
}

impl IngestCounters for SharedCounters {
    fn record_line_read(&self) {
        self.report.lock().unwrap().lines_read += 1;
    }

    fn record_line_skipped(&self) {
        self.report.lock().unwrap().lines_skipped += 1;
    }

    fn record_parse_error(&self) {
        self.report.lock().unwrap().parse_errors += 1;
    }

    fn record_message_decoded(&self) {
        self.report.lock().unwrap().messages_decoded += 1;
    }

    fn record_answer_records(&self, count: u64) {
        self.report.lock().unwrap().answer_records += count;
    }

    fn record_group_packed(&self) {
        self.report.lock().unwrap().groups_packed += 1;
    }

    fn record_group_rejected(&self) {
        self.report.lock().unwrap().groups_rejected += 1;
    }

    fn record_cells(&self, rrtype: &str, cells: &[Cell]) {
        let mut report = self.report.lock().unwrap();
        report.cells_written += cells.len() as u64;
        *report.cells_by_rrtype.entry(rrtype.to_string()).or_insert(0) += cells.len() as u64;
    }

    fn snapshot(&self) -> IngestReport {
        self.report.lock().unwrap().clone()
    }
}

pub struct Pipeline {
    pub ingest: Arc<IngestCaptureLineUseCase>,
    pub writer: Arc<MockCellWriter>,
    pub counters: Arc<SharedCounters>,
}

pub fn pipeline(decoder: TableDecoder) -> Pipeline {
    let counters = Arc::new(SharedCounters::default());
    let ingest = Arc::new(IngestCaptureLineUseCase::new(
        Arc::new(decoder),
        counters.clone(),
        CellEmitter::default(),
    ));
    Pipeline {
        ingest,
        writer: Arc::new(MockCellWriter::new()),
        counters,
    }
}
