#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_pdns_application::ports::{
    IngestCounters, IngestReport, ObservationRepository, PacketDecoder,
};
use ferrous_pdns_domain::{
    Cell, DecodedMessage, DomainError, MessageSection, SectionKind, StoredRow,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

/// Decoder that answers from a table of known packets.
#[derive(Clone, Default)]
pub struct MockPacketDecoder {
    messages: Arc<Mutex<HashMap<String, DecodedMessage>>>,
}

impl MockPacketDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(self, packet_hex: &str, message: DecodedMessage) -> Self {
        self.messages
            .lock()
            .unwrap()
            .insert(packet_hex.to_string(), message);
        self
    }
}

impl PacketDecoder for MockPacketDecoder {
    fn decode(&self, packet_hex: &str) -> Result<DecodedMessage, DomainError> {
        self.messages
            .lock()
            .unwrap()
            .get(packet_hex)
            .cloned()
            .ok_or_else(|| DomainError::InvalidDnsPacket(format!("unknown packet {packet_hex}")))
    }
}

pub fn answer_message(answers: &[&str]) -> DecodedMessage {
    DecodedMessage {
        id: 1,
        response_code: "NOERROR".to_string(),
        truncated: false,
        sections: vec![
            MessageSection::new(SectionKind::Question, vec!["example.com. IN A".to_string()]),
            MessageSection::new(
                SectionKind::Answer,
                answers.iter().map(|a| a.to_string()).collect(),
            ),
            MessageSection::new(SectionKind::Authority, Vec::new()),
        ],
    }
}

#[derive(Default)]
pub struct MockIngestCounters {
    report: Mutex<IngestReport>,
}

impl MockIngestCounters {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IngestCounters for MockIngestCounters {
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

/// Row store that applies the same filters as the real projection.
#[derive(Clone, Default)]
pub struct MockObservationRepository {
    rows: Arc<RwLock<Vec<StoredRow>>>,
    should_fail: Arc<RwLock<bool>>,
    lookups: Arc<RwLock<Vec<String>>>,
}

impl MockObservationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_row(&self, timestamp: &str, rrname: &str, rrtype: &str, rdata: &str) {
        let mut rows = self.rows.write().await;
        let id = rows.len() as i64 + 1;
        rows.push(StoredRow {
            id,
            timestamp: timestamp.to_string(),
            rrname: rrname.to_string(),
            rrtype: rrtype.to_string(),
            rdata: rdata.to_string(),
        });
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    /// Names or values the use cases actually looked up.
    pub async fn lookups(&self) -> Vec<String> {
        self.lookups.read().await.clone()
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ObservationRepository for MockObservationRepository {
    async fn find_rrset(
        &self,
        rrname: &str,
        rrtype: &str,
    ) -> Result<Vec<StoredRow>, DomainError> {
        self.check_failure().await?;
        self.lookups.write().await.push(rrname.to_string());
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.rrname == rrname && row.rrtype == rrtype)
            .cloned()
            .collect())
    }

    async fn find_by_rdata(&self, rdata: &str) -> Result<Vec<StoredRow>, DomainError> {
        self.check_failure().await?;
        self.lookups.write().await.push(rdata.to_string());
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.rdata == rdata)
            .cloned()
            .collect())
    }
}
