//! Wire-format DNS decoding for capture lines.
//!
//! Packets are decoded with `hickory-proto` and rendered into the
//! presentation-format sections the answer scanner walks.

use ferrous_pdns_application::ports::PacketDecoder;
use ferrous_pdns_domain::{DecodedMessage, DomainError, MessageSection, SectionKind};
use hickory_proto::op::{Message, Query};
use hickory_proto::rr::Record;

pub struct HickoryPacketDecoder;

impl HickoryPacketDecoder {
    pub fn new() -> Self {
        Self
    }

    fn format_query(query: &Query) -> String {
        format!(
            "{} {} {}",
            query.name(),
            query.query_class(),
            query.query_type()
        )
    }

    /// `name ttl class type rdata`, single-space separated.
    fn format_record(record: &Record) -> String {
        format!(
            "{} {} {} {} {}",
            record.name(),
            record.ttl(),
            record.dns_class(),
            record.record_type(),
            record.data()
        )
    }

    fn section(kind: SectionKind, records: &[Record]) -> MessageSection {
        MessageSection::new(kind, records.iter().map(Self::format_record).collect())
    }

    pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedMessage, DomainError> {
        let message = Message::from_vec(bytes).map_err(|e| {
            DomainError::InvalidDnsPacket(format!("Failed to parse DNS message: {}", e))
        })?;

        let questions = MessageSection::new(
            SectionKind::Question,
            message.queries().iter().map(Self::format_query).collect(),
        );

        Ok(DecodedMessage {
            id: message.id(),
            response_code: format!("{:?}", message.response_code()).to_uppercase(),
            truncated: message.truncated(),
            sections: vec![
                questions,
                Self::section(SectionKind::Answer, message.answers()),
                Self::section(SectionKind::Authority, message.name_servers()),
                Self::section(SectionKind::Additional, message.additionals()),
            ],
        })
    }
}

impl Default for HickoryPacketDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PacketDecoder for HickoryPacketDecoder {
    fn decode(&self, packet_hex: &str) -> Result<DecodedMessage, DomainError> {
        let bytes = hex::decode(packet_hex).map_err(|e| {
            DomainError::InvalidDnsPacket(format!("Invalid packet hex: {}", e))
        })?;
        Self::decode_bytes(&bytes)
    }
}
