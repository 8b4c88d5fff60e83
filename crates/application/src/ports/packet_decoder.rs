use ferrous_pdns_domain::{DecodedMessage, DomainError};

/// Turns the hex-encoded packet of a capture line into a decoded message.
///
/// Runs on the CPU pool, once per capture line, so implementations are sync.
pub trait PacketDecoder: Send + Sync {
    fn decode(&self, packet_hex: &str) -> Result<DecodedMessage, DomainError>;
}
