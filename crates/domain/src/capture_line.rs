use crate::DomainError;
use std::str::FromStr;

const CAPTURE_LINE_FIELDS: usize = 4;

/// One observed DNS response as written by the capture sensor:
/// `<marker><timestamp> <format-version> <source-address> <packet-hex>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureLine {
    pub timestamp: String,
    pub format_version: String,
    pub source_address: String,
    pub packet_hex: String,
}

impl CaptureLine {
    pub fn parse(line: &str) -> Result<Self, DomainError> {
        let fields: Vec<&str> = line.split([' ', '\t']).filter(|f| !f.is_empty()).collect();

        if fields.len() != CAPTURE_LINE_FIELDS {
            return Err(DomainError::InvalidCaptureLine(format!(
                "expected {} fields, found {}",
                CAPTURE_LINE_FIELDS,
                fields.len()
            )));
        }

        let timestamp = strip_marker(fields[0]);
        if timestamp.is_empty() {
            return Err(DomainError::InvalidCaptureLine(
                "empty timestamp".to_string(),
            ));
        }

        Ok(Self {
            timestamp: timestamp.to_string(),
            format_version: fields[1].to_string(),
            source_address: fields[2].to_string(),
            packet_hex: fields[3].trim_end_matches(['\r', '\n']).to_string(),
        })
    }
}

impl FromStr for CaptureLine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn strip_marker(field: &str) -> &str {
    match field.chars().next() {
        Some(c) if !c.is_ascii_digit() => &field[c.len_utf8()..],
        _ => field,
    }
}
