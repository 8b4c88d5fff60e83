use crate::rdata_blob::RdataBlob;
use crate::DomainError;
use bytes::Bytes;

/// Fewest whitespace-separated fields an answer line may have.
pub const MIN_RR_FIELDS: usize = 4;

const NAME_FIELD: usize = 0;
const TYPE_FIELD: usize = 3;
const RDATA_FIELD: usize = 4;

/// The fields of one presentation-format answer line the packer cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord<'a> {
    pub name: &'a str,
    pub record_type: &'a str,
    pub rdata: &'a str,
}

impl<'a> AnswerRecord<'a> {
    pub fn parse(line: &'a str) -> Result<Self, DomainError> {
        let fields: Vec<&'a str> = line.split_whitespace().collect();
        if fields.len() < MIN_RR_FIELDS {
            return Err(DomainError::MalformedRecord {
                fields: fields.len(),
                line: line.trim().to_string(),
            });
        }

        Ok(Self {
            name: fields[NAME_FIELD],
            record_type: fields[TYPE_FIELD],
            rdata: fields.get(RDATA_FIELD).copied().unwrap_or(""),
        })
    }
}

/// One validated answer section: a single (name, type) pair and its rdata
/// values in the order they appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedGroup {
    pub name: String,
    pub record_type: String,
    pub rdata: Vec<String>,
    pub blob: Bytes,
}

impl PackedGroup {
    pub fn len(&self) -> usize {
        self.rdata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rdata.is_empty()
    }

    pub fn has_record_type(&self) -> bool {
        !self.record_type.is_empty()
    }

    /// The rdata cell is worth writing when any collected value carries data.
    pub fn has_rdata(&self) -> bool {
        self.rdata.iter().any(|v| !v.is_empty())
    }
}

pub struct RecordGrouper;

impl RecordGrouper {
    /// Validates and packs one answer section.
    ///
    /// An empty group yields `Ok(None)`. Any malformed line or any name/type
    /// mismatch fails the whole group.
    pub fn pack<S: AsRef<str>>(lines: &[S]) -> Result<Option<PackedGroup>, DomainError> {
        if lines.is_empty() {
            return Ok(None);
        }

        let mut name: Option<&str> = None;
        let mut record_type: Option<&str> = None;
        let mut rdata = Vec::with_capacity(lines.len());

        for line in lines {
            let record = AnswerRecord::parse(line.as_ref())?;
            check_column("rrname", &mut name, record.name)?;
            check_column("rrtype", &mut record_type, record.record_type)?;
            rdata.push(record.rdata.to_string());
        }

        let blob = RdataBlob::pack(&rdata)?;

        Ok(Some(PackedGroup {
            name: name.unwrap_or_default().to_string(),
            record_type: record_type.unwrap_or_default().to_string(),
            rdata,
            blob,
        }))
    }
}

fn check_column<'a>(
    column: &'static str,
    seen: &mut Option<&'a str>,
    value: &'a str,
) -> Result<(), DomainError> {
    match seen {
        Some(expected) if *expected != value => Err(DomainError::InconsistentGroup {
            column,
            expected: expected.to_string(),
            found: value.to_string(),
        }),
        Some(_) => Ok(()),
        None => {
            *seen = Some(value);
            Ok(())
        }
    }
}
