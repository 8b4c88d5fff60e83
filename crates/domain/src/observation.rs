use crate::value_set::ValueSet;
use serde::Serialize;

/// One projected row of the cell store: a single rdata value of a group
/// observed at `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRow {
    pub id: i64,
    pub timestamp: String,
    pub rrname: String,
    pub rrtype: String,
    pub rdata: String,
}

/// First-seen / last-seen / count summary of one run of identical value sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RrsetSummary {
    pub rrname: String,
    pub rrtype: String,
    pub first_seen: String,
    pub last_seen: String,
    pub count: u64,
    pub rdata: ValueSet,
}

/// Where and when one rdata value was seen, per owner name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RdataSummary {
    pub rdata: String,
    pub rrname: String,
    pub rrtype: String,
    pub first_seen: String,
    pub last_seen: String,
    pub count: u64,
}
