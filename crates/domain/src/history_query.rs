use crate::DomainError;

const IP_TOKEN: &str = "ip";
const DOMAIN_NAME_TOKEN: &str = "dn";

/// History of the value sets published under one owner name and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RrsetQuery {
    pub rrname: String,
    pub rrtype: String,
}

impl RrsetQuery {
    pub fn new(rrname: &str, rrtype: &str) -> Result<Self, DomainError> {
        let rrname = rrname.trim();
        if rrname.is_empty() {
            return Err(DomainError::InvalidQuery(
                "No query string was given".to_string(),
            ));
        }
        Ok(Self {
            rrname: rrname.to_string(),
            rrtype: rrtype.trim().to_string(),
        })
    }

    /// Owner names are stored fully qualified.
    pub fn lookup_name(&self) -> String {
        if self.rrname.ends_with('.') {
            self.rrname.clone()
        } else {
            format!("{}.", self.rrname)
        }
    }
}

/// History of the owner names a single rdata value was published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdataQuery {
    /// Value as the caller gave it; reported back in summaries.
    pub rdata: String,
    /// Record type reported in summaries, after the `ip`/`dn` remap.
    pub rrtype: String,
    lookup_value: String,
}

impl RdataQuery {
    /// `ip` reports as `A`; `dn` reports as `NS` and matches the value with a
    /// trailing dot. Any other token passes through unchanged.
    pub fn new(rdata: &str, type_token: &str) -> Result<Self, DomainError> {
        let rdata = rdata.trim();
        if rdata.is_empty() {
            return Err(DomainError::InvalidQuery(
                "No query string was given".to_string(),
            ));
        }

        let type_token = type_token.trim();
        let (rrtype, lookup_value) = match type_token {
            IP_TOKEN => ("A".to_string(), rdata.to_string()),
            DOMAIN_NAME_TOKEN => ("NS".to_string(), format!("{}.", rdata)),
            other => (other.to_string(), rdata.to_string()),
        };

        Ok(Self {
            rdata: rdata.to_string(),
            rrtype,
            lookup_value,
        })
    }

    pub fn lookup_value(&self) -> &str {
        &self.lookup_value
    }
}
