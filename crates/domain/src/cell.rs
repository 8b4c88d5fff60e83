use crate::record_group::PackedGroup;
use bytes::Bytes;
use std::fmt;

pub const DEFAULT_COLUMN_FAMILY: &str = "cf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    RrType,
    Rdata,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::RrType => "rrtype",
            Column::Rdata => "rdata",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value addressed by row key, column family, column name and version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row_key: Bytes,
    pub column_family: String,
    pub column: Column,
    /// Observation timestamp of the capture line the cell came from.
    pub version: String,
    pub value: Bytes,
}

/// Turns packed groups into store cells keyed by the group's name.
#[derive(Debug, Clone)]
pub struct CellEmitter {
    column_family: String,
}

impl CellEmitter {
    pub fn new(column_family: impl Into<String>) -> Self {
        Self {
            column_family: column_family.into(),
        }
    }

    pub fn column_family(&self) -> &str {
        &self.column_family
    }

    /// Type cell first, then the rdata cell; either is left out when it has
    /// nothing to carry.
    pub fn emit(&self, group: &PackedGroup, version: &str) -> Vec<Cell> {
        let row_key = Bytes::copy_from_slice(group.name.as_bytes());
        let mut cells = Vec::with_capacity(2);

        if group.has_record_type() {
            cells.push(self.cell(
                row_key.clone(),
                Column::RrType,
                version,
                Bytes::copy_from_slice(group.record_type.as_bytes()),
            ));
        }

        if group.has_rdata() {
            cells.push(self.cell(row_key, Column::Rdata, version, group.blob.clone()));
        }

        cells
    }

    fn cell(&self, row_key: Bytes, column: Column, version: &str, value: Bytes) -> Cell {
        Cell {
            row_key,
            column_family: self.column_family.clone(),
            column,
            version: version.to_string(),
            value,
        }
    }
}

impl Default for CellEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMN_FAMILY)
    }
}
