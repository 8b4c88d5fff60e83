//! Packed rdata encoding.
//!
//! Layout, all integers big-endian `u32`:
//!
//! ```text
//! +-------+--------+----------+--------+----------+-----
//! | count | len[0] | bytes[0] | len[1] | bytes[1] | ...
//! +-------+--------+----------+--------+----------+-----
//! ```
//!
//! A valid blob is exactly `4 * (count + 1) + sum(len)` bytes long.

use crate::DomainError;
use bytes::{Buf, BufMut, Bytes, BytesMut};

const LENGTH_PREFIX: usize = 4;

pub struct RdataBlob;

impl RdataBlob {
    pub fn pack<V: AsRef<[u8]>>(values: &[V]) -> Result<Bytes, DomainError> {
        let count = prefix(values.len())?;
        let payload: usize = values.iter().map(|v| v.as_ref().len()).sum();

        let mut buf = BytesMut::with_capacity(LENGTH_PREFIX * (values.len() + 1) + payload);
        buf.put_u32(count);
        for value in values {
            let value = value.as_ref();
            buf.put_u32(prefix(value.len())?);
            buf.put_slice(value);
        }
        Ok(buf.freeze())
    }

    pub fn unpack(blob: &[u8]) -> Result<Vec<Bytes>, DomainError> {
        let mut buf = blob;
        if buf.remaining() < LENGTH_PREFIX {
            return Err(DomainError::InvalidRdataBlob(format!(
                "blob of {} bytes has no count prefix",
                blob.len()
            )));
        }

        let count = buf.get_u32() as usize;
        // Every entry needs at least its own length prefix.
        if count > buf.remaining() / LENGTH_PREFIX {
            return Err(DomainError::InvalidRdataBlob(format!(
                "declared {} values but only {} bytes follow",
                count,
                buf.remaining()
            )));
        }

        let mut values = Vec::with_capacity(count);
        for index in 0..count {
            if buf.remaining() < LENGTH_PREFIX {
                return Err(DomainError::InvalidRdataBlob(format!(
                    "value {} is missing its length prefix",
                    index
                )));
            }
            let len = buf.get_u32() as usize;
            if buf.remaining() < len {
                return Err(DomainError::InvalidRdataBlob(format!(
                    "value {} declares {} bytes, {} remain",
                    index,
                    len,
                    buf.remaining()
                )));
            }
            values.push(Bytes::copy_from_slice(&buf[..len]));
            buf.advance(len);
        }

        if buf.has_remaining() {
            return Err(DomainError::InvalidRdataBlob(format!(
                "{} trailing bytes after {} values",
                buf.remaining(),
                count
            )));
        }

        Ok(values)
    }

    /// Unpacks and decodes every value as UTF-8, replacing invalid sequences.
    pub fn unpack_strings(blob: &[u8]) -> Result<Vec<String>, DomainError> {
        Ok(Self::unpack(blob)?
            .iter()
            .map(|v| String::from_utf8_lossy(v).into_owned())
            .collect())
    }
}

fn prefix(len: usize) -> Result<u32, DomainError> {
    u32::try_from(len).map_err(|_| {
        DomainError::InvalidRdataBlob(format!("length {} does not fit a u32 prefix", len))
    })
}
