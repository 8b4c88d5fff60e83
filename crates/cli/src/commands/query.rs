use crate::di::UseCases;
use ferrous_pdns_domain::{RdataQuery, RrsetQuery};
use serde::Serialize;
use std::io::{BufWriter, Write};

pub async fn rrset(use_cases: &UseCases, rrname: &str, rrtype: &str) -> anyhow::Result<()> {
    let query = RrsetQuery::new(rrname, rrtype)?;
    let summaries = use_cases.rrset_history.execute(&query).await?;
    write_json_lines(&summaries)
}

pub async fn rdata(use_cases: &UseCases, rdata: &str, rdata_type: &str) -> anyhow::Result<()> {
    let query = RdataQuery::new(rdata, rdata_type)?;
    let summaries = use_cases.rdata_history.execute(&query).await?;
    write_json_lines(&summaries)
}

/// One JSON object per line on stdout.
fn write_json_lines<T: Serialize>(items: &[T]) -> anyhow::Result<()> {
    let mut out = BufWriter::new(std::io::stdout().lock());
    for item in items {
        serde_json::to_writer(&mut out, item)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
