use ferrous_pdns_domain::{Column, DomainError, RdataBlob, StoredRow};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, error, instrument};

const PROJECTION: &str = "SELECT d.id AS id, t.row_key AS row_key, t.version AS version,
            t.value AS rrtype, d.value AS rdata
     FROM cells t
     JOIN cells d
       ON d.row_key = t.row_key
      AND d.column_family = t.column_family
      AND d.version = t.version
     WHERE t.column_family = ?
       AND t.column_name = ?
       AND d.column_name = ?";

#[instrument(skip(pool))]
pub(super) async fn find_rrset(
    pool: &SqlitePool,
    column_family: &str,
    rrname: &str,
    rrtype: &str,
) -> Result<Vec<StoredRow>, DomainError> {
    let sql = format!(
        "{PROJECTION}
       AND t.row_key = ?
       AND t.value = ?
     ORDER BY t.version, d.id"
    );

    let rows = sqlx::query(&sql)
        .bind(column_family)
        .bind(Column::RrType.as_str())
        .bind(Column::Rdata.as_str())
        .bind(rrname.as_bytes())
        .bind(rrtype.as_bytes())
        .fetch_all(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch rrset cells");
            DomainError::DatabaseError(e.to_string())
        })?;

    let projected = project(rows, |_| true)?;
    debug!(count = projected.len(), "Rrset rows projected");
    Ok(projected)
}

#[instrument(skip(pool))]
pub(super) async fn find_by_rdata(
    pool: &SqlitePool,
    column_family: &str,
    rdata: &str,
) -> Result<Vec<StoredRow>, DomainError> {
    // instr() only narrows the scan; the exact match happens after unpacking.
    let sql = format!(
        "{PROJECTION}
       AND instr(d.value, ?) > 0
     ORDER BY t.row_key, t.version, d.id"
    );

    let rows = sqlx::query(&sql)
        .bind(column_family)
        .bind(Column::RrType.as_str())
        .bind(Column::Rdata.as_str())
        .bind(rdata.as_bytes())
        .fetch_all(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch rdata cells");
            DomainError::DatabaseError(e.to_string())
        })?;

    let projected = project(rows, |value| value == rdata)?;
    debug!(count = projected.len(), "Rdata rows projected");
    Ok(projected)
}

/// One stored row per unpacked rdata value that passes `keep`.
fn project<F>(rows: Vec<SqliteRow>, keep: F) -> Result<Vec<StoredRow>, DomainError>
where
    F: Fn(&str) -> bool,
{
    let mut projected = Vec::with_capacity(rows.len());

    for row in rows {
        let id: i64 = get(&row, "id")?;
        let row_key: Vec<u8> = get(&row, "row_key")?;
        let version: String = get(&row, "version")?;
        let rrtype: Vec<u8> = get(&row, "rrtype")?;
        let blob: Vec<u8> = get(&row, "rdata")?;

        let values = RdataBlob::unpack_strings(&blob).map_err(|e| {
            error!(error = %e, id, "Stored rdata blob is corrupt");
            e
        })?;

        let rrname = String::from_utf8_lossy(&row_key);
        let rrtype = String::from_utf8_lossy(&rrtype);

        projected.extend(
            values
                .into_iter()
                .filter(|v| keep(v.as_str()))
                .map(|rdata| StoredRow {
                    id,
                    timestamp: version.clone(),
                    rrname: rrname.to_string(),
                    rrtype: rrtype.to_string(),
                    rdata,
                }),
        );
    }

    Ok(projected)
}

fn get<'r, T>(row: &'r SqliteRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(column)
        .map_err(|e| DomainError::DatabaseError(format!("column {}: {}", column, e)))
}
