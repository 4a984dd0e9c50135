//! COPY-style bulk loading of converted event CSV

use crate::error::Result;
use rusqlite::Connection;
use std::fs::File;
use std::path::Path;

use super::schema::RAW_EVENTS_TABLE;

/// Bulk-insert the headerless delimited file at `path` into `raw_events`.
///
/// Rows are bound positionally, so each record must have exactly as many
/// fields as the table has columns; a width mismatch aborts the load. The
/// whole file goes in as a single transaction committed at the end. Loading
/// is append-only: loading the same file twice duplicates its rows.
pub fn copy_events(conn: &mut Connection, path: &Path) -> Result<usize> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(file);

    let tx = conn.transaction()?;
    let mut rows = 0;
    let mut records = reader.records();
    if let Some(first) = records.next() {
        let first = first?;
        // Placeholder count comes from the first record; SQLite rejects the
        // insert if it disagrees with the table width.
        let placeholders = vec!["?"; first.len()].join(", ");
        let sql = format!("INSERT INTO {RAW_EVENTS_TABLE} VALUES ({placeholders})");
        let mut stmt = tx.prepare(&sql)?;

        stmt.execute(rusqlite::params_from_iter(first.iter()))?;
        rows += 1;
        for record in records {
            let record = record?;
            stmt.execute(rusqlite::params_from_iter(record.iter()))?;
            rows += 1;
        }
    }
    tx.commit()?;

    Ok(rows)
}
