//! Raw events table schema management

use crate::error::Result;
use rusqlite::Connection;

/// Destination table for converted event rows.
pub const RAW_EVENTS_TABLE: &str = "raw_events";

/// DDL for the raw events table, owned by `sql/build_events.sql`.
///
/// The column list matches the `cwevent -f 0-96` output field for field, so
/// converted rows load positionally.
pub const BUILD_EVENTS_SQL: &str = include_str!("../../sql/build_events.sql");

/// Apply the raw events DDL, committing afterward.
///
/// The script uses `CREATE TABLE IF NOT EXISTS`, so repeated application is
/// a no-op.
pub fn ensure_raw_events(conn: &Connection) -> Result<()> {
    conn.execute_batch(BUILD_EVENTS_SQL)?;
    Ok(())
}
