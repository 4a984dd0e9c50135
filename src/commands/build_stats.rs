//! Build-stats command: materialize a derived aggregate table.

use crate::cli::types::StatColumn;
use crate::storage::AggregateBuilder;
use crate::Result;
use rusqlite::Connection;
use std::path::PathBuf;

use super::resolve_db_path;

/// Group the raw events table by (player, year) and materialize the result
/// into a new table with the caller-supplied stat columns.
pub fn handle_build_stats(
    raw_table: String,
    output_table: String,
    stats: Vec<StatColumn>,
    db: Option<PathBuf>,
) -> Result<()> {
    let db_path = resolve_db_path(db)?;
    let conn = Connection::open(&db_path)?;

    AggregateBuilder::new(&conn).build(&raw_table, &output_table, &stats)?;

    println!("✓ Built {} from {}", output_table, raw_table);
    Ok(())
}
