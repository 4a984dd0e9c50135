//! Derived stats table materialization

use crate::cli::types::StatColumn;
use crate::error::{Result, RetroError};
use rusqlite::Connection;

/// Builds aggregate stats tables from the raw events table.
///
/// Each build groups raw rows by batter and season year (the year lives in
/// characters 4-7 of the composite `game_id`, e.g. `TEX201704040`) and
/// materializes one output row per distinct group via a single
/// `CREATE TABLE ... AS SELECT`. The computed stat columns are supplied by
/// the caller; their expressions are interpolated into the query verbatim
/// and are trusted the same way the DDL script is.
pub struct AggregateBuilder<'a> {
    conn: &'a Connection,
}

impl<'a> AggregateBuilder<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Materialize `output_table` from `raw_table`, committing afterward.
    ///
    /// Fails if `output_table` already exists (no overwrite policy), if
    /// either table name or a stat name is not a plain identifier, or if a
    /// stat expression references a column the raw table does not have.
    pub fn build(
        &self,
        raw_table: &str,
        output_table: &str,
        stats: &[StatColumn],
    ) -> Result<()> {
        validate_identifier(raw_table)?;
        validate_identifier(output_table)?;
        for stat in stats {
            validate_identifier(&stat.name)?;
        }

        let mut query = format!(
            "CREATE TABLE {output_table} AS\n\
             SELECT\n    \
             batter AS player_id,\n    \
             SUBSTR(game_id, 4, 4) AS year"
        );
        for stat in stats {
            query.push_str(&format!(",\n    {} AS {}", stat.expression, stat.name));
        }
        query.push_str(&format!(
            "\nFROM {raw_table}\nGROUP BY\n    player_id,\n    year"
        ));

        self.conn.execute_batch(&query)?;
        Ok(())
    }
}

/// Accept only `[A-Za-z_][A-Za-z0-9_]*` before interpolating into SQL.
fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(RetroError::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}
