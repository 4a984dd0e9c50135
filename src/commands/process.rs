//! Process command: run the four-stage pipeline for one season.

use crate::cli::types::Year;
use crate::pipeline::EventPipeline;
use crate::Result;
use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;

use super::resolve_db_path;

/// Parameters for the `process` subcommand.
pub struct ProcessParams {
    pub year: Year,
    pub working_dir: PathBuf,
    pub db: Option<PathBuf>,
    pub converter: String,
    pub timeout_secs: u64,
    pub verbose: bool,
}

/// Download, convert, and load one season of event data.
///
/// Opens the database, runs fetch → transform → load → cleanup, and reports
/// the loaded row count. A stage failure aborts the run with the completed
/// stages' side effects left in place.
pub async fn handle_process(params: ProcessParams) -> Result<()> {
    let db_path = resolve_db_path(params.db)?;
    let mut conn = Connection::open(&db_path)?;

    let mut pipeline = EventPipeline::new(&params.working_dir, params.year, &mut conn)
        .with_converter(params.converter)
        .with_timeout(Duration::from_secs(params.timeout_secs));

    if params.verbose {
        println!("Database: {}", db_path.display());
        println!("Staging directory: {}", pipeline.staging_dir().display());

        println!("Fetching {} event archive...", params.year);
        pipeline.fetch().await?;

        println!("Converting event files...");
        pipeline.transform().await?;

        println!("Loading {}...", pipeline.output_path().display());
        let rows = pipeline.load()?;

        println!("Cleaning up intermediate files...");
        pipeline.cleanup()?;

        println!("\n✓ Season {} complete: {} rows loaded", params.year, rows);
    } else {
        let rows = pipeline.process().await?;
        println!("✓ Season {} complete: {} rows loaded", params.year, rows);
    }

    Ok(())
}
