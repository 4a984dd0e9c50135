//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{StatColumn, Year};

#[derive(Debug, Parser)]
#[clap(name = "retro-events", about = "Retrosheet event data ETL CLI")]
pub struct Retro {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download, convert, and load one season of event data.
    ///
    /// Runs the four pipeline stages in order: fetch the year's archive from
    /// retrosheet.org, convert it with `cwevent`, bulk-load `all{year}.csv`
    /// into the `raw_events` table, and delete the intermediate files.
    Process {
        /// Season year to process (e.g. 2017).
        #[clap(long, short)]
        year: Year,

        /// Working directory; staging files live under `{dir}/retro_event/`.
        #[clap(long, short, default_value = "data/raw")]
        working_dir: PathBuf,

        /// SQLite database path (or set `RETRO_DB` env var).
        #[clap(long)]
        db: Option<PathBuf>,

        /// Converter program to invoke.
        #[clap(long, default_value = "cwevent")]
        converter: String,

        /// Timeout in seconds for the download and the converter run.
        #[clap(long, default_value_t = 300)]
        timeout_secs: u64,

        /// Show per-stage progress information.
        #[clap(long)]
        verbose: bool,
    },

    /// Materialize a derived stats table from the raw events table.
    ///
    /// Groups `raw_events` by batter and season year and writes one row per
    /// group into a new table. Fails if the output table already exists.
    BuildStats {
        /// Source table of raw event rows.
        #[clap(long, default_value = "raw_events")]
        raw_table: String,

        /// Table to create; must not already exist.
        #[clap(long, default_value = "stats_batting")]
        output_table: String,

        /// Computed stat column (repeatable): `--stat ab=SUM(ab_flag)`.
        #[clap(long = "stat")]
        stats: Vec<StatColumn>,

        /// SQLite database path (or set `RETRO_DB` env var).
        #[clap(long)]
        db: Option<PathBuf>,
    },
}
