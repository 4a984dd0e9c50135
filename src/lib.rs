//! Retrosheet Event ETL Library
//!
//! A small Rust library for collecting Retrosheet historical event data and
//! loading it into a local SQLite database: download a year's event archive,
//! convert it with the external Chadwick `cwevent` tool, bulk-load the result
//! into a raw events table, and derive aggregate stats tables with SQL.
//!
//! ## Features
//!
//! - **Archive Download**: Fetch a season's event archive from retrosheet.org
//! - **External Conversion**: Drive `cwevent` to flatten event files into CSV
//! - **Bulk Loading**: COPY-style positional insert into `raw_events`
//! - **Derived Stats**: Materialize per-(player, year) aggregate tables
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use retro_events::{pipeline::EventPipeline, Year};
//!
//! # async fn example() -> retro_events::Result<()> {
//! let mut conn = rusqlite::Connection::open("retro.db")?;
//! let mut pipeline = EventPipeline::new("data/raw", Year::new(2017), &mut conn);
//! pipeline.process().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the database path to avoid passing it in every command:
//! ```bash
//! export RETRO_DB=retro.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod pipeline;
pub mod retrosheet;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{StatColumn, Year};
pub use error::{Result, RetroError};
pub use pipeline::{EventPipeline, Stage};
pub use storage::aggregate::AggregateBuilder;

pub const RETRO_DB_ENV_VAR: &str = "RETRO_DB";
