//! The sequential four-stage event pipeline.
//!
//! `EventPipeline` runs fetch, transform, load, and cleanup in a fixed order
//! against a per-year staging directory and a caller-owned database
//! connection. Execution is at-least-once and non-atomic: a failing stage
//! aborts the run and leaves the side effects of completed stages in place,
//! with no rollback and no automatic resume. Concurrent runs for the same
//! year in the same working directory are unsupported (they race on the
//! same filenames).

pub mod stage;


pub use stage::Stage;

use crate::cli::types::Year;
use crate::error::{Result, RetroError};
use crate::retrosheet::{archive::extract_archive, http};
use crate::storage;
use rusqlite::Connection;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Staging subdirectory created under the working directory.
pub const STAGING_SUBDIR: &str = "retro_event";

/// Field range passed to the converter; matches the raw table's 97 columns.
const CONVERTER_FIELD_RANGE: &str = "0-96";

const DEFAULT_CONVERTER: &str = "cwevent";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Orchestrates one year's ETL run: fetch, transform, load, cleanup.
pub struct EventPipeline<'c> {
    staging: PathBuf,
    year: Year,
    conn: &'c mut Connection,
    converter: String,
    source_url: String,
    timeout: Duration,
    stage: Stage,
}

impl<'c> EventPipeline<'c> {
    /// Create a pipeline for `year`, staging files under
    /// `{working_dir}/retro_event/`. The connection stays owned by the
    /// caller; the pipeline only executes statements against it.
    pub fn new(working_dir: impl AsRef<Path>, year: Year, conn: &'c mut Connection) -> Self {
        Self {
            staging: working_dir.as_ref().join(STAGING_SUBDIR),
            year,
            conn,
            converter: DEFAULT_CONVERTER.to_string(),
            source_url: http::EVENTS_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            stage: Stage::Init,
        }
    }

    /// Override the converter program (default `cwevent`).
    pub fn with_converter(mut self, converter: impl Into<String>) -> Self {
        self.converter = converter.into();
        self
    }

    /// Override the archive source base URL.
    pub fn with_source_url(mut self, base_url: impl Into<String>) -> Self {
        self.source_url = base_url.into();
        self
    }

    /// Override the timeout applied to the download and the converter wait.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Last completed stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Per-year staging directory.
    pub fn staging_dir(&self) -> &Path {
        &self.staging
    }

    /// Local path of the downloaded archive (`{year}eve.zip`).
    pub fn archive_path(&self) -> PathBuf {
        self.staging.join(http::archive_name(self.year))
    }

    /// Path of the normalized converter output (`all{year}.csv`).
    pub fn output_path(&self) -> PathBuf {
        self.staging.join(format!("all{}.csv", self.year))
    }

    /// Run all four stages in order. Any stage failure aborts the rest.
    ///
    /// Returns the number of rows loaded into the raw table.
    pub async fn process(&mut self) -> Result<usize> {
        self.fetch().await?;
        self.transform().await?;
        let rows = self.load()?;
        self.cleanup()?;
        Ok(rows)
    }

    /// Download the year's archive and expand it into the staging directory.
    ///
    /// Creates the staging directory if absent. A transport error or HTTP
    /// status >= 400 is a hard failure. Safe to call twice: the archive and
    /// its entries are overwritten, not duplicated.
    pub async fn fetch(&mut self) -> Result<()> {
        fs::create_dir_all(&self.staging)?;

        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let archive_path = self.archive_path();
        http::download_archive(&client, &self.source_url, self.year, &archive_path).await?;
        extract_archive(&archive_path, &self.staging)?;

        self.stage = Stage::Fetched;
        Ok(())
    }

    /// Run the converter over the expanded `{year}*.EV*` files, redirecting
    /// its stdout to `all{year}.csv`.
    ///
    /// Missing converter, missing input files, a non-zero exit status, or a
    /// wait past the timeout are all hard failures; a failed run removes the
    /// partial output file so a later `load()` cannot pick it up.
    pub async fn transform(&mut self) -> Result<()> {
        let inputs = self.event_files()?;
        if inputs.is_empty() {
            return Err(RetroError::NoEventFiles {
                year: self.year.as_u16(),
                dir: self.staging.display().to_string(),
            });
        }

        let output_path = self.output_path();
        if let Err(err) = self.run_converter(&inputs, &output_path).await {
            let _ = fs::remove_file(&output_path);
            return Err(err);
        }

        self.stage = Stage::Transformed;
        Ok(())
    }

    async fn run_converter(&self, inputs: &[String], output_path: &Path) -> Result<()> {
        let output = fs::File::create(output_path)?;
        let mut command = Command::new(&self.converter);
        command
            .arg("-y")
            .arg(self.year.to_string())
            .arg("-f")
            .arg(CONVERTER_FIELD_RANGE)
            .args(inputs)
            .current_dir(&self.staging)
            .stdout(Stdio::from(output))
            // A timed-out run must not leave the child alive holding the
            // output file handle
            .kill_on_drop(true);

        let waited = tokio::time::timeout(self.timeout, command.status()).await;
        let status = match waited {
            Ok(Ok(status)) => status,
            Ok(Err(err)) if err.kind() == ErrorKind::NotFound => {
                return Err(RetroError::ConverterNotFound {
                    program: self.converter.clone(),
                });
            }
            Ok(Err(err)) => return Err(err.into()),
            Err(_) => {
                return Err(RetroError::ConverterTimeout {
                    program: self.converter.clone(),
                    secs: self.timeout.as_secs(),
                });
            }
        };
        if !status.success() {
            return Err(RetroError::ConverterFailed {
                program: self.converter.clone(),
                status,
            });
        }
        Ok(())
    }

    /// Ensure the raw table exists, then bulk-insert `all{year}.csv` into it.
    ///
    /// The DDL and the data load are separate commits; loading the same file
    /// again duplicates its rows. Returns the number of rows inserted.
    pub fn load(&mut self) -> Result<usize> {
        storage::ensure_raw_events(self.conn)?;
        let rows = storage::load::copy_events(self.conn, &self.output_path())?;

        self.stage = Stage::Loaded;
        Ok(rows)
    }

    /// Delete the intermediate per-team files from the staging directory.
    ///
    /// Removes `.EVA`/`.EVN`/`.ROS` files and the `TEAM{year}` roster list;
    /// the archive and `all{year}.csv` stay. Deletion is per-file and
    /// non-transactional: an error partway leaves extra intermediates behind
    /// without touching loaded data.
    pub fn cleanup(&mut self) -> Result<()> {
        for entry in fs::read_dir(&self.staging)? {
            let entry = entry?;
            let name = entry.file_name();
            if let Some(name) = name.to_str() {
                if is_intermediate(name, self.year) {
                    fs::remove_file(entry.path())?;
                }
            }
        }

        self.stage = Stage::CleanedUp;
        Ok(())
    }

    /// Converter input files: `{year}*.EV*` in the staging directory, sorted.
    fn event_files(&self) -> Result<Vec<String>> {
        let prefix = self.year.to_string();
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.staging)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                if name.starts_with(&prefix) && is_event_file(name) {
                    files.push(name.to_string());
                }
            }
        }
        files.sort();
        Ok(files)
    }
}

/// `.EV*` extension check (`.EVA` for AL home games, `.EVN` for NL).
fn is_event_file(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.starts_with("EV"),
        None => false,
    }
}

/// Files deleted by cleanup: per-team event and roster intermediates.
fn is_intermediate(name: &str, year: Year) -> bool {
    name.ends_with(".EVA")
        || name.ends_with(".EVN")
        || name.ends_with(".ROS")
        || name.ends_with(&format!("TEAM{year}"))
}
