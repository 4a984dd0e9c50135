//! Shared helpers for command implementations.

use crate::error::{Result, RetroError};
use crate::RETRO_DB_ENV_VAR;
use std::env;
use std::path::PathBuf;

/// Resolve the database path from the `--db` flag or the `RETRO_DB`
/// environment variable (in that order).
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }
    match env::var(RETRO_DB_ENV_VAR) {
        Ok(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Err(RetroError::MissingDbPath {
            env_var: RETRO_DB_ENV_VAR.to_string(),
        }),
    }
}
