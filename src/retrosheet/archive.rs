//! ZIP archive expansion into the staging directory.

use crate::error::Result;
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// Expand the full contents of `zip_path` into `dest`.
///
/// Existing files with the same names are overwritten, so re-expanding the
/// same archive does not duplicate entries.
pub fn extract_archive(zip_path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(file)?;
    archive.extract(dest)?;
    Ok(())
}
