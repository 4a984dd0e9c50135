//! Archive download from retrosheet.org.

use crate::cli::types::Year;
use crate::error::Result;
use reqwest::Client;
use std::fs;
use std::path::Path;

/// Base URL for Retrosheet regular-season event archives.
pub const EVENTS_BASE_URL: &str = "https://www.retrosheet.org/events";

/// Filename of one season's compressed event archive.
pub fn archive_name(year: Year) -> String {
    format!("{year}eve.zip")
}

/// Download `{base_url}/{year}eve.zip` and write the body to `dest`.
///
/// Any transport error or HTTP status >= 400 is a hard failure; nothing is
/// written in that case. Calling twice overwrites the previous archive.
pub async fn download_archive(
    client: &Client,
    base_url: &str,
    year: Year,
    dest: &Path,
) -> Result<()> {
    let url = format!("{}/{}", base_url, archive_name(year));

    let body = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    fs::write(dest, &body)?;
    Ok(())
}
