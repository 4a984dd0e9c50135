//! End-to-end pipeline tests against a mocked archive source and a stub
//! converter.

use anyhow::Result;
use retro_events::{pipeline::EventPipeline, AggregateBuilder, Stage, StatColumn, Year};
use rusqlite::Connection;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};
use zip::write::FileOptions;
use zip::CompressionMethod;

/// Build an in-memory ZIP with the given (name, contents) entries.
fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(std::io::Cursor::new(&mut buf));
        let options = FileOptions::default().compression_method(CompressionMethod::Stored);
        for (name, contents) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(contents.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }
    buf
}

/// Archive fixture for 2017: two per-team event files plus the team roster
/// list, mirroring one season's expanded layout.
fn season_archive() -> Vec<u8> {
    build_zip(&[
        ("2017TEX.EVA", "id,TEX201704040\nplay,...\n"),
        ("2017BOS.EVN", "id,BOS201704050\nplay,...\n"),
        ("TEAM2017", "TEX,A,Texas,Rangers\nBOS,A,Boston,Red Sox\n"),
    ])
}

async fn mount_archive(server: &MockServer, payload: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path("/2017eve.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload))
        .mount(server)
        .await;
}

/// One converted event record: 97 comma-joined fields.
fn event_row(game_id: &str, batter: &str) -> String {
    let mut fields = vec![""; 97];
    fields[0] = game_id;
    fields[10] = batter;
    fields.join(",")
}

/// Stub converter that ignores its inputs and emits a fixed 3-row CSV on
/// stdout (two batters, one of them twice).
#[cfg(unix)]
fn write_stub_converter(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let rows = format!(
        "{}\n{}\n{}\n",
        event_row("TEX201704040", "choos001"),
        event_row("TEX201704040", "andre001"),
        event_row("BOS201804050", "choos001"),
    );
    let path = dir.join("cwevent-stub");
    std::fs::write(&path, format!("#!/bin/sh\nprintf '%s' '{rows}'\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn staging_files(staging: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(staging)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_end_to_end() -> Result<()> {
    let server = MockServer::start().await;
    mount_archive(&server, season_archive()).await;

    let work_dir = tempfile::tempdir()?;
    let stub = write_stub_converter(work_dir.path());
    let mut conn = Connection::open_in_memory()?;

    let mut pipeline = EventPipeline::new(work_dir.path(), Year::new(2017), &mut conn)
        .with_source_url(server.uri())
        .with_converter(stub.to_string_lossy())
        .with_timeout(Duration::from_secs(10));

    let rows = pipeline.process().await?;

    assert_eq!(rows, 3);
    assert_eq!(pipeline.stage(), Stage::CleanedUp);
    // Only the archive and the normalized output survive cleanup
    assert_eq!(
        staging_files(pipeline.staging_dir()),
        vec!["2017eve.zip", "all2017.csv"]
    );

    let loaded: i64 = conn.query_row("SELECT COUNT(*) FROM raw_events", [], |row| row.get(0))?;
    assert_eq!(loaded, 3);
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_then_build_stats() -> Result<()> {
    let server = MockServer::start().await;
    mount_archive(&server, season_archive()).await;

    let work_dir = tempfile::tempdir()?;
    let stub = write_stub_converter(work_dir.path());
    let mut conn = Connection::open_in_memory()?;

    EventPipeline::new(work_dir.path(), Year::new(2017), &mut conn)
        .with_source_url(server.uri())
        .with_converter(stub.to_string_lossy())
        .process()
        .await?;

    // The stub emits choos001 in 2017 and 2018 plus andre001 in 2017:
    // three distinct (player, year) groups.
    let stats: Vec<StatColumn> = vec!["events=COUNT(*)".parse().unwrap()];
    let builder = AggregateBuilder::new(&conn);
    builder.build("raw_events", "stats_batting", &stats)?;

    let groups: i64 = conn.query_row("SELECT COUNT(*) FROM stats_batting", [], |row| row.get(0))?;
    assert_eq!(groups, 3);

    // No overwrite policy: rebuilding into the same table fails
    assert!(builder.build("raw_events", "stats_batting", &stats).is_err());
    Ok(())
}

#[tokio::test]
async fn test_fetch_twice_overwrites_without_duplicating() -> Result<()> {
    let server = MockServer::start().await;
    mount_archive(&server, season_archive()).await;

    let work_dir = tempfile::tempdir()?;
    let mut conn = Connection::open_in_memory()?;
    let mut pipeline = EventPipeline::new(work_dir.path(), Year::new(2017), &mut conn)
        .with_source_url(server.uri());

    pipeline.fetch().await?;
    let first = staging_files(pipeline.staging_dir());
    pipeline.fetch().await?;
    let second = staging_files(pipeline.staging_dir());

    assert_eq!(
        first,
        vec!["2017BOS.EVN", "2017TEX.EVA", "2017eve.zip", "TEAM2017"]
    );
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_fetch_fails_on_http_error() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2017eve.zip"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let work_dir = tempfile::tempdir()?;
    let mut conn = Connection::open_in_memory()?;
    let mut pipeline = EventPipeline::new(work_dir.path(), Year::new(2017), &mut conn)
        .with_source_url(server.uri());

    let result = pipeline.fetch().await;

    assert!(result.is_err());
    assert_eq!(pipeline.stage(), Stage::Init);
    // Nothing but the (empty) staging directory was created
    assert!(staging_files(pipeline.staging_dir()).is_empty());
    Ok(())
}
