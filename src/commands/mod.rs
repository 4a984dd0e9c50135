//! Command implementations for the Retrosheet ETL CLI

pub mod build_stats;
pub mod common;
pub mod process;

pub use common::resolve_db_path;
