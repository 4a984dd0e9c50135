//! Storage layer for the Retrosheet ETL CLI
//!
//! This module provides a thin layer over the SQLite database, organized
//! into logical components:
//! - `schema`: raw table DDL and idempotent schema application
//! - `load`: COPY-style bulk insert of converted event CSV
//! - `aggregate`: derived stats table materialization
//!
//! The connection itself is owned by the caller and passed into each
//! operation; nothing here opens or closes it.

pub mod aggregate;
pub mod load;
pub mod schema;


pub use aggregate::AggregateBuilder;
pub use schema::{ensure_raw_events, RAW_EVENTS_TABLE};
