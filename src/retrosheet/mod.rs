//! Retrosheet remote source: archive download and expansion.

pub mod archive;
pub mod http;
