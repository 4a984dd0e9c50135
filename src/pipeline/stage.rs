//! Pipeline stage tracking.

use std::fmt;

/// Last completed stage of a pipeline run.
///
/// Stages advance linearly: `Init` → `Fetched` → `Transformed` → `Loaded` →
/// `CleanedUp`. An aborted run stays at its last completed stage; there is
/// no retry or resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Init,
    Fetched,
    Transformed,
    Loaded,
    CleanedUp,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::Fetched => "fetched",
            Stage::Transformed => "transformed",
            Stage::Loaded => "loaded",
            Stage::CleanedUp => "cleaned-up",
        };
        write!(f, "{name}")
    }
}
