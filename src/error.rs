// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a mining run. Per-file conditions (wrong change kind,
/// disallowed extension, undecodable or missing content, line count outside
/// the window) are skips, not errors, and never surface here.
#[derive(Debug, Error)]
pub enum MinerError {
    #[error("failed to open repository at {path}: {source}")]
    OpenRepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("failed to write pair {id}: {source}")]
    WritePair {
        id: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
