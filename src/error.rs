//! Error types for bkrs2yomi.

use std::path::PathBuf;

use thiserror::Error;

use crate::services::download::DumpKind;

/// The error type for conversion runs.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from reading the dump or writing the staging area.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading a line of the dump failed.
    #[error("failed to read input: {0}")]
    InputRead(#[source] std::io::Error),

    /// The gzip stream of a `.gz` dump is corrupt or truncated.
    #[error("failed to decompress {path}: {source}")]
    Decompression {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The downloads page no longer links a dump of the requested kind.
    #[error("no download link for the {kind} dump")]
    DownloadLinkNotFound { kind: DumpKind },

    /// Refusing to wipe a directory this tool did not create.
    #[error("{dir} exists and is not a bkrs2yomi staging directory")]
    StagingNotOwned { dir: PathBuf },

    /// Input or output would live inside the staging directory, which is
    /// deleted at the end of the run.
    #[error("{path} is inside the staging directory {staging}")]
    InsideStaging { path: PathBuf, staging: PathBuf },

    /// Script conversion failed. Callers treat this as non-fatal.
    #[error("script conversion failed: {0}")]
    Script(String),

    /// No OpenCC dictionary file was found in the given directory.
    #[error("no OpenCC dictionary files in {dir}")]
    ScriptTableMissing { dir: PathBuf },

    #[error("invalid conversion type {0}, expected 0, 1 or 2")]
    InvalidConversionMode(u8),
}

/// A specialized Result type for bkrs2yomi operations.
pub type Result<T> = std::result::Result<T, Error>;
