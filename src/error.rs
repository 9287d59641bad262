use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(
        "Root path not configured (pass --root, set TENDERSCAN_ROOT, or run `tenderscan init --root <dir>`)"
    )]
    RootNotConfigured,

    #[error("Root directory is not readable: {}", .0.display())]
    RootUnreadable(PathBuf),

    #[error("Ledger file not found: {}", .0.display())]
    LedgerMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;
