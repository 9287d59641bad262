use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

/// One tender folder, parsed from its directory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRecord {
    pub raw_name: String,
    pub date: Option<NaiveDate>,
    pub client_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub reference_number: String,
    /// Ledger membership. Only the ledger-consulting scan fills this in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooFewTokens(usize),
    NonNumericDate,
    InvalidDate(String),
    MarkerMissing,
    NonUtf8Name,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewTokens(n) => write!(f, "only {n} tokens in name"),
            Self::NonNumericDate => write!(f, "date prefix is not numeric"),
            Self::InvalidDate(raw) => write!(f, "invalid date {raw}"),
            Self::MarkerMissing => write!(f, "no marker file"),
            Self::NonUtf8Name => write!(f, "name is not valid UTF-8"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Accepted(FolderRecord),
    Skipped(SkipReason),
}

/// A directory that was looked at and left out of the results.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct ScanReport {
    pub records: Vec<FolderRecord>,
    pub skipped: Vec<SkippedEntry>,
    /// Directories whose names never looked like a tender folder.
    pub ignored: usize,
}

impl ScanReport {
    pub fn skip(&mut self, path: PathBuf, reason: SkipReason) {
        tracing::debug!(path = %path.display(), %reason, "skipping folder");
        self.skipped.push(SkippedEntry { path, reason });
    }

    /// Most recent first. `None` orders below every date, so undated
    /// records end up last. The sort is stable: ties keep visit order.
    pub fn sort_by_date_desc(&mut self) {
        self.records.sort_by(|a, b| b.date.cmp(&a.date));
    }
}
