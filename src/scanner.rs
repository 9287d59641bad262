use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, ScanError};
use crate::ledger::Ledger;
use crate::models::{Classification, ScanReport, SkipReason};
use crate::parser::{classify, has_numeric_date_prefix, is_numeric, normalize_name, DatePolicy, MIN_TOKENS};

/// Marker file whose presence means a tender folder was loaded.
pub const MARKER_FILE: &str = "cargado.txt";

pub struct MarkerScan {
    pub report: ScanReport,
    /// Normalized names of marker-bearing folders, in traversal order.
    pub loaded_names: Vec<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ensure_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(ScanError::RootUnreadable(root.to_path_buf()))
    }
}

/// Subdirectories of `dir` with their names, sorted by name.
fn list_dirs(dir: &Path) -> std::io::Result<Vec<(PathBuf, std::ffi::OsString)>> {
    let mut dirs: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| (entry.path(), entry.file_name()))
        .filter(|(path, _)| path.is_dir())
        .collect();
    dirs.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(dirs)
}

/// Case-insensitive lookup of the marker in the immediate listing of `dir`.
/// A listing failure counts as no marker.
pub fn has_marker(dir: &Path) -> bool {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .any(|entry| entry.file_name().to_string_lossy().to_lowercase() == MARKER_FILE),
        Err(e) => {
            tracing::debug!(path = %dir.display(), error = %e, "cannot list folder");
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Ledger-consulting scan
// ---------------------------------------------------------------------------

/// Walk `root/<year>/<month>/<tender>` and flag each tender folder by ledger
/// membership. Year directories must have all-digit names.
pub fn scan_with_ledger(root: &Path, ledger: &Ledger) -> Result<ScanReport> {
    ensure_root(root)?;
    let years = list_dirs(root).map_err(|_| ScanError::RootUnreadable(root.to_path_buf()))?;

    let mut report = ScanReport::default();
    for (year_path, year) in years {
        if !year.to_str().is_some_and(is_numeric) {
            tracing::debug!(path = %year_path.display(), "not a year directory");
            continue;
        }
        let months = match list_dirs(&year_path) {
            Ok(months) => months,
            Err(e) => {
                tracing::debug!(path = %year_path.display(), error = %e, "cannot list year");
                continue;
            }
        };
        for (month_path, _) in months {
            let tenders = match list_dirs(&month_path) {
                Ok(tenders) => tenders,
                Err(e) => {
                    tracing::debug!(path = %month_path.display(), error = %e, "cannot list month");
                    continue;
                }
            };
            for (path, name) in tenders {
                let Some(name) = name.to_str() else {
                    report.skip(path, SkipReason::NonUtf8Name);
                    continue;
                };
                match classify(name, DatePolicy::Required) {
                    Classification::Accepted(mut record) => {
                        record.loaded = Some(ledger.contains(&record.raw_name));
                        report.records.push(record);
                    }
                    Classification::Skipped(reason) => report.skip(path, reason),
                }
            }
        }
    }

    report.sort_by_date_desc();
    tracing::info!(
        records = report.records.len(),
        skipped = report.skipped.len(),
        "ledger scan finished"
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// Marker scan
// ---------------------------------------------------------------------------

/// Walk every directory below `root` and keep the tender folders that hold
/// the marker file. Unlike the ledger scan, a bad date keeps the record with
/// no date.
pub fn scan_markers(root: &Path) -> Result<MarkerScan> {
    ensure_root(root)?;

    let mut report = ScanReport::default();
    let mut loaded_names = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "walk error");
                continue;
            }
        };
        // Links to directories are candidates but are not descended into.
        let is_dir = entry.file_type().is_dir()
            || (entry.path_is_symlink() && entry.path().is_dir());
        if !is_dir {
            continue;
        }
        let path = entry.path();
        let Some(name) = entry.file_name().to_str() else {
            report.skip(path.to_path_buf(), SkipReason::NonUtf8Name);
            continue;
        };

        let tokens: Vec<&str> = name.split_whitespace().collect();
        if tokens.len() < MIN_TOKENS {
            report.ignored += 1;
            continue;
        }
        if !has_numeric_date_prefix(&tokens) {
            report.skip(path.to_path_buf(), SkipReason::NonNumericDate);
            continue;
        }
        if !has_marker(path) {
            report.skip(path.to_path_buf(), SkipReason::MarkerMissing);
            continue;
        }

        match classify(name, DatePolicy::Optional) {
            Classification::Accepted(record) => {
                loaded_names.push(normalize_name(name));
                report.records.push(record);
            }
            Classification::Skipped(reason) => report.skip(path.to_path_buf(), reason),
        }
    }

    report.sort_by_date_desc();
    tracing::info!(
        records = report.records.len(),
        skipped = report.skipped.len(),
        ignored = report.ignored,
        "marker scan finished"
    );
    Ok(MarkerScan {
        report,
        loaded_names,
    })
}

/// Marker scan followed by a full overwrite of the ledger at `ledger_path`.
pub fn rebuild_ledger(root: &Path, ledger_path: &Path) -> Result<ScanReport> {
    let scan = scan_markers(root)?;
    Ledger::save_names(ledger_path, &scan.loaded_names)?;
    Ok(scan.report)
}
