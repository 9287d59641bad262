use chrono::NaiveDate;

use crate::models::{Classification, FolderRecord, SkipReason};

/// Minimum whitespace tokens in a tender folder name:
/// year, month, day, client (possibly empty), type, reference.
pub const MIN_TOKENS: usize = 6;

/// What to do when the leading date tokens are not a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePolicy {
    /// Drop the folder. Used by the ledger-consulting scan.
    Required,
    /// Keep the folder with no date. Used by the marker scan.
    Optional,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Collapse whitespace runs to one space and trim both ends.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// True when the first three tokens are all digits.
pub fn has_numeric_date_prefix(tokens: &[&str]) -> bool {
    tokens.len() >= 3 && tokens[..3].iter().all(|t| is_numeric(t))
}

/// Parse `year month day` tokens. Year takes exactly four digits, month and
/// day one or two.
pub fn parse_date_tokens(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    if year.len() != 4 || !is_numeric(year) {
        return None;
    }
    for part in [month, day] {
        if part.is_empty() || part.len() > 2 || !is_numeric(part) {
            return None;
        }
    }
    let y: i32 = year.parse().ok()?;
    if y < 1 {
        return None;
    }
    let m: u32 = month.parse().ok()?;
    let d: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(y, m, d)
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Turn a folder name into a record, or say why it is not a tender folder.
/// `loaded` is left unset; the caller decides it.
pub fn classify(name: &str, policy: DatePolicy) -> Classification {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS {
        return Classification::Skipped(SkipReason::TooFewTokens(tokens.len()));
    }

    let date = parse_date_tokens(tokens[0], tokens[1], tokens[2]);
    if date.is_none() && policy == DatePolicy::Required {
        return Classification::Skipped(SkipReason::InvalidDate(tokens[..3].join("-")));
    }

    let n = tokens.len();
    Classification::Accepted(FolderRecord {
        raw_name: tokens.join(" "),
        date,
        client_name: tokens[3..n - 2].join(" "),
        kind: tokens[n - 2].to_string(),
        reference_number: tokens[n - 1].to_string(),
        loaded: None,
    })
}
