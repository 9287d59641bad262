use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::models::FolderRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON array (for scripts)
    #[default]
    Json,
    /// Indented JSON array
    Pretty,
    /// Human-readable table
    Table,
}

pub fn render(records: &[FolderRecord], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(records)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(records)?,
        OutputFormat::Table => render_table(records),
    })
}

fn loaded_cell(loaded: Option<bool>) -> Cell {
    match loaded {
        Some(true) => Cell::new("yes".green()),
        Some(false) => Cell::new("no".yellow()),
        None => Cell::new(""),
    }
}

pub fn render_table(records: &[FolderRecord]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Client", "Type", "Reference", "Loaded"]);
    for r in records {
        table.add_row(vec![
            Cell::new(r.date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())),
            Cell::new(&r.client_name),
            Cell::new(&r.kind),
            Cell::new(&r.reference_number),
            loaded_cell(r.loaded),
        ]);
    }
    let count = match records.len() {
        1 => "1 folder".to_string(),
        n => format!("{n} folders"),
    };
    format!("{table}\n{count}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Vec<FolderRecord> {
        vec![FolderRecord {
            raw_name: "2024 03 15 Hospital Central LP 123".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15),
            client_name: "Hospital Central".to_string(),
            kind: "LP".to_string(),
            reference_number: "123".to_string(),
            loaded: Some(true),
        }]
    }

    #[test]
    fn test_json_is_single_line_array() {
        let out = render(&sample(), OutputFormat::Json).unwrap();
        assert!(out.starts_with('['));
        assert!(!out.contains('\n'));
        assert!(out.contains(r#""rawName":"2024 03 15 Hospital Central LP 123""#));
        assert!(out.contains(r#""date":"2024-03-15""#));
    }

    #[test]
    fn test_empty_renders_empty_array() {
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_table_lists_fields_and_count() {
        colored::control::set_override(false);
        let out = render(&sample(), OutputFormat::Table).unwrap();
        assert!(out.contains("Hospital Central"));
        assert!(out.contains("2024-03-15"));
        assert!(out.contains("yes"));
        assert!(out.ends_with("1 folder"));
    }
}
