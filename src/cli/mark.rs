use std::path::Path;

use crate::error::{Result, ScanError};
use crate::ledger::Ledger;
use crate::parser::normalize_name;

pub fn mark(ledger_path: &Path, name: &str) -> Result<()> {
    let name = normalize_name(name);
    if name.is_empty() {
        return Err(ScanError::Other("Folder name is empty".to_string()));
    }

    let mut ledger = Ledger::load(ledger_path)?;
    if !ledger.insert(&name) {
        println!("Already marked as loaded: {name}");
        return Ok(());
    }
    ledger.save(ledger_path)?;
    println!("Marked as loaded: {name}");
    Ok(())
}

pub fn unmark(ledger_path: &Path, name: &str) -> Result<()> {
    if !ledger_path.exists() {
        return Err(ScanError::LedgerMissing(ledger_path.to_path_buf()));
    }

    let name = normalize_name(name);
    let mut ledger = Ledger::load(ledger_path)?;
    if !ledger.remove(&name) {
        println!("Not marked as loaded: {name}");
        return Ok(());
    }
    ledger.save(ledger_path)?;
    println!("Unmarked: {name}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_creates_ledger_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("cargados.txt");
        mark(&path, " 2024 03 15  Hospital Central LP 123").unwrap();
        mark(&path, "2024 03 15 Hospital Central LP 123").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "2024 03 15 Hospital Central LP 123\n"
        );
    }

    #[test]
    fn test_mark_rejects_blank_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cargados.txt");
        assert!(mark(&path, "   ").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_unmark_missing_ledger_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cargados.txt");
        assert!(matches!(unmark(&path, "x"), Err(ScanError::LedgerMissing(_))));
    }

    #[test]
    fn test_unmark_removes_only_named_folder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cargados.txt");
        std::fs::write(&path, "a b c d e f\ng h i j k l\n").unwrap();
        unmark(&path, "a  b c d e f").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "g h i j k l\n");
        unmark(&path, "not there").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "g h i j k l\n");
    }
}
