use std::path::PathBuf;

use crate::error::Result;
use crate::fmt::{render, OutputFormat};
use crate::scanner::rebuild_ledger;
use crate::settings::{shellexpand_path, ScanConfig};

pub fn run(config: &ScanConfig, format: OutputFormat, output: Option<String>) -> Result<()> {
    let ledger_path = match output {
        Some(p) => PathBuf::from(shellexpand_path(&p)),
        None => config.ledger_path.clone(),
    };

    let report = rebuild_ledger(&config.root, &ledger_path)?;
    println!("{}", render(&report.records, format)?);
    Ok(())
}
