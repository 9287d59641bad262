use crate::error::Result;
use crate::fmt::{render, OutputFormat};
use crate::ledger::Ledger;
use crate::scanner::scan_with_ledger;
use crate::settings::ScanConfig;

pub fn run(config: &ScanConfig, format: OutputFormat) -> Result<()> {
    let ledger = Ledger::load(&config.ledger_path)?;
    tracing::debug!(path = %config.ledger_path.display(), names = ledger.len(), "ledger loaded");

    let report = scan_with_ledger(&config.root, &ledger)?;
    println!("{}", render(&report.records, format)?);
    Ok(())
}
