use crate::error::Result;
use crate::ledger::Ledger;
use crate::settings::{settings_path, ResolvedPaths};

fn presence(exists: bool) -> &'static str {
    if exists {
        ""
    } else {
        " (missing)"
    }
}

pub fn run(paths: &ResolvedPaths) -> Result<()> {
    println!("Settings:   {}", settings_path().display());
    match &paths.root {
        Some(root) => println!("Root:       {}{}", root.display(), presence(root.is_dir())),
        None => println!("Root:       (not configured)"),
    }
    println!(
        "Ledger:     {}{}",
        paths.ledger_path.display(),
        presence(paths.ledger_path.exists())
    );

    let ledger = Ledger::load(&paths.ledger_path)?;
    println!();
    if ledger.is_empty() {
        println!("Loaded folders:  none");
    } else {
        println!("Loaded folders:  {}", ledger.len());
    }
    Ok(())
}
