use crate::error::{Result, ScanError};
use crate::settings::{load_settings, save_settings, settings_path, shellexpand_path};

pub fn run(root: Option<String>, ledger: Option<String>) -> Result<()> {
    let mut settings = load_settings();

    let root = match root {
        Some(r) => Some(r),
        None if settings.root_dir.is_none() => {
            println!("Root directory of the tender folders: ");
            let mut input = String::new();
            std::io::stdin().read_line(&mut input)?;
            Some(input.trim().to_string()).filter(|s| !s.is_empty())
        }
        None => None,
    };

    if let Some(dir) = root {
        let resolved = shellexpand_path(&dir);
        if !std::path::Path::new(&resolved).is_dir() {
            return Err(ScanError::RootUnreadable(resolved.into()));
        }
        settings.root_dir = Some(resolved);
    }
    if let Some(path) = ledger {
        settings.ledger_path = Some(shellexpand_path(&path));
    }

    if settings.root_dir.is_none() {
        return Err(ScanError::RootNotConfigured);
    }

    save_settings(&settings)?;
    println!("Settings saved to {}", settings_path().display());
    Ok(())
}
