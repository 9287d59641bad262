use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::parser::normalize_name;

/// Folder names already loaded downstream, backed by a one-name-per-line
/// text file. Names are stored whitespace-normalized and matched exactly.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    names: Vec<String>,
    index: HashSet<String>,
}

impl Ledger {
    /// Build from names in order. Duplicates keep their first position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ledger = Self::default();
        for name in names {
            ledger.insert(name.as_ref());
        }
        ledger
    }

    /// Read the ledger file. A file that does not exist is an empty ledger.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self::from_names(
                content.lines().filter(|line| !line.trim().is_empty()),
            )),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite `path` with every name, one per line.
    pub fn save(&self, path: &Path) -> Result<()> {
        Self::save_names(path, &self.names)
    }

    /// Overwrite `path` with `names` exactly as given, repeats included.
    pub fn save_names(path: &Path, names: &[String]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content: String = names.iter().map(|n| format!("{n}\n")).collect();
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), names = names.len(), "ledger written");
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Returns false if the (normalized) name was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = normalize_name(name);
        if name.is_empty() || !self.index.insert(name.clone()) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Returns false if the (normalized) name was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        let name = normalize_name(name);
        if !self.index.remove(&name) {
            return false;
        }
        self.names.retain(|n| *n != name);
        true
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
