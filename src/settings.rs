use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

pub const ROOT_ENV: &str = "TENDERSCAN_ROOT";
pub const LEDGER_ENV: &str = "TENDERSCAN_LEDGER";

/// Persisted settings. Both paths are optional; flags and environment
/// variables take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub root_dir: Option<String>,
    #[serde(default)]
    pub ledger_path: Option<String>,
}

/// Everything a scan needs, resolved once and passed down.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub ledger_path: PathBuf,
}

/// Paths as resolved at startup. The root stays optional so `status` can
/// report it missing; scans go through `require_root`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPaths {
    pub root: Option<PathBuf>,
    pub ledger_path: PathBuf,
}

impl ResolvedPaths {
    pub fn require_root(self) -> Result<ScanConfig> {
        let root = self.root.ok_or(ScanError::RootNotConfigured)?;
        Ok(ScanConfig {
            root,
            ledger_path: self.ledger_path,
        })
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("tenderscan")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn default_ledger_path() -> PathBuf {
    config_dir().join("cargados.txt")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| ScanError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn env_var(key: &str) -> Option<String> {
    non_empty(std::env::var(key).ok())
}

/// First non-empty of flag, environment, settings file.
fn pick(flag: Option<String>, env: Option<String>, stored: Option<String>) -> Option<PathBuf> {
    non_empty(flag)
        .or_else(|| non_empty(env))
        .or_else(|| non_empty(stored))
        .map(|p| PathBuf::from(shellexpand_path(&p)))
}

pub fn resolve_from(
    root_flag: Option<String>,
    ledger_flag: Option<String>,
    env_root: Option<String>,
    env_ledger: Option<String>,
    settings: &Settings,
) -> ResolvedPaths {
    ResolvedPaths {
        root: pick(root_flag, env_root, settings.root_dir.clone()),
        ledger_path: pick(ledger_flag, env_ledger, settings.ledger_path.clone())
            .unwrap_or_else(default_ledger_path),
    }
}

/// Resolve paths from flags, the process environment and the settings file.
/// Call after `.env` has been loaded.
pub fn resolve(root_flag: Option<String>, ledger_flag: Option<String>) -> ResolvedPaths {
    resolve_from(
        root_flag,
        ledger_flag,
        env_var(ROOT_ENV),
        env_var(LEDGER_ENV),
        &load_settings(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(root: Option<&str>, ledger: Option<&str>) -> Settings {
        Settings {
            root_dir: root.map(String::from),
            ledger_path: ledger.map(String::from),
        }
    }

    #[test]
    fn test_flag_beats_env_beats_file() {
        let s = stored(Some("/from/file"), Some("/file/ledger.txt"));
        let r = resolve_from(
            Some("/from/flag".into()),
            None,
            Some("/from/env".into()),
            Some("/env/ledger.txt".into()),
            &s,
        );
        assert_eq!(r.root, Some(PathBuf::from("/from/flag")));
        assert_eq!(r.ledger_path, PathBuf::from("/env/ledger.txt"));

        let r = resolve_from(None, None, None, None, &s);
        assert_eq!(r.root, Some(PathBuf::from("/from/file")));
        assert_eq!(r.ledger_path, PathBuf::from("/file/ledger.txt"));
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let s = stored(Some(""), None);
        let r = resolve_from(Some("  ".into()), None, Some(String::new()), None, &s);
        assert_eq!(r.root, None);
        assert_eq!(r.ledger_path, default_ledger_path());
    }

    #[test]
    fn test_missing_root_is_config_error() {
        let r = resolve_from(None, None, None, None, &Settings::default());
        assert!(matches!(r.require_root(), Err(ScanError::RootNotConfigured)));
    }

    #[test]
    fn test_require_root_builds_config() {
        let r = resolve_from(Some("/nonexistent/data".into()), Some("/l.txt".into()), None, None, &Settings::default());
        let config = r.require_root().unwrap();
        assert_eq!(config.root, PathBuf::from("/nonexistent/data"));
        assert_eq!(config.ledger_path, PathBuf::from("/l.txt"));
    }

    #[test]
    fn test_settings_merge_with_defaults() {
        let s: Settings = serde_json::from_str(r#"{"root_dir": "/srv/licitaciones"}"#).unwrap();
        assert_eq!(s.root_dir.as_deref(), Some("/srv/licitaciones"));
        assert_eq!(s.ledger_path, None);
    }

    #[test]
    fn test_settings_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = stored(Some("/srv/licitaciones"), Some("/srv/cargados.txt"));
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        let loaded: Settings = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, settings);
    }
}
