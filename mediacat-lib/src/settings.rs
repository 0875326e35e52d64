//! Shared application settings (export directory, config file location).
//!
//! All frontends resolve the export working directory the same way, and
//! paths are always passed explicitly into the pipeline; nothing here
//! mutates the process working directory.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/mediacat/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("mediacat").join("settings.toml")
}

/// Resolve the export directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `exports.current_dir` in `settings.toml`
/// 3. Current working directory
pub fn resolve_export_dir(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_export_dir() {
        return p;
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Read `exports.current_dir` from `settings.toml`, if set.
fn load_export_dir() -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let dir = doc.get("exports")?.get("current_dir")?.as_str()?;
    if dir.is_empty() {
        None
    } else {
        Some(PathBuf::from(dir))
    }
}

/// Save (or clear) the export directory in `settings.toml`, preserving any
/// unrelated keys the file already holds.
pub fn save_export_dir(path: Option<&Path>) -> io::Result<()> {
    let settings = settings_path();
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(&settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let exports = table
        .entry("exports")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let exports_table = exports
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[exports] is not a table"))?;

    match path {
        Some(p) => {
            exports_table.insert(
                "current_dir".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            exports_table.remove("current_dir");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &settings)?;

    Ok(())
}
