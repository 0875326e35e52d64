pub mod chunk;
pub mod clean;
pub mod config;
pub mod names;
pub mod tag;
pub mod unique;

use std::path::{Path, PathBuf};

/// Resolve a possibly-relative CLI path against the export directory.
pub fn resolve(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

/// Derive a sibling output path by swapping `from` for `to` in the file
/// stem. A stem without `from` gets `to` plus a run timestamp appended so
/// repeated runs never clobber each other.
pub fn derive_output(input: &Path, from: &str, to: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("export");
    let name = if stem.contains(from) {
        format!("{}.csv", stem.replace(from, to))
    } else {
        format!(
            "{stem}{to}-{}.csv",
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        )
    };
    input.with_file_name(name)
}
