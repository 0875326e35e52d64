use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediacat_lib::settings::{resolve_export_dir, save_export_dir, settings_path};

/// Show the resolved export directory and the settings file behind it.
pub fn show() {
    let path = settings_path();
    println!(
        "Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        if path.exists() {
            "(exists)"
        } else {
            "(not found)"
        }
        .if_supports_color(Stdout, |t| t.dimmed()),
    );
    println!(
        "Export dir:    {}",
        resolve_export_dir(None)
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
}

/// Save the export directory to the settings file.
pub fn set(path: PathBuf) {
    match save_export_dir(Some(&path)) {
        Ok(()) => println!(
            "{} Export directory saved: {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            path.display(),
        ),
        Err(e) => eprintln!(
            "{} Could not save settings: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        ),
    }
}

/// Clear the saved export directory.
pub fn clear() {
    match save_export_dir(None) {
        Ok(()) => println!(
            "{} Export directory cleared",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        ),
        Err(e) => eprintln!(
            "{} Could not update settings: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        ),
    }
}
