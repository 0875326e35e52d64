use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediacat_lib::names::clean_name_columns;

use super::{derive_output, resolve};

/// Run the names command: strip encoding-mismatch artifacts from the
/// name-bearing columns of an export.
pub fn run(root: &Path, input: PathBuf, output: Option<PathBuf>) {
    let input = resolve(root, input);
    let output = match output {
        Some(o) => resolve(root, o),
        None => derive_output(&input, "_cleaned", "_names_cleaned"),
    };

    let result = File::open(&input)
        .map_err(mediacat_lib::TableError::from)
        .and_then(|infile| {
            let outfile = File::create(&output)?;
            clean_name_columns(BufReader::new(infile), BufWriter::new(outfile))
        });

    match result {
        Ok(summary) => {
            println!(
                "{} {} rows written to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                summary.rows,
                output.display(),
            );
            for (column, count) in &summary.changed {
                println!("  {column}: {count} values cleaned");
            }
        }
        Err(e) => {
            eprintln!(
                "{} Names failed: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
        }
    }
}
