use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediacat_lib::chunk::split_csv;

use super::resolve;

/// Run the chunk command: split an export into fixed-size row chunks.
pub fn run(root: &Path, input: PathBuf, output_dir: PathBuf, chunk_size: usize) {
    let input = resolve(root, input);
    let output_dir = resolve(root, output_dir);

    println!(
        "Splitting {} into chunks of {} rows",
        input.display().if_supports_color(Stdout, |t| t.cyan()),
        chunk_size,
    );

    match split_csv(&input, &output_dir, chunk_size) {
        Ok(chunks) => {
            for path in &chunks {
                println!(
                    "  {} {}",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    path.display(),
                );
            }
            println!(
                "{} {} chunk files written to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                chunks.len(),
                output_dir.display(),
            );
        }
        Err(e) => {
            eprintln!(
                "{} Chunk failed: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
        }
    }
}
