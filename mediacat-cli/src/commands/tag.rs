use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediacat_lib::tagger::append_output_dir;

use super::{derive_output, resolve};

/// Run the tag command: append the output-directory routing column.
pub fn run(root: &Path, input: PathBuf, output: Option<PathBuf>) {
    let input = resolve(root, input);
    let output = match output {
        Some(o) => resolve(root, o),
        None => derive_output(&input, "_cleaned", "_tagged"),
    };

    println!(
        "Tagging {} ",
        input.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    let result = File::open(&input)
        .map_err(mediacat_lib::TableError::from)
        .and_then(|infile| {
            let outfile = File::create(&output)?;
            append_output_dir(BufReader::new(infile), BufWriter::new(outfile))
        });

    match result {
        Ok(summary) => {
            println!(
                "{} {} rows tagged, written to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                summary.rows,
                output.display(),
            );
            for (dir, count) in &summary.counts {
                println!("  {dir}: {count}");
            }
        }
        Err(e) => {
            eprintln!(
                "{} Tag failed: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
        }
    }
}
