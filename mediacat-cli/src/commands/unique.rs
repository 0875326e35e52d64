use std::fs::File;
use std::io::{BufReader, Write as _};
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediacat_lib::report::unique_column_values;

use super::resolve;

/// Run the unique command: report the distinct tokens of one column.
pub fn run(root: &Path, input: PathBuf, column: String, output: Option<PathBuf>) {
    let input = resolve(root, input);

    let tokens = match File::open(&input)
        .map_err(mediacat_lib::TableError::from)
        .and_then(|f| unique_column_values(BufReader::new(f), &column))
    {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!(
                "{} Unique failed: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            return;
        }
    };

    println!(
        "{} distinct {} values:",
        tokens.len(),
        column.if_supports_color(Stdout, |t| t.cyan()),
    );
    for token in &tokens {
        println!("  {token}");
    }

    if let Some(output) = output {
        let output = resolve(root, output);
        let write = || -> std::io::Result<()> {
            let mut file = File::create(&output)?;
            for token in &tokens {
                writeln!(file, "{token}")?;
            }
            Ok(())
        };
        match write() {
            Ok(()) => println!(
                "{} written to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                output.display(),
            ),
            Err(e) => eprintln!(
                "{} Could not write {}: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                output.display(),
                e,
            ),
        }
    }
}
