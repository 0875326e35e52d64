use std::cell::RefCell;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediacat_lib::pipeline::{EnrichEvent, EnrichOptions, enrich_table};

use super::{derive_output, resolve};

/// Diagnostics repeated after the spinner clears.
#[derive(Default)]
struct Diagnostics {
    unclassified: Vec<String>,
    missing_codes: usize,
}

/// Run the clean command: enrich one merged export end to end.
pub fn run(root: &Path, input: PathBuf, output: Option<PathBuf>, limit: Option<usize>) {
    let input = resolve(root, input);
    let output = match output {
        Some(o) => resolve(root, o),
        None => derive_output(&input, "_parsed", "_cleaned"),
    };

    println!(
        "Cleaning export: {}",
        input.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    println!(
        "Writing to:      {}",
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if let Some(n) = limit {
        println!(
            "{}",
            format!("Limit: {} rows", n).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    println!();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("/-\\|"),
    );

    let diagnostics = RefCell::new(Diagnostics::default());
    let progress = |event: EnrichEvent| match event {
        EnrichEvent::RowStarted { index, ref name } => {
            pb.set_message(format!("[{index}] {name}"));
            pb.tick();
        }
        EnrichEvent::Unclassified { ref name, .. } => {
            diagnostics.borrow_mut().unclassified.push(name.clone());
        }
        EnrichEvent::TrafficCodeMissing { .. } => {
            diagnostics.borrow_mut().missing_codes += 1;
        }
        EnrichEvent::Done => pb.finish_and_clear(),
        _ => {}
    };

    let options = EnrichOptions { limit };
    match enrich_table(&input, &output, &options, &progress) {
        Ok(summary) => {
            let diagnostics = diagnostics.into_inner();
            println!(
                "{} {} rows enriched",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                summary.rows,
            );
            println!(
                "  {} resolved from sidecar metadata, {} estimated",
                summary.resolved, summary.estimated,
            );
            if summary.unavailable > 0 {
                println!(
                    "  {} {} rows with no technical metadata",
                    "?".if_supports_color(Stdout, |t| t.yellow()),
                    summary.unavailable,
                );
            }
            if diagnostics.missing_codes > 0 {
                println!(
                    "  {} {} rows without a traffic code",
                    "?".if_supports_color(Stdout, |t| t.yellow()),
                    diagnostics.missing_codes,
                );
            }
            if !diagnostics.unclassified.is_empty() {
                println!(
                    "  {} {} unclassified rows:",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    diagnostics.unclassified.len(),
                );
                for name in &diagnostics.unclassified {
                    println!("    {}", name.if_supports_color(Stdout, |t| t.dimmed()));
                }
            }
        }
        Err(e) => {
            pb.finish_and_clear();
            eprintln!(
                "{} Clean failed: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
        }
    }
}
