//! mediacat CLI
//!
//! Command-line interface for enriching and post-processing media-asset
//! catalog exports.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mediacat")]
#[command(about = "Enrich and classify media-asset catalog exports", long_about = None)]
struct Cli {
    /// Export directory for resolving relative paths (defaults to the
    /// saved settings value, then the current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich a merged export with title type, content tag, traffic code,
    /// and technical metadata
    Clean {
        /// Input CSV (the merged, parsed export)
        input: PathBuf,

        /// Output CSV (default: input name with _parsed swapped for _cleaned)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum number of rows to enrich
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Split an export into fixed-size row chunks
    Chunk {
        input: PathBuf,

        /// Directory for the chunk files
        #[arg(short, long, default_value = "data_chunked")]
        output_dir: PathBuf,

        /// Rows per chunk
        #[arg(short = 's', long, default_value_t = 10_000)]
        chunk_size: usize,
    },

    /// Append the output-directory routing column to a cleaned export
    Tag {
        input: PathBuf,

        /// Output CSV (default: input name with _tagged appended)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report the distinct content-type tokens of a cleaned export
    Unique {
        input: PathBuf,

        /// Column to collect tokens from
        #[arg(short, long, default_value = "CONTENT_TYPE")]
        column: String,

        /// Optional file to write the tokens to, one per line
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Strip encoding-mismatch artifacts from name columns
    Names {
        input: PathBuf,

        /// Output CSV (default: input name with _names_cleaned appended)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage the saved export directory
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the settings file and resolved export directory
    Show,

    /// Save the export directory
    Set { path: PathBuf },

    /// Clear the saved export directory
    Clear,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let root = mediacat_lib::settings::resolve_export_dir(cli.root);
    log::info!("export directory: {}", root.display());

    match cli.command {
        Commands::Clean {
            input,
            output,
            limit,
        } => commands::clean::run(&root, input, output, limit),
        Commands::Chunk {
            input,
            output_dir,
            chunk_size,
        } => commands::chunk::run(&root, input, output_dir, chunk_size),
        Commands::Tag { input, output } => commands::tag::run(&root, input, output),
        Commands::Unique {
            input,
            column,
            output,
        } => commands::unique::run(&root, input, column, output),
        Commands::Names { input, output } => commands::names::run(&root, input, output),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(),
            ConfigAction::Set { path } => commands::config::set(path),
            ConfigAction::Clear => commands::config::clear(),
        },
    }
}
