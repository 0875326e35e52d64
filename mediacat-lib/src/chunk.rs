//! Export splitting: break a large cleaned CSV into fixed-size chunks for
//! tools that choke on the full file.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::TableError;

/// Split `input` into chunk files of at most `chunk_size` rows each,
/// written to `output_dir` as `{date}_chunk_{n}.csv`. The `{date}` prefix
/// is the input filename's leading `_`-separated token, matching the
/// export naming scheme. Every chunk carries the header row.
pub fn split_csv(
    input: &Path,
    output_dir: &Path,
    chunk_size: usize,
) -> Result<Vec<PathBuf>, TableError> {
    if chunk_size == 0 {
        return Err(TableError::invalid_input("chunk size must be nonzero"));
    }
    std::fs::create_dir_all(output_dir)?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| TableError::invalid_input("input path has no file name"))?;
    let date = stem.split('_').next().unwrap_or(stem);

    let mut csv_reader = csv::Reader::from_path(input)?;
    let headers = csv_reader.headers()?.clone();

    let mut written = Vec::new();
    let mut writer: Option<csv::Writer<BufWriter<File>>> = None;
    let mut rows_in_chunk = 0usize;

    for row in csv_reader.records() {
        let row = row?;

        if writer.is_none() || rows_in_chunk == chunk_size {
            if let Some(mut w) = writer.take() {
                w.flush()?;
            }
            let path = output_dir.join(format!("{date}_chunk_{}.csv", written.len() + 1));
            let mut w = csv::Writer::from_writer(BufWriter::new(File::create(&path)?));
            w.write_record(&headers)?;
            log::info!("writing chunk {}", path.display());
            written.push(path);
            writer = Some(w);
            rows_in_chunk = 0;
        }

        // The writer is always present here.
        if let Some(w) = writer.as_mut() {
            w.write_record(&row)?;
        }
        rows_in_chunk += 1;
    }

    if let Some(mut w) = writer.take() {
        w.flush()?;
    }

    Ok(written)
}
