//! CSV table I/O for catalog exports.
//!
//! Readers and writers are generic over the underlying stream; the `_path`
//! variants wrap the file handling. The output file is written twice per
//! run: once with placeholder derived columns before enrichment, once with
//! final values after.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use mediacat_core::{Enrichment, OutputRecord, RawRecord};

use crate::error::TableError;

/// Read the merged export, keeping only rows marked as matched in both
/// source tables. A row that fails to deserialize aborts the read with
/// its index.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, TableError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let record = row.map_err(|e| {
            log::error!("failed reading export at row {index}: {e}");
            TableError::row(index, e.to_string())
        })?;
        if record.merge == "both" {
            records.push(record);
        }
    }

    Ok(records)
}

pub fn read_records_from_path(path: &Path) -> Result<Vec<RawRecord>, TableError> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}

/// Write enriched rows to a stream.
pub fn write_records<W: Write>(
    writer: W,
    rows: &[(RawRecord, Enrichment)],
) -> Result<(), TableError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (record, enrichment) in rows {
        csv_writer.serialize(OutputRecord::assemble(record, enrichment))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write (or overwrite) a snapshot file of enriched rows.
pub fn write_snapshot(path: &Path, rows: &[(RawRecord, Enrichment)]) -> Result<(), TableError> {
    let file = File::create(path)?;
    write_records(BufWriter::new(file), rows)
}

/// Write the pre-enrichment snapshot: every row present, every derived
/// column still the placeholder marker.
pub fn write_placeholder_snapshot(path: &Path, records: &[RawRecord]) -> Result<(), TableError> {
    let rows: Vec<(RawRecord, Enrichment)> = records
        .iter()
        .map(|r| (r.clone(), Enrichment::default()))
        .collect();
    write_snapshot(path, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_EXPORT: &str = "\
NAME,METAXML,GUID,FILESIZE,CONTENTLENGTH,SOURCECREATEDT,_merge
012345_SHOW_VM,,guid-1,1000,60,2022-01-01 12:00:00,both
012345_ONLY_LEFT,,guid-2,1000,60,2022-01-01 12:00:00,left_only
067890_SHOW_AVP,<xml></xml>,guid-3,2000,120,2022-01-02 12:00:00,both
";

    #[test]
    fn read_filters_unmatched_rows() {
        let records = read_records(SAMPLE_EXPORT.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].guid, "guid-1");
        assert_eq!(records[1].guid, "guid-3");
    }

    #[test]
    fn empty_metaxml_cell_reads_as_absent() {
        let records = read_records(SAMPLE_EXPORT.as_bytes()).unwrap();
        assert_eq!(records[0].metaxml, None);
        assert_eq!(records[1].metaxml.as_deref(), Some("<xml></xml>"));
    }

    #[test]
    fn missing_required_column_fails_the_read() {
        let headerless = "NAME,GUID\nfoo,bar\n";
        let err = read_records(headerless.as_bytes()).unwrap_err();
        assert!(matches!(err, TableError::Row { index: 0, .. }));
    }

    #[test]
    fn write_renders_null_markers_and_flag_column() {
        let records = read_records(SAMPLE_EXPORT.as_bytes()).unwrap();
        let rows: Vec<_> = records
            .into_iter()
            .map(|r| (r, Enrichment::default()))
            .collect();

        let mut out = Vec::new();
        write_records(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("NAME,METAXML,GUID"));
        assert!(header.ends_with(
            "TITLETYPE,CONTENT_TYPE,TRAFFIC_CODE,FRAMERATE,CODEC,V_WIDTH,V_HEIGHT,DURATION_MS,XML_CREATED"
        ));
        let first = lines.next().unwrap();
        assert!(first.contains("NULL"));
        assert!(first.ends_with(",0"));
    }
}
