//! Delimited-file reader for attendance exports and roster files.

use crate::errors::AppResult;
use crate::models::record::RawTable;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Read a delimited file into a [`RawTable`].
pub fn read_table(path: &Path, delimiter: u8) -> AppResult<RawTable> {
    let file = File::open(path)?;
    read_table_from(file, delimiter)
}

/// Read delimited text from any reader.
///
/// Rows may be ragged: short rows are padded with empty cells, extra cells
/// are dropped. Fully blank lines are skipped.
pub fn read_table_from<R: Read>(reader: R, delimiter: u8) -> AppResult<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches(UTF8_BOM).to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut table = RawTable::new(headers);

    for record in rdr.records() {
        let record = record?;
        if record.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        table.push_row(record.iter().map(str::to_string).collect());
    }

    Ok(table)
}
