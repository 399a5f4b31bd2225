use crate::core::aggregator::MonthlyRecap;
use crate::errors::AppResult;
use crate::export::model::{DailyRecordExport, recap_headers, recap_rows};
use crate::models::daily::DailyAttendance;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Monthly recap as `;`-separated CSV with a UTF-8 BOM, so spreadsheet
/// tools pick the right encoding.
pub fn write_recap_csv(recap: &MonthlyRecap, path: &Path, marker: &str) -> AppResult<()> {
    let mut file = File::create(path)?;
    file.write_all("\u{feff}".as_bytes())?;

    let mut wtr = WriterBuilder::new().delimiter(b';').from_writer(file);
    wtr.write_record(recap_headers(recap))?;
    for row in recap_rows(recap, marker) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Per-day records, header included thanks to serde.
pub fn write_records_csv(records: &[DailyAttendance], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in records {
        wtr.serialize(DailyRecordExport::from(r))?;
    }
    wtr.flush()?;
    Ok(())
}
