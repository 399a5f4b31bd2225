// src/export/bundle.rs

use crate::errors::AppResult;
use crate::export::pdf_export::daily_pdf_bytes;
use crate::models::daily::DailyAttendance;
use chrono::NaiveDate;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub(crate) fn daily_pdf_name(date: NaiveDate) -> String {
    format!("absen_{}.pdf", date.format("%Y-%m-%d"))
}

/// Pack one daily PDF per date into a ZIP archive. Returns the number of
/// sheets written.
pub(crate) fn write_daily_bundle(
    daily: &[DailyAttendance],
    dates: &[NaiveDate],
    path: &Path,
    company: &str,
    marker: &str,
) -> AppResult<usize> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);

    let mut written = 0;
    for date in dates {
        let records: Vec<DailyAttendance> =
            daily.iter().filter(|d| d.date == *date).cloned().collect();
        if records.is_empty() {
            continue;
        }

        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        zip.start_file(daily_pdf_name(*date), options)?;
        zip.write_all(&daily_pdf_bytes(&records, *date, company, marker))?;
        written += 1;
    }

    zip.finish()?;
    Ok(written)
}
