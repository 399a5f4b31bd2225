// src/export/pdf_export.rs

use crate::export::model::{DAILY_HEADERS, SUMMARY_HEADERS, daily_rows, summary_row};
use crate::export::pdf::PdfManager;
use crate::models::daily::DailyAttendance;
use crate::utils::date::hari;
use chrono::{Datelike, NaiveDate};

/// Title lines of a daily sheet.
pub(crate) fn daily_title(company: &str, date: NaiveDate) -> Vec<String> {
    vec![
        format!("ABSENSI {}", company.to_uppercase()),
        format!(
            "HARI {} - TANGGAL {}",
            hari(date.weekday()).to_uppercase(),
            date.format("%d %B %Y").to_string().to_uppercase()
        ),
    ]
}

/// Render the daily sheet of `date` into PDF bytes.
pub(crate) fn daily_pdf_bytes(
    records: &[DailyAttendance],
    date: NaiveDate,
    company: &str,
    marker: &str,
) -> Vec<u8> {
    let rows = daily_rows(records, marker);

    let mut pdf = PdfManager::new();
    pdf.write_report(
        &daily_title(company, date),
        &DAILY_HEADERS[..],
        &rows,
        Some((&SUMMARY_HEADERS[..], summary_row(records))),
    );
    pdf.finish()
}
