// src/export/logic.rs

use crate::core::aggregator::{MonthlyRecap, aggregate, aggregate_month};
use crate::core::pipeline::ProcessOutcome;
use crate::core::roster::Roster;
use crate::errors::{AppError, AppResult};
use crate::export::bundle::{daily_pdf_name, write_daily_bundle};
use crate::export::csv::{write_recap_csv, write_records_csv};
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::DailyRecordExport;
use crate::export::pdf_export::daily_pdf_bytes;
use crate::export::xlsx::write_recap_xlsx;
use crate::export::{ExportFormat, ExportKind, notify_export_success};
use crate::models::daily::DailyAttendance;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::{Datelike, NaiveDate};
use std::fs;
use std::path::PathBuf;

/// Everything the user asked for on the `export` command line.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub kind: ExportKind,
    pub format: Option<ExportFormat>,
    /// Absolute output file, or an existing directory that receives the
    /// default file name.
    pub file: String,
    pub date: Option<NaiveDate>,
    pub month: Option<(i32, u32)>,
    pub force: bool,
}

/// Presentation settings shared by the exporters.
#[derive(Debug, Clone)]
pub struct ExportStyle<'a> {
    pub company: &'a str,
    pub marker: &'a str,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Run one export and return the path that was written.
    pub fn export(
        outcome: &ProcessOutcome,
        roster: Option<&Roster>,
        request: &ExportRequest,
        style: &ExportStyle<'_>,
    ) -> AppResult<PathBuf> {
        let format = resolve_format(request.kind, request.format)?;

        match request.kind {
            ExportKind::Daily => {
                let date = match request.date {
                    Some(d) => d,
                    None => *outcome
                        .dates()
                        .first()
                        .ok_or(AppError::EmptyData { discarded: 0 })?,
                };
                let records = outcome.for_date(date);
                if records.is_empty() {
                    return Err(AppError::NoRecordsForDate(date.format("%Y-%m-%d").to_string()));
                }

                let path = output_path(&request.file, &daily_pdf_name(date))?;
                ensure_writable(&path, request.force)?;
                fs::write(&path, daily_pdf_bytes(&records, date, style.company, style.marker))?;
                notify_export_success("Daily PDF", &path);
                Ok(path)
            }

            ExportKind::Bundle => {
                let dates: Vec<NaiveDate> = outcome
                    .dates()
                    .into_iter()
                    .filter(|d| in_month(*d, request.month))
                    .collect();
                if dates.is_empty() {
                    return Err(no_records_in(request.month));
                }

                let default_name = match request.month {
                    Some((y, m)) => format!("absen_harian_{y:04}_{m:02}.zip"),
                    None => "absen_harian.zip".to_string(),
                };
                let path = output_path(&request.file, &default_name)?;
                ensure_writable(&path, request.force)?;
                let written =
                    write_daily_bundle(&outcome.daily, &dates, &path, style.company, style.marker)?;
                notify_export_success(&format!("Daily bundle ({written} sheets)"), &path);
                Ok(path)
            }

            ExportKind::Recap => {
                let recap = build_recap(&outcome.daily, roster, request.month)?;
                if recap.rows.is_empty() {
                    warning(format!("No attendance recorded in {}.", recap.title()));
                }

                let default_name =
                    format!("rekap_absensi_{}.{}", recap.file_stamp(), format.as_str());
                let path = output_path(&request.file, &default_name)?;
                ensure_writable(&path, request.force)?;

                match format {
                    ExportFormat::Xlsx => write_recap_xlsx(&recap, &path, style.marker)?,
                    ExportFormat::Json => write_json(&recap.rows, &path)?,
                    _ => write_recap_csv(&recap, &path, style.marker)?,
                }
                notify_export_success(&format!("Recap {}", format.as_str().to_uppercase()), &path);
                Ok(path)
            }

            ExportKind::Records => {
                let records: Vec<DailyAttendance> = outcome
                    .daily
                    .iter()
                    .filter(|d| request.date.is_none_or(|date| d.date == date))
                    .filter(|d| in_month(d.date, request.month))
                    .cloned()
                    .collect();
                if records.is_empty() {
                    return Err(match request.date {
                        Some(d) => AppError::NoRecordsForDate(d.format("%Y-%m-%d").to_string()),
                        None => no_records_in(request.month),
                    });
                }

                let default_name = format!("absensi_harian.{}", format.as_str());
                let path = output_path(&request.file, &default_name)?;
                ensure_writable(&path, request.force)?;

                match format {
                    ExportFormat::Json => {
                        let rows: Vec<DailyRecordExport> =
                            records.iter().map(DailyRecordExport::from).collect();
                        write_json(&rows, &path)?
                    }
                    _ => write_records_csv(&records, &path)?,
                }
                notify_export_success(
                    &format!("Records {}", format.as_str().to_uppercase()),
                    &path,
                );
                Ok(path)
            }
        }
    }
}

/// Pick the requested format, or the kind's default, rejecting
/// combinations the kind cannot produce.
pub(crate) fn resolve_format(
    kind: ExportKind,
    requested: Option<ExportFormat>,
) -> AppResult<ExportFormat> {
    let allowed = kind.formats();
    match requested {
        None => Ok(allowed[0]),
        Some(f) if allowed.contains(&f) => Ok(f),
        Some(f) => Err(AppError::Export(format!(
            "'{}' export cannot be written as {} (allowed: {})",
            kind.as_str(),
            f.as_str(),
            allowed
                .iter()
                .map(|f| f.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

/// Absolute output path; an existing directory gets `default_name` appended.
pub(crate) fn output_path(file: &str, default_name: &str) -> AppResult<PathBuf> {
    let path = expand_tilde(file);

    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {file}"
        )));
    }

    if path.is_dir() {
        Ok(path.join(default_name))
    } else {
        Ok(path)
    }
}

fn in_month(date: NaiveDate, month: Option<(i32, u32)>) -> bool {
    month.is_none_or(|(y, m)| date.year() == y && date.month() == m)
}

fn no_records_in(month: Option<(i32, u32)>) -> AppError {
    match month {
        Some((y, m)) => AppError::Export(format!("no attendance records in {y:04}-{m:02}")),
        None => AppError::EmptyData { discarded: 0 },
    }
}

fn build_recap(
    daily: &[DailyAttendance],
    roster: Option<&Roster>,
    month: Option<(i32, u32)>,
) -> AppResult<MonthlyRecap> {
    match month {
        Some((y, m)) => aggregate_month(daily, roster, y, m),
        None => aggregate(daily, roster),
    }
}
