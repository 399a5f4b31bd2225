// src/export/model.rs

use crate::core::aggregator::MonthlyRecap;
use crate::models::daily::DailyAttendance;
use crate::models::shift::Shift;
use crate::utils::formatting::{mark, title_case};
use serde::Serialize;

/// Flat per-day record for CSV / JSON export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DailyRecordExport {
    pub id: String,
    pub name: String,
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub shift1: Option<bool>,
    pub shift2: Option<bool>,
    pub shift3: Option<bool>,
    pub activity: String,
    pub status: String,
}

impl From<&DailyAttendance> for DailyRecordExport {
    fn from(d: &DailyAttendance) -> Self {
        Self {
            id: d.id.clone(),
            name: d.name.clone(),
            date: d.date.format("%Y-%m-%d").to_string(),
            check_in: d.check_in_str(),
            check_out: d.check_out_str(),
            shift1: d.shifts.map(|s| s.shift1),
            shift2: d.shifts.map(|s| s.shift2),
            shift3: d.shifts.map(|s| s.shift3),
            activity: d.activity.clone(),
            status: d.status.clone(),
        }
    }
}

/// Header of the daily sheet (PDF and terminal listing).
pub(crate) const DAILY_HEADERS: [&str; 9] = [
    "NO",
    "NIP",
    "NAMA PEKERJA",
    "KEGIATAN",
    "SHIFT 1",
    "SHIFT 2",
    "SHIFT 3",
    "CEK IN",
    "CEK OUT",
];

pub(crate) const SUMMARY_HEADERS: [&str; 4] = ["Shift 1", "Shift 2", "Shift 3", "Total Pekerja"];

pub(crate) fn daily_rows(records: &[DailyAttendance], marker: &str) -> Vec<Vec<String>> {
    records
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let flags = d.shifts.unwrap_or_default();
            vec![
                (i + 1).to_string(),
                d.id.clone(),
                title_case(&d.name),
                d.activity.clone(),
                mark(flags.shift1, marker),
                mark(flags.shift2, marker),
                mark(flags.shift3, marker),
                d.check_in_str(),
                d.check_out_str(),
            ]
        })
        .collect()
}

/// Per-shift counts plus their sum.
pub(crate) fn shift_totals(records: &[DailyAttendance]) -> [usize; 4] {
    let mut totals = [0usize; 4];
    for (i, shift) in Shift::ALL.iter().enumerate() {
        totals[i] = records
            .iter()
            .filter(|d| d.shifts.is_some_and(|f| f.get(*shift)))
            .count();
    }
    totals[3] = totals[0] + totals[1] + totals[2];
    totals
}

pub(crate) fn summary_row(records: &[DailyAttendance]) -> Vec<String> {
    shift_totals(records).iter().map(|n| n.to_string()).collect()
}

/// `NIP, Nama, Kegiatan, Status, 1..N, Total`
pub(crate) fn recap_headers(recap: &MonthlyRecap) -> Vec<String> {
    let mut headers: Vec<String> = ["NIP", "Nama", "Kegiatan", "Status"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    headers.extend(recap.days.iter().map(|d| d.to_string()));
    headers.push("Total".to_string());
    headers
}

pub(crate) fn recap_rows(recap: &MonthlyRecap, marker: &str) -> Vec<Vec<String>> {
    recap
        .rows
        .iter()
        .map(|r| {
            let mut row = vec![
                r.id.clone(),
                title_case(&r.name),
                r.activity.clone(),
                r.status.clone(),
            ];
            row.extend(recap.days.iter().map(|d| mark(r.is_present(*d), marker)));
            row.push(r.total_days_present.to_string());
            row
        })
        .collect()
}
