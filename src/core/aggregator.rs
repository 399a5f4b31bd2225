//! Folds classified days into a person x day-of-month presence matrix.

use crate::core::roster::Roster;
use crate::errors::{AppError, AppResult};
use crate::models::daily::DailyAttendance;
use crate::models::presence::MonthlyPresenceRow;
use crate::utils::date::{all_days_of_month, month_label};
use crate::utils::formatting::{normalize_id, normalize_name};
use chrono::Datelike;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct MonthlyRecap {
    pub year: i32,
    pub month: u32,
    /// Every day of the month, ascending.
    pub days: Vec<u32>,
    /// Sorted by name, then id.
    pub rows: Vec<MonthlyPresenceRow>,
    /// People with no roster entry (only counted when a roster was given).
    pub roster_misses: usize,
}

impl MonthlyRecap {
    /// `YYYY_MM`, used in default file names.
    pub fn file_stamp(&self) -> String {
        format!("{:04}_{:02}", self.year, self.month)
    }

    pub fn title(&self) -> String {
        month_label(self.year, self.month)
    }
}

/// Month anchored on the earliest date in the data.
pub fn anchor_month(daily: &[DailyAttendance]) -> Option<(i32, u32)> {
    daily
        .iter()
        .map(|d| d.date)
        .min()
        .map(|d| (d.year(), d.month()))
}

/// Aggregate the month of the earliest record.
pub fn aggregate(daily: &[DailyAttendance], roster: Option<&Roster>) -> AppResult<MonthlyRecap> {
    let (year, month) = anchor_month(daily).ok_or(AppError::EmptyData { discarded: 0 })?;
    aggregate_month(daily, roster, year, month)
}

/// Aggregate one calendar month. Records of other months are ignored.
pub fn aggregate_month(
    daily: &[DailyAttendance],
    roster: Option<&Roster>,
    year: i32,
    month: u32,
) -> AppResult<MonthlyRecap> {
    let days: Vec<u32> = all_days_of_month(year, month)
        .ok_or_else(|| AppError::InvalidMonth(format!("{year:04}-{month:02}")))?
        .iter()
        .map(|d| d.day())
        .collect();

    // Keyed on normalized (id, name); the value keeps the first spelling seen.
    let mut people: BTreeMap<(String, String), (String, BTreeMap<u32, bool>)> = BTreeMap::new();

    for d in daily
        .iter()
        .filter(|d| d.date.year() == year && d.date.month() == month)
    {
        let (_, presence) = people
            .entry((normalize_id(&d.id), normalize_name(&d.name)))
            .or_insert_with(|| (d.name.clone(), days.iter().map(|day| (*day, false)).collect()));
        if d.is_present() {
            presence.insert(d.date.day(), true);
        }
    }

    let mut roster_misses = 0;
    let mut rows: Vec<MonthlyPresenceRow> = people
        .into_iter()
        .map(|((id, _), (name, presence_by_day))| {
            let entry = roster.and_then(|r| r.lookup(&id, &name));
            if roster.is_some() && entry.is_none() {
                roster_misses += 1;
            }
            let total_days_present = presence_by_day.values().filter(|p| **p).count() as u32;

            MonthlyPresenceRow {
                activity: entry.map(|e| e.activity.clone()).unwrap_or_default(),
                status: entry.map(|e| e.status.clone()).unwrap_or_default(),
                id,
                name,
                presence_by_day,
                total_days_present,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        normalize_name(&a.name)
            .cmp(&normalize_name(&b.name))
            .then_with(|| a.id.cmp(&b.id))
            .then_with(|| a.name.cmp(&b.name))
    });

    Ok(MonthlyRecap {
        year,
        month,
        days,
        rows,
        roster_misses,
    })
}
