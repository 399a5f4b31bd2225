//! Cleaner -> Resolver -> Classifier -> roster enrichment, in one call.

use crate::core::classifier::{ShiftRules, classify_punch};
use crate::core::cleaner::clean;
use crate::core::resolver::resolve;
use crate::core::roster::Roster;
use crate::errors::AppResult;
use crate::models::daily::DailyAttendance;
use crate::models::location::{LocationConvention, LocationMode};
use crate::models::record::{Discard, RawTable};
use crate::utils::formatting::{normalize_id, normalize_name};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    pub location: LocationConvention,
    pub rules: ShiftRules,
}

#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// Ordered by (normalized id, upper-cased name, date).
    pub daily: Vec<DailyAttendance>,
    pub discards: Vec<Discard>,
    pub location_mode: LocationMode,
    /// Distinct normalized (id, name) pairs with no roster entry; zero without a roster.
    pub roster_misses: usize,
}

impl ProcessOutcome {
    /// Distinct dates, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.daily.iter().map(|d| d.date).collect();
        dates.sort();
        dates.dedup();
        dates
    }

    pub fn for_date(&self, date: NaiveDate) -> Vec<DailyAttendance> {
        self.daily
            .iter()
            .filter(|d| d.date == date)
            .cloned()
            .collect()
    }
}

pub fn process(
    table: &RawTable,
    roster: Option<&Roster>,
    options: &ProcessOptions,
) -> AppResult<ProcessOutcome> {
    let cleaned = clean(table)?;
    let resolution = resolve(&cleaned.records, &options.location);

    let mut missed: Vec<(String, String)> = Vec::new();
    let daily = resolution
        .punches
        .iter()
        .map(|p| {
            let assignment = classify_punch(p, &options.rules);
            let entry = roster.and_then(|r| r.lookup(&p.id, &p.name));
            let key = (normalize_id(&p.id), normalize_name(&p.name));
            if roster.is_some() && entry.is_none() && !missed.contains(&key) {
                missed.push(key);
            }

            DailyAttendance {
                id: p.id.clone(),
                name: p.name.clone(),
                date: p.date,
                check_in: p.check_in,
                check_out: p.check_out,
                shifts: assignment.flags,
                activity: entry.map(|e| e.activity.clone()).unwrap_or_default(),
                status: entry.map(|e| e.status.clone()).unwrap_or_default(),
            }
        })
        .collect();

    Ok(ProcessOutcome {
        daily,
        discards: cleaned.discards,
        location_mode: resolution.mode,
        roster_misses: missed.len(),
    })
}
