//! Aggregate figures behind the monthly dashboard.

use crate::core::aggregator::MonthlyRecap;
use crate::models::daily::DailyAttendance;
use crate::models::shift::Shift;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub month: String,
    /// Distinct workers per date, ascending by date.
    pub headcount_by_date: Vec<CountRow>,
    /// Distinct workers per activity, largest first.
    pub headcount_by_activity: Vec<CountRow>,
    /// Distinct workers per roster status, smallest first.
    pub headcount_by_status: Vec<CountRow>,
    pub shift_totals: Vec<CountRow>,
}

fn label_or_dash(s: &str) -> String {
    if s.trim().is_empty() {
        "-".to_string()
    } else {
        s.to_string()
    }
}

fn count_distinct<'a, I>(pairs: I) -> Vec<CountRow>
where
    I: Iterator<Item = (String, &'a str)>,
{
    let mut groups: BTreeMap<String, BTreeSet<&'a str>> = BTreeMap::new();
    for (label, id) in pairs {
        groups.entry(label).or_default().insert(id);
    }
    groups
        .into_iter()
        .map(|(label, ids)| CountRow {
            label,
            count: ids.len(),
        })
        .collect()
}

pub fn summarize(daily: &[DailyAttendance], recap: &MonthlyRecap) -> DashboardSummary {
    let headcount_by_date = count_distinct(
        daily
            .iter()
            .map(|d| (d.date.format("%Y-%m-%d").to_string(), d.id.as_str())),
    );

    let mut headcount_by_activity =
        count_distinct(daily.iter().map(|d| (label_or_dash(&d.activity), d.id.as_str())));
    headcount_by_activity.sort_by(|a, b| b.count.cmp(&a.count));

    let mut headcount_by_status = count_distinct(
        recap
            .rows
            .iter()
            .map(|r| (label_or_dash(&r.status), r.id.as_str())),
    );
    headcount_by_status.sort_by(|a, b| a.count.cmp(&b.count));

    let shift_totals = Shift::ALL
        .iter()
        .map(|shift| CountRow {
            label: shift.label().to_string(),
            count: daily
                .iter()
                .filter(|d| d.shifts.is_some_and(|f| f.get(*shift)))
                .count(),
        })
        .collect();

    DashboardSummary {
        month: recap.title(),
        headcount_by_date,
        headcount_by_activity,
        headcount_by_status,
        shift_totals,
    }
}
