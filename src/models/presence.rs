use serde::Serialize;
use std::collections::BTreeMap;

/// One person's presence across a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPresenceRow {
    pub id: String,
    pub name: String,
    pub activity: String,
    pub status: String,
    /// Every day of the month is present as a key.
    pub presence_by_day: BTreeMap<u32, bool>,
    pub total_days_present: u32,
}

impl MonthlyPresenceRow {
    pub fn is_present(&self, day: u32) -> bool {
        self.presence_by_day.get(&day).copied().unwrap_or(false)
    }
}
