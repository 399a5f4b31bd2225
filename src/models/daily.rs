use super::shift::ShiftFlags;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Combined per-person-per-day output: the resolved punch, its shift
/// classification and the roster fields joined onto it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyAttendance {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    /// `None` only when both check-in and check-out are missing.
    pub shifts: Option<ShiftFlags>,
    pub activity: String,
    pub status: String,
}

impl DailyAttendance {
    pub fn is_present(&self) -> bool {
        self.shifts.is_some_and(|s| s.any())
    }

    pub fn check_in_str(&self) -> String {
        self.check_in
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default()
    }

    pub fn check_out_str(&self) -> String {
        self.check_out
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default()
    }
}
