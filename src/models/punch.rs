use chrono::{NaiveDate, NaiveTime};

/// Resolved check-in/check-out pair for one person on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPunch {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
}
