use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::fmt;

/// Raw delimited table as read from an attendance export or a roster file.
/// Header names are kept verbatim (untrimmed); every row has one cell per
/// header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// A single clock scan that survived cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub name: String,
    pub id: String,
    pub timestamp: NaiveDateTime,
    pub location_code: Option<i64>,
}

impl AttendanceRecord {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }
}

/// Why a raw row was dropped while cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DiscardReason {
    MissingName,
    UnparseableTimestamp(String),
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscardReason::MissingName => write!(f, "missing name"),
            DiscardReason::UnparseableTimestamp(raw) => {
                write!(f, "unparseable timestamp '{raw}'")
            }
        }
    }
}

/// A dropped raw row. `row` is 1-based and does not count the header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discard {
    pub row: usize,
    pub reason: DiscardReason,
}
