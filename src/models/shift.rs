use chrono::NaiveDate;
use serde::Serialize;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// The three fixed shift windows, in local clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Shift {
    /// 07:00-15:00
    First,
    /// 15:00-23:00
    Second,
    /// 23:00-07:00 (next day)
    Third,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::First, Shift::Second, Shift::Third];

    /// Window start, in minutes from midnight of the attendance date.
    pub fn start_minute(&self) -> i64 {
        match self {
            Shift::First => 7 * 60,
            Shift::Second => 15 * 60,
            Shift::Third => 23 * 60,
        }
    }

    /// Window end, in minutes from midnight of the attendance date.
    /// The third shift ends on the following day.
    pub fn end_minute(&self) -> i64 {
        match self {
            Shift::First => 15 * 60,
            Shift::Second => 23 * 60,
            Shift::Third => MINUTES_PER_DAY + 7 * 60,
        }
    }

    pub fn midpoint_minute(&self) -> i64 {
        (self.start_minute() + self.end_minute()) / 2
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shift::First => "Shift 1",
            Shift::Second => "Shift 2",
            Shift::Third => "Shift 3",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShiftFlags {
    pub shift1: bool,
    pub shift2: bool,
    pub shift3: bool,
}

impl ShiftFlags {
    pub fn only(shift: Shift) -> Self {
        let mut flags = Self::default();
        flags.set(shift, true);
        flags
    }

    pub fn get(&self, shift: Shift) -> bool {
        match shift {
            Shift::First => self.shift1,
            Shift::Second => self.shift2,
            Shift::Third => self.shift3,
        }
    }

    pub fn set(&mut self, shift: Shift, value: bool) {
        match shift {
            Shift::First => self.shift1 = value,
            Shift::Second => self.shift2 = value,
            Shift::Third => self.shift3 = value,
        }
    }

    pub fn any(&self) -> bool {
        self.shift1 || self.shift2 || self.shift3
    }
}

/// Shift classification of one daily punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShiftAssignment {
    pub date: NaiveDate,
    /// `None` when neither check-in nor check-out is known.
    pub flags: Option<ShiftFlags>,
}
