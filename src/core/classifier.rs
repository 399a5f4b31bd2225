//! Shift classification of a resolved check-in/check-out pair.
//!
//! All arithmetic is done in whole minutes relative to midnight of the
//! attendance date, so the third window runs from 1380 to 1860.

use crate::models::punch::DailyPunch;
use crate::models::shift::{MINUTES_PER_DAY, Shift, ShiftAssignment, ShiftFlags};
use chrono::{NaiveDate, NaiveTime, Timelike};

/// Tunables of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRules {
    /// Length assumed for a shift when one endpoint is missing.
    pub shift_hours: i64,
    /// Minimum overlap with a window for the shift to count.
    pub tolerance_minutes: i64,
}

impl Default for ShiftRules {
    fn default() -> Self {
        Self {
            shift_hours: 8,
            tolerance_minutes: 60,
        }
    }
}

fn minute_of_day(t: NaiveTime) -> i64 {
    i64::from(t.num_seconds_from_midnight() / 60)
}

/// Resolved work interval, in minutes from midnight of the attendance date.
/// `start` may be negative when it was derived from an early check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkInterval {
    pub start: i64,
    pub end: i64,
}

impl WorkInterval {
    /// Fill a missing endpoint with the configured shift length and roll an
    /// end that precedes its start into the next day.
    pub fn resolve(
        check_in: Option<NaiveTime>,
        check_out: Option<NaiveTime>,
        rules: &ShiftRules,
    ) -> Option<Self> {
        let span = rules.shift_hours * 60;
        let (start, mut end) = match (check_in.map(minute_of_day), check_out.map(minute_of_day)) {
            (None, None) => return None,
            (Some(s), Some(e)) => (s, e),
            (Some(s), None) => (s, s + span),
            (None, Some(e)) => (e - span, e),
        };

        if end < start {
            end += MINUTES_PER_DAY;
        }

        Some(Self { start, end })
    }

    pub fn overlap_minutes(&self, shift: Shift) -> i64 {
        let latest_start = self.start.max(shift.start_minute());
        let earliest_end = self.end.min(shift.end_minute());
        (earliest_end - latest_start).max(0)
    }
}

/// Distance between two instants on a 24-hour clock face.
fn clock_distance(a: i64, b: i64) -> i64 {
    let d = (a - b).rem_euclid(MINUTES_PER_DAY);
    d.min(MINUTES_PER_DAY - d)
}

/// Shift whose window midpoint is closest to `minute`; the lowest shift
/// number wins a tie.
pub fn nearest_shift(minute: i64) -> Shift {
    Shift::ALL
        .into_iter()
        .min_by_key(|s| clock_distance(minute, s.midpoint_minute()))
        .unwrap_or(Shift::First)
}

/// One rule of the classification chain. A rule either settles the
/// classification or hands over to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationStrategy {
    /// Only an exit scan before 07:00: the tail of a night shift.
    EarlyExitNightShift,
    /// Every window overlapped by at least the tolerance.
    OverlapThreshold,
    /// The single window whose midpoint is closest to the interval start.
    NearestMidpoint,
}

pub const CLASSIFICATION_STRATEGIES: [ClassificationStrategy; 3] = [
    ClassificationStrategy::EarlyExitNightShift,
    ClassificationStrategy::OverlapThreshold,
    ClassificationStrategy::NearestMidpoint,
];

impl ClassificationStrategy {
    pub fn apply(
        &self,
        check_in: Option<NaiveTime>,
        check_out: Option<NaiveTime>,
        interval: &WorkInterval,
        rules: &ShiftRules,
    ) -> Option<ShiftFlags> {
        match self {
            ClassificationStrategy::EarlyExitNightShift => match (check_in, check_out) {
                (None, Some(out)) if minute_of_day(out) < Shift::First.start_minute() => {
                    Some(ShiftFlags::only(Shift::Third))
                }
                _ => None,
            },
            ClassificationStrategy::OverlapThreshold => {
                let mut flags = ShiftFlags::default();
                for shift in Shift::ALL {
                    flags.set(
                        shift,
                        interval.overlap_minutes(shift) >= rules.tolerance_minutes,
                    );
                }
                flags.any().then_some(flags)
            }
            ClassificationStrategy::NearestMidpoint => {
                Some(ShiftFlags::only(nearest_shift(interval.start)))
            }
        }
    }
}

/// Classify a pair, reporting which rule decided.
/// `None` when both endpoints are missing.
pub fn classify_with(
    check_in: Option<NaiveTime>,
    check_out: Option<NaiveTime>,
    rules: &ShiftRules,
) -> Option<(ShiftFlags, ClassificationStrategy)> {
    let interval = WorkInterval::resolve(check_in, check_out, rules)?;

    CLASSIFICATION_STRATEGIES.iter().find_map(|strategy| {
        strategy
            .apply(check_in, check_out, &interval, rules)
            .map(|flags| (flags, *strategy))
    })
}

pub fn classify(
    check_in: Option<NaiveTime>,
    check_out: Option<NaiveTime>,
    date: NaiveDate,
    rules: &ShiftRules,
) -> ShiftAssignment {
    ShiftAssignment {
        date,
        flags: classify_with(check_in, check_out, rules).map(|(flags, _)| flags),
    }
}

pub fn classify_punch(punch: &DailyPunch, rules: &ShiftRules) -> ShiftAssignment {
    classify(punch.check_in, punch.check_out, punch.date, rules)
}
