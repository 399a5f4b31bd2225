//! Timestamp normalization for clock exports.
//!
//! Scanner exports mix locale conventions: `.` used as a time separator
//! (`08.30`), `.` used as a date separator (`05.03.2024`), day-first and
//! year-first dates, optional seconds. A raw token is normalized once and
//! then handed to [`TIMESTAMP_STRATEGIES`] in order; the first strategy that
//! produces a value wins.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

/// One way of turning a normalized token into a date+time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampStrategy {
    /// Full `chrono` pattern with a time component.
    DateTime(&'static str),
    /// Date-only `chrono` pattern; the time is midnight.
    DateOnly(&'static str),
    /// Permissive day-before-month reading of the numeric fields.
    DayFirstFallback,
}

/// Ordered on purpose: `01/02/2024` must read as 1 February, so every
/// day-first pattern precedes its year-first sibling.
pub const TIMESTAMP_STRATEGIES: [TimestampStrategy; 15] = [
    TimestampStrategy::DateTime("%d/%m/%Y %H:%M:%S"),
    TimestampStrategy::DateTime("%d/%m/%Y %H:%M"),
    TimestampStrategy::DateTime("%d/%m/%y %H:%M:%S"),
    TimestampStrategy::DateTime("%d/%m/%y %H:%M"),
    TimestampStrategy::DateTime("%Y/%m/%d %H:%M:%S"),
    TimestampStrategy::DateTime("%Y/%m/%d %H:%M"),
    TimestampStrategy::DateTime("%Y-%m-%d %H:%M:%S"),
    TimestampStrategy::DateTime("%Y-%m-%d %H:%M"),
    TimestampStrategy::DateTime("%d-%m-%Y %H:%M:%S"),
    TimestampStrategy::DateTime("%d-%m-%Y %H:%M"),
    TimestampStrategy::DateOnly("%d/%m/%Y"),
    TimestampStrategy::DateOnly("%d-%m-%Y"),
    TimestampStrategy::DateOnly("%Y/%m/%d"),
    TimestampStrategy::DateOnly("%Y-%m-%d"),
    TimestampStrategy::DayFirstFallback,
];

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));
static MERIDIEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([ap])\.?m\.?(\W|$)").expect("valid regex"));
static WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("valid regex"));

impl TimestampStrategy {
    /// Try this strategy on an already normalized token.
    pub fn attempt(&self, token: &str) -> Option<NaiveDateTime> {
        match self {
            TimestampStrategy::DateTime(pattern) => NaiveDateTime::parse_from_str(token, pattern)
                .ok()
                .filter(|dt| plausible_year(pattern, dt.year())),
            TimestampStrategy::DateOnly(pattern) => NaiveDate::parse_from_str(token, pattern)
                .ok()
                .filter(|d| plausible_year(pattern, d.year()))
                .and_then(|d| d.and_hms_opt(0, 0, 0)),
            TimestampStrategy::DayFirstFallback => parse_day_first(token),
        }
    }

    /// The `chrono` pattern behind this strategy, if any.
    pub fn pattern(&self) -> Option<&'static str> {
        match self {
            TimestampStrategy::DateTime(p) | TimestampStrategy::DateOnly(p) => Some(p),
            TimestampStrategy::DayFirstFallback => None,
        }
    }
}

/// `chrono` reads `%Y` greedily, so `05/03/24` would otherwise match a
/// four-digit-year pattern as year 24.
fn plausible_year(pattern: &str, year: i32) -> bool {
    !pattern.contains("%Y") || (1000..=9999).contains(&year)
}

/// Apply the separator rewrites to a raw token.
///
/// Returns `None` for blank input.
pub fn normalize_token(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(match trimmed.split_once(' ') {
        Some((date_part, time_part)) => format!("{date_part} {}", time_part.replace('.', ":")),
        None => trimmed.replace('.', "-"),
    })
}

/// Parse a raw timestamp, reporting which strategy matched.
pub fn parse_timestamp_with(raw: &str) -> Option<(NaiveDateTime, TimestampStrategy)> {
    let token = normalize_token(raw)?;

    TIMESTAMP_STRATEGIES
        .iter()
        .find_map(|s| s.attempt(&token).map(|dt| (dt, *s)))
}

/// Parse a raw timestamp. `None` means the token is unparseable.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    parse_timestamp_with(raw).map(|(dt, _)| dt)
}

/// Render a value with one of the strategy patterns.
pub fn format_timestamp(dt: &NaiveDateTime, strategy: TimestampStrategy) -> Option<String> {
    match strategy {
        TimestampStrategy::DateTime(p) => Some(dt.format(p).to_string()),
        TimestampStrategy::DateOnly(p) => Some(dt.date().format(p).to_string()),
        TimestampStrategy::DayFirstFallback => None,
    }
}

// ---------------------------
// Permissive fallback
// ---------------------------

fn month_from_word(word: &str) -> Option<u32> {
    let w = word.to_ascii_lowercase();
    if w.len() < 3 {
        return None;
    }
    let month = match &w[..3] {
        "jan" => 1,
        "feb" | "peb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" | "mei" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" | "agu" | "agt" => 8,
        "sep" => 9,
        "oct" | "okt" => 10,
        "nov" => 11,
        "dec" | "des" => 12,
        _ => return None,
    };
    Some(month)
}

fn expand_year(field: &str) -> Option<i32> {
    let y: i32 = field.parse().ok()?;
    match field.len() {
        1 | 2 => Some(if y < 69 { 2000 + y } else { 1900 + y }),
        4 => Some(y),
        _ => None,
    }
}

/// Day-before-month reading of whatever numeric fields the token has.
///
/// Accepts any separators (`05.03.2024 08:30`, `2024-03-05T08:30:00`),
/// English or Indonesian month names and an AM/PM suffix. When the
/// day-first reading yields a month above 12 the fields are swapped.
fn parse_day_first(token: &str) -> Option<NaiveDateTime> {
    // A bare time has no date to group by.
    if token.split([' ', 'T']).next()?.contains(':') {
        return None;
    }

    let nums: Vec<&str> = DIGITS.find_iter(token).map(|m| m.as_str()).collect();
    let named_month = WORDS.find_iter(token).find_map(|m| month_from_word(m.as_str()));

    let (year, month, day, rest) = match named_month {
        Some(month) => {
            if nums.len() < 2 {
                return None;
            }
            let (a, b) = (nums[0], nums[1]);
            let (y, d) = if a.len() == 4 { (a, b) } else { (b, a) };
            (expand_year(y)?, month, d.parse::<u32>().ok()?, &nums[2..])
        }
        None => {
            if nums.len() < 3 {
                return None;
            }
            let (a, b, c) = (nums[0], nums[1], nums[2]);
            let (y, mut m, mut d) = if a.len() == 4 {
                (a, b.parse::<u32>().ok()?, c.parse::<u32>().ok()?)
            } else {
                (c, b.parse::<u32>().ok()?, a.parse::<u32>().ok()?)
            };
            if m > 12 && d <= 12 {
                std::mem::swap(&mut m, &mut d);
            }
            (expand_year(y)?, m, d, &nums[3..])
        }
    };

    let field = |i: usize| -> Option<u32> {
        match rest.get(i) {
            Some(v) => v.parse().ok(),
            None => Some(0),
        }
    };
    let mut hour = field(0)?;
    let minute = field(1)?;
    let second = field(2)?;

    if let Some(caps) = MERIDIEM.captures(token) {
        let pm = caps[1].eq_ignore_ascii_case("p");
        if pm && hour < 12 {
            hour += 12;
        } else if !pm && hour == 12 {
            hour = 0;
        }
    }

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}
