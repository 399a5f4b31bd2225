//! Reduces repeated scans to one check-in/check-out pair per person per day.

use crate::models::location::{LocationConvention, LocationMode};
use crate::models::punch::DailyPunch;
use crate::models::record::AttendanceRecord;
use crate::models::scan_kind::ScanKind;
use crate::utils::formatting::{normalize_id, normalize_name};
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Resolution {
    /// Ordered by (normalized id, upper-cased name, date).
    pub punches: Vec<DailyPunch>,
    pub mode: LocationMode,
}

/// Gated as soon as one record carries the entry or the exit code.
pub fn detect_mode(records: &[AttendanceRecord], convention: &LocationConvention) -> LocationMode {
    let gated = records
        .iter()
        .filter_map(|r| r.location_code)
        .any(|code| convention.kind_of(code).is_some());

    if gated {
        LocationMode::Gated
    } else {
        LocationMode::Ambiguous
    }
}

#[derive(Default)]
struct Bounds {
    /// First spelling of the name seen for the group.
    name: String,
    check_in: Option<NaiveTime>,
    check_out: Option<NaiveTime>,
}

impl Bounds {
    fn entry(&mut self, t: NaiveTime) {
        self.check_in = Some(self.check_in.map_or(t, |cur| cur.min(t)));
    }

    fn exit(&mut self, t: NaiveTime) {
        self.check_out = Some(self.check_out.map_or(t, |cur| cur.max(t)));
    }
}

/// Group records by (id, name, date) and resolve each group. Ids lose a
/// trailing `.0` and names are compared upper-cased, so `8.0`/`8` and
/// `Budi`/`BUDI` fall into one group.
///
/// Gated mode: check-in is the earliest entry scan, check-out the latest
/// exit scan; scans with other codes only keep the group alive.
/// Ambiguous mode: every scan feeds both bounds.
pub fn resolve(records: &[AttendanceRecord], convention: &LocationConvention) -> Resolution {
    let mode = detect_mode(records, convention);
    let mut groups: BTreeMap<(String, String, NaiveDate), Bounds> = BTreeMap::new();

    for r in records {
        let bounds = groups
            .entry((normalize_id(&r.id), normalize_name(&r.name), r.date()))
            .or_insert_with(|| Bounds {
                name: r.name.clone(),
                ..Default::default()
            });
        let t = r.time();

        match mode {
            LocationMode::Ambiguous => {
                bounds.entry(t);
                bounds.exit(t);
            }
            LocationMode::Gated => match r.location_code.and_then(|c| convention.kind_of(c)) {
                Some(ScanKind::Entry) => bounds.entry(t),
                Some(ScanKind::Exit) => bounds.exit(t),
                None => {}
            },
        }
    }

    let punches = groups
        .into_iter()
        .map(|((id, _, date), b)| DailyPunch {
            id,
            name: b.name,
            date,
            check_in: b.check_in,
            check_out: b.check_out,
        })
        .collect();

    Resolution { punches, mode }
}
