use chrono::{NaiveDate, NaiveTime};
use rattendance::core::resolver::{detect_mode, resolve};
use rattendance::models::location::{LocationConvention, LocationMode};
use rattendance::models::record::AttendanceRecord;

fn scan(id: &str, name: &str, ts: &str, code: Option<i64>) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_string(),
        name: name.to_string(),
        timestamp: chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M").unwrap(),
        location_code: code,
    }
}

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

#[test]
fn test_gated_mode_uses_earliest_entry_and_latest_exit() {
    let records = vec![
        scan("1", "Budi", "2024-04-01 08:10", Some(2)),
        scan("1", "Budi", "2024-04-01 15:50", Some(1)),
        scan("1", "Budi", "2024-04-01 07:55", Some(2)),
        scan("1", "Budi", "2024-04-01 16:05", Some(1)),
    ];

    let res = resolve(&records, &LocationConvention::default());
    assert_eq!(res.mode, LocationMode::Gated);
    assert_eq!(res.punches.len(), 1);
    assert_eq!(res.punches[0].check_in, Some(t("07:55")));
    assert_eq!(res.punches[0].check_out, Some(t("16:05")));
}

#[test]
fn test_gated_mode_keeps_missing_side_empty() {
    let records = vec![
        scan("1", "Budi", "2024-04-01 06:30", Some(1)),
        scan("2", "Siti", "2024-04-01 09:00", Some(7)),
    ];

    let res = resolve(&records, &LocationConvention::default());
    assert_eq!(res.punches.len(), 2);

    assert_eq!(res.punches[0].check_in, None);
    assert_eq!(res.punches[0].check_out, Some(t("06:30")));

    // unknown gate code: the day exists but has no usable scan
    assert_eq!(res.punches[1].name, "Siti");
    assert_eq!(res.punches[1].check_in, None);
    assert_eq!(res.punches[1].check_out, None);
}

#[test]
fn test_ambiguous_mode_uses_min_and_max_of_all_scans() {
    let records = vec![
        scan("1", "Budi", "2024-04-01 15:02", None),
        scan("1", "Budi", "2024-04-01 07:01", None),
        scan("1", "Budi", "2024-04-01 12:00", None),
    ];

    assert_eq!(
        detect_mode(&records, &LocationConvention::default()),
        LocationMode::Ambiguous
    );

    let res = resolve(&records, &LocationConvention::default());
    assert!(res.mode.is_ambiguous());
    assert_eq!(res.punches[0].check_in, Some(t("07:01")));
    assert_eq!(res.punches[0].check_out, Some(t("15:02")));
}

#[test]
fn test_single_scan_in_ambiguous_mode_fills_both_sides() {
    let records = vec![scan("9", "Andi", "2024-04-03 06:45", None)];

    let res = resolve(&records, &LocationConvention::default());
    assert_eq!(res.punches[0].check_in, Some(t("06:45")));
    assert_eq!(res.punches[0].check_out, Some(t("06:45")));
}

#[test]
fn test_groups_by_person_and_calendar_date() {
    let records = vec![
        scan("2", "Siti", "2024-04-02 07:00", Some(2)),
        scan("1", "Budi", "2024-04-02 07:00", Some(2)),
        scan("1", "Budi", "2024-04-01 07:00", Some(2)),
        scan("1", "Budi Santoso", "2024-04-01 07:00", Some(2)),
    ];

    let res = resolve(&records, &LocationConvention::default());
    let keys: Vec<(&str, &str, NaiveDate)> = res
        .punches
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str(), p.date))
        .collect();

    let d = |day| NaiveDate::from_ymd_opt(2024, 4, day).unwrap();
    assert_eq!(
        keys,
        vec![
            ("1", "Budi", d(1)),
            ("1", "Budi", d(2)),
            ("1", "Budi Santoso", d(1)),
            ("2", "Siti", d(2)),
        ]
    );
}

#[test]
fn test_same_person_spelled_differently_is_one_punch() {
    let records = vec![
        scan("8.0", "Sari", "2024-03-05 07:00", None),
        scan("8", " SARI ", "2024-03-05 15:00", None),
    ];

    let res = resolve(&records, &LocationConvention::default());
    assert_eq!(res.punches.len(), 1);

    let p = &res.punches[0];
    assert_eq!(p.id, "8");
    assert_eq!(p.name, "Sari");
    assert_eq!(p.check_in, Some(t("07:00")));
    assert_eq!(p.check_out, Some(t("15:00")));
}

#[test]
fn test_custom_gate_codes() {
    let convention = LocationConvention {
        entry_code: 10,
        exit_code: 20,
    };
    let records = vec![
        scan("1", "Budi", "2024-04-01 07:00", Some(10)),
        scan("1", "Budi", "2024-04-01 15:00", Some(20)),
    ];

    let res = resolve(&records, &convention);
    assert_eq!(res.mode, LocationMode::Gated);
    assert_eq!(res.punches[0].check_in, Some(t("07:00")));
    assert_eq!(res.punches[0].check_out, Some(t("15:00")));
}
