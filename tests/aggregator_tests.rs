use chrono::{NaiveDate, NaiveTime};
use rattendance::core::aggregator::{aggregate, aggregate_month, anchor_month};
use rattendance::core::dashboard::summarize;
use rattendance::core::pipeline::{ProcessOptions, process};
use rattendance::core::roster::Roster;
use rattendance::errors::AppError;
use rattendance::models::daily::DailyAttendance;
use rattendance::models::location::LocationMode;
use rattendance::models::record::RawTable;
use rattendance::models::roster::RosterEntry;
use rattendance::models::shift::{Shift, ShiftFlags};

fn day(id: &str, name: &str, date: (i32, u32, u32), shifts: Option<ShiftFlags>) -> DailyAttendance {
    DailyAttendance {
        id: id.to_string(),
        name: name.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        check_in: NaiveTime::from_hms_opt(7, 0, 0),
        check_out: NaiveTime::from_hms_opt(15, 0, 0),
        shifts,
        activity: String::new(),
        status: String::new(),
    }
}

fn entry(id: &str, name: &str, status: &str, activity: &str) -> RosterEntry {
    RosterEntry {
        id: id.to_string(),
        name: name.to_string(),
        status: status.to_string(),
        activity: activity.to_string(),
    }
}

fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    let mut t = RawTable::new(headers.iter().map(|h| h.to_string()).collect());
    for r in rows {
        t.push_row(r.iter().map(|c| c.to_string()).collect());
    }
    t
}

const DAY_SHIFT: Option<ShiftFlags> = Some(ShiftFlags {
    shift1: true,
    shift2: false,
    shift3: false,
});

#[test]
fn test_duplicate_days_collapse_in_monthly_total() {
    let daily = vec![
        day("1", "Budi", (2024, 4, 2), DAY_SHIFT),
        day("1", "Budi", (2024, 4, 5), DAY_SHIFT),
        day("1", "Budi", (2024, 4, 5), Some(ShiftFlags::only(Shift::Second))),
        day("1", "Budi", (2024, 4, 17), DAY_SHIFT),
    ];

    let recap = aggregate_month(&daily, None, 2024, 4).unwrap();
    assert_eq!(recap.days, (1..=30).collect::<Vec<u32>>());
    assert_eq!(recap.rows.len(), 1);

    let row = &recap.rows[0];
    assert_eq!(row.total_days_present, 3);
    assert_eq!(row.presence_by_day.len(), 30);
    for d in 1..=30 {
        assert_eq!(row.is_present(d), [2, 5, 17].contains(&d), "day {d}");
    }
}

#[test]
fn test_unassigned_or_empty_days_are_absent() {
    let daily = vec![
        day("1", "Budi", (2024, 4, 1), None),
        day("1", "Budi", (2024, 4, 2), Some(ShiftFlags::default())),
    ];

    let recap = aggregate_month(&daily, None, 2024, 4).unwrap();
    assert_eq!(recap.rows[0].total_days_present, 0);
}

#[test]
fn test_records_outside_the_month_are_ignored() {
    let daily = vec![
        day("1", "Budi", (2024, 3, 31), DAY_SHIFT),
        day("1", "Budi", (2024, 4, 1), DAY_SHIFT),
        day("2", "Siti", (2024, 5, 1), DAY_SHIFT),
    ];

    let recap = aggregate_month(&daily, None, 2024, 4).unwrap();
    assert_eq!(recap.rows.len(), 1);
    assert_eq!(recap.rows[0].total_days_present, 1);
    assert_eq!(recap.file_stamp(), "2024_04");
}

#[test]
fn test_aggregate_anchors_on_earliest_date() {
    let daily = vec![
        day("1", "Budi", (2024, 3, 3), DAY_SHIFT),
        day("1", "Budi", (2024, 2, 28), DAY_SHIFT),
    ];

    assert_eq!(anchor_month(&daily), Some((2024, 2)));
    let recap = aggregate(&daily, None).unwrap();
    assert_eq!((recap.year, recap.month), (2024, 2));
    assert_eq!(recap.days.len(), 29);
}

#[test]
fn test_aggregate_of_nothing_is_empty_data() {
    assert!(matches!(
        aggregate(&[], None),
        Err(AppError::EmptyData { .. })
    ));
}

#[test]
fn test_rows_sorted_by_name_then_id() {
    let daily = vec![
        day("3", "siti", (2024, 4, 1), DAY_SHIFT),
        day("2", "Andi", (2024, 4, 1), DAY_SHIFT),
        day("1", "Andi", (2024, 4, 1), DAY_SHIFT),
    ];

    let recap = aggregate_month(&daily, None, 2024, 4).unwrap();
    let order: Vec<(&str, &str)> = recap
        .rows
        .iter()
        .map(|r| (r.id.as_str(), r.name.as_str()))
        .collect();
    assert_eq!(order, vec![("1", "Andi"), ("2", "Andi"), ("3", "siti")]);
}

#[test]
fn test_roster_join_falls_back_to_name() {
    let roster = Roster::new(vec![
        entry("1001", "Budi Santoso", "PKWT", "Cleaning"),
        entry("1002", "Siti Aminah", "PKWTT", "Security"),
    ]);
    let daily = vec![
        day("9999", "  budi santoso ", (2024, 4, 1), DAY_SHIFT),
        day("1002.0", "S. Aminah", (2024, 4, 1), DAY_SHIFT),
        day("7", "Unknown", (2024, 4, 1), DAY_SHIFT),
    ];

    let recap = aggregate_month(&daily, Some(&roster), 2024, 4).unwrap();
    let by_id = |id: &str| recap.rows.iter().find(|r| r.id == id).unwrap();

    assert_eq!(by_id("9999").status, "PKWT");
    assert_eq!(by_id("9999").activity, "Cleaning");
    assert_eq!(by_id("1002").activity, "Security");
    assert_eq!(by_id("7").status, "");
    assert_eq!(recap.roster_misses, 1);
}

#[test]
fn test_roster_from_table_normalizes_headers_and_ids() {
    let t = table(
        &[" nip ", "Nama", "Status", "Unit"],
        &[
            &["1001.0", " Budi ", "PKWT", "Cleaning"],
            &["1001", "Budi Dua", "X", "Y"],
            &["", "", "", ""],
        ],
    );

    let roster = Roster::from_table(&t).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.entries()[0].id, "1001");
    assert_eq!(roster.entries()[0].name, "Budi");

    // first occurrence wins
    assert_eq!(roster.lookup("1001", "").unwrap().activity, "Cleaning");
    assert_eq!(roster.lookup("", "budi dua").unwrap().status, "X");
    assert!(roster.lookup("5", "nobody").is_none());
}

#[test]
fn test_roster_without_name_column_is_rejected() {
    let t = table(&["NIP", "STATUS"], &[&["1", "PKWT"]]);
    let err = Roster::from_table(&t).unwrap_err();
    assert!(matches!(err, AppError::RosterFormat(_)));
    assert!(err.to_string().contains("'NAMA' or 'NAME'"));
}

#[test]
fn test_roster_accepts_english_name_header() {
    let t = table(&["ID", "Name", "Status"], &[&["1", "Budi", "PKWT"]]);
    let roster = Roster::from_table(&t).unwrap();
    assert_eq!(roster.lookup("1", "").unwrap().name, "Budi");
}

#[test]
fn test_process_runs_the_whole_chain() {
    let t = table(
        &["No.ID", "Nama", "Tgl/Waktu", "Lokasi ID"],
        &[
            &["1001", "Budi Santoso", "01/04/2024 07:02", "2"],
            &["1001", "Budi Santoso", "01/04/2024 15:05", "1"],
            &["1002", "Siti Aminah", "01/04/2024 22:55", "2"],
            &["1003", "Andi", "??", "2"],
        ],
    );
    let roster = Roster::new(vec![entry("1001", "Budi Santoso", "PKWT", "Cleaning")]);

    let outcome = process(&t, Some(&roster), &ProcessOptions::default()).unwrap();
    assert_eq!(outcome.location_mode, LocationMode::Gated);
    assert_eq!(outcome.discards.len(), 1);
    assert_eq!(outcome.roster_misses, 1);
    assert_eq!(outcome.daily.len(), 2);

    let budi = &outcome.daily[0];
    assert_eq!(budi.activity, "Cleaning");
    assert_eq!(budi.shifts, DAY_SHIFT);

    // entry only: the shift length is assumed
    let siti = &outcome.daily[1];
    assert_eq!(siti.check_out, None);
    assert_eq!(siti.shifts, Some(ShiftFlags::only(Shift::Third)));
    assert_eq!(siti.status, "");

    assert_eq!(
        outcome.dates(),
        vec![NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()]
    );
}

#[test]
fn test_id_and_case_variants_fold_into_one_row() {
    let t = table(
        &["ID", "Nama", "Tanggal_Waktu"],
        &[
            &["7", "Budi", "05/03/2024 07:00"],
            &["7", "BUDI", "06/03/2024 07:00"],
            &["8.0", "Sari", "05/03/2024 07:00"],
            &["8", "Sari", "06/03/2024 07:00"],
        ],
    );
    let roster = Roster::new(vec![entry("7", "Budi", "PKWT", "Cleaning")]);

    let outcome = process(&t, Some(&roster), &ProcessOptions::default()).unwrap();
    assert_eq!(outcome.location_mode, LocationMode::Ambiguous);
    assert_eq!(outcome.roster_misses, 1);

    let recap = aggregate(&outcome.daily, Some(&roster)).unwrap();
    let rows: Vec<(&str, &str, u32)> = recap
        .rows
        .iter()
        .map(|r| (r.id.as_str(), r.name.as_str(), r.total_days_present))
        .collect();
    assert_eq!(rows, vec![("7", "Budi", 2), ("8", "Sari", 2)]);
    assert_eq!(recap.rows[0].activity, "Cleaning");
    assert_eq!(recap.roster_misses, 1);
}

#[test]
fn test_dashboard_counts() {
    let mut daily = vec![
        day("1", "Budi", (2024, 4, 1), DAY_SHIFT),
        day("1", "Budi", (2024, 4, 2), DAY_SHIFT),
        day("2", "Siti", (2024, 4, 2), Some(ShiftFlags::only(Shift::Third))),
        day("3", "Andi", (2024, 4, 2), DAY_SHIFT),
    ];
    daily[0].activity = "Cleaning".into();
    daily[1].activity = "Cleaning".into();
    daily[3].activity = "Cleaning".into();

    let roster = Roster::new(vec![
        entry("1", "Budi", "PKWT", "Cleaning"),
        entry("2", "Siti", "PKWT", "Security"),
        entry("3", "Andi", "PKWTT", "Cleaning"),
    ]);
    let recap = aggregate_month(&daily, Some(&roster), 2024, 4).unwrap();
    let summary = summarize(&daily, &recap);

    assert_eq!(summary.month, "April 2024");

    let dates: Vec<(&str, usize)> = summary
        .headcount_by_date
        .iter()
        .map(|c| (c.label.as_str(), c.count))
        .collect();
    assert_eq!(dates, vec![("2024-04-01", 1), ("2024-04-02", 3)]);

    assert_eq!(summary.headcount_by_activity[0].label, "Cleaning");
    assert_eq!(summary.headcount_by_activity[0].count, 2);
    assert_eq!(summary.headcount_by_activity[1].label, "-");

    assert_eq!(summary.headcount_by_status[0].label, "PKWTT");
    assert_eq!(summary.headcount_by_status[0].count, 1);
    assert_eq!(summary.headcount_by_status[1].count, 2);

    let shifts: Vec<usize> = summary.shift_totals.iter().map(|c| c.count).collect();
    assert_eq!(shifts, vec![3, 0, 1]);
}
