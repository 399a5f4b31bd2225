mod common;
use common::{ATTENDANCE_CSV, init_db_with_roster, rat, setup_test_db, temp_out, write_input};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_recap_csv() {
    let db_path = init_db_with_roster("export_recap_csv");
    let input = write_input("export_recap_csv", ATTENDANCE_CSV);
    let out = temp_out("export_recap_csv", "csv");

    rat()
        .args([
            "--db", &db_path, "export", "--file", &input, "--kind", "recap", "--format", "csv",
            "--out", &out,
        ])
        .assert()
        .success()
        .stdout(contains("Recap CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with('\u{feff}'));

    let lines: Vec<&str> = content.trim_start_matches('\u{feff}').lines().collect();
    assert!(lines[0].starts_with("NIP;Nama;Kegiatan;Status;1;2;3;"));
    assert!(lines[0].ends_with(";29;30;Total"));
    assert_eq!(lines.len(), 3);

    assert!(lines[1].starts_with("1001;Budi Santoso;Cleaning;PKWT;v;v;;"));
    assert!(lines[1].ends_with(";2"));
    assert!(lines[2].starts_with("1002;Siti Aminah;Security;PKWTT;v;v;"));
}

#[test]
fn test_export_recap_into_directory_uses_default_name() {
    let db_path = init_db_with_roster("export_recap_dir");
    let input = write_input("export_recap_dir", ATTENDANCE_CSV);

    let dir = std::env::temp_dir().join("export_recap_dir_out");
    fs::create_dir_all(&dir).unwrap();
    let expected = dir.join("rekap_absensi_2024_04.json");
    fs::remove_file(&expected).ok();

    rat()
        .args([
            "--db",
            &db_path,
            "export",
            "--file",
            &input,
            "--kind",
            "recap",
            "--format",
            "json",
            "--out",
            &dir.to_string_lossy(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&expected).expect("read exported json");
    assert!(content.contains("\"total_days_present\": 2"));
    assert!(content.contains("\"activity\": \"Security\""));
}

#[test]
fn test_export_recap_xlsx_for_explicit_month() {
    let db_path = init_db_with_roster("export_recap_xlsx");
    let input = write_input("export_recap_xlsx", ATTENDANCE_CSV);
    let out = temp_out("export_recap_xlsx", "xlsx");

    rat()
        .args([
            "--db", &db_path, "export", "--file", &input, "--kind", "recap", "--format", "xlsx",
            "--month", "2024-04", "--out", &out,
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_daily_pdf() {
    let db_path = init_db_with_roster("export_daily_pdf");
    let input = write_input("export_daily_pdf", ATTENDANCE_CSV);
    let out = temp_out("export_daily_pdf", "pdf");

    rat()
        .args([
            "--db", &db_path, "export", "--file", &input, "--kind", "daily", "--date",
            "2024-04-02", "--out", &out,
        ])
        .assert()
        .success()
        .stdout(contains("Daily PDF export completed"));

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_daily_for_missing_date_fails() {
    let db_path = setup_test_db("export_daily_missing");
    let input = write_input("export_daily_missing", ATTENDANCE_CSV);
    let out = temp_out("export_daily_missing", "pdf");

    rat()
        .args([
            "--db", &db_path, "export", "--file", &input, "--kind", "daily", "--date",
            "2024-04-09", "--out", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("No attendance records found for date 2024-04-09"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_bundle_zip_has_one_sheet_per_date() {
    let db_path = init_db_with_roster("export_bundle");
    let input = write_input("export_bundle", ATTENDANCE_CSV);
    let out = temp_out("export_bundle", "zip");

    rat()
        .args([
            "--db", &db_path, "export", "--file", &input, "--kind", "bundle", "--out", &out,
        ])
        .assert()
        .success()
        .stdout(contains("2 sheets"));

    let file = fs::File::open(&out).expect("open zip");
    let mut archive = zip::ZipArchive::new(file).expect("read zip");
    assert_eq!(archive.len(), 2);
    assert!(archive.by_name("absen_2024-04-01.pdf").is_ok());
    assert!(archive.by_name("absen_2024-04-02.pdf").is_ok());
}

#[test]
fn test_export_records_json_for_one_date() {
    let db_path = init_db_with_roster("export_records_json");
    let input = write_input("export_records_json", ATTENDANCE_CSV);
    let out = temp_out("export_records_json", "json");

    rat()
        .args([
            "--db", &db_path, "export", "--file", &input, "--kind", "records", "--format",
            "json", "--date", "2024-04-01", "--out", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read records json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "1001");
    assert_eq!(rows[0]["check_in"], "07:02:00");
    assert_eq!(rows[0]["shift1"], true);
    assert_eq!(rows[1]["shift3"], true);
    assert_eq!(rows[1]["check_out"], "");
}

#[test]
fn test_export_records_csv() {
    let db_path = init_db_with_roster("export_records_csv");
    let input = write_input("export_records_csv", ATTENDANCE_CSV);
    let out = temp_out("export_records_csv", "csv");

    rat()
        .args([
            "--db", &db_path, "export", "--file", &input, "--kind", "records", "--out", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read records csv");
    assert!(content.starts_with("id,name,date,check_in,check_out,shift1,shift2,shift3"));
    assert!(content.contains("1001,Budi Santoso,2024-04-02,06:58:00,15:00:00,true,false,false"));
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    let input = write_input("export_relative", ATTENDANCE_CSV);

    rat()
        .args([
            "--db", &db_path, "export", "--file", &input, "--out", "rekap.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_rejects_format_kind_mismatch() {
    let db_path = setup_test_db("export_mismatch");
    let input = write_input("export_mismatch", ATTENDANCE_CSV);
    let out = temp_out("export_mismatch", "csv");

    rat()
        .args([
            "--db", &db_path, "export", "--file", &input, "--kind", "daily", "--format", "csv",
            "--out", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("cannot be written as csv"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = init_db_with_roster("export_force");
    let input = write_input("export_force", ATTENDANCE_CSV);
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").unwrap();

    rat()
        .args([
            "--db", &db_path, "export", "--file", &input, "--kind", "recap", "--out", &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("NIP;Nama"));
}

#[test]
fn test_export_existing_file_declined() {
    let db_path = setup_test_db("export_declined");
    let input = write_input("export_declined", ATTENDANCE_CSV);
    let out = temp_out("export_declined", "csv");
    fs::write(&out, "old").unwrap();

    rat()
        .args([
            "--db", &db_path, "export", "--file", &input, "--kind", "recap", "--out", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "old");
}

#[test]
fn test_export_is_logged() {
    let db_path = init_db_with_roster("export_logged");
    let input = write_input("export_logged", ATTENDANCE_CSV);
    let out = temp_out("export_logged", "csv");

    rat()
        .args([
            "--db", &db_path, "export", "--file", &input, "--kind", "recap", "--out", &out,
        ])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Exported recap"));
}
