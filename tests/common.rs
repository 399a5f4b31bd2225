#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp file and return its path
pub fn write_input(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance_input.csv", name));
    fs::write(&path, content).expect("write input file");
    path.to_string_lossy().to_string()
}

/// Two workers over the first two days of April 2024, with gate codes.
/// The last row has a broken timestamp and is discarded.
pub const ATTENDANCE_CSV: &str = "\
No.ID;Nama;Tgl/Waktu;Lokasi ID
1001;Budi Santoso;01/04/2024 07:02;2
1001;Budi Santoso;01/04/2024 15:05;1
1002;Siti Aminah;01/04/2024 22:55;2
1002;Siti Aminah;02/04/2024 07:01;1
1001;Budi Santoso;02/04/2024 06:58;2
1001;Budi Santoso;02/04/2024 15:00;1
1003;Andi;kemarin;2
";

pub const ROSTER_CSV: &str = "\
NIP;NAMA;STATUS;KEGIATAN
1001;Budi Santoso;PKWT;Cleaning
1002;Siti Aminah;PKWTT;Security
";

/// Initialize DB (test mode) and store the sample roster as version 1
pub fn init_db_with_roster(name: &str) -> String {
    let db_path = setup_test_db(name);

    rat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let roster = write_input(&format!("{name}_roster"), ROSTER_CSV);
    rat()
        .args(["--db", &db_path, "roster", "import", "--file", &roster])
        .assert()
        .success();

    db_path
}
