use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, setup_test_db, sl, temp_out};

#[test]
fn test_export_arrivals_csv() {
    let db_path = setup_test_db("export_arrivals_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_arrivals_csv", "csv");

    sl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--arrivals",
    ])
    .assert()
    .success()
    .stdout(contains("Arrival export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("date,staff,arrival_time,notes"));
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("Jane Doe"));
    assert!(content.contains("08:45"));
}

#[test]
fn test_export_teaching_csv_includes_hours() {
    let db_path = setup_test_db("export_teaching_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_teaching_csv", "csv");

    sl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--teaching",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("date,staff,class,start,end,hours,notes"));
    assert!(content.contains("Algebra"));
    assert!(content.contains("1.50"));
}

#[test]
fn test_export_arrivals_json() {
    let db_path = setup_test_db("export_arrivals_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_arrivals_json", "json");

    sl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--arrivals",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"staff_name\": \"Jane Doe\""));
    assert!(content.contains("2025-09-01"));
}

#[test]
fn test_export_respects_date_range() {
    let db_path = setup_test_db("export_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_range", "csv");

    sl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--arrivals",
        "--from",
        "2025-09-10",
        "--to",
        "2025-09-30",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-15"));
    assert!(!content.contains("2025-09-01"));
}

#[test]
fn test_export_requires_a_selection_flag() {
    let db_path = setup_test_db("export_no_flag");
    init_db_with_data(&db_path);

    let out = temp_out("export_no_flag", "csv");

    sl().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("choose what to export"));
}

#[test]
fn test_export_arrivals_and_teaching_conflict() {
    let db_path = setup_test_db("export_conflict");
    init_db_with_data(&db_path);

    let out = temp_out("export_conflict", "csv");

    sl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--arrivals",
        "--teaching",
    ])
    .assert()
    .failure();
}
