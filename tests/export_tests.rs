use predicates::str::contains;
use std::fs;

mod common;
use common::{koy, temp_out};

#[test]
fn export_march_2026_to_csv() {
    let out = temp_out("export_march_csv", "csv");

    koy()
        .args([
            "--plain", "export", "--format", "csv", "--file", &out, "--range", "2026-03",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with(
        "date,rokuyo,lucky_days,celestial_events,retrograde_planets"
    ));
    // Dense multi-tag day: rokuyo butsumetu, four tags, mercury retrograde.
    assert!(content.contains("2026-03-05,butsumetu,tensha|ichiryu-manbai|tori|taian,,mercury"));
    // Moon phase rows re-join the published time.
    assert!(content.contains("full-moon@20:38"));

    fs::remove_file(&out).ok();
}

#[test]
fn export_json_contains_flat_rows() {
    let out = temp_out("export_jan_json", "json");

    koy()
        .args([
            "--plain", "export", "--format", "json", "--file", &out, "--range", "2026-01",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("\"date\": \"2026-01-03\""));
    assert!(content.contains("full-moon@19:03"));

    fs::remove_file(&out).ok();
}

#[test]
fn export_all_includes_rokuyo_only_days() {
    let out = temp_out("export_all_days", "csv");

    koy()
        .args([
            "--plain", "export", "--format", "csv", "--file", &out, "--range", "2026-01",
            "--all",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    // Header plus every day of January.
    assert_eq!(content.lines().count(), 32);
    assert!(content.contains("2026-01-01,senkatsu,,,"));

    fs::remove_file(&out).ok();
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let out = temp_out("export_overwrite", "csv");

    koy()
        .args([
            "--plain", "export", "--format", "csv", "--file", &out, "--range", "2026-03",
        ])
        .assert()
        .success();

    koy()
        .args([
            "--plain", "export", "--format", "csv", "--file", &out, "--range", "2026-03",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    koy()
        .args([
            "--plain", "export", "--format", "csv", "--file", &out, "--range", "2026-03",
            "--force",
        ])
        .assert()
        .success();

    fs::remove_file(&out).ok();
}

#[test]
fn export_rejects_bad_range() {
    let out = temp_out("export_bad_range", "csv");

    koy()
        .args([
            "--plain", "export", "--format", "csv", "--file", &out, "--range", "03-2026",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn export_range_spanning_both_years() {
    let out = temp_out("export_span", "csv");

    koy()
        .args([
            "--plain",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2026-12:2027-01",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("2026-12-16"));
    assert!(content.contains("2027-01-03"));

    fs::remove_file(&out).ok();
}
