use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::koy;

#[test]
fn month_renders_grid_and_overlays() {
    koy()
        .args(["--plain", "month", "2026-02"])
        .assert()
        .success()
        .stdout(contains("2026年2月"))
        .stdout(contains("日").and(contains("土")))
        .stdout(contains("水星逆行"));
}

#[test]
fn month_without_retrogrades_has_no_overlay_section() {
    koy()
        .args(["--plain", "month", "2026-01"])
        .assert()
        .success()
        .stdout(contains("2026年1月"))
        .stdout(contains("惑星逆行期間").not());
}

#[test]
fn month_no_overlays_flag_hides_bars() {
    koy()
        .args(["--plain", "month", "2026-02", "--no-overlays"])
        .assert()
        .success()
        .stdout(contains("惑星逆行期間").not());
}

#[test]
fn month_outside_coverage_renders_with_warning() {
    koy()
        .args(["--plain", "month", "2031-05"])
        .assert()
        .success()
        .stdout(contains("2031年5月"));
}

#[test]
fn month_rejects_malformed_period() {
    koy()
        .args(["--plain", "month", "2026-15"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn day_detail_lists_all_annotations() {
    koy()
        .args(["--plain", "day", "2026-03-05"])
        .assert()
        .success()
        .stdout(contains("仏滅")) // rokuyo: 63 days after the epoch, 63 mod 6 = 3
        .stdout(contains("天赦日"))
        .stdout(contains("一粒万倍日"))
        .stdout(contains("寅の日"))
        .stdout(contains("大安"))
        .stdout(contains("水星逆行"));
}

#[test]
fn day_with_moon_phase_shows_time() {
    koy()
        .args(["--plain", "day", "2026-01-03"])
        .assert()
        .success()
        .stdout(contains("満月"))
        .stdout(contains("19:03"));
}

#[test]
fn day_rejects_malformed_date() {
    koy()
        .args(["--plain", "day", "2026-02-30"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn next_finds_the_first_tensha() {
    koy()
        .args(["--plain", "next", "--tag", "tensha", "--from", "2026-01-01"])
        .assert()
        .success()
        .stdout(contains("2026-03-05"));
}

#[test]
fn next_with_count_lists_several() {
    koy()
        .args([
            "--plain", "next", "--tag", "tensha", "--from", "2026-01-01", "--count", "3",
        ])
        .assert()
        .success()
        .stdout(contains("2026-03-05"))
        .stdout(contains("2026-05-02"))
        .stdout(contains("2026-05-04"));
}

#[test]
fn next_rejects_unknown_tag() {
    koy()
        .args(["--plain", "next", "--tag", "no-such-tag"])
        .assert()
        .failure()
        .stderr(contains("Unknown lucky-day tag"));
}

#[test]
fn legend_lists_every_tag_kind() {
    koy()
        .args(["--plain", "legend"])
        .assert()
        .success()
        .stdout(contains("一粒万倍日"))
        .stdout(contains("不成就日"))
        .stdout(contains("六曜"))
        .stdout(contains("新月"))
        .stdout(contains("金星逆行"));
}
