use chrono::NaiveDate;
use koyomi::catalog::catalog;
use koyomi::core::overlay::month_overlays;
use koyomi::models::retrograde::{Planet, RetrogradeInterval};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn iv(planet: Planet, start: NaiveDate, end: NaiveDate) -> RetrogradeInterval {
    RetrogradeInterval { planet, start, end }
}

#[test]
fn interval_entering_february_clips_to_month_end() {
    // mercury [2026-02-26, 2026-03-21] seen from February 2026 (28 days)
    let spans = month_overlays(2026, 2, catalog().retrogrades()).unwrap();
    assert_eq!(spans.len(), 1);

    let s = &spans[0];
    assert_eq!(s.interval.planet, Planet::Mercury);
    assert_eq!(s.effective_start, d(2026, 2, 26));
    assert_eq!(s.effective_end, d(2026, 2, 28));
    assert!((s.start_fraction - 25.0 / 28.0).abs() < 1e-12);
    assert!((s.width_fraction - 3.0 / 28.0).abs() < 1e-12);
}

#[test]
fn same_interval_seen_from_march_clips_the_other_side() {
    let spans = month_overlays(2026, 3, catalog().retrogrades()).unwrap();
    assert_eq!(spans.len(), 1);

    let s = &spans[0];
    assert_eq!(s.effective_start, d(2026, 3, 1));
    assert_eq!(s.effective_end, d(2026, 3, 21));
    assert!((s.start_fraction - 0.0).abs() < 1e-12);
    assert!((s.width_fraction - 21.0 / 31.0).abs() < 1e-12);
}

#[test]
fn months_without_retrogrades_have_no_spans() {
    assert!(month_overlays(2026, 1, catalog().retrogrades())
        .unwrap()
        .is_empty());
    assert!(month_overlays(2027, 12, catalog().retrogrades())
        .unwrap()
        .is_empty());
}

#[test]
fn concurrent_intervals_get_stable_lanes_in_catalog_order() {
    // Nov 2026: mercury (until 11/13) and venus (until 11/14) overlap.
    let spans = month_overlays(2026, 11, catalog().retrogrades()).unwrap();
    assert_eq!(spans.len(), 2);

    assert_eq!(spans[0].interval.planet, Planet::Mercury);
    assert_eq!(spans[0].lane, 0);
    assert_eq!(spans[1].interval.planet, Planet::Venus);
    assert_eq!(spans[1].lane, 1);
}

#[test]
fn interval_spanning_the_whole_month_covers_full_width() {
    let ivs = [iv(Planet::Venus, d(2026, 3, 10), d(2026, 6, 20))];
    let spans = month_overlays(2026, 4, &ivs).unwrap();
    assert_eq!(spans.len(), 1);
    assert!((spans[0].start_fraction - 0.0).abs() < 1e-12);
    assert!((spans[0].width_fraction - 1.0).abs() < 1e-12);
}

#[test]
fn single_day_interval_has_one_day_width() {
    let ivs = [iv(Planet::Mercury, d(2026, 5, 15), d(2026, 5, 15))];
    let spans = month_overlays(2026, 5, &ivs).unwrap();
    assert_eq!(spans.len(), 1);
    assert!((spans[0].start_fraction - 14.0 / 31.0).abs() < 1e-12);
    assert!((spans[0].width_fraction - 1.0 / 31.0).abs() < 1e-12);
}

#[test]
fn adjacent_months_do_not_leak() {
    let ivs = [iv(Planet::Mercury, d(2026, 5, 1), d(2026, 5, 31))];
    assert!(month_overlays(2026, 4, &ivs).unwrap().is_empty());
    assert!(month_overlays(2026, 6, &ivs).unwrap().is_empty());
}

#[test]
fn invalid_month_is_rejected() {
    assert!(month_overlays(2026, 13, catalog().retrogrades()).is_err());
}
