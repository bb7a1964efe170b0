//! Data-integrity checks for the built-in almanac tables. Malformed data
//! is a defect caught here, never a runtime error path.

use chrono::{Datelike, NaiveDate};
use koyomi::catalog::catalog;

#[test]
fn supported_years_are_open_ended_and_ascending() {
    let years = catalog().supported_years();
    assert_eq!(years, vec![2026, 2027]);
    assert!(catalog().covers_year(2026));
    assert!(!catalog().covers_year(2025));
}

#[test]
fn coverage_spans_first_to_last_year() {
    let (from, to) = catalog().coverage().unwrap();
    assert_eq!(from, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    assert_eq!(to, NaiveDate::from_ymd_opt(2027, 12, 31).unwrap());
}

#[test]
fn retrograde_intervals_are_well_formed() {
    for iv in catalog().retrogrades() {
        assert!(iv.start <= iv.end, "{:?}", iv);
    }
}

#[test]
fn same_planet_intervals_never_overlap() {
    let ivs = catalog().retrogrades();
    for (i, a) in ivs.iter().enumerate() {
        for b in &ivs[i + 1..] {
            if a.planet == b.planet {
                assert!(
                    a.end < b.start || b.end < a.start,
                    "overlap: {:?} vs {:?}",
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn celestial_events_are_chronological() {
    let events = catalog().celestial_events();
    assert!(!events.is_empty());
    for pair in events.windows(2) {
        assert!(pair[0].date <= pair[1].date, "{:?} then {:?}", pair[0], pair[1]);
    }
}

#[test]
fn every_builtin_event_carries_a_time() {
    // The published ephemeris lists a time for every entry; a None here
    // means a typo in the data module.
    for ev in catalog().celestial_events() {
        assert!(ev.time.is_some(), "{:?}", ev);
    }
}

#[test]
fn lucky_day_tables_only_reference_covered_years() {
    for ev in catalog().celestial_events() {
        assert!(catalog().covers_year(ev.date.year()), "{:?}", ev);
    }
    for iv in catalog().retrogrades() {
        assert!(catalog().covers_year(iv.start.year()), "{:?}", iv);
    }
}

#[test]
fn known_dense_date_is_present() {
    let tags = catalog().lucky_days_for(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
    assert_eq!(tags.len(), 4);
}
