use chrono::NaiveDate;
use koyomi::catalog::{catalog, Catalog};
use koyomi::core::resolver;
use koyomi::models::{lucky_day::LuckyDay, retrograde::Planet, rokuyo::Rokuyo};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn rokuyo_epoch_is_senkatsu() {
    assert_eq!(resolver::rokuyo_for(d(2026, 1, 1)), Rokuyo::Senkatsu);
}

#[test]
fn rokuyo_advances_one_step_per_day() {
    assert_eq!(resolver::rokuyo_for(d(2026, 1, 2)), Rokuyo::Tomobiki);
    assert_eq!(resolver::rokuyo_for(d(2026, 1, 7)), Rokuyo::Senkatsu);

    // 31 days after the epoch: 31 mod 6 = 1
    assert_eq!(resolver::rokuyo_for(d(2026, 2, 1)), Rokuyo::Tomobiki);
}

#[test]
fn rokuyo_cycle_property_over_two_years() {
    let mut day = d(2026, 1, 1);
    let end = d(2027, 12, 31);
    let mut prev = resolver::rokuyo_for(day);

    while day < end {
        day = day.succ_opt().unwrap();
        let cur = resolver::rokuyo_for(day);
        assert_eq!(cur.index(), (prev.index() + 1) % 6, "at {}", day);
        prev = cur;
    }
}

#[test]
fn rokuyo_is_total_before_the_epoch() {
    // One day before the epoch wraps to the end of the cycle.
    assert_eq!(resolver::rokuyo_for(d(2025, 12, 31)), Rokuyo::Akakuchi);
    assert_eq!(resolver::rokuyo_for(d(2025, 12, 26)), Rokuyo::Senkatsu);
}

#[test]
fn lucky_days_multi_tag_date_keeps_declared_order() {
    let tags = resolver::lucky_days(catalog(), d(2026, 3, 5));
    assert_eq!(
        tags,
        &[
            LuckyDay::Tensha,
            LuckyDay::IchiryuManbai,
            LuckyDay::Tori,
            LuckyDay::Taian,
        ]
    );
}

#[test]
fn lucky_days_absent_date_is_empty() {
    assert!(resolver::lucky_days(catalog(), d(2026, 1, 1)).is_empty());
}

#[test]
fn lucky_days_out_of_coverage_is_empty_not_an_error() {
    assert!(resolver::lucky_days(catalog(), d(1999, 3, 5)).is_empty());
    assert!(resolver::lucky_days(catalog(), d(2031, 3, 5)).is_empty());
    assert!(resolver::celestial_events(catalog(), d(2031, 1, 3)).is_empty());
    assert!(resolver::retrograde_planets(catalog(), d(2031, 3, 1)).is_empty());
}

#[test]
fn celestial_events_match_exact_day() {
    use koyomi::models::celestial::MoonPhaseKind;

    let events = resolver::celestial_events(catalog(), d(2026, 1, 3));
    assert_eq!(events, vec![MoonPhaseKind::FullMoon]);

    assert!(resolver::celestial_events(catalog(), d(2026, 1, 4)).is_empty());
}

#[test]
fn retrograde_membership_is_inclusive_on_both_ends() {
    let cat = catalog();

    // mercury [2026-02-26, 2026-03-21]
    assert_eq!(
        resolver::retrograde_planets(cat, d(2026, 2, 26)),
        vec![Planet::Mercury]
    );
    assert_eq!(
        resolver::retrograde_planets(cat, d(2026, 3, 10)),
        vec![Planet::Mercury]
    );
    assert_eq!(
        resolver::retrograde_planets(cat, d(2026, 3, 21)),
        vec![Planet::Mercury]
    );
    assert!(resolver::retrograde_planets(cat, d(2026, 3, 22)).is_empty());
    assert!(resolver::retrograde_planets(cat, d(2026, 2, 25)).is_empty());
}

#[test]
fn overlapping_mercury_and_venus_both_reported() {
    // 2026-10-24..11-13 (mercury) overlaps 2026-10-03..11-14 (venus).
    let planets = resolver::retrograde_planets(catalog(), d(2026, 11, 1));
    assert_eq!(planets, vec![Planet::Mercury, Planet::Venus]);

    // Venus alone before the mercury interval begins.
    assert_eq!(
        resolver::retrograde_planets(catalog(), d(2026, 10, 10)),
        vec![Planet::Venus]
    );
}

#[test]
fn queries_are_idempotent() {
    let cat = catalog();
    let date = d(2026, 10, 24);

    let a = resolver::annotate(cat, date);
    let b = resolver::annotate(cat, date);

    assert_eq!(a.rokuyo, b.rokuyo);
    assert_eq!(a.lucky_days, b.lucky_days);
    assert_eq!(a.celestial_events, b.celestial_events);
    assert_eq!(a.retrograde_planets, b.retrograde_planets);
}

#[test]
fn next_dates_with_tag_scans_forward() {
    let hits = resolver::next_dates_with_tag(catalog(), LuckyDay::Tensha, d(2026, 1, 1), 3);
    assert_eq!(hits, vec![d(2026, 3, 5), d(2026, 5, 2), d(2026, 5, 4)]);
}

#[test]
fn next_dates_with_tag_is_bounded_by_coverage() {
    let hits = resolver::next_dates_with_tag(catalog(), LuckyDay::Tensha, d(2027, 12, 1), 5);
    assert!(hits.is_empty());
}

#[test]
fn injected_catalog_is_honored() {
    // An empty catalog yields empty results everywhere; the singleton is
    // only a convenience, not hidden state.
    let empty = Catalog::from_years(&[]);
    assert!(resolver::lucky_days(&empty, d(2026, 3, 5)).is_empty());
    assert!(resolver::celestial_events(&empty, d(2026, 1, 3)).is_empty());
    assert!(resolver::retrograde_planets(&empty, d(2026, 3, 1)).is_empty());
}
