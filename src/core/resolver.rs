//! Pure per-date queries over the almanac catalog.
//!
//! Every function here is total: dates outside the catalog's covered years
//! come back with empty results, never an error. The rokuyo cycle needs no
//! catalog at all: it is plain modular arithmetic from a fixed epoch.

use crate::catalog::Catalog;
use crate::models::celestial::MoonPhaseKind;
use crate::models::day_annotations::DayAnnotations;
use crate::models::lucky_day::LuckyDay;
use crate::models::retrograde::Planet;
use crate::models::rokuyo::Rokuyo;
use chrono::NaiveDate;

/// Epoch anchor: 2026-01-01 is Senkatsu (cycle index 0).
///
/// The traditional cycle is tied to the lunisolar calendar; this crate uses
/// the continuous day-count approximation, which advances by exactly one
/// cycle step per calendar day and is defined for any date, past or future.
const EPOCH: (i32, u32, u32) = (2026, 1, 1);

fn epoch_date() -> NaiveDate {
    let (y, m, d) = EPOCH;
    NaiveDate::from_ymd_opt(y, m, d).expect("epoch constant is a valid date")
}

/// Rokuyo label for a date: `(days since epoch) mod 6` into the cycle.
pub fn rokuyo_for(date: NaiveDate) -> Rokuyo {
    let offset = (date - epoch_date()).num_days().rem_euclid(6);
    Rokuyo::from_index(offset as usize)
}

/// Lucky-day tags in catalog-declared order; empty slice when the date
/// carries none (or lies outside the covered years).
pub fn lucky_days(catalog: &Catalog, date: NaiveDate) -> &[LuckyDay] {
    catalog.lucky_days_for(date)
}

/// Moon phases falling exactly on this calendar day, in catalog
/// (chronological) order.
pub fn celestial_events(catalog: &Catalog, date: NaiveDate) -> Vec<MoonPhaseKind> {
    catalog
        .celestial_events()
        .iter()
        .filter(|ev| ev.date == date)
        .map(|ev| ev.kind)
        .collect()
}

/// Planets in retrograde on this date, in catalog order. Overlapping
/// mercury and venus intervals yield both.
pub fn retrograde_planets(catalog: &Catalog, date: NaiveDate) -> Vec<Planet> {
    catalog
        .retrogrades()
        .iter()
        .filter(|iv| iv.contains(date))
        .map(|iv| iv.planet)
        .collect()
}

/// All four queries composed for one date.
pub fn annotate(catalog: &Catalog, date: NaiveDate) -> DayAnnotations {
    DayAnnotations {
        date,
        rokuyo: rokuyo_for(date),
        lucky_days: lucky_days(catalog, date).to_vec(),
        celestial_events: celestial_events(catalog, date),
        retrograde_planets: retrograde_planets(catalog, date),
    }
}

/// Forward scan for the next dates carrying `tag`, starting at `from`
/// (inclusive) and bounded by the catalog's coverage.
pub fn next_dates_with_tag(
    catalog: &Catalog,
    tag: LuckyDay,
    from: NaiveDate,
    count: usize,
) -> Vec<NaiveDate> {
    let mut out = Vec::new();

    let Some((_, last)) = catalog.coverage() else {
        return out;
    };

    let mut d = from;
    while d <= last && out.len() < count {
        if catalog.lucky_days_for(d).contains(&tag) {
            out.push(d);
        }
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}
