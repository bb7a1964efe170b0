//! Immutable almanac reference tables, keyed by year.
//!
//! Each supported year lives in its own data module; `Catalog::builtin()`
//! chains them, so extending coverage is a new data module plus one line
//! here, with no logic change. Consumers either take an explicit `&Catalog`
//! (tests inject fixtures this way) or use the process-wide [`catalog()`]
//! singleton, built once on first access and never invalidated.

mod year_2026;
mod year_2027;

use crate::models::celestial::{CelestialEvent, MoonPhaseKind};
use crate::models::lucky_day::LuckyDay;
use crate::models::retrograde::{Planet, RetrogradeInterval};
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

/// Static per-year tables as authored in the data modules.
/// Months and days are 1-based; times are "HH:MM" local civil time.
pub struct YearData {
    pub year: i32,
    pub lucky_days: &'static [(u32, u32, &'static [LuckyDay])],
    pub celestial: &'static [(MoonPhaseKind, u32, u32, &'static str)],
    pub retrogrades: &'static [(Planet, (i32, u32, u32), (i32, u32, u32))],
}

pub struct Catalog {
    years: BTreeSet<i32>,
    lucky_days: HashMap<NaiveDate, Vec<LuckyDay>>,
    celestial: Vec<CelestialEvent>,
    retrogrades: Vec<RetrogradeInterval>,
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// Process-wide catalog, loaded once on first access.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    /// Catalog with the built-in year tables.
    pub fn builtin() -> Self {
        Self::from_years(&[year_2026::DATA, year_2027::DATA])
    }

    /// Catalog over an explicit set of year tables. Tests inject fixture
    /// data through here instead of touching the singleton.
    pub fn from_years(years: &[YearData]) -> Self {
        let mut cat = Catalog {
            years: BTreeSet::new(),
            lucky_days: HashMap::new(),
            celestial: Vec::new(),
            retrogrades: Vec::new(),
        };

        for yd in years {
            cat.years.insert(yd.year);

            for &(month, day, tags) in yd.lucky_days {
                if let Some(date) = NaiveDate::from_ymd_opt(yd.year, month, day) {
                    cat.lucky_days.insert(date, tags.to_vec());
                }
            }

            for &(kind, month, day, time) in yd.celestial {
                if let Some(date) = NaiveDate::from_ymd_opt(yd.year, month, day) {
                    cat.celestial.push(CelestialEvent {
                        kind,
                        date,
                        time: NaiveTime::parse_from_str(time, "%H:%M").ok(),
                    });
                }
            }

            for &(planet, (y1, m1, d1), (y2, m2, d2)) in yd.retrogrades {
                if let (Some(start), Some(end)) = (
                    NaiveDate::from_ymd_opt(y1, m1, d1),
                    NaiveDate::from_ymd_opt(y2, m2, d2),
                ) {
                    cat.retrogrades.push(RetrogradeInterval { planet, start, end });
                }
            }
        }

        cat
    }

    /// Years with almanac coverage, ascending.
    pub fn supported_years(&self) -> Vec<i32> {
        self.years.iter().copied().collect()
    }

    pub fn covers_year(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    /// First and last covered dates, None when the catalog is empty.
    pub fn coverage(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = *self.years.iter().next()?;
        let last = *self.years.iter().next_back()?;
        Some((
            NaiveDate::from_ymd_opt(first, 1, 1)?,
            NaiveDate::from_ymd_opt(last, 12, 31)?,
        ))
    }

    /// Tags for one date in catalog-declared order; empty when absent.
    pub fn lucky_days_for(&self, date: NaiveDate) -> &[LuckyDay] {
        self.lucky_days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Flat chronological moon-phase list.
    pub fn celestial_events(&self) -> &[CelestialEvent] {
        &self.celestial
    }

    /// Retrograde intervals in catalog (authoring) order.
    pub fn retrogrades(&self) -> &[RetrogradeInterval] {
        &self.retrogrades
    }
}
