// src/export/model.rs

use crate::catalog::Catalog;
use crate::models::day_annotations::DayAnnotations;
use serde::Serialize;

/// Flat per-day row for export.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub rokuyo: String,
    pub lucky_days: String,
    pub celestial_events: String,
    pub retrograde_planets: String,
}

/// Header for CSV
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "rokuyo",
        "lucky_days",
        "celestial_events",
        "retrograde_planets",
    ]
}

impl DayExport {
    pub fn from_annotations(catalog: &Catalog, ann: &DayAnnotations) -> Self {
        // Moon phases re-join the published time of day when one exists.
        let celestial = ann
            .celestial_events
            .iter()
            .map(|kind| {
                let time = catalog
                    .celestial_events()
                    .iter()
                    .find(|ev| ev.date == ann.date && ev.kind == *kind)
                    .and_then(|ev| ev.time);
                match time {
                    Some(t) => format!("{}@{}", kind.mp_as_str(), t.format("%H:%M")),
                    None => kind.mp_as_str().to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join("|");

        DayExport {
            date: ann.date.to_string(),
            rokuyo: ann.rokuyo.ry_as_str().to_string(),
            lucky_days: ann
                .lucky_days
                .iter()
                .map(|t| t.ld_as_str())
                .collect::<Vec<_>>()
                .join("|"),
            celestial_events: celestial,
            retrograde_planets: ann
                .retrograde_planets
                .iter()
                .map(|p| p.pl_as_str())
                .collect::<Vec<_>>()
                .join("|"),
        }
    }
}
