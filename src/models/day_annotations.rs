use crate::models::celestial::MoonPhaseKind;
use crate::models::lucky_day::LuckyDay;
use crate::models::retrograde::Planet;
use crate::models::rokuyo::Rokuyo;
use chrono::NaiveDate;
use serde::Serialize;

/// Everything the catalog knows about one calendar date.
/// Lucky days keep their catalog-declared order (the first tag drives the
/// display color); celestial events and retrogrades keep catalog order too.
#[derive(Debug, Clone, Serialize)]
pub struct DayAnnotations {
    pub date: NaiveDate,
    pub rokuyo: Rokuyo,
    pub lucky_days: Vec<LuckyDay>,
    pub celestial_events: Vec<MoonPhaseKind>,
    pub retrograde_planets: Vec<Planet>,
}

impl DayAnnotations {
    /// True when the date carries anything beyond the (always present) rokuyo.
    pub fn is_annotated(&self) -> bool {
        !self.lucky_days.is_empty()
            || !self.celestial_events.is_empty()
            || !self.retrograde_planets.is_empty()
    }
}
