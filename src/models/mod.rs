pub mod celestial;
pub mod day_annotations;
pub mod lucky_day;
pub mod retrograde;
pub mod rokuyo;

pub use celestial::{CelestialEvent, MoonPhaseKind};
pub use day_annotations::DayAnnotations;
pub use lucky_day::LuckyDay;
pub use retrograde::{Planet, RetrogradeInterval};
pub use rokuyo::Rokuyo;
