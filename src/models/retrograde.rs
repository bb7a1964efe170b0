use chrono::NaiveDate;
use serde::Serialize;

/// Planets tracked for apparent retrograde motion.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Planet {
    Mercury,
    Venus,
}

impl Planet {
    pub fn pl_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mercury" => Some(Self::Mercury),
            "venus" => Some(Self::Venus),
            _ => None,
        }
    }

    pub fn pl_as_str(&self) -> &'static str {
        match self {
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
        }
    }

    pub fn label_ja(&self) -> &'static str {
        match self {
            Planet::Mercury => "水星逆行",
            Planet::Venus => "金星逆行",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Planet::Mercury => "コミュニケーション、移動、契約に影響。誤解や遅延が起きやすい時期。",
            Planet::Venus => "愛情、金銭、人間関係に影響。内省と再評価の時期。",
        }
    }
}

/// An inclusive [start, end] date range during which a planet is in
/// apparent retrograde. Catalog invariant: start <= end, and intervals
/// of the same planet never overlap each other.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RetrogradeInterval {
    pub planet: Planet,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RetrogradeInterval {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True if the interval touches the inclusive range [from, to].
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.end >= from && self.start <= to
    }
}
