use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Moon-phase kinds published in the ephemeris tables.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum MoonPhaseKind {
    NewMoon,
    FullMoon,
    FirstQuarter,
    LastQuarter,
}

impl MoonPhaseKind {
    pub fn mp_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new-moon" => Some(Self::NewMoon),
            "full-moon" => Some(Self::FullMoon),
            "first-quarter" => Some(Self::FirstQuarter),
            "last-quarter" => Some(Self::LastQuarter),
            _ => None,
        }
    }

    pub fn mp_as_str(&self) -> &'static str {
        match self {
            MoonPhaseKind::NewMoon => "new-moon",
            MoonPhaseKind::FullMoon => "full-moon",
            MoonPhaseKind::FirstQuarter => "first-quarter",
            MoonPhaseKind::LastQuarter => "last-quarter",
        }
    }

    pub fn name_ja(&self) -> &'static str {
        match self {
            MoonPhaseKind::NewMoon => "新月",
            MoonPhaseKind::FullMoon => "満月",
            MoonPhaseKind::FirstQuarter => "上弦",
            MoonPhaseKind::LastQuarter => "下弦",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoonPhaseKind::NewMoon => "🌑",
            MoonPhaseKind::FullMoon => "🌕",
            MoonPhaseKind::FirstQuarter => "🌓",
            MoonPhaseKind::LastQuarter => "🌗",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MoonPhaseKind::NewMoon => "月が太陽と同じ方向にある時。新しいことを始めるのに適した時期。",
            MoonPhaseKind::FullMoon => "月が地球と太陽の間にある時。完成、成就、感情が高ぶる時期。",
            MoonPhaseKind::FirstQuarter => "月が満ちていく時期。成長、発展、行動に適した時期。",
            MoonPhaseKind::LastQuarter => "月が欠けていく時期。整理、リセット、反省に適した時期。",
        }
    }
}

/// One dated moon-phase entry. The time of day is local civil time as
/// published by the ephemeris source; not every entry carries one.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CelestialEvent {
    pub kind: MoonPhaseKind,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}
