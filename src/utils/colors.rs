/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::lucky_day::LuckyDay;
use crate::models::retrograde::Planet;
use crate::models::rokuyo::Rokuyo;

/// Grid-cell color for a tag. When a date carries several tags the first
/// declared one wins (UI contract from the legend).
pub fn color_for_lucky_day(tag: LuckyDay) -> &'static str {
    match tag {
        LuckyDay::IchiryuManbai => MAGENTA,
        LuckyDay::Tensha => "\x1b[95m", // bright magenta, the top lucky day
        LuckyDay::Taian => BLUE,
        LuckyDay::Tori => YELLOW,
        LuckyDay::Mi => GREEN,
        LuckyDay::MiMi => "\x1b[92m",
        LuckyDay::Tatsu => "\x1b[93m",
        LuckyDay::Koshi => CYAN,
        LuckyDay::Fushojuju => GREY,
    }
}

pub fn color_for_planet(planet: Planet) -> &'static str {
    match planet {
        Planet::Mercury => CYAN,
        Planet::Venus => YELLOW,
    }
}

/// Only the two rokuyo extremes get a color in the grid.
pub fn color_for_rokuyo(r: Rokuyo) -> &'static str {
    match r {
        Rokuyo::Taian => GREEN,
        Rokuyo::Butsumetu => GREY,
        _ => RESET,
    }
}

/// Wrap `s` in `color` unless plain output was requested.
pub fn paint(s: &str, color: &str, plain: bool) -> String {
    if plain || color == RESET {
        s.to_string()
    } else {
        format!("{color}{s}{RESET}")
    }
}
