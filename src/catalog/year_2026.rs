//! 2026 almanac tables.
//! Sources: NAOJ ephemeris office (朔弦望), published lucky-day almanacs.

use super::YearData;
use crate::models::celestial::MoonPhaseKind;
use crate::models::lucky_day::LuckyDay;
use crate::models::retrograde::Planet;

pub(super) const DATA: YearData = YearData {
    year: 2026,
    lucky_days: &[
        (1, 5, &[LuckyDay::IchiryuManbai]),
        (1, 6, &[LuckyDay::IchiryuManbai]),
        (1, 9, &[LuckyDay::Tori]),
        (1, 12, &[LuckyDay::Mi]),
        (1, 18, &[LuckyDay::IchiryuManbai]),
        (1, 21, &[LuckyDay::Tori]),
        (1, 24, &[LuckyDay::MiMi]),
        (1, 30, &[LuckyDay::IchiryuManbai]),
        (2, 8, &[LuckyDay::IchiryuManbai]),
        (2, 9, &[LuckyDay::Tori]),
        (2, 12, &[LuckyDay::Mi]),
        (2, 13, &[LuckyDay::IchiryuManbai]),
        (2, 19, &[LuckyDay::Koshi]),
        (2, 20, &[LuckyDay::IchiryuManbai]),
        (2, 21, &[LuckyDay::Tori]),
        (2, 24, &[LuckyDay::MiMi]),
        (2, 25, &[LuckyDay::IchiryuManbai]),
        (2, 27, &[LuckyDay::Fushojuju]),
        (3, 4, &[LuckyDay::IchiryuManbai]),
        (3, 5, &[LuckyDay::Tensha, LuckyDay::IchiryuManbai, LuckyDay::Tori, LuckyDay::Taian]),
        (3, 7, &[LuckyDay::Fushojuju]),
        (3, 8, &[LuckyDay::Mi]),
        (3, 12, &[LuckyDay::IchiryuManbai]),
        (3, 15, &[LuckyDay::Fushojuju]),
        (3, 17, &[LuckyDay::IchiryuManbai, LuckyDay::Tori]),
        (3, 19, &[LuckyDay::Tatsu]),
        (3, 20, &[LuckyDay::Fushojuju, LuckyDay::Mi]),
        (3, 24, &[LuckyDay::IchiryuManbai]),
        (3, 28, &[LuckyDay::Fushojuju]),
        (3, 29, &[LuckyDay::IchiryuManbai, LuckyDay::Tori]),
        (4, 1, &[LuckyDay::Mi]),
        (4, 5, &[LuckyDay::Fushojuju]),
        (4, 8, &[LuckyDay::IchiryuManbai]),
        (4, 10, &[LuckyDay::Tori]),
        (4, 11, &[LuckyDay::IchiryuManbai]),
        (4, 13, &[LuckyDay::Fushojuju, LuckyDay::Mi]),
        (4, 17, &[LuckyDay::Fushojuju]),
        (4, 20, &[LuckyDay::IchiryuManbai, LuckyDay::Koshi]),
        (4, 23, &[LuckyDay::Tatsu]),
        (5, 2, &[LuckyDay::IchiryuManbai, LuckyDay::Tensha]),
        (5, 4, &[LuckyDay::Tensha, LuckyDay::IchiryuManbai]),
        (5, 5, &[LuckyDay::Fushojuju]),
        (5, 8, &[LuckyDay::IchiryuManbai]),
        (5, 12, &[LuckyDay::IchiryuManbai, LuckyDay::Tori]),
        (5, 13, &[LuckyDay::Fushojuju, LuckyDay::Mi]),
        (5, 20, &[LuckyDay::IchiryuManbai]),
        (5, 23, &[LuckyDay::Tatsu]),
        (5, 27, &[LuckyDay::Fushojuju]),
        (6, 2, &[LuckyDay::IchiryuManbai]),
        (6, 3, &[LuckyDay::Fushojuju]),
        (6, 6, &[LuckyDay::IchiryuManbai]),
        (6, 9, &[LuckyDay::Tori]),
        (6, 12, &[LuckyDay::IchiryuManbai]),
        (6, 14, &[LuckyDay::Fushojuju, LuckyDay::Mi]),
        (6, 17, &[LuckyDay::IchiryuManbai]),
        (6, 20, &[LuckyDay::Tatsu]),
        (6, 24, &[LuckyDay::Fushojuju]),
        (6, 29, &[LuckyDay::IchiryuManbai]),
        (7, 1, &[LuckyDay::Mi]),
        (7, 5, &[LuckyDay::Fushojuju]),
        (7, 8, &[LuckyDay::IchiryuManbai]),
        (7, 11, &[LuckyDay::Tori]),
        (7, 12, &[LuckyDay::IchiryuManbai]),
        (7, 14, &[LuckyDay::Fushojuju, LuckyDay::Mi]),
        (7, 19, &[LuckyDay::Tensha, LuckyDay::IchiryuManbai, LuckyDay::Taian]),
        (7, 22, &[LuckyDay::Tatsu]),
        (7, 26, &[LuckyDay::Fushojuju]),
        (7, 31, &[LuckyDay::IchiryuManbai]),
        (8, 2, &[LuckyDay::IchiryuManbai]),
        (8, 4, &[LuckyDay::Fushojuju]),
        (8, 7, &[LuckyDay::IchiryuManbai]),
        (8, 9, &[LuckyDay::Tori]),
        (8, 11, &[LuckyDay::IchiryuManbai]),
        (8, 13, &[LuckyDay::Fushojuju, LuckyDay::Mi]),
        (8, 16, &[LuckyDay::IchiryuManbai]),
        (8, 19, &[LuckyDay::Tatsu]),
        (8, 23, &[LuckyDay::Fushojuju]),
        (8, 28, &[LuckyDay::IchiryuManbai]),
        (9, 1, &[LuckyDay::Mi]),
        (9, 4, &[LuckyDay::Fushojuju]),
        (9, 6, &[LuckyDay::IchiryuManbai]),
        (9, 8, &[LuckyDay::Tori]),
        (9, 10, &[LuckyDay::IchiryuManbai]),
        (9, 12, &[LuckyDay::Fushojuju, LuckyDay::Mi]),
        (9, 15, &[LuckyDay::IchiryuManbai]),
        (9, 18, &[LuckyDay::Tatsu]),
        (9, 22, &[LuckyDay::Fushojuju]),
        (9, 27, &[LuckyDay::IchiryuManbai]),
        (10, 1, &[LuckyDay::Tensha, LuckyDay::IchiryuManbai]),
        (10, 3, &[LuckyDay::Fushojuju]),
        (10, 5, &[LuckyDay::IchiryuManbai]),
        (10, 7, &[LuckyDay::Tori]),
        (10, 9, &[LuckyDay::IchiryuManbai]),
        (10, 11, &[LuckyDay::Fushojuju, LuckyDay::Mi]),
        (10, 14, &[LuckyDay::IchiryuManbai]),
        (10, 17, &[LuckyDay::Tatsu]),
        (10, 21, &[LuckyDay::Fushojuju]),
        (10, 26, &[LuckyDay::IchiryuManbai]),
        (11, 2, &[LuckyDay::Mi]),
        (11, 4, &[LuckyDay::Fushojuju]),
        (11, 7, &[LuckyDay::IchiryuManbai]),
        (11, 9, &[LuckyDay::Tori]),
        (11, 11, &[LuckyDay::IchiryuManbai]),
        (11, 13, &[LuckyDay::Fushojuju, LuckyDay::Mi]),
        (11, 16, &[LuckyDay::IchiryuManbai]),
        (11, 20, &[LuckyDay::Tatsu]),
        (11, 24, &[LuckyDay::Fushojuju]),
        (11, 29, &[LuckyDay::IchiryuManbai]),
        (12, 1, &[LuckyDay::IchiryuManbai]),
        (12, 3, &[LuckyDay::Fushojuju]),
        (12, 6, &[LuckyDay::IchiryuManbai]),
        (12, 8, &[LuckyDay::Tori]),
        (12, 10, &[LuckyDay::IchiryuManbai]),
        (12, 12, &[LuckyDay::Fushojuju, LuckyDay::Mi]),
        (12, 16, &[LuckyDay::Tensha, LuckyDay::IchiryuManbai, LuckyDay::Koshi]),
        (12, 19, &[LuckyDay::Tatsu]),
        (12, 23, &[LuckyDay::Fushojuju]),
        (12, 28, &[LuckyDay::IchiryuManbai]),
    ],
    celestial: &[
        (MoonPhaseKind::FullMoon, 1, 3, "19:03"),
        (MoonPhaseKind::LastQuarter, 1, 11, "00:48"),
        (MoonPhaseKind::NewMoon, 1, 19, "04:52"),
        (MoonPhaseKind::FirstQuarter, 1, 26, "13:47"),
        (MoonPhaseKind::FullMoon, 2, 2, "07:09"),
        (MoonPhaseKind::LastQuarter, 2, 9, "21:43"),
        (MoonPhaseKind::NewMoon, 2, 17, "21:01"),
        (MoonPhaseKind::FirstQuarter, 2, 24, "21:28"),
        (MoonPhaseKind::FullMoon, 3, 3, "20:38"),
        (MoonPhaseKind::LastQuarter, 3, 11, "18:39"),
        (MoonPhaseKind::NewMoon, 3, 19, "10:23"),
        (MoonPhaseKind::FirstQuarter, 3, 26, "04:18"),
        (MoonPhaseKind::FullMoon, 4, 2, "11:12"),
        (MoonPhaseKind::LastQuarter, 4, 10, "13:52"),
        (MoonPhaseKind::NewMoon, 4, 17, "20:52"),
        (MoonPhaseKind::FirstQuarter, 4, 24, "11:32"),
        (MoonPhaseKind::FullMoon, 5, 2, "02:23"),
        (MoonPhaseKind::LastQuarter, 5, 10, "06:10"),
        (MoonPhaseKind::NewMoon, 5, 17, "05:01"),
        (MoonPhaseKind::FirstQuarter, 5, 23, "20:11"),
        (MoonPhaseKind::FullMoon, 5, 31, "17:45"),
        (MoonPhaseKind::LastQuarter, 6, 8, "19:01"),
        (MoonPhaseKind::NewMoon, 6, 15, "11:54"),
        (MoonPhaseKind::FirstQuarter, 6, 22, "06:55"),
        (MoonPhaseKind::FullMoon, 6, 30, "08:57"),
        (MoonPhaseKind::LastQuarter, 7, 8, "04:29"),
        (MoonPhaseKind::NewMoon, 7, 14, "18:44"),
        (MoonPhaseKind::FirstQuarter, 7, 21, "20:06"),
        (MoonPhaseKind::FullMoon, 7, 29, "23:36"),
        (MoonPhaseKind::LastQuarter, 8, 6, "11:21"),
        (MoonPhaseKind::NewMoon, 8, 13, "02:37"),
        (MoonPhaseKind::FirstQuarter, 8, 20, "11:46"),
        (MoonPhaseKind::FullMoon, 8, 28, "13:19"),
        (MoonPhaseKind::LastQuarter, 9, 4, "16:51"),
        (MoonPhaseKind::NewMoon, 9, 11, "12:27"),
        (MoonPhaseKind::FirstQuarter, 9, 19, "05:44"),
        (MoonPhaseKind::FullMoon, 9, 27, "01:49"),
        (MoonPhaseKind::LastQuarter, 10, 3, "22:25"),
        (MoonPhaseKind::NewMoon, 10, 11, "00:50"),
        (MoonPhaseKind::FirstQuarter, 10, 19, "01:13"),
        (MoonPhaseKind::FullMoon, 10, 26, "13:12"),
        (MoonPhaseKind::LastQuarter, 11, 2, "05:28"),
        (MoonPhaseKind::NewMoon, 11, 9, "16:02"),
        (MoonPhaseKind::FirstQuarter, 11, 17, "20:48"),
        (MoonPhaseKind::FullMoon, 11, 24, "23:54"),
        (MoonPhaseKind::LastQuarter, 12, 1, "15:09"),
        (MoonPhaseKind::NewMoon, 12, 9, "09:52"),
        (MoonPhaseKind::FirstQuarter, 12, 17, "14:43"),
        (MoonPhaseKind::FullMoon, 12, 24, "10:28"),
        (MoonPhaseKind::LastQuarter, 12, 31, "03:59"),
    ],
    retrogrades: &[
        (Planet::Mercury, (2026, 2, 26), (2026, 3, 21)),
        (Planet::Mercury, (2026, 6, 30), (2026, 7, 24)),
        (Planet::Mercury, (2026, 10, 24), (2026, 11, 13)),
        (Planet::Venus, (2026, 10, 3), (2026, 11, 14)),
    ],
};
