//! 2027 almanac tables.
//! Same sources as 2026. Note: no Venus retrograde falls in 2027.

use super::YearData;
use crate::models::celestial::MoonPhaseKind;
use crate::models::lucky_day::LuckyDay;
use crate::models::retrograde::Planet;

pub(super) const DATA: YearData = YearData {
    year: 2027,
    lucky_days: &[
        (1, 3, &[LuckyDay::IchiryuManbai]),
        (1, 7, &[LuckyDay::Fushojuju]),
        (1, 8, &[LuckyDay::IchiryuManbai]),
        (1, 10, &[LuckyDay::Tori]),
        (1, 13, &[LuckyDay::Mi]),
        (1, 15, &[LuckyDay::Fushojuju]),
        (1, 16, &[LuckyDay::IchiryuManbai]),
        (1, 22, &[LuckyDay::Tori]),
        (1, 23, &[LuckyDay::Fushojuju]),
        (1, 25, &[LuckyDay::MiMi]),
        (1, 28, &[LuckyDay::IchiryuManbai]),
        (1, 31, &[LuckyDay::Fushojuju]),
        (2, 3, &[LuckyDay::Tori]),
        (2, 6, &[LuckyDay::Mi]),
        (2, 9, &[LuckyDay::IchiryuManbai]),
        (2, 12, &[LuckyDay::IchiryuManbai]),
        (2, 15, &[LuckyDay::Tori]),
        (2, 18, &[LuckyDay::Mi]),
        (2, 21, &[LuckyDay::IchiryuManbai]),
        (2, 24, &[LuckyDay::IchiryuManbai]),
        (2, 27, &[LuckyDay::Tori]),
        (3, 2, &[LuckyDay::Mi]),
        (3, 5, &[LuckyDay::IchiryuManbai]),
        (3, 8, &[LuckyDay::IchiryuManbai]),
        (3, 11, &[LuckyDay::Tori]),
        (3, 14, &[LuckyDay::MiMi]),
        (3, 17, &[LuckyDay::IchiryuManbai, LuckyDay::Tensha]),
        (3, 20, &[LuckyDay::IchiryuManbai]),
        (3, 23, &[LuckyDay::Tori]),
        (3, 26, &[LuckyDay::Mi]),
        (3, 29, &[LuckyDay::IchiryuManbai]),
        (4, 1, &[LuckyDay::IchiryuManbai]),
        (4, 4, &[LuckyDay::Tori]),
        (4, 7, &[LuckyDay::Mi]),
        (4, 13, &[LuckyDay::IchiryuManbai]),
        (4, 16, &[LuckyDay::Tori]),
        (4, 19, &[LuckyDay::Mi]),
        (4, 25, &[LuckyDay::IchiryuManbai]),
        (4, 28, &[LuckyDay::Tori]),
        (5, 1, &[LuckyDay::Mi]),
        (5, 7, &[LuckyDay::IchiryuManbai]),
        (5, 10, &[LuckyDay::Tori]),
        (5, 13, &[LuckyDay::MiMi]),
        (5, 16, &[LuckyDay::Tensha, LuckyDay::IchiryuManbai]),
        (5, 19, &[LuckyDay::IchiryuManbai]),
        (5, 22, &[LuckyDay::Tori]),
        (5, 25, &[LuckyDay::Mi]),
        (5, 31, &[LuckyDay::IchiryuManbai]),
        (6, 3, &[LuckyDay::Tori]),
        (6, 6, &[LuckyDay::Mi]),
        (6, 12, &[LuckyDay::IchiryuManbai]),
        (6, 15, &[LuckyDay::Tori]),
        (6, 18, &[LuckyDay::Mi]),
        (6, 24, &[LuckyDay::IchiryuManbai]),
        (6, 27, &[LuckyDay::Tori]),
        (6, 30, &[LuckyDay::Mi]),
        (7, 6, &[LuckyDay::IchiryuManbai]),
        (7, 9, &[LuckyDay::Tori]),
        (7, 12, &[LuckyDay::MiMi]),
        (7, 15, &[LuckyDay::Tensha, LuckyDay::IchiryuManbai]),
        (7, 18, &[LuckyDay::IchiryuManbai]),
        (7, 21, &[LuckyDay::Tori]),
        (7, 24, &[LuckyDay::Mi]),
        (7, 30, &[LuckyDay::IchiryuManbai]),
        (8, 2, &[LuckyDay::Tori]),
        (8, 5, &[LuckyDay::Mi]),
        (8, 11, &[LuckyDay::IchiryuManbai]),
        (8, 14, &[LuckyDay::Tori]),
        (8, 17, &[LuckyDay::Mi]),
        (8, 23, &[LuckyDay::IchiryuManbai]),
        (8, 26, &[LuckyDay::Tori]),
        (8, 29, &[LuckyDay::Mi]),
        (9, 4, &[LuckyDay::IchiryuManbai]),
        (9, 7, &[LuckyDay::Tori]),
        (9, 10, &[LuckyDay::MiMi]),
        (9, 13, &[LuckyDay::Tensha, LuckyDay::IchiryuManbai]),
        (9, 16, &[LuckyDay::IchiryuManbai]),
        (9, 19, &[LuckyDay::Tori]),
        (9, 22, &[LuckyDay::Mi]),
        (9, 28, &[LuckyDay::IchiryuManbai]),
        (10, 1, &[LuckyDay::Tori]),
        (10, 4, &[LuckyDay::Mi]),
        (10, 10, &[LuckyDay::IchiryuManbai]),
        (10, 13, &[LuckyDay::Tori]),
        (10, 16, &[LuckyDay::Mi]),
        (10, 22, &[LuckyDay::IchiryuManbai]),
        (10, 25, &[LuckyDay::Tori]),
        (10, 28, &[LuckyDay::Mi]),
        (11, 3, &[LuckyDay::IchiryuManbai]),
        (11, 6, &[LuckyDay::Tori]),
        (11, 9, &[LuckyDay::MiMi]),
        (11, 12, &[LuckyDay::Tensha, LuckyDay::IchiryuManbai]),
        (11, 15, &[LuckyDay::IchiryuManbai]),
        (11, 18, &[LuckyDay::Tori]),
        (11, 21, &[LuckyDay::Mi]),
        (11, 27, &[LuckyDay::IchiryuManbai]),
        (11, 30, &[LuckyDay::Tori]),
        (12, 3, &[LuckyDay::Mi]),
        (12, 9, &[LuckyDay::IchiryuManbai]),
        (12, 12, &[LuckyDay::Tori]),
        (12, 15, &[LuckyDay::Mi]),
        (12, 21, &[LuckyDay::IchiryuManbai]),
        (12, 24, &[LuckyDay::Tori]),
        (12, 27, &[LuckyDay::Mi]),
    ],
    celestial: &[
        (MoonPhaseKind::NewMoon, 1, 8, "05:24"),
        (MoonPhaseKind::FirstQuarter, 1, 16, "05:35"),
        (MoonPhaseKind::FullMoon, 1, 22, "21:17"),
        (MoonPhaseKind::LastQuarter, 1, 29, "19:55"),
        (MoonPhaseKind::NewMoon, 2, 7, "00:56"),
        (MoonPhaseKind::FirstQuarter, 2, 14, "16:58"),
        (MoonPhaseKind::FullMoon, 2, 21, "08:24"),
        (MoonPhaseKind::LastQuarter, 2, 28, "14:17"),
        (MoonPhaseKind::NewMoon, 3, 8, "18:29"),
        (MoonPhaseKind::FirstQuarter, 3, 16, "01:25"),
        (MoonPhaseKind::FullMoon, 3, 22, "19:44"),
        (MoonPhaseKind::LastQuarter, 3, 30, "09:54"),
        (MoonPhaseKind::NewMoon, 4, 7, "08:51"),
        (MoonPhaseKind::FirstQuarter, 4, 14, "07:57"),
        (MoonPhaseKind::FullMoon, 4, 21, "07:27"),
        (MoonPhaseKind::LastQuarter, 4, 29, "05:18"),
        (MoonPhaseKind::NewMoon, 5, 6, "19:59"),
        (MoonPhaseKind::FirstQuarter, 5, 13, "13:44"),
        (MoonPhaseKind::FullMoon, 5, 20, "19:59"),
        (MoonPhaseKind::LastQuarter, 5, 28, "22:58"),
        (MoonPhaseKind::NewMoon, 6, 5, "04:40"),
        (MoonPhaseKind::FirstQuarter, 6, 11, "19:56"),
        (MoonPhaseKind::FullMoon, 6, 19, "09:44"),
        (MoonPhaseKind::LastQuarter, 6, 27, "13:54"),
        (MoonPhaseKind::NewMoon, 7, 4, "12:02"),
        (MoonPhaseKind::FirstQuarter, 7, 11, "03:39"),
        (MoonPhaseKind::FullMoon, 7, 19, "00:45"),
        (MoonPhaseKind::LastQuarter, 7, 27, "01:55"),
        (MoonPhaseKind::NewMoon, 8, 2, "19:05"),
        (MoonPhaseKind::FirstQuarter, 8, 9, "13:54"),
        (MoonPhaseKind::FullMoon, 8, 17, "16:29"),
        (MoonPhaseKind::LastQuarter, 8, 25, "11:27"),
        (MoonPhaseKind::NewMoon, 9, 1, "02:41"),
        (MoonPhaseKind::FirstQuarter, 9, 8, "03:31"),
        (MoonPhaseKind::FullMoon, 9, 16, "08:04"),
        (MoonPhaseKind::LastQuarter, 9, 23, "19:20"),
        (MoonPhaseKind::NewMoon, 9, 30, "11:36"),
        (MoonPhaseKind::FirstQuarter, 10, 7, "20:47"),
        (MoonPhaseKind::FullMoon, 10, 15, "22:47"),
        (MoonPhaseKind::LastQuarter, 10, 23, "02:29"),
        (MoonPhaseKind::NewMoon, 10, 29, "22:37"),
        (MoonPhaseKind::FirstQuarter, 11, 6, "17:00"),
        (MoonPhaseKind::FullMoon, 11, 14, "12:26"),
        (MoonPhaseKind::LastQuarter, 11, 21, "09:48"),
        (MoonPhaseKind::NewMoon, 11, 28, "12:24"),
        (MoonPhaseKind::FirstQuarter, 12, 6, "14:22"),
        (MoonPhaseKind::FullMoon, 12, 14, "01:09"),
        (MoonPhaseKind::LastQuarter, 12, 20, "18:11"),
        (MoonPhaseKind::NewMoon, 12, 28, "05:12"),
    ],
    retrogrades: &[
        (Planet::Mercury, (2027, 2, 9), (2027, 3, 3)),
        (Planet::Mercury, (2027, 6, 10), (2027, 7, 4)),
        (Planet::Mercury, (2027, 10, 7), (2027, 10, 28)),
    ],
};
