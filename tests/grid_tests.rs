use chrono::{Datelike, NaiveDate};
use koyomi::core::grid::MonthGrid;
use koyomi::utils::date::{days_in_month, first_weekday};

#[test]
fn february_2026_is_exactly_four_weeks() {
    // Feb 2026: 28 days and the 1st falls on a Sunday.
    let grid = MonthGrid::build(2026, 2).unwrap();
    assert_eq!(grid.weeks.len(), 4);
    assert_eq!(grid.day_count(), 28);

    // No blanks at all in this configuration.
    assert!(grid.weeks.iter().flatten().all(|c| c.is_some()));
}

#[test]
fn thirty_one_day_month_starting_saturday_needs_six_weeks() {
    // Aug 2026: 31 days, starts on a Saturday (weekday 6).
    assert_eq!(first_weekday(2026, 8), 6);
    let grid = MonthGrid::build(2026, 8).unwrap();
    assert_eq!(grid.weeks.len(), 6);
    assert_eq!(grid.day_count(), 31);
}

#[test]
fn first_cell_column_matches_weekday_of_day_one() {
    for year in [2025, 2026, 2027] {
        for month in 1..=12 {
            let grid = MonthGrid::build(year, month).unwrap();
            let lead = grid.weeks[0].iter().take_while(|c| c.is_none()).count() as u32;
            assert_eq!(lead, first_weekday(year, month), "{year}-{month:02}");

            let first = grid.weeks[0][lead as usize].unwrap();
            assert_eq!(first.day(), 1);
        }
    }
}

#[test]
fn cell_count_is_multiple_of_seven_and_days_match() {
    for year in [2024, 2026, 2027] {
        for month in 1..=12 {
            let grid = MonthGrid::build(year, month).unwrap();
            let total: usize = grid.weeks.len() * 7;
            assert_eq!(total % 7, 0);
            assert!((4..=6).contains(&grid.weeks.len()), "{year}-{month:02}");
            assert_eq!(
                grid.day_count() as u32,
                days_in_month(year, month),
                "{year}-{month:02}"
            );
        }
    }
}

#[test]
fn cells_run_in_calendar_order() {
    let grid = MonthGrid::build(2026, 7).unwrap();
    let days: Vec<NaiveDate> = grid.weeks.iter().flatten().flatten().copied().collect();

    for (i, d) in days.iter().enumerate() {
        assert_eq!(d.day() as usize, i + 1);
        assert_eq!(d.month(), 7);
        assert_eq!(d.year(), 2026);
    }
}

#[test]
fn leap_february_gets_twenty_nine_cells() {
    let grid = MonthGrid::build(2024, 2).unwrap();
    assert_eq!(grid.day_count(), 29);
}

#[test]
fn invalid_month_is_rejected() {
    assert!(MonthGrid::build(2026, 0).is_err());
    assert!(MonthGrid::build(2026, 13).is_err());
}
