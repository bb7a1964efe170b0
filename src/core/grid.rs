//! Month grid layout: weeks of seven cells, Sunday first.

use crate::errors::{AppError, AppResult};
use crate::utils::date::{days_in_month, first_weekday};
use chrono::NaiveDate;

/// Display layout for one calendar month. Cells are `None` outside the
/// month; rows are always exactly seven cells wide.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<NaiveDate>; 7]>,
}

impl MonthGrid {
    /// Lay out `year`/`month`: leading blanks up to the weekday of day 1
    /// (0 = Sunday), one cell per day, trailing blanks to a multiple of 7.
    /// Depending on month length and starting weekday this yields 4 to 6
    /// week rows.
    pub fn build(year: i32, month: u32) -> AppResult<MonthGrid> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidMonth(format!("{year}-{month:02}")));
        }

        let lead = first_weekday(year, month) as usize;
        let days = days_in_month(year, month);

        let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
        for day in 1..=days {
            cells.push(NaiveDate::from_ymd_opt(year, month, day));
        }
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        let weeks = cells
            .chunks_exact(7)
            .map(|w| [w[0], w[1], w[2], w[3], w[4], w[5], w[6]])
            .collect();

        Ok(MonthGrid { year, month, weeks })
    }

    /// Cells in the month (non-blank count).
    pub fn day_count(&self) -> usize {
        self.weeks
            .iter()
            .flatten()
            .filter(|c| c.is_some())
            .count()
    }
}
