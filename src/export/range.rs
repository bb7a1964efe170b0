// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::{days_in_month, parse_date, parse_year_month};
use chrono::NaiveDate;

/// Parse --range into an inclusive date interval.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any of the above pair as START:END
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let (start, _) = parse_period(start_raw.trim())?;
        let (_, end) = parse_period(end_raw.trim())?;

        if start > end {
            return Err(AppError::InvalidPeriod(format!(
                "start after end in range: {r}"
            )));
        }
        Ok((start, end))
    } else {
        parse_period(r.trim())
    }
}

/// One period token expanded to its first and last day.
fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let (y, m) =
                parse_year_month(p).ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, days_in_month(y, m))
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidPeriod(p.to_string())),
    }
}
