//! Retrograde overlay geometry for one visible month.
//!
//! Each interval touching the month is clipped to it and positioned as a
//! fractional horizontal span over the month's width (day 1 = 0.0, last
//! day's right edge = 1.0). Lanes keep catalog order so concurrent
//! mercury/venus bars stack without colliding.

use crate::errors::{AppError, AppResult};
use crate::models::retrograde::RetrogradeInterval;
use crate::utils::date::{days_in_month, month_bounds};
use chrono::{Datelike, NaiveDate};

/// One retrograde bar clipped to a month.
#[derive(Debug, Clone, Copy)]
pub struct OverlaySpan {
    pub interval: RetrogradeInterval,
    pub effective_start: NaiveDate,
    pub effective_end: NaiveDate,
    /// Left edge as a fraction of the month width: `(start day - 1) / days`.
    pub start_fraction: f64,
    /// Bar width as a fraction of the month width, inclusive of both ends.
    pub width_fraction: f64,
    /// Stacking index, stable in catalog order.
    pub lane: usize,
}

/// Spans for every interval overlapping `year`/`month`, in catalog order.
pub fn month_overlays(
    year: i32,
    month: u32,
    intervals: &[RetrogradeInterval],
) -> AppResult<Vec<OverlaySpan>> {
    let (month_start, month_end) = month_bounds(year, month)
        .ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month:02}")))?;
    let total_days = f64::from(days_in_month(year, month));

    let mut spans = Vec::new();

    for iv in intervals {
        if !iv.overlaps(month_start, month_end) {
            continue;
        }

        let effective_start = iv.start.max(month_start);
        let effective_end = iv.end.min(month_end);

        let start_day = effective_start.day();
        let end_day = effective_end.day();

        spans.push(OverlaySpan {
            interval: *iv,
            effective_start,
            effective_end,
            start_fraction: f64::from(start_day - 1) / total_days,
            width_fraction: f64::from(end_day - start_day + 1) / total_days,
            lane: spans.len(),
        });
    }

    Ok(spans)
}
