use crate::catalog::{catalog, Catalog};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::MonthGrid;
use crate::core::overlay::{month_overlays, OverlaySpan};
use crate::core::resolver;
use crate::errors::{AppError, AppResult};
use crate::models::celestial::CelestialEvent;
use crate::utils::colors::{color_for_lucky_day, color_for_planet, paint, GREY};
use crate::utils::date::{self, days_in_month};
use crate::utils::formatting::{bold, pad_display, weekday_headers};
use chrono::{Datelike, NaiveDate};

const CELL_WIDTH: usize = 4;

pub fn handle(cmd: &Commands, cfg: &Config, plain: bool) -> AppResult<()> {
    if let Commands::Month {
        period,
        no_overlays,
    } = cmd
    {
        let (year, month) = resolve_month(period, cfg)?;
        let cat = catalog();

        let grid = MonthGrid::build(year, month)?;
        print_grid(&grid, cat, cfg, plain);
        print_moon_phases(cat, year, month, plain);

        if !*no_overlays && cfg.show_overlays {
            let spans = month_overlays(year, month, cat.retrogrades())?;
            print_overlays(&spans, year, month, plain);
        }

        if !cat.covers_year(year) {
            println!();
            crate::ui::messages::warning(format!(
                "No almanac coverage for {year} (supported: {})",
                cat.supported_years()
                    .iter()
                    .map(|y| y.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
    }
    Ok(())
}

/// Explicit period > configured default > current month.
fn resolve_month(period: &Option<String>, cfg: &Config) -> AppResult<(i32, u32)> {
    let chosen = period
        .clone()
        .or_else(|| (!cfg.default_period.is_empty()).then(|| cfg.default_period.clone()));

    match chosen {
        Some(p) => date::parse_year_month(&p).ok_or(AppError::InvalidPeriod(p)),
        None => {
            let t = date::today();
            Ok((t.year(), t.month()))
        }
    }
}

fn print_grid(grid: &MonthGrid, cat: &Catalog, cfg: &Config, plain: bool) {
    let title = if cfg.weekday_lang == "en" {
        format!("{}-{:02}", grid.year, grid.month)
    } else {
        format!("{}年{}月", grid.year, grid.month)
    };
    println!("\n{}", bold(&title));

    let mut header = String::new();
    for h in weekday_headers(&cfg.weekday_lang) {
        header.push_str(&pad_display(h, CELL_WIDTH));
    }
    println!("{}", header);

    for week in &grid.weeks {
        let mut line = String::new();
        for cell in week {
            match cell {
                Some(d) => line.push_str(&render_cell(cat, *d, plain)),
                None => line.push_str(&" ".repeat(CELL_WIDTH)),
            }
        }
        println!("{}", line);
    }
}

/// One day cell: the number painted with the first lucky tag's color,
/// '*' for lucky dates, '.' for an inauspicious-only date.
fn render_cell(cat: &Catalog, d: NaiveDate, plain: bool) -> String {
    let tags = resolver::lucky_days(cat, d);
    let num = format!("{:>2}", d.day());

    let (painted, marker) = match tags.first() {
        Some(first) if first.is_inauspicious() && tags.len() == 1 => {
            (paint(&num, GREY, plain), '.')
        }
        Some(first) => (paint(&num, color_for_lucky_day(*first), plain), '*'),
        None => (num, ' '),
    };

    format!("{}{} ", painted, marker)
}

fn print_moon_phases(cat: &Catalog, year: i32, month: u32, plain: bool) {
    let events: Vec<&CelestialEvent> = cat
        .celestial_events()
        .iter()
        .filter(|ev| ev.date.year() == year && ev.date.month() == month)
        .collect();

    if events.is_empty() {
        return;
    }

    println!("\n{}", bold("朔弦望"));
    for ev in events {
        let time = ev
            .time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default();
        let line = format!(
            "{} {} {}/{} {}",
            ev.kind.emoji(),
            ev.kind.name_ja(),
            ev.date.month(),
            ev.date.day(),
            time
        );
        println!("{}", paint(&line, GREY, plain));
    }
}

/// Text analog of the overlay bars: one lane per interval, catalog order,
/// one column per day of the month.
fn print_overlays(spans: &[OverlaySpan], year: i32, month: u32, plain: bool) {
    if spans.is_empty() {
        return;
    }

    let total = days_in_month(year, month) as usize;
    println!("\n{}", bold("惑星逆行期間"));

    for span in spans {
        let from = span.effective_start;
        let to = span.effective_end;
        let label = format!(
            "{} {}/{} 〜 {}/{} ({}日)",
            span.interval.planet.label_ja(),
            from.month(),
            from.day(),
            to.month(),
            to.day(),
            (to - from).num_days() + 1
        );
        println!("{}", label);

        let start = from.day() as usize - 1;
        let end = to.day() as usize;
        let bar: String = (0..total)
            .map(|i| if i >= start && i < end { '=' } else { '-' })
            .collect();
        let colored = format!(
            "[{}{}{}]",
            &bar[..start],
            paint(&bar[start..end], color_for_planet(span.interval.planet), plain),
            &bar[end..]
        );
        println!("{}", colored);
    }
}
