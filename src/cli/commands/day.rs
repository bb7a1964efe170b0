use crate::catalog::catalog;
use crate::cli::parser::Commands;
use crate::core::resolver;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{color_for_lucky_day, color_for_planet, color_for_rokuyo, paint};
use crate::utils::date;
use crate::utils::formatting::bold;
use chrono::Datelike;

pub fn handle(cmd: &Commands, plain: bool) -> AppResult<()> {
    if let Commands::Day { date: date_arg } = cmd {
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let cat = catalog();
        let ann = resolver::annotate(cat, d);

        println!("\n{}", bold(&format!("=== {} ===", d)));

        println!(
            "六曜: {} {}",
            paint(ann.rokuyo.name_ja(), color_for_rokuyo(ann.rokuyo), plain),
            ann.rokuyo.description()
        );

        if ann.lucky_days.is_empty() {
            println!("吉日: なし");
        } else {
            println!("吉日:");
            for tag in &ann.lucky_days {
                let name = paint(tag.name_ja(), color_for_lucky_day(*tag), plain);
                println!("  {}: {}", name, tag.description());
            }
        }

        for kind in &ann.celestial_events {
            let time = cat
                .celestial_events()
                .iter()
                .find(|ev| ev.date == d && ev.kind == *kind)
                .and_then(|ev| ev.time)
                .map(|t| format!(" {}", t.format("%H:%M")))
                .unwrap_or_default();
            println!(
                "{} {}{}: {}",
                kind.emoji(),
                kind.name_ja(),
                time,
                kind.description()
            );
        }

        for planet in &ann.retrograde_planets {
            let label = paint(planet.label_ja(), color_for_planet(*planet), plain);
            println!("{}: {}", label, planet.description());
        }

        if !cat.covers_year(d.year()) {
            crate::ui::messages::warning(format!(
                "{} is outside the almanac coverage; only the rokuyo is computed",
                d
            ));
        }
    }
    Ok(())
}
