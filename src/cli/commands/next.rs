use crate::catalog::catalog;
use crate::cli::parser::Commands;
use crate::core::resolver;
use crate::errors::{AppError, AppResult};
use crate::models::lucky_day::LuckyDay;
use crate::utils::date;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Next { tag, from, count } = cmd {
        let tag = LuckyDay::ld_from_str(tag).ok_or_else(|| AppError::UnknownTag(tag.clone()))?;

        let start = match from {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let cat = catalog();
        let hits = resolver::next_dates_with_tag(cat, tag, start, (*count).max(1));

        if hits.is_empty() {
            crate::ui::messages::info(format!(
                "No {} on or after {} within the almanac coverage",
                tag.name_ja(),
                start
            ));
        } else {
            for d in hits {
                let others: Vec<&str> = resolver::lucky_days(cat, d)
                    .iter()
                    .filter(|t| **t != tag)
                    .map(|t| t.name_ja())
                    .collect();
                if others.is_empty() {
                    println!("{}  {}", d, tag.name_ja());
                } else {
                    println!("{}  {} (+ {})", d, tag.name_ja(), others.join(", "));
                }
            }
        }
    }
    Ok(())
}
