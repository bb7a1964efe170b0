use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::celestial::MoonPhaseKind;
use crate::models::lucky_day::LuckyDay;
use crate::models::retrograde::Planet;
use crate::models::rokuyo::Rokuyo;
use crate::utils::colors::{color_for_lucky_day, color_for_planet, paint};
use crate::utils::formatting::{bold, pad_display};

const NAME_WIDTH: usize = 12;

pub fn handle(cmd: &Commands, plain: bool) -> AppResult<()> {
    if let Commands::Legend = cmd {
        println!("\n{}", bold("吉日"));
        for tag in LuckyDay::ALL {
            let name = pad_display(tag.name_ja(), NAME_WIDTH);
            println!(
                "  {} {}",
                paint(&name, color_for_lucky_day(tag), plain),
                tag.description()
            );
        }

        println!("\n{}", bold("六曜"));
        for r in Rokuyo::CYCLE {
            println!(
                "  {} {}",
                pad_display(r.name_ja(), NAME_WIDTH),
                r.description()
            );
        }

        println!("\n{}", bold("朔弦望"));
        for kind in [
            MoonPhaseKind::NewMoon,
            MoonPhaseKind::FullMoon,
            MoonPhaseKind::FirstQuarter,
            MoonPhaseKind::LastQuarter,
        ] {
            println!(
                "  {} {} {}",
                kind.emoji(),
                pad_display(kind.name_ja(), NAME_WIDTH - 3),
                kind.description()
            );
        }

        println!("\n{}", bold("惑星逆行"));
        for planet in [Planet::Mercury, Planet::Venus] {
            let name = pad_display(planet.label_ja(), NAME_WIDTH);
            println!(
                "  {} {}",
                paint(&name, color_for_planet(planet), plain),
                planet.description()
            );
        }
    }
    Ok(())
}
