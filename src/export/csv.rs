use crate::export::model::{get_headers, DayExport};
use csv::Writer;

/// Write the day rows as CSV to the given path.
pub fn write_csv(path: &str, rows: &[DayExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for row in rows {
        wtr.write_record(&[
            row.date.clone(),
            row.rokuyo.clone(),
            row.lucky_days.clone(),
            row.celestial_events.clone(),
            row.retrograde_planets.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
