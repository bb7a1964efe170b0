use crate::export::model::DayExport;

/// Write the day rows as pretty-printed JSON.
pub fn write_json(path: &str, rows: &[DayExport]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(rows).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}
