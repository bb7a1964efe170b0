// src/export/mod.rs

mod csv;
mod json;
mod model;
mod range;

pub use model::DayExport;

use crate::catalog::Catalog;
use crate::core::resolver;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Export annotated days over `range` (default: full catalog coverage).
/// With `include_all` every day of the range is written, rokuyo-only
/// days included; otherwise only days carrying at least one annotation.
pub fn export(
    catalog: &Catalog,
    format: &ExportFormat,
    file: &str,
    range: &Option<String>,
    include_all: bool,
    force: bool,
) -> AppResult<()> {
    let (from, to) = match range {
        Some(r) => range::parse_range(r)?,
        None => catalog
            .coverage()
            .ok_or_else(|| AppError::Export("catalog has no coverage".into()))?,
    };

    let path = Path::new(file);
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let mut rows = Vec::new();
    let mut d = from;
    while d <= to {
        let ann = resolver::annotate(catalog, d);
        if include_all || ann.is_annotated() {
            rows.push(DayExport::from_annotations(catalog, &ann));
        }
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    match format {
        ExportFormat::Csv => csv::write_csv(file, &rows)?,
        ExportFormat::Json => json::write_json(file, &rows)?,
    }

    success(format!(
        "{} export completed: {} ({} days)",
        format.as_str().to_uppercase(),
        path.display(),
        rows.len()
    ));
    Ok(())
}
