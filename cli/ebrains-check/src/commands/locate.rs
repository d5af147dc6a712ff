//! `ebrains-check locate` — file-listing endpoints for CSCS and data-proxy models.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ebrains_models::report::{location_rows, render_locations};
use ebrains_models::{Dataset, ReportFormat};

pub fn run(models: &Path, format: ReportFormat, out: &mut impl Write) -> Result<()> {
    let dataset =
        Dataset::load(models).with_context(|| format!("loading {}", models.display()))?;
    let rows = location_rows(&dataset);
    log::debug!("{} model(s) with listable repositories", rows.len());
    write!(out, "{}", render_locations(&rows, format)?)?;
    if format == ReportFormat::Json {
        writeln!(out)?;
    }
    Ok(())
}
