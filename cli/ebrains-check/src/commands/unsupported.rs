//! `ebrains-check unsupported` — list repository lines on unsupported hosts.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ebrains_models::report::unsupported_rows;
use ebrains_models::{scan_file, Dataset, ReportFormat};

/// Print every `"repository":` line of the dump that names no supported host.
///
/// The human format is the raw line filter and never parses the dump; zero
/// matching lines is a success. The JSON format parses the dump and lists the
/// same models by id.
pub fn run(models: &Path, format: ReportFormat, out: &mut impl Write) -> Result<()> {
    if format == ReportFormat::Json {
        let dataset =
            Dataset::load(models).with_context(|| format!("loading {}", models.display()))?;
        let rows = unsupported_rows(&dataset);
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    let lines = scan_file(models)?;
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    log::info!(
        "{} unsupported repository line(s) in {}",
        lines.len(),
        models.display()
    );
    Ok(())
}
