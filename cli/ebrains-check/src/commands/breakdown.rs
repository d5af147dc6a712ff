//! `ebrains-check breakdown` — hosting platform counts for a models dump.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ebrains_models::{BreakdownReport, Dataset, ErrorLog, ReportFormat};

/// Parse the dump and print how its models are distributed across platforms.
pub fn run(
    models: &Path,
    errors: Option<&Path>,
    format: ReportFormat,
    out: &mut impl Write,
) -> Result<()> {
    let dataset =
        Dataset::load(models).with_context(|| format!("loading {}", models.display()))?;
    let error_log = errors
        .map(|path| ErrorLog::load(path).with_context(|| format!("loading {}", path.display())))
        .transpose()?;

    let report = BreakdownReport::new(&dataset, error_log.as_ref());
    write!(out, "{}", report.render(format)?)?;
    if format == ReportFormat::Json {
        writeln!(out)?;
    }
    Ok(())
}
