//! Human and JSON rendering of dataset checks.

use std::str::FromStr;

use serde::Serialize;

use crate::dataset::{Dataset, ErrorLog};
use crate::error::Result;
use crate::location::ListingLocation;
use crate::platform::{Breakdown, HostingPlatform};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "human" => Ok(ReportFormat::Human),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{other}' (expected human or json)")),
        }
    }
}

/// Hosting breakdown of a dataset, plus harvest failures when known.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownReport {
    pub models: usize,
    pub breakdown: Breakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub error_reasons: Vec<ReasonCount>,
}

/// Number of harvest failures sharing a reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReasonCount {
    pub reason: String,
    pub count: usize,
}

impl BreakdownReport {
    pub fn new(dataset: &Dataset, errors: Option<&ErrorLog>) -> Self {
        BreakdownReport {
            models: dataset.len(),
            breakdown: dataset.breakdown(),
            errors: errors.map(ErrorLog::len),
            error_reasons: errors
                .map(|log| {
                    log.reasons()
                        .into_iter()
                        .map(|(reason, count)| ReasonCount {
                            reason: reason.to_string(),
                            count,
                        })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Human => Ok(self.to_human()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn to_human(&self) -> String {
        let mut out = String::new();
        match self.errors {
            Some(errors) => out.push_str(&format!(
                "{} models processed. {} OK, {} errors\n",
                self.models + errors,
                self.models,
                errors
            )),
            None => out.push_str(&format!("{} models\n", self.models)),
        }

        out.push('\n');
        out.push_str("Data repo types breakdown:\n");
        for platform in HostingPlatform::ALL {
            out.push_str(&format!(
                "  {:<12} {:>5}\n",
                platform.key(),
                self.breakdown.count(platform)
            ));
        }

        if !self.error_reasons.is_empty() {
            out.push('\n');
            out.push_str("Errors by reason:\n");
            for reason in &self.error_reasons {
                out.push_str(&format!("  {:>5}  {}\n", reason.count, reason.reason));
            }
        }
        out
    }
}

/// Listing endpoint for one model, or why none could be derived.
#[derive(Debug, Clone, Serialize)]
pub struct LocationRow {
    pub id: String,
    pub name: String,
    pub platform: HostingPlatform,
    pub repository: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<ListingLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
}

/// One row per CSCS or data-proxy model.
pub fn location_rows(dataset: &Dataset) -> Vec<LocationRow> {
    dataset
        .iter()
        .filter(|(_, entry)| entry.platform().has_listing())
        .map(|(id, entry)| {
            let (listing, problem) = match ListingLocation::from_repository(&entry.repository) {
                Ok(listing) => (Some(listing), None),
                Err(err) => (None, Some(err.to_string())),
            };
            LocationRow {
                id: id.to_string(),
                name: entry.name.clone(),
                platform: entry.platform(),
                repository: entry.repository.clone(),
                listing,
                problem,
            }
        })
        .collect()
}

/// Render location rows.
pub fn render_locations(rows: &[LocationRow], format: ReportFormat) -> Result<String> {
    if format == ReportFormat::Json {
        return Ok(serde_json::to_string_pretty(rows)?);
    }

    let mut out = String::new();
    for row in rows {
        out.push_str(&format!(
            "* {:<40}|{:<12}|{}\n",
            row.id,
            row.platform.key(),
            row.name
        ));
        if let Some(listing) = &row.listing {
            out.push_str(&format!("    listing: {}\n", listing.listing_url));
            if !listing.prefix.is_empty() {
                out.push_str(&format!("    prefix:  {}\n", listing.prefix));
            }
        } else if let Some(problem) = &row.problem {
            out.push_str(&format!("    ERROR: {problem}\n"));
        }
    }

    let failed = rows.iter().filter(|row| row.problem.is_some()).count();
    out.push('\n');
    out.push_str(&format!(
        "{} listing(s), {} unrecognized\n",
        rows.len() - failed,
        failed
    ));
    Ok(out)
}

/// A parsed model whose repository names no supported host.
#[derive(Debug, Clone, Serialize)]
pub struct UnsupportedRow {
    pub id: String,
    pub name: String,
    pub repository: String,
    pub platform: HostingPlatform,
}

/// One row per model on an unsupported host, in id order.
pub fn unsupported_rows(dataset: &Dataset) -> Vec<UnsupportedRow> {
    dataset
        .unsupported()
        .into_iter()
        .map(|(id, entry)| UnsupportedRow {
            id: id.to_string(),
            name: entry.name.clone(),
            repository: entry.repository.clone(),
            platform: entry.platform(),
        })
        .collect()
}
