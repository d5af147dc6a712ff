//! `ebrains-check listing` — resolve a saved container listing for one repository.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ebrains_models::{read_source, ListingLocation, ReportFormat};

/// Select the objects belonging to `url` from a listing saved at `listing`.
///
/// The listing is the body returned by the location's listing URL: plain text
/// for CSCS, JSON for the data proxy.
pub fn run(url: &str, listing: &Path, format: ReportFormat, out: &mut impl Write) -> Result<()> {
    let location = ListingLocation::from_repository(url)?;
    let body = read_source(listing)?;
    let files = location
        .select(&body)
        .with_context(|| format!("reading listing {}", listing.display()))?;

    match format {
        ReportFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&files)?)?;
        }
        ReportFormat::Human => {
            for (name, download) in &files {
                writeln!(out, "{name}\t{download}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_cscs_listing() {
        let dir = tempfile::tempdir().unwrap();
        let listing = dir.path().join("listing.txt");
        std::fs::write(&listing, "rat/\nrat/cell.hoc\nmouse/cell.hoc\n").unwrap();

        let mut out: Vec<u8> = Vec::new();
        run(
            "https://object.cscs.ch/v1/AUTH_a/c?prefix=rat/",
            &listing,
            ReportFormat::Human,
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "rat/cell.hoc\thttps://object.cscs.ch/v1/AUTH_a/c/rat/cell.hoc\n"
        );
    }

    #[test]
    fn rejects_github_url() {
        let dir = tempfile::tempdir().unwrap();
        let listing = dir.path().join("listing.txt");
        std::fs::write(&listing, "").unwrap();

        let err = run(
            "https://github.com/o/r",
            &listing,
            ReportFormat::Human,
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("unrecognized location"));
    }
}
