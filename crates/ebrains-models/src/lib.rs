//! Hosting-location checks for EBRAINS model metadata dumps.
//!
//! The metadata harvester writes `ebrains-models.json`, one field per line.
//! This crate answers one question about that file: which model entries live
//! somewhere other than the platforms the downstream adapters know how to
//! read?
//!
//! - [`filter`] — the line filter over the raw dump (no JSON parsing)
//! - [`source`] — reading the dump, with a single unavailable-source failure
//! - [`platform`] — classify a repository string into a hosting platform
//! - [`dataset`] — typed view of the models and errors dumps
//! - [`location`] — derive file-listing endpoints for CSCS and data-proxy URLs
//! - [`report`] — human and JSON rendering

pub mod dataset;
pub mod error;
pub mod filter;
pub mod location;
pub mod platform;
pub mod report;
pub mod source;

// Re-exports for convenience.
pub use dataset::{Dataset, ErrorLog, ErrorRecord, FileListing, ModelEntry};
pub use error::{ModelsError, Result};
pub use filter::{filter_lines, filter_text, is_unsupported, REPOSITORY_MARKER, SUPPORTED_HOSTS};
pub use location::{ListingLocation, ListingSource};
pub use platform::{Breakdown, HostingPlatform};
pub use report::{BreakdownReport, ReportFormat};
pub use source::{read_source, scan_file};
