//! File-listing endpoints for CSCS object storage and the EBRAINS data proxy.
//!
//! A repository URL usually points at one object or a prefix inside a larger
//! container. Listing the container and keeping the objects under the prefix
//! gives the model's files. Everything here is offline: URLs are derived, and
//! listings are read from text the caller already has.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelsError, Result};
use crate::platform::HostingPlatform;

/// Number of `/`-separated segments forming a CSCS container URL:
/// `https:`, ``, `object.cscs.ch`, `v1`, `AUTH_<account>`, `<container>`.
const CSCS_CONTAINER_SEGMENTS: usize = 6;

const PREFIX_QUERY: &str = "?prefix=";

/// Which listing format a location uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingSource {
    /// Plain-text listing, one object name per token.
    Cscs,
    /// JSON listing with an `objects` array.
    DataProxy,
}

/// Where to list a repository's files, and which objects belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingLocation {
    pub source: ListingSource,
    /// URL returning the container listing.
    pub listing_url: String,
    /// Object-name prefix selecting this model's files. Empty selects everything.
    pub prefix: String,
}

impl ListingLocation {
    /// Derive a listing location for `repository`.
    pub fn from_repository(repository: &str) -> Result<Self> {
        match HostingPlatform::classify(repository) {
            HostingPlatform::Cscs => Self::cscs(repository),
            HostingPlatform::DataProxy => Ok(Self::data_proxy(repository)),
            other => Err(ModelsError::UnrecognizedLocation {
                url: repository.to_string(),
                detail: format!("no file listing for {other} repositories"),
            }),
        }
    }

    /// Derive the container URL and object prefix for a CSCS URL.
    ///
    /// Two shapes are understood: a zipped object with query parameters
    /// (`.../container/path/name.zip?use_cell=...`), and a container with a
    /// `?prefix=` query.
    pub fn cscs(url: &str) -> Result<Self> {
        let (listing_url, prefix) = if url.contains(".zip?") {
            let stem = url.split(".zip").next().unwrap_or(url);
            let segments: Vec<&str> = stem.split('/').collect();
            // A zip sitting at the container root has no prefix: every object is selected.
            let split = segments.len().min(CSCS_CONTAINER_SEGMENTS);
            (segments[..split].join("/"), segments[split..].join("/"))
        } else if let Some((container, prefix)) = url.split_once(PREFIX_QUERY) {
            (container.to_string(), prefix.to_string())
        } else {
            log::warn!("new cscs url format: {url}");
            return Err(ModelsError::UnrecognizedLocation {
                url: url.to_string(),
                detail: "expected a .zip? object or a ?prefix= query".into(),
            });
        };

        log::debug!("cscs listing {listing_url} prefix {prefix}");
        Ok(ListingLocation {
            source: ListingSource::Cscs,
            listing_url,
            prefix,
        })
    }

    /// Derive the bucket URL for a data-proxy URL.
    ///
    /// The data proxy applies the `?prefix=` query itself, so the full URL is
    /// the listing request and the bucket URL is the base for object links.
    pub fn data_proxy(url: &str) -> Self {
        let prefix = url
            .split_once(PREFIX_QUERY)
            .map(|(_, prefix)| prefix.to_string())
            .unwrap_or_default();
        ListingLocation {
            source: ListingSource::DataProxy,
            listing_url: url.to_string(),
            prefix,
        }
    }

    /// Base URL that object names are appended to.
    pub fn object_base(&self) -> &str {
        match self.listing_url.split_once(PREFIX_QUERY) {
            Some((base, _)) => base,
            None => &self.listing_url,
        }
    }

    /// Resolve a saved listing into `object name -> download URL`.
    pub fn select(&self, listing: &str) -> Result<BTreeMap<String, String>> {
        let files = match self.source {
            ListingSource::Cscs => self.select_cscs(listing),
            ListingSource::DataProxy => self.select_data_proxy(listing)?,
        };
        if files.is_empty() {
            log::warn!(
                "no files found for {}: check kg.ebrains.eu to verify",
                self.listing_url
            );
        }
        Ok(files)
    }

    fn select_cscs(&self, listing: &str) -> BTreeMap<String, String> {
        let base = self.object_base();
        listing
            .split_whitespace()
            .filter(|name| {
                name.starts_with(self.prefix.as_str()) && !name.ends_with('/') && *name != self.prefix
            })
            .map(|name| (name.to_string(), format!("{base}/{name}")))
            .collect()
    }

    fn select_data_proxy(&self, listing: &str) -> Result<BTreeMap<String, String>> {
        let parsed: DataProxyListing = serde_json::from_str(listing)?;
        let base = self.object_base();
        Ok(parsed
            .objects
            .into_iter()
            .map(|object| {
                let url = format!("{base}/{}", object.name);
                (object.name, url)
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct DataProxyListing {
    objects: Vec<DataProxyObject>,
}

#[derive(Debug, Deserialize)]
struct DataProxyObject {
    name: String,
}
