//! Typed view of the harvester's JSON dumps.
//!
//! `ebrains-models.json` maps a model id to its entry; `ebrains-errors.json`
//! maps a model id to the reason it could not be harvested. Both are keyed
//! objects, so entries come back in ascending id order.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::mentions_supported_host;
use crate::platform::{Breakdown, HostingPlatform};
use crate::source::read_source;

/// Files recorded for a model.
///
/// The harvester writes either a list of notes (for platforms it defers to
/// another adapter) or a map from file name to download URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileListing {
    Notes(Vec<String>),
    Urls(BTreeMap<String, String>),
}

impl Default for FileListing {
    fn default() -> Self {
        FileListing::Notes(Vec::new())
    }
}

impl FileListing {
    /// Number of recorded items.
    pub fn len(&self) -> usize {
        match self {
            FileListing::Notes(notes) => notes.len(),
            FileListing::Urls(urls) => urls.len(),
        }
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single harvested model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    /// Hosting location, usually a URL.
    pub repository: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub files: FileListing,
}

impl ModelEntry {
    /// Platform hosting this model's files.
    pub fn platform(&self) -> HostingPlatform {
        HostingPlatform::classify(&self.repository)
    }

    /// Whether the repository avoids every supported-host substring.
    pub fn is_unsupported(&self) -> bool {
        !mentions_supported_host(&self.repository)
    }
}

/// The parsed contents of `ebrains-models.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    entries: BTreeMap<String, ModelEntry>,
}

impl Dataset {
    /// Load and parse a models dump.
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_source(path)?;
        let dataset = Self::from_json(&text)?;
        log::debug!("loaded {} model(s) from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Parse a models dump from a JSON string.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a model by id.
    pub fn get(&self, id: &str) -> Option<&ModelEntry> {
        self.entries.get(id)
    }

    /// Iterate `(id, entry)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    /// Tally entries by hosting platform.
    pub fn breakdown(&self) -> Breakdown {
        self.entries
            .values()
            .map(|entry| entry.repository.as_str())
            .collect()
    }

    /// Entries whose repository is on no supported host.
    pub fn unsupported(&self) -> Vec<(&str, &ModelEntry)> {
        self.iter().filter(|(_, entry)| entry.is_unsupported()).collect()
    }
}

/// Why a model could not be harvested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub name: String,
    pub reason: String,
}

/// The parsed contents of `ebrains-errors.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorLog {
    records: BTreeMap<String, ErrorRecord>,
}

impl ErrorLog {
    /// Load and parse an errors dump.
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_source(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate `(id, record)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorRecord)> {
        self.records.iter().map(|(id, record)| (id.as_str(), record))
    }

    /// Count records per reason, most common first.
    pub fn reasons(&self) -> Vec<(&str, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in self.records.values() {
            *counts.entry(record.reason.as_str()).or_default() += 1;
        }
        let mut reasons: Vec<_> = counts.into_iter().collect();
        reasons.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        reasons
    }
}
