//! Hosting platform classification.
//!
//! Each harvested model points at one repository. The harvester sorts those
//! into the platforms it has adapters for, and tallies the rest as `other`.
//! Classification uses its own substrings, which are not the filter's
//! allow-list: `cscs.ch` here versus `object.cscs` there, and the full
//! `data-proxy.ebrains.eu` host here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A hosting platform for model files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostingPlatform {
    #[serde(rename = "github")]
    GitHub,
    Cscs,
    #[serde(rename = "modeldb")]
    ModelDb,
    DataProxy,
    Other,
}

impl HostingPlatform {
    /// All platforms, in report order.
    pub const ALL: [HostingPlatform; 5] = [
        HostingPlatform::GitHub,
        HostingPlatform::Cscs,
        HostingPlatform::ModelDb,
        HostingPlatform::DataProxy,
        HostingPlatform::Other,
    ];

    /// Classify a repository string. The first matching rule wins.
    pub fn classify(repository: &str) -> Self {
        if repository.contains("github") {
            HostingPlatform::GitHub
        } else if repository.contains("cscs.ch") {
            HostingPlatform::Cscs
        } else if repository.contains("modeldb") || repository.contains("yale") {
            HostingPlatform::ModelDb
        } else if repository.contains("data-proxy.ebrains.eu") {
            HostingPlatform::DataProxy
        } else {
            HostingPlatform::Other
        }
    }

    /// Short lowercase key used in reports.
    pub fn key(self) -> &'static str {
        match self {
            HostingPlatform::GitHub => "github",
            HostingPlatform::Cscs => "cscs",
            HostingPlatform::ModelDb => "modeldb",
            HostingPlatform::DataProxy => "data-proxy",
            HostingPlatform::Other => "other",
        }
    }

    /// Whether a file listing can be derived offline for this platform.
    pub fn has_listing(self) -> bool {
        matches!(self, HostingPlatform::Cscs | HostingPlatform::DataProxy)
    }
}

impl fmt::Display for HostingPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-platform entry counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub github: usize,
    pub cscs: usize,
    pub modeldb: usize,
    #[serde(rename = "data-proxy")]
    pub data_proxy: usize,
    pub other: usize,
}

impl Breakdown {
    /// Count one entry on `platform`.
    pub fn record(&mut self, platform: HostingPlatform) {
        *self.slot(platform) += 1;
    }

    /// Classify and count a repository string.
    pub fn record_repository(&mut self, repository: &str) -> HostingPlatform {
        let platform = HostingPlatform::classify(repository);
        self.record(platform);
        platform
    }

    /// Count for a single platform.
    pub fn count(&self, platform: HostingPlatform) -> usize {
        match platform {
            HostingPlatform::GitHub => self.github,
            HostingPlatform::Cscs => self.cscs,
            HostingPlatform::ModelDb => self.modeldb,
            HostingPlatform::DataProxy => self.data_proxy,
            HostingPlatform::Other => self.other,
        }
    }

    /// Total entries counted.
    pub fn total(&self) -> usize {
        HostingPlatform::ALL.iter().map(|p| self.count(*p)).sum()
    }

    fn slot(&mut self, platform: HostingPlatform) -> &mut usize {
        match platform {
            HostingPlatform::GitHub => &mut self.github,
            HostingPlatform::Cscs => &mut self.cscs,
            HostingPlatform::ModelDb => &mut self.modeldb,
            HostingPlatform::DataProxy => &mut self.data_proxy,
            HostingPlatform::Other => &mut self.other,
        }
    }
}

impl<'a> FromIterator<&'a str> for Breakdown {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut breakdown = Breakdown::default();
        for repository in iter {
            breakdown.record_repository(repository);
        }
        breakdown
    }
}
