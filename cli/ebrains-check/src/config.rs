//! `ebrains-check.toml` discovery and input path resolution.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Config file name searched for from the working directory upward.
pub const CONFIG_FILE: &str = "ebrains-check.toml";

/// Models dump location used when neither the command line nor a config names one.
pub const DEFAULT_MODELS: &str = "scripts/ebrains-models.json";

/// Top-level config structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Input file locations.
    #[serde(default)]
    pub input: InputConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path to `ebrains-models.json`.
    #[serde(default)]
    pub models: Option<PathBuf>,
    /// Path to `ebrains-errors.json`.
    #[serde(default)]
    pub errors: Option<PathBuf>,
}

/// Logging section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level name: off, error, warn, info, debug, trace.
    #[serde(default)]
    pub level: Option<String>,
}

/// A config together with the directory it was found in.
#[derive(Debug, Clone, Default)]
pub struct Located {
    pub config: CheckConfig,
    /// Directory holding the config file, if one was found.
    pub dir: Option<PathBuf>,
}

impl CheckConfig {
    /// Directory of the nearest `ebrains-check.toml` at or above `start_dir`.
    ///
    /// The search stops at the first directory holding the default models dump.
    /// That directory is a harvest checkout, and configs above it belong to
    /// something else.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        for dir in start_dir.ancestors() {
            if dir.join(CONFIG_FILE).is_file() {
                return Some(dir.to_path_buf());
            }
            if dir.join(DEFAULT_MODELS).is_file() {
                return None;
            }
        }
        None
    }

    /// Read and parse `ebrains-check.toml` from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a config from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing ebrains-check.toml")
    }

    /// Configured log level, if any.
    pub fn log_level(&self) -> Result<Option<LevelFilter>> {
        self.logging
            .level
            .as_deref()
            .map(|level| {
                level
                    .parse::<LevelFilter>()
                    .map_err(|_| anyhow!("invalid log level '{level}' in {CONFIG_FILE}"))
            })
            .transpose()
    }
}

impl Located {
    /// Load the nearest config above `cwd`, or an empty one.
    pub fn discover(cwd: &Path) -> Result<Self> {
        Ok(match CheckConfig::find(cwd) {
            Some(dir) => Located {
                config: CheckConfig::load(&dir)?,
                dir: Some(dir),
            },
            None => Located::default(),
        })
    }

    /// Models dump path: command line, then config, then the default under `cwd`.
    pub fn models_path(&self, cwd: &Path, cli: Option<&Path>) -> PathBuf {
        if let Some(path) = cli {
            return cwd.join(path);
        }
        match (&self.config.input.models, &self.dir) {
            (Some(path), Some(dir)) => dir.join(path),
            _ => cwd.join(DEFAULT_MODELS),
        }
    }

    /// Errors dump path: command line, then config. No default.
    pub fn errors_path(&self, cwd: &Path, cli: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = cli {
            return Some(cwd.join(path));
        }
        match (&self.config.input.errors, &self.dir) {
            (Some(path), Some(dir)) => Some(dir.join(path)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config = CheckConfig::from_str(
            r#"
[input]
models = "data/models.json"
errors = "data/errors.json"

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.input.models, Some(PathBuf::from("data/models.json")));
        assert_eq!(config.input.errors, Some(PathBuf::from("data/errors.json")));
        assert_eq!(config.log_level().unwrap(), Some(LevelFilter::Debug));
    }

    #[test]
    fn empty_config_is_valid() {
        let config = CheckConfig::from_str("").unwrap();
        assert!(config.input.models.is_none());
        assert_eq!(config.log_level().unwrap(), None);
    }

    #[test]
    fn invalid_level_is_rejected() {
        let config = CheckConfig::from_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.log_level().is_err());
    }

    #[test]
    fn find_searches_upward() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[input]\nmodels = \"m.json\"\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let located = Located::discover(&nested).unwrap();
        assert_eq!(located.dir.as_deref(), Some(dir.path()));
        assert_eq!(located.models_path(&nested, None), dir.path().join("m.json"));
    }

    #[test]
    fn search_stops_at_dump_checkout() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[input]\nmodels = \"m.json\"\n").unwrap();
        let checkout = dir.path().join("harvest");
        std::fs::create_dir_all(checkout.join("scripts")).unwrap();
        std::fs::write(checkout.join(DEFAULT_MODELS), "{}").unwrap();
        let nested = checkout.join("scripts");

        assert_eq!(CheckConfig::find(&nested), None);
        let located = Located::discover(&nested).unwrap();
        assert!(located.dir.is_none());
        assert_eq!(located.models_path(&checkout, None), checkout.join(DEFAULT_MODELS));
    }

    #[test]
    fn config_beside_dump_still_applies() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("scripts")).unwrap();
        std::fs::write(dir.path().join(DEFAULT_MODELS), "{}").unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[logging]\nlevel = \"info\"\n").unwrap();

        assert_eq!(CheckConfig::find(dir.path()).as_deref(), Some(dir.path()));
    }

    #[test]
    fn malformed_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "not = [toml").unwrap();

        let err = Located::discover(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains(CONFIG_FILE));
    }

    #[test]
    fn default_models_path_without_config() {
        let cwd = Path::new("/work");
        let located = Located::default();
        assert_eq!(
            located.models_path(cwd, None),
            PathBuf::from("/work/scripts/ebrains-models.json")
        );
        assert_eq!(located.errors_path(cwd, None), None);
    }

    #[test]
    fn command_line_overrides_config() {
        let located = Located {
            config: CheckConfig::from_str("[input]\nmodels = \"m.json\"\n").unwrap(),
            dir: Some(PathBuf::from("/proj")),
        };
        assert_eq!(
            located.models_path(Path::new("/work"), Some(Path::new("other.json"))),
            PathBuf::from("/work/other.json")
        );
    }
}
