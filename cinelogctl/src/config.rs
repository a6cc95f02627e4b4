//! cinelogctl configuration
//!
//! Settings come from the first source that is present:
//! 1) `--config <path>` (TOML or JSON file),
//! 2) `$CINELOG_CONFIG_PATH` (TOML or JSON file),
//! 3) `$CINELOG_CONFIG_JSON` (inline JSON),
//! 4) `cinelog.toml` / `cinelog.json` in the working directory,
//! 5) built-in defaults.

use cinelog_core::{ColumnPolicy, ParseStrategy};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;
use tracing::debug;
use url::Url;

pub const CONFIG_PATH_VAR: &str = "CINELOG_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "CINELOG_CONFIG_JSON";

const DEFAULT_FILES: &[&str] = &["cinelog.toml", "cinelog.json"];

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "failed to parse config {origin}: toml error: {toml_error}; json error: {json_error}"
    )]
    Unrecognized {
        origin: String,
        toml_error: String,
        json_error: String,
    },
    #[error("invalid server URL '{url}'")]
    InvalidServerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid request timeout '{value}'")]
    InvalidTimeout {
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("sort column override '{key}' is not a column index")]
    InvalidColumn { key: String },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Flag(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// How table columns are parsed when sorting
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SortConfig {
    /// Strategy for columns without an override
    pub default: ParseStrategy,
    /// Per-column overrides keyed by column index, e.g. `"2" = "integer"`
    pub columns: BTreeMap<String, ParseStrategy>,
}

impl Default for SortConfig {
    fn default() -> Self {
        let canonical = ColumnPolicy::canonical();
        Self {
            default: canonical.default_strategy(),
            columns: canonical
                .overrides()
                .map(|(column, strategy)| (column.to_string(), strategy))
                .collect(),
        }
    }
}

impl SortConfig {
    pub fn policy(&self) -> Result<ColumnPolicy, ConfigLoadError> {
        self.columns.iter().try_fold(
            ColumnPolicy::uniform(self.default),
            |policy, (key, strategy)| {
                let column = key.trim().parse::<usize>().map_err(|_| {
                    ConfigLoadError::InvalidColumn { key: key.clone() }
                })?;
                Ok(policy.with_override(column, *strategy))
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CtlConfig {
    /// Base URL of the tracker backend
    pub server_url: String,
    /// Per-request timeout in humantime notation, e.g. `30s`
    pub request_timeout: String,
    pub sort: SortConfig,
}

impl Default for CtlConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            request_timeout: "30s".to_string(),
            sort: SortConfig::default(),
        }
    }
}

impl CtlConfig {
    /// Load `.env` from the working directory; a missing file is fine
    pub fn load_env_file() -> Result<Option<PathBuf>, ConfigLoadError> {
        match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(err) if err.not_found() => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn load(
        explicit: Option<&Path>,
    ) -> Result<(Self, ConfigSource), ConfigLoadError> {
        Self::load_with(explicit, |key| env::var(key).ok(), Path::new("."))
    }

    /// Resolve the configuration with an injectable environment and search
    /// directory for the default files.
    pub fn load_with(
        explicit: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
        search_dir: &Path,
    ) -> Result<(Self, ConfigSource), ConfigLoadError> {
        if let Some(path) = explicit {
            let config = Self::load_from_file(path)?;
            return Ok((config, ConfigSource::Flag(path.to_path_buf())));
        }

        if let Some(path_str) = lookup(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let config = Self::parse_json(&raw, CONFIG_JSON_VAR)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(search_dir) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let origin = path.display().to_string();
        debug!("loading cinelog config from {}", origin);

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents, &origin),
            Some("toml") => toml::from_str(&contents)
                .map_err(|source| ConfigLoadError::Toml { origin, source }),
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<Self, ConfigLoadError> {
        // TOML first, then JSON
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                ConfigLoadError::Unrecognized {
                    origin: origin.to_string(),
                    toml_error: toml_err.to_string(),
                    json_error: json_err.to_string(),
                }
            })
        })
    }

    pub fn parse_json(raw: &str, origin: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|source| ConfigLoadError::Json {
            origin: origin.to_string(),
            source,
        })
    }

    fn find_default_file(dir: &Path) -> Option<PathBuf> {
        DEFAULT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    pub fn server_url(&self) -> Result<Url, ConfigLoadError> {
        Url::parse(&self.server_url).map_err(|source| {
            ConfigLoadError::InvalidServerUrl {
                url: self.server_url.clone(),
                source,
            }
        })
    }

    pub fn request_timeout(&self) -> Result<Duration, ConfigLoadError> {
        humantime::parse_duration(self.request_timeout.trim()).map_err(
            |source| ConfigLoadError::InvalidTimeout {
                value: self.request_timeout.clone(),
                source,
            },
        )
    }

    /// Check every field that is parsed lazily
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.server_url()?;
        self.request_timeout()?;
        self.sort.policy()?;
        Ok(())
    }
}
