use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    assemble::WeatherAssembler,
    icon::{DEFAULT_RESOURCE_ROOT, IconResolver},
    schema::FeedSchema,
};

pub const DEFAULT_ENDPOINT: &str = "http://www.google.com/ig/api";
pub const DEFAULT_QUERY_PARAM: &str = "weather";
pub const DEFAULT_LOCATION: &str = "New York";

/// Places offered in the location menu unless configured otherwise.
pub const PRESET_LOCATIONS: &[&str] = &[
    "San Francisco",
    "Oakland",
    "Boston",
    "New York",
    "Washington DC",
    "Tampa",
    "Houston",
    "Montreal",
    "Los Angeles",
    "Miami",
    "West Palm Beach",
];

/// Top-level configuration stored on disk. Missing keys take defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the XML weather feed.
    pub endpoint: String,

    /// Query parameter that carries the location name.
    pub query_param: String,

    /// Prefix joined onto resolved icon file names.
    pub resource_root: String,

    /// Location fetched when no preference has been stored yet.
    pub default_location: String,

    /// Example TOML:
    /// locations = ["Boston", "Tampa"]
    pub locations: Vec<String>,

    pub schema: FeedSchema,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            resource_root: DEFAULT_RESOURCE_ROOT.to_string(),
            default_location: DEFAULT_LOCATION.to_string(),
            locations: PRESET_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            schema: FeedSchema::default(),
        }
    }
}

impl Config {
    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.endpoint)
            .with_context(|| format!("Invalid feed endpoint '{}'", self.endpoint))
    }

    pub fn assembler(&self) -> WeatherAssembler {
        WeatherAssembler::new(self.schema.clone(), IconResolver::new(self.resource_root.clone()))
    }

    /// Load config from the platform location, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load config from `path`, or return defaults if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }
}

pub(crate) fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "weather-feed", "weather-feed-cli")
        .ok_or_else(|| anyhow!("Could not determine platform config directory"))
}
