//! Settings management for ghteams

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Settings file looked up in the working directory first
pub const SETTINGS_FILE: &str = "settings.yml";

/// Default GitHub API host
pub const DEFAULT_API_HOST: &str = "https://api.github.com";

/// Application settings loaded from `settings.yml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Organizations to operate over, in order
    #[serde(default)]
    pub orgs: Option<OrgList>,

    /// GitHub API base URL (GitHub Enterprise installs)
    #[serde(default)]
    pub api_host: Option<String>,

    /// Default admin login
    #[serde(default)]
    pub username: Option<String>,

    /// File the settings were read from
    #[serde(skip)]
    pub path: PathBuf,
}

/// The `orgs` key accepts either a whitespace-separated string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OrgList {
    Inline(String),
    List(Vec<String>),
}

impl OrgList {
    fn ids(&self) -> Vec<String> {
        match self {
            OrgList::Inline(s) => s.split_whitespace().map(str::to_string).collect(),
            OrgList::List(items) => items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl Settings {
    /// Resolve the settings path: explicit override, then `./settings.yml`,
    /// then `<config dir>/ghteams/settings.yml`.
    pub fn resolve_path(path_override: Option<&str>) -> PathBuf {
        if let Some(path) = path_override {
            return PathBuf::from(path);
        }

        let local = PathBuf::from(SETTINGS_FILE);
        if local.exists() {
            return local;
        }

        match dirs::config_dir() {
            Some(dir) => {
                let user_path = dir.join("ghteams").join(SETTINGS_FILE);
                if user_path.exists() { user_path } else { local }
            }
            None => local,
        }
    }

    /// Load settings from an optional path override
    pub fn load_at(path_override: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(path_override))
    }

    /// Load settings from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let mut settings: Settings = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        settings.path = path.to_path_buf();

        Ok(settings)
    }

    /// Organization identifiers in configured order.
    ///
    /// A missing, null or blank `orgs` key is a startup failure.
    pub fn org_ids(&self) -> Result<Vec<String>> {
        let ids = self.orgs.as_ref().map(OrgList::ids).unwrap_or_default();
        if ids.is_empty() {
            return Err(ConfigError::NoOrgs(self.path.clone()).into());
        }
        Ok(ids)
    }

    /// API host with precedence: override > settings > default
    pub fn api_host(&self, host_override: Option<&str>) -> String {
        host_override
            .or(self.api_host.as_deref())
            .unwrap_or(DEFAULT_API_HOST)
            .trim_end_matches('/')
            .to_string()
    }
}
