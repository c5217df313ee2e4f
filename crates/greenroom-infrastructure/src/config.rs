//! Console configuration.
//!
//! Loaded from `config.toml` under the user config dir. The remote API's
//! base URL is parameterized per record kind: the deployed backends do not
//! all share one host, so nothing is baked into the clients.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use greenroom_core::error::Result;

use crate::paths::{ConsolePaths, LocalFile};

/// Remote API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Default base URL, e.g. `http://localhost:5000/api`.
    pub base_url: String,
    /// Per-kind base-URL overrides, keyed by the kind path segment
    /// (`services`, `faqs`, ...).
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

impl ApiConfig {
    /// The base URL serving the given record kind.
    pub fn base_url_for(&self, kind: &str) -> &str {
        self.overrides
            .get(kind)
            .map(String::as_str)
            .unwrap_or(&self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            overrides: HashMap::new(),
        }
    }
}

/// External media host settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Host root, e.g. `https://api.cloudinary.com/v1_1`.
    pub base_url: String,
    /// Account segment of the upload URL.
    pub cloud_name: String,
    /// Unsigned upload preset sent with every upload.
    pub upload_preset: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.cloudinary.com/v1_1".to_string(),
            cloud_name: String::new(),
            upload_preset: "gallery".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

impl ConsoleConfig {
    /// Loads the config from the default location, falling back to
    /// defaults when no file exists yet.
    pub fn load_default() -> Result<Self> {
        let path = ConsolePaths::default().get(LocalFile::Config)?;
        Self::load_or_default(&path)
    }

    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}
