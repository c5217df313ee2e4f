//! Centralized path management for local console state.

use std::path::PathBuf;

use greenroom_core::error::{ConsoleError, Result};

/// Files the console keeps under the user config directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalFile {
    Config,
    Session,
}

impl LocalFile {
    fn file_name(&self) -> &'static str {
        match self {
            LocalFile::Config => "config.toml",
            LocalFile::Session => "session.toml",
        }
    }
}

/// Resolves console file locations: `<config_dir>/greenroom/<file>`.
///
/// A root override is used by tests and by shells that sandbox their state.
#[derive(Debug, Clone)]
pub struct ConsolePaths {
    root: Option<PathBuf>,
}

impl ConsolePaths {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    pub fn get(&self, file: LocalFile) -> Result<PathBuf> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => dirs::config_dir()
                .ok_or_else(|| ConsoleError::storage("could not determine config directory"))?
                .join("greenroom"),
        };
        Ok(root.join(file.file_name()))
    }
}

impl Default for ConsolePaths {
    fn default() -> Self {
        Self::new(None)
    }
}
