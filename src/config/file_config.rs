use crate::catalog::MediaEntry;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    /// Fail instead of skipping invalid media entries.
    pub strict: Option<bool>,
    /// Titles to play, in order.
    pub play: Option<Vec<String>>,
    pub media: Vec<MediaEntry>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
