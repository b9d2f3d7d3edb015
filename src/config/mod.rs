mod file_config;

pub use file_config::FileConfig;

use crate::catalog::MediaEntry;
use anyhow::{bail, Result};

/// CLI arguments that take part in config resolution.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub titles: Vec<String>,
    pub list_only: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub media: Vec<MediaEntry>,
    pub play: Vec<String>,
    pub strict: bool,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// Without a file the demo catalog is used. CLI titles override the file's play list.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let (media, file_play, strict) = match file_config {
            Some(file) => {
                if file.media.is_empty() {
                    bail!("Config file does not contain any media");
                }
                (file.media, file.play.unwrap_or_default(), file.strict.unwrap_or(false))
            }
            None => (demo_media(), demo_play_list(), true),
        };

        let play = if cli.list_only {
            vec![]
        } else if !cli.titles.is_empty() {
            cli.titles.clone()
        } else {
            file_play
        };

        Ok(Self {
            media,
            play,
            strict,
        })
    }
}

pub fn demo_media() -> Vec<MediaEntry> {
    vec![
        MediaEntry::vinyl("The Beatles", "Hey Jane", 1, 7.0, 1968, 7.0, 45.0),
        MediaEntry::disc(
            "Neil Young & Crazy Horse",
            "Everybody Knows This Is Nowhere",
            4,
            40.0,
            1969,
            false,
            false,
        ),
        MediaEntry::audio_track(
            "Donnie Iris and the Cruisers",
            "Ah Leah!",
            1,
            4.0,
            1980,
            "wav",
        ),
    ]
}

pub fn demo_play_list() -> Vec<String> {
    ["Everybody Knows This Is Nowhere", "Hey Jane", "Ah Leah!"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
