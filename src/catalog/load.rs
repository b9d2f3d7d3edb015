//! Catalog loading from unvalidated media descriptions

use super::{Catalog, MediaInfo, MediaItem, ValidationError};
use anyhow::{bail, Result};
use serde::Deserialize;
use std::fmt;
use tracing::{info, warn};

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Vinyl,
    Disc,
    AudioTrack,
}

/// A media item as written in a config file, before any validation.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MediaEntry {
    pub kind: EntryKind,
    pub artist: String,
    pub title: String,
    pub track_count: i32,
    pub total_runtime: f64,
    pub release_year: i32,

    // Vinyl
    #[serde(default)]
    pub diameter_inches: Option<f64>,
    #[serde(default)]
    pub rpm: Option<f64>,

    // Disc, both default to false
    #[serde(default)]
    pub has_bonus_track: Option<bool>,
    #[serde(default)]
    pub is_digipack: Option<bool>,

    // Audio track
    #[serde(default)]
    pub file_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    InvalidMedia {
        index: usize,
        title: String,
        error: ValidationError,
    },
    MissingField {
        index: usize,
        title: String,
        field: &'static str,
    },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::InvalidMedia {
                index,
                title,
                error,
            } => write!(f, "Entry #{} \"{}\": {}", index, title, error),
            Problem::MissingField {
                index,
                title,
                field,
            } => write!(f, "Entry #{} \"{}\": missing field {}", index, title, field),
        }
    }
}

impl MediaEntry {
    #[allow(clippy::too_many_arguments)]
    pub fn vinyl(
        artist: &str,
        title: &str,
        track_count: i32,
        total_runtime: f64,
        release_year: i32,
        diameter_inches: f64,
        rpm: f64,
    ) -> MediaEntry {
        MediaEntry {
            diameter_inches: Some(diameter_inches),
            rpm: Some(rpm),
            ..MediaEntry::base(
                EntryKind::Vinyl,
                artist,
                title,
                track_count,
                total_runtime,
                release_year,
            )
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn disc(
        artist: &str,
        title: &str,
        track_count: i32,
        total_runtime: f64,
        release_year: i32,
        has_bonus_track: bool,
        is_digipack: bool,
    ) -> MediaEntry {
        MediaEntry {
            has_bonus_track: Some(has_bonus_track),
            is_digipack: Some(is_digipack),
            ..MediaEntry::base(
                EntryKind::Disc,
                artist,
                title,
                track_count,
                total_runtime,
                release_year,
            )
        }
    }

    pub fn audio_track(
        artist: &str,
        title: &str,
        track_count: i32,
        total_runtime: f64,
        release_year: i32,
        file_type: &str,
    ) -> MediaEntry {
        MediaEntry {
            file_type: Some(file_type.to_owned()),
            ..MediaEntry::base(
                EntryKind::AudioTrack,
                artist,
                title,
                track_count,
                total_runtime,
                release_year,
            )
        }
    }

    fn base(
        kind: EntryKind,
        artist: &str,
        title: &str,
        track_count: i32,
        total_runtime: f64,
        release_year: i32,
    ) -> MediaEntry {
        MediaEntry {
            kind,
            artist: artist.to_owned(),
            title: title.to_owned(),
            track_count,
            total_runtime,
            release_year,
            diameter_inches: None,
            rpm: None,
            has_bonus_track: None,
            is_digipack: None,
            file_type: None,
        }
    }

    /// Validates the entry, base fields first.
    pub fn build(&self, index: usize) -> Result<MediaItem, Problem> {
        let invalid = |error| Problem::InvalidMedia {
            index,
            title: self.title.clone(),
            error,
        };
        let missing = |field| Problem::MissingField {
            index,
            title: self.title.clone(),
            field,
        };

        let info = MediaInfo::new(
            self.artist.as_str(),
            self.title.as_str(),
            self.track_count,
            self.total_runtime,
            self.release_year,
        )
        .map_err(invalid)?;

        match self.kind {
            EntryKind::Vinyl => {
                let diameter_inches = self.diameter_inches.ok_or_else(|| missing("diameter_inches"))?;
                let rpm = self.rpm.ok_or_else(|| missing("rpm"))?;
                MediaItem::vinyl(info, diameter_inches, rpm).map_err(invalid)
            }
            EntryKind::Disc => Ok(MediaItem::disc(
                info,
                self.has_bonus_track.unwrap_or(false),
                self.is_digipack.unwrap_or(false),
            )),
            EntryKind::AudioTrack => {
                let file_type = self.file_type.as_deref().ok_or_else(|| missing("file_type"))?;
                MediaItem::audio_track(info, file_type).map_err(invalid)
            }
        }
    }
}

/// Builds a catalog from `entries`, skipping the invalid ones.
/// With `strict` any problem fails the whole load.
pub fn load_catalog(entries: &[MediaEntry], strict: bool) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    let mut problems: Vec<Problem> = vec![];

    for (index, entry) in entries.iter().enumerate() {
        match entry.build(index) {
            Ok(media) => catalog.insert(media)?,
            Err(problem) => problems.push(problem),
        }
    }

    if !problems.is_empty() {
        warn!("Found {} problems:", problems.len());
        for problem in problems.iter() {
            warn!("- {}", problem);
        }
        if strict {
            bail!(
                "Could not load catalog, {} of {} entries are invalid",
                problems.len(),
                entries.len()
            );
        }
    }

    info!("Catalog has {} media items", catalog.len());
    Ok(catalog)
}
