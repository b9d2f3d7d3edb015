use super::{AudioTrack, Disc, Vinyl};
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

pub const THANK_YOU_MESSAGE: &str = "Thank you for using our Music Library.";

/// Errors raised while constructing a media item.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Artist must not be empty")]
    EmptyArtist,

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Invalid track count: {0}")]
    InvalidTrackCount(i32),

    #[error("Invalid total runtime: {0}")]
    InvalidRuntime(f64),

    #[error("Invalid release year: {0}")]
    InvalidReleaseYear(i32),

    #[error("Invalid record size: {0}")]
    InvalidRecordSize(f64),

    #[error("Invalid RPM: {0}")]
    InvalidRpm(f64),

    #[error("Invalid file type: {0}")]
    InvalidFileType(String),
}

/// Fields shared by every kind of media.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaInfo {
    artist: String,
    title: String,
    track_count: u32,
    total_runtime: f64,
    release_year: u32,
}

impl MediaInfo {
    pub fn new(
        artist: impl Into<String>,
        title: impl Into<String>,
        track_count: i32,
        total_runtime: f64,
        release_year: i32,
    ) -> Result<MediaInfo, ValidationError> {
        let artist = artist.into();
        let title = title.into();

        if artist.is_empty() {
            return Err(ValidationError::EmptyArtist);
        }
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let track_count = u32::try_from(track_count)
            .ok()
            .filter(|count| *count > 0)
            .ok_or(ValidationError::InvalidTrackCount(track_count))?;
        if total_runtime.is_nan() || total_runtime <= 0.0 {
            return Err(ValidationError::InvalidRuntime(total_runtime));
        }
        let release_year = u32::try_from(release_year)
            .map_err(|_| ValidationError::InvalidReleaseYear(release_year))?;

        Ok(MediaInfo {
            artist,
            title,
            track_count,
            total_runtime,
            release_year,
        })
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn track_count(&self) -> u32 {
        self.track_count
    }

    /// Total runtime in minutes.
    pub fn total_runtime(&self) -> f64 {
        self.total_runtime
    }

    pub fn release_year(&self) -> u32 {
        self.release_year
    }

    pub fn describe(&self) -> String {
        format!(
            "Album [Artist={}, title={}, trackCount={}, totalMinutes={:?}, year={}]",
            self.artist, self.title, self.track_count, self.total_runtime, self.release_year
        )
    }

    /// Common part of every play action, each kind appends its own lines after it.
    pub fn play<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", THANK_YOU_MESSAGE)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MediaKind {
    Vinyl(Vinyl),
    Disc(Disc),
    AudioTrack(AudioTrack),
}

/// A validated, immutable catalog entry.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaItem {
    info: MediaInfo,
    kind: MediaKind,
}

impl MediaItem {
    pub fn vinyl(
        info: MediaInfo,
        diameter_inches: f64,
        rpm: f64,
    ) -> Result<MediaItem, ValidationError> {
        let vinyl = Vinyl::new(diameter_inches, rpm)?;
        Ok(MediaItem {
            info,
            kind: MediaKind::Vinyl(vinyl),
        })
    }

    pub fn disc(info: MediaInfo, has_bonus_track: bool, is_digipack: bool) -> MediaItem {
        MediaItem {
            info,
            kind: MediaKind::Disc(Disc::new(has_bonus_track, is_digipack)),
        }
    }

    pub fn audio_track(
        info: MediaInfo,
        file_type: impl Into<String>,
    ) -> Result<MediaItem, ValidationError> {
        let track = AudioTrack::new(file_type)?;
        Ok(MediaItem {
            info,
            kind: MediaKind::AudioTrack(track),
        })
    }

    pub fn info(&self) -> &MediaInfo {
        &self.info
    }

    pub fn kind(&self) -> &MediaKind {
        &self.kind
    }

    pub fn artist(&self) -> &str {
        self.info.artist()
    }

    pub fn title(&self) -> &str {
        self.info.title()
    }

    pub fn describe(&self) -> String {
        let details = match &self.kind {
            MediaKind::Vinyl(vinyl) => vinyl.describe(),
            MediaKind::Disc(disc) => disc.describe(),
            MediaKind::AudioTrack(track) => track.describe(),
        };
        format!("{}\n{}", self.info.describe(), details)
    }

    pub fn play<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.info.play(out)?;
        match &self.kind {
            MediaKind::Vinyl(vinyl) => vinyl.play(&self.info, out),
            MediaKind::Disc(disc) => disc.play(&self.info, out),
            MediaKind::AudioTrack(track) => track.play(&self.info, out),
        }
    }
}

impl fmt::Display for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
