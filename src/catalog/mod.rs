mod audio_track;
mod catalog;
mod disc;
mod load;
mod media;
mod vinyl;

pub use audio_track::{AudioFormat, AudioTrack};
pub use catalog::{Catalog, CatalogError, NOT_FOUND_MESSAGE};
pub use disc::Disc;
pub use load::{load_catalog, EntryKind, MediaEntry, Problem as LoadCatalogProblem};
pub use media::{MediaInfo, MediaItem, MediaKind, ValidationError, THANK_YOU_MESSAGE};
pub use vinyl::{RecordSize, Speed, Vinyl};
