//! Music Library
//!
//! An in-memory catalog of vinyl records, compact discs and audio files.

pub mod catalog;
pub mod config;

pub use catalog::{Catalog, CatalogError, MediaInfo, MediaItem, MediaKind, ValidationError};
pub use config::{AppConfig, CliConfig, FileConfig};
