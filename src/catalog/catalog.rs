use super::MediaItem;
use std::io::Write;
use thiserror::Error;
use tracing::debug;

pub const NOT_FOUND_MESSAGE: &str = "Title not found in the library.";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered collection of media, in insertion order. Titles are not unique.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    media: Vec<MediaItem>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    /// Appends an item. Passing `None` is rejected, the catalog never holds absent entries.
    pub fn insert(&mut self, media: impl Into<Option<MediaItem>>) -> Result<(), CatalogError> {
        let media = media
            .into()
            .ok_or_else(|| CatalogError::InvalidArgument("Media: null".to_owned()))?;
        debug!("Adding \"{}\" by {} to the catalog", media.title(), media.artist());
        self.media.push(media);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.media.len()
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MediaItem> {
        self.media.iter()
    }

    /// First item, in insertion order, whose title is exactly `title`.
    pub fn find_by_title(&self, title: &str) -> Option<&MediaItem> {
        self.media.iter().find(|media| media.title() == title)
    }

    pub fn display_all<W: Write>(&self, out: &mut W) -> Result<(), CatalogError> {
        for media in self.media.iter() {
            writeln!(out, "{}", media)?;
        }
        Ok(())
    }

    /// Plays the first item with the given title, or writes [`NOT_FOUND_MESSAGE`].
    /// A missing title is a normal outcome, only an absent or empty `title` is an error.
    pub fn play_by_title<'a, W: Write>(
        &self,
        title: impl Into<Option<&'a str>>,
        out: &mut W,
    ) -> Result<(), CatalogError> {
        let title = match title.into() {
            Some(title) if !title.is_empty() => title,
            _ => {
                return Err(CatalogError::InvalidArgument(
                    "Title: null or empty".to_owned(),
                ))
            }
        };

        match self.find_by_title(title) {
            Some(media) => {
                debug!("Playing \"{}\"", title);
                media.play(out)?;
            }
            None => {
                debug!("\"{}\" is not in the catalog", title);
                writeln!(out, "{}", NOT_FOUND_MESSAGE)?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MediaItem;
    type IntoIter = std::slice::Iter<'a, MediaItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.media.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MediaInfo;

    fn disc(artist: &str, title: &str, year: i32) -> MediaItem {
        MediaItem::disc(MediaInfo::new(artist, title, 10, 42.0, year).unwrap(), false, false)
    }

    fn output(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn starts_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut catalog = Catalog::new();
        for (i, title) in ["c", "a", "b"].iter().enumerate() {
            catalog.insert(disc("x", title, 2000)).unwrap();
            assert_eq!(catalog.len(), i + 1);
        }
        let titles: Vec<&str> = catalog.iter().map(|m| m.title()).collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn rejects_absent_media() {
        let mut catalog = Catalog::new();
        let result = catalog.insert(None::<MediaItem>);
        assert!(matches!(result, Err(CatalogError::InvalidArgument(_))));
        assert!(catalog.is_empty());
    }

    #[test]
    fn rejects_absent_or_empty_title() {
        let mut catalog = Catalog::new();
        catalog.insert(disc("x", "y", 2000)).unwrap();
        let mut out = Vec::new();

        assert!(matches!(
            catalog.play_by_title("", &mut out),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(matches!(
            catalog.play_by_title(None::<&str>, &mut out),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn reports_missing_title() {
        let mut catalog = Catalog::new();
        catalog.insert(disc("x", "y", 2000)).unwrap();
        let mut out = Vec::new();
        catalog.play_by_title("nope", &mut out).unwrap();
        assert_eq!(output(out), format!("{NOT_FOUND_MESSAGE}\n"));
    }

    #[test]
    fn title_match_is_case_sensitive() {
        let mut catalog = Catalog::new();
        catalog.insert(disc("x", "Harvest", 1972)).unwrap();
        let mut out = Vec::new();
        catalog.play_by_title("harvest", &mut out).unwrap();
        assert_eq!(output(out), format!("{NOT_FOUND_MESSAGE}\n"));
        assert!(catalog.find_by_title("harvest").is_none());
        assert!(catalog.find_by_title("Harvest").is_some());
    }

    #[test]
    fn plays_first_of_duplicate_titles() {
        let mut catalog = Catalog::new();
        catalog.insert(disc("First", "Same", 1990)).unwrap();
        catalog.insert(disc("Second", "Same", 1991)).unwrap();
        let mut out = Vec::new();
        catalog.play_by_title("Same", &mut out).unwrap();
        let text = output(out);
        assert!(text.contains("You selected the CD Same by First."));
        assert!(!text.contains("Second"));
        assert_eq!(catalog.find_by_title("Same").map(|m| m.artist()), Some("First"));
    }

    #[test]
    fn displays_every_item_in_order() {
        let mut catalog = Catalog::new();
        catalog.insert(disc("A", "one", 2001)).unwrap();
        catalog.insert(disc("B", "two", 2002)).unwrap();
        let mut out = Vec::new();
        catalog.display_all(&mut out).unwrap();
        let expected: String = catalog.iter().map(|m| format!("{}\n", m)).collect();
        assert_eq!(output(out), expected);
        assert_eq!(expected.lines().count(), 4);
    }

    #[test]
    fn displays_nothing_when_empty() {
        let mut out = Vec::new();
        Catalog::new().display_all(&mut out).unwrap();
        assert!(out.is_empty());
    }
}
