use std::borrow::Cow;
use std::path::Path;

use lofty::prelude::{Accessor, TaggedFileExt};
use tracing::debug;

/// Tag values read from a single file. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub track: Option<u32>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}

/// A reading where track, title, artist and album are all present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteTags {
    pub track: u32,
    pub title: String,
    pub artist: String,
    pub album: String,
}

impl TrackTags {
    pub fn complete(self) -> Option<CompleteTags> {
        Some(CompleteTags {
            track: self.track?,
            title: self.title?,
            artist: self.artist?,
            album: self.album?,
        })
    }
}

/// Source of per-file tags.
///
/// Implementations never fail: unreadable or untagged files yield empty tags.
pub trait TagReader {
    fn read_tags(&self, path: &Path) -> TrackTags;
}

/// Reads tags from audio files on disk with lofty.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read_tags(&self, path: &Path) -> TrackTags {
        let tagged = match lofty::read_from_path(path) {
            Ok(tagged) => tagged,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no readable tags");
                return TrackTags::default();
            }
        };

        let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
            debug!(path = %path.display(), "file carries no tag");
            return TrackTags::default();
        };

        TrackTags {
            track: tag.track(),
            title: non_blank(tag.title()),
            artist: non_blank(tag.artist()),
            album: non_blank(tag.album()),
        }
    }
}

fn non_blank(value: Option<Cow<'_, str>>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn tags(
        track: Option<u32>,
        title: Option<&str>,
        artist: Option<&str>,
        album: Option<&str>,
    ) -> TrackTags {
        TrackTags {
            track,
            title: title.map(str::to_string),
            artist: artist.map(str::to_string),
            album: album.map(str::to_string),
        }
    }

    #[test]
    fn complete_requires_all_four_fields() {
        let full = tags(Some(3), Some("Song"), Some("Artist"), Some("Album"));
        assert_eq!(
            full.complete(),
            Some(CompleteTags {
                track: 3,
                title: "Song".into(),
                artist: "Artist".into(),
                album: "Album".into(),
            })
        );

        assert!(tags(None, Some("S"), Some("A"), Some("B")).complete().is_none());
        assert!(tags(Some(1), None, Some("A"), Some("B")).complete().is_none());
        assert!(tags(Some(1), Some("S"), None, Some("B")).complete().is_none());
        assert!(tags(Some(1), Some("S"), Some("A"), None).complete().is_none());
        assert!(TrackTags::default().complete().is_none());
    }

    #[test]
    fn non_blank_trims_and_drops_empty_values() {
        assert_eq!(non_blank(Some(Cow::Borrowed("  Song  "))), Some("Song".to_string()));
        assert_eq!(non_blank(Some(Cow::Borrowed("   "))), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn lofty_reader_yields_empty_tags_for_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.mp3");
        fs::write(&path, b"not a real mp3").unwrap();

        assert_eq!(LoftyTagReader.read_tags(&path), TrackTags::default());
    }

    #[test]
    fn lofty_reader_yields_empty_tags_for_missing_file() {
        let dir = tempdir().unwrap();
        assert_eq!(
            LoftyTagReader.read_tags(&dir.path().join("gone.ogg")),
            TrackTags::default()
        );
    }
}
