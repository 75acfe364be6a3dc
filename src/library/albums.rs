use std::path::Path;

use tracing::info;

use crate::config::LibrarySettings;
use crate::error::Result;

use super::model::{AlbumCollection, ResolvedSong};
use super::resolve::resolve_song;
use super::scan::group_files;
use super::tags::TagReader;

/// Bucket songs by album, each bucket sorted by track number.
///
/// Songs sharing a track number keep the order they were given in.
pub fn assemble(songs: impl IntoIterator<Item = ResolvedSong>) -> AlbumCollection {
    let mut albums = AlbumCollection::new();
    for ResolvedSong { album, song } in songs {
        albums.entry(album).or_default().push(song);
    }
    for songs in albums.values_mut() {
        songs.sort_by_key(|s| s.track);
    }
    albums
}

/// Scan `dir`, resolve tags for every song and group the songs into albums.
///
/// The first song without usable tags aborts the whole load.
pub fn load_albums(
    dir: &Path,
    settings: &LibrarySettings,
    reader: &impl TagReader,
) -> Result<AlbumCollection> {
    let songs = group_files(dir, settings)?
        .into_iter()
        .map(|group| resolve_song(group, reader))
        .collect::<Result<Vec<_>>>()?;

    let song_count = songs.len();
    let albums = assemble(songs);
    info!(albums = albums.len(), songs = song_count, "library loaded");
    Ok(albums)
}
