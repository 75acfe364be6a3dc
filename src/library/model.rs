use std::collections::BTreeMap;
use std::path::PathBuf;

/// Files that share a song key, in the order the walk found them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongGroup {
    pub key: String,
    pub paths: Vec<PathBuf>,
}

/// One song, with every encoded variant ordered smallest file first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub track: u32,
    pub title: String,
    pub artist: String,
    pub file_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSong {
    pub album: String,
    pub song: Song,
}

/// Album name to its songs in track order.
pub type AlbumCollection = BTreeMap<String, Vec<Song>>;
