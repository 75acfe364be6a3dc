use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};

use super::format::AudioFormat;
use super::model::{ResolvedSong, Song, SongGroup};
use super::tags::TagReader;

/// Pick the tags for one song group and build its [`Song`].
///
/// Files are read ogg, then mp3, then m4a. Every complete reading replaces the
/// previous one, so the last format with full tags decides the song's fields.
pub fn resolve_song(group: SongGroup, reader: &impl TagReader) -> Result<ResolvedSong> {
    let mut ranked = group
        .paths
        .iter()
        .map(|p| AudioFormat::from_path(p).map(|format| (format, p)))
        .collect::<Result<Vec<_>>>()?;
    ranked.sort_by_key(|(format, _)| format.rank());
    debug!(key = %group.key, files = ranked.len(), "resolving song");

    let mut chosen = None;
    for (format, path) in &ranked {
        match reader.read_tags(path).complete() {
            Some(tags) => {
                debug!(path = %path.display(), ?format, "complete tags");
                chosen = Some(tags);
            }
            None => debug!(path = %path.display(), ?format, "incomplete tags, skipping"),
        }
    }

    let Some(tags) = chosen else {
        return Err(Error::InsufficientTags {
            paths: ranked.into_iter().map(|(_, p)| p.clone()).collect(),
        });
    };

    Ok(ResolvedSong {
        album: tags.album,
        song: Song {
            track: tags.track,
            title: tags.title,
            artist: tags.artist,
            file_paths: order_by_size(group.paths)?,
        },
    })
}

/// Sort smallest file first; equal sizes keep their relative order.
fn order_by_size(paths: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    let mut sized = paths
        .into_iter()
        .map(|path| match fs::metadata(&path) {
            Ok(meta) => Ok((meta.len(), path)),
            Err(source) => Err(Error::Io { path, source }),
        })
        .collect::<Result<Vec<_>>>()?;

    sized.sort_by_key(|(len, _)| *len);
    Ok(sized.into_iter().map(|(_, path)| path).collect())
}
