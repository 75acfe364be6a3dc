use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::{LibrarySettings, SongKeyMode};
use crate::error::Result;

use super::model::SongGroup;

/// Strip the extension from `path`, starting at its first dot.
///
/// With [`SongKeyMode::FullPath`] the first dot may sit in a directory name,
/// in which case everything after it is dropped.
pub fn song_key(path: &Path, mode: SongKeyMode) -> String {
    let full = path.to_string_lossy();

    let search_from = match mode {
        SongKeyMode::FullPath => 0,
        SongKeyMode::FileName => path
            .file_name()
            .map(|name| full.len() - name.to_string_lossy().len())
            .unwrap_or(full.len()),
    };

    match full[search_from..].find('.') {
        Some(dot) => full[..search_from + dot].to_string(),
        None => full.into_owned(),
    }
}

// Files of a directory come before its subdirectories, each in name order.
fn files_then_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Walk `dir` and group every regular file by its song key.
///
/// Groups come back in the order their first file was found.
pub fn group_files(dir: &Path, settings: &LibrarySettings) -> Result<Vec<SongGroup>> {
    let mut groups: Vec<SongGroup> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();

    let walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by(files_then_dirs);

    for entry in walker {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }

        let path = entry.into_path();
        let key = song_key(&path, settings.song_key);
        let slot = *by_key.entry(key.clone()).or_insert_with(|| {
            groups.push(SongGroup {
                key,
                paths: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].paths.push(path);
    }

    debug!(dir = %dir.display(), groups = groups.len(), "grouped files by song key");
    Ok(groups)
}
