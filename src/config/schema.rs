use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/albumlist/config.toml` or `~/.config/albumlist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ALBUMLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub render: RenderSettings,
}

/// How a file path is reduced to the key that groups format variants of a song.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SongKeyMode {
    /// Cut the file name at its first dot; directory names are left alone.
    #[default]
    #[serde(alias = "file_name", alias = "filename")]
    FileName,
    /// Cut the whole path at its first dot, even when that dot is in a directory name.
    #[serde(alias = "full_path", alias = "path")]
    FullPath,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Grouping rule for format variants.
    pub song_key: SongKeyMode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Value of the `lang` attribute on the page's `<html>` element.
    pub lang: String,
    /// Optional stylesheet href linked from the page head.
    pub stylesheet: Option<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            stylesheet: None,
        }
    }
}
