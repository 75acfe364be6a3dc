use std::path::Path;

use crate::error::{Error, Result};

/// Encoded formats a song may be stored in.
///
/// Variants are declared in tag-reading order: a later format's complete tags
/// replace an earlier format's.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AudioFormat {
    Ogg,
    Mp3,
    M4a,
}

impl AudioFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ogg" => Some(Self::Ogg),
            "mp3" => Some(Self::Mp3),
            "m4a" => Some(Self::M4a),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| Error::UnsupportedFormat {
                path: path.to_path_buf(),
            })
    }

    /// Position in the tag-reading order (0 is read first).
    pub fn rank(self) -> usize {
        match self {
            Self::Ogg => 0,
            Self::Mp3 => 1,
            Self::M4a => 2,
        }
    }
}
