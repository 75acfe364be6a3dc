use std::path::PathBuf;

use clap::Parser;

/// Render an HTML listing of the albums found under a music directory.
#[derive(Parser, Debug)]
#[command(name = "albumlist")]
#[command(version)]
pub struct Args {
    /// Directory to scan for audio files
    pub path: PathBuf,

    /// Title shown at the top of the page
    pub page_title: String,
}
