use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use crate::config::Settings;
use crate::error::Result;
use crate::library::{LoftyTagReader, load_albums};
use crate::render::{mime_type, render_page};

mod cli;
mod logging;
mod settings;

pub fn run() -> ExitCode {
    let args = cli::Args::parse();
    logging::init();
    let settings = settings::load_settings();

    let page = match build_page(&args.path, &args.page_title, &settings) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("albumlist: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{page}").and_then(|()| stdout.flush()) {
        eprintln!("albumlist: failed to write page: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn build_page(dir: &Path, page_title: &str, settings: &Settings) -> Result<String> {
    let albums = load_albums(dir, &settings.library, &LoftyTagReader)?;
    Ok(render_page(page_title, &albums, &settings.render, mime_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn empty_directory_renders_page_without_albums() {
        let dir = tempdir().unwrap();
        let page = build_page(dir.path(), "Empty", &Settings::default()).unwrap();
        assert!(page.contains("<h1>Empty</h1>"));
        assert!(!page.contains("<section"));
    }

    #[test]
    fn untagged_audio_file_aborts_the_build() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.mp3"), b"not a real mp3").unwrap();

        assert!(matches!(
            build_page(dir.path(), "t", &Settings::default()),
            Err(Error::InsufficientTags { .. })
        ));
    }

    #[test]
    fn stray_non_audio_file_aborts_the_build() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("cover.jpg"), b"jpeg").unwrap();

        assert!(matches!(
            build_page(dir.path(), "t", &Settings::default()),
            Err(Error::UnsupportedFormat { .. })
        ));
    }
}
