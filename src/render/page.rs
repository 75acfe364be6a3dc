use std::path::Path;

use maud::{DOCTYPE, Markup, html};

use crate::config::RenderSettings;
use crate::library::{AlbumCollection, Song};

/// Render the album listing as a standalone HTML document.
///
/// `mime_type` supplies the `type` attribute of each `<source>`; variants
/// without a known type are emitted without one.
pub fn render_page<F>(
    page_title: &str,
    albums: &AlbumCollection,
    settings: &RenderSettings,
    mime_type: F,
) -> String
where
    F: Fn(&Path) -> Option<&'static str>,
{
    html! {
        (DOCTYPE)
        html lang=(settings.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) }
                @if let Some(href) = &settings.stylesheet {
                    link rel="stylesheet" href=(href);
                }
            }
            body {
                h1 { (page_title) }
                @for (album, songs) in albums {
                    (album_section(album, songs, &mime_type))
                }
            }
        }
    }
    .into_string()
}

fn album_section<F>(album: &str, songs: &[Song], mime_type: &F) -> Markup
where
    F: Fn(&Path) -> Option<&'static str>,
{
    html! {
        section.album {
            h2 { (album) }
            ol {
                @for song in songs {
                    li value=(song.track.to_string()) {
                        span.title { (song.title) }
                        " - "
                        span.artist { (song.artist) }
                        audio controls preload="none" {
                            @for path in &song.file_paths {
                                source src=(path.display().to_string()) type=[mime_type(path.as_path())];
                            }
                        }
                    }
                }
            }
        }
    }
}
