//! HTML output for a loaded album collection.

mod page;

use std::path::Path;

pub use page::render_page;

/// MIME type guessed from the file extension, if any is known.
pub fn mime_type(path: &Path) -> Option<&'static str> {
    mime_guess::from_path(path).first_raw()
}
