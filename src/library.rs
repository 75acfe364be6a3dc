//! Music library loading: group files into songs, resolve their tags and
//! collect the songs into albums.

mod albums;
mod format;
mod model;
mod resolve;
mod scan;
mod tags;

pub use albums::load_albums;
pub use model::{AlbumCollection, Song};
pub use tags::LoftyTagReader;
