//! Configuration loader and schema types.
//!
//! Everything here is optional: the tool runs with struct defaults when no
//! config file or `ALBUMLIST__*` variable is present.

mod load;
mod schema;

pub use schema::*;
