//! Difficulty inference for charts that do not state one.
//!
//! - `title` - bracketed keywords at the end of a display title
//! - `name` - difficulty tokens in a bare file name
//! - `group` - shared-prefix stripping across sibling file names
//!
//! Also hosts `recover_title_suffix`, which strips a trailing variant tag
//! from a title.

mod group;
mod name;
mod title;

pub use group::*;
pub use name::*;
pub use title::*;
