//! Chart metadata types.
//!
//! - `ChartFormat` - on-disk dialect, classified by extension
//! - `Keymode` - controller layout of a chart
//! - `Difficulty` - canonical difficulty rank ("1".."5")
//! - `ChartMetadata`, `ResourceTable` - per-file record
//! - `ChartGroup` - all charts of one folder

mod difficulty;
mod format;
mod group;
mod keymode;
mod metadata;

pub use difficulty::*;
pub use format::*;
pub use group::*;
pub use keymode::*;
pub use metadata::*;
