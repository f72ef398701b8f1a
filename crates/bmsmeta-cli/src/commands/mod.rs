pub mod group;
pub mod parse;
pub mod scan;
pub mod title;
