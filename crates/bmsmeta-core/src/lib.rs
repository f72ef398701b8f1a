pub mod chart;
pub mod config;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod infer;
pub mod library;
pub mod parser;

pub use chart::{
    ChartFormat, ChartGroup, ChartMetadata, Difficulty, Keymode, ResourceKind, ResourceTable,
    is_chart_path,
};
pub use error::{Error, Result};
pub use infer::{
    MatchMode, assign_group_difficulties, difficulty_from_name, difficulty_from_path,
    difficulty_from_title, recover_title_suffix,
};
pub use library::{find_groups, load_group};
pub use parser::{parse_chart, parse_json_bytes, parse_json_chart, parse_text_bytes, parse_text_chart};
