mod level;

pub use level::{load_level, parse_level_json, LevelError, LevelMap};
