pub mod load;
pub mod save;
pub mod types;

pub use types::{
    CameraMap, Config, Directories, Language, SETTINGS_FILE, SortMode, SortOptions, UserSettings,
};
