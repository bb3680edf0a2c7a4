mod exif_reader;
mod exiftool;
mod file_hasher;
mod file_scanner;
mod file_transfer;
mod metadata;
mod path_validator;

pub use exif_reader::read_exif_tags;
pub use exiftool::read_exiftool_tags;
pub use file_hasher::files_identical;
pub use file_scanner::{list_directories, scan_all_files, scan_direct_files};
pub use file_transfer::{copy_preserving_times, move_file};
pub use metadata::{
    CAMERA_TAGS, DATE_TAGS, TagMap, camera_model, parse_camera, parse_date, raw_camera_model,
    read_tags,
};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
