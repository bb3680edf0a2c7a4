use std::io;
use thiserror::Error;

/// 單一檔案處理失敗的原因；工作執行緒記錄後略過該檔案
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Cannot open for reading")]
    Open(#[source] io::Error),
    #[error("No EXIF data found")]
    NoData,
    #[error("Unable to parse EXIF data")]
    Parse,
    #[error("Could not create destination directory")]
    CreateDir(#[source] io::Error),
    #[error("Could not copy file")]
    Copy(#[source] io::Error),
    #[error("Could not move file")]
    Move(#[source] io::Error),
}
