//! 目標路徑計算與檔名衝突處理

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// `destination/date/camera`；相機名稱為空時省略該層
#[must_use]
pub fn destination_dir(destination: &Path, date: &str, camera: &str) -> PathBuf {
    let dir = destination.join(date);
    if camera.is_empty() {
        dir
    } else {
        dir.join(camera)
    }
}

/// 目錄中第一個可用的檔名：`name`、`stem (1).ext`、`stem (2).ext`...
#[must_use]
pub fn resolve_collision(dir: &Path, file_name: &OsStr) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = name
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut num = 1usize;
    loop {
        let candidate = dir.join(format!("{stem} ({num}){extension}"));
        if !candidate.exists() {
            return candidate;
        }
        num += 1;
    }
}
