//! 拍攝日期與相機名稱的擷取
//!
//! 先以 EXIF 讀取圖片；讀不到任何欄位時才改用 exiftool（影片）。
//! 日期與相機各自依固定順序嘗試多個欄位，第一個存在的欄位勝出。

use super::exif_reader::read_exif_tags;
use super::exiftool::read_exiftool_tags;
use crate::config::CameraMap;
use crate::error::FileError;
use log::debug;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 欄位名稱 → 字串值
pub type TagMap = BTreeMap<String, String>;

/// 拍攝日期欄位，依優先順序
pub const DATE_TAGS: [&str; 4] = [
    "EXIF DateTimeOriginal",
    "Image DateTime",
    // 影片
    "EXIF:DateTimeOriginal",
    "QuickTime:MediaCreateDate",
];

/// 相機欄位，依優先順序
pub const CAMERA_TAGS: [&str; 5] = [
    "Image Model",
    // Canon 影片
    "EXIF:Model",
    // Panasonic 影片
    "MakerNotes:Model",
    // GoPro
    "QuickTime:Model",
    "QuickTime:LensSerialNumber",
];

const DATE_LEN: usize = 10;
const DATE_TIME_LEN: usize = 16;

/// 讀取檔案的中繼資料
pub fn read_tags(path: &Path) -> Result<TagMap, FileError> {
    let file = File::open(path).map_err(FileError::Open)?;
    let tags = read_exif_tags(&mut BufReader::new(file));
    if !tags.is_empty() {
        debug!("{}: {tags:?}", path.display());
        return Ok(tags);
    }

    let tags = read_exiftool_tags(path).unwrap_or_else(|e| {
        debug!("exiftool 無法讀取 {}: {e:#}", path.display());
        TagMap::new()
    });
    debug!("{}: {tags:?}", path.display());

    if tags.is_empty() {
        return Err(FileError::NoData);
    }
    Ok(tags)
}

/// 拍攝日期資料夾名稱，例如 `2019_07_14`；`by_datetime` 時為 `2019_07_14_22_06`
pub fn parse_date(tags: &TagMap, by_datetime: bool) -> Result<String, FileError> {
    let len = if by_datetime { DATE_TIME_LEN } else { DATE_LEN };

    DATE_TAGS
        .iter()
        .filter_map(|key| tags.get(*key))
        .map(|value| value.trim())
        .find(|value| !is_unset_date(value))
        .map(|value| format_date(value, len))
        .ok_or(FileError::Parse)
}

/// 沒有時鐘的相機會寫入 `0000:00:00 00:00:00`
fn is_unset_date(value: &str) -> bool {
    value
        .chars()
        .take(DATE_LEN)
        .filter(char::is_ascii_digit)
        .all(|c| c == '0')
}

fn format_date(value: &str, len: usize) -> String {
    value
        .chars()
        .take(len)
        .map(|c| match c {
            ':' | ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect()
}

/// 第一個存在的相機欄位的原始值
#[must_use]
pub fn raw_camera_model(tags: &TagMap) -> Option<&str> {
    CAMERA_TAGS
        .iter()
        .find_map(|key| tags.get(*key))
        .map(|value| value.trim())
}

/// 相機資料夾名稱；有對照時使用顯示名稱，找不到相機欄位時為空字串
#[must_use]
pub fn parse_camera(tags: &TagMap, cameras: &CameraMap) -> String {
    raw_camera_model(tags)
        .map(|raw| cameras.get(raw).map_or(raw, String::as_str))
        .map(sanitize_label)
        .unwrap_or_default()
}

fn sanitize_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect()
}

/// 從單一檔案讀出相機型號（管理相機對照時使用）
pub fn camera_model(path: &Path) -> Result<String, FileError> {
    let tags = read_tags(path)?;
    raw_camera_model(&tags)
        .filter(|raw| !raw.is_empty())
        .map(str::to_string)
        .ok_or(FileError::Parse)
}
