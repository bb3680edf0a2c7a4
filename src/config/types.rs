use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// 設定檔名稱（位於目前工作目錄）
pub const SETTINGS_FILE: &str = "settings.json";

/// 原始 EXIF 相機字串 → 顯示名稱
pub type CameraMap = BTreeMap<String, String>;

/// 複製或移動
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    Copy,
    Move,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => write!(f, "Copy"),
            Self::Move => write!(f, "Move"),
        }
    }
}

/// 整理選項
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    pub mode: SortMode,
    /// 在各資料夾內就地整理（強制移動）
    pub within_dirs: bool,
    /// 以日期與時間（到分鐘）建立資料夾
    pub by_datetime: bool,
    /// 在日期資料夾下再依相機分類
    pub by_camera: bool,
    /// 目標已有內容相同的檔案時略過
    pub skip_identical: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            mode: SortMode::Copy,
            within_dirs: false,
            by_datetime: false,
            by_camera: true,
            skip_identical: false,
        }
    }
}

impl SortOptions {
    /// 實際使用的模式：就地整理時一律移動
    #[must_use]
    pub const fn effective_mode(&self) -> SortMode {
        if self.within_dirs {
            SortMode::Move
        } else {
            self.mode
        }
    }
}

/// 上次使用的來源與目標資料夾
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Directories {
    #[serde(rename = "Source")]
    pub source: PathBuf,
    #[serde(rename = "Destination")]
    pub destination: PathBuf,
}

impl Default for Directories {
    fn default() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self {
            source: cwd.join("To Sort"),
            destination: cwd.join("By Date"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::EnUs, Self::ZhTw];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnUs => write!(f, "English"),
            Self::ZhTw => write!(f, "繁體中文"),
        }
    }
}

/// 使用者設定（寫入 settings.json）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub cameras: CameraMap,
    pub directories: Directories,
    pub sort: SortOptions,
    pub language: Language,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: UserSettings,
    /// 設定檔路徑，離開時寫回
    pub settings_path: PathBuf,
    /// 原設定檔無法解析時保留的備份
    pub backup_path: Option<PathBuf>,
}
