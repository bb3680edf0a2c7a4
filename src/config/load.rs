use crate::config::types::{CameraMap, Config, Directories, SETTINGS_FILE, UserSettings};
use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// settings.json 的兩種格式
///
/// 舊版寫入的是 `[cameras, {"Source": .., "Destination": ..}]` 陣列。
#[derive(Deserialize)]
#[serde(untagged)]
enum SettingsFile {
    Legacy(CameraMap, Directories),
    Current(UserSettings),
}

impl From<SettingsFile> for UserSettings {
    fn from(file: SettingsFile) -> Self {
        match file {
            SettingsFile::Legacy(cameras, directories) => Self {
                cameras,
                directories,
                ..Self::default()
            },
            SettingsFile::Current(settings) => settings,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    /// 讀取指定的設定檔；檔案不存在時使用預設值
    ///
    /// 內容無法解析時先複製為 `settings.json.bak`，再使用預設值，
    /// 離開時寫回設定不會蓋掉使用者原本的資料。
    pub fn load_from(path: &Path) -> Result<Self> {
        let (settings, backup_path) = match Self::load_settings(path) {
            Ok(settings) => (settings, None),
            Err(e) => {
                warn!("無法載入設定，使用預設值: {e:#}");
                let backup = backup_settings(path)?;
                (UserSettings::default(), Some(backup))
            }
        };

        Ok(Self {
            settings,
            settings_path: path.to_path_buf(),
            backup_path,
        })
    }

    fn load_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            info!("找不到設定檔 {}，使用預設值", path.display());
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let file: SettingsFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))?;

        Ok(file.into())
    }
}

fn backup_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

fn backup_settings(path: &Path) -> Result<PathBuf> {
    let backup = backup_path_for(path);
    fs::copy(path, &backup).with_context(|| {
        format!(
            "Failed to back up settings from {} to {}",
            path.display(),
            backup.display()
        )
    })?;
    warn!("原設定檔已備份至 {}", backup.display());
    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::SortMode;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("settings.json")).unwrap();

        assert!(config.settings.cameras.is_empty());
        assert!(config.settings.sort.by_camera);
        assert_eq!(config.settings.sort.mode, SortMode::Copy);
        assert!(config.settings.directories.source.ends_with("To Sort"));
        assert!(config.settings.directories.destination.ends_with("By Date"));
    }

    #[test]
    fn test_load_legacy_array_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(
            &path,
            r#"[{"Canon EOS 600D": "Canon"}, {"Source": "/photos/in", "Destination": "/photos/out"}]"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(
            config.settings.cameras.get("Canon EOS 600D").map(String::as_str),
            Some("Canon")
        );
        assert_eq!(
            config.settings.directories.source,
            PathBuf::from("/photos/in")
        );
        assert_eq!(
            config.settings.directories.destination,
            PathBuf::from("/photos/out")
        );
    }

    #[test]
    fn test_load_current_format_with_missing_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, r#"{"cameras": {"HERO7 Black": "GoPro"}, "language": "zh-TW"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.settings.cameras.len(), 1);
        assert_eq!(config.settings.language.as_str(), "zh-TW");
        assert!(config.settings.sort.by_camera);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "not json at all").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.settings.cameras.is_empty());
        assert_eq!(config.settings_path, path);

        let backup = temp_dir.path().join("settings.json.bak");
        assert_eq!(config.backup_path.as_deref(), Some(backup.as_path()));
        assert_eq!(fs::read_to_string(&backup).unwrap(), "not json at all");
    }

    #[test]
    fn test_partial_directories_keep_cameras() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"cameras": {"Canon EOS 600D": "Canon"}, "directories": {"Source": "/in"}}"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.backup_path.is_none());
        assert_eq!(config.settings.directories.source, PathBuf::from("/in"));
        assert!(config.settings.directories.destination.ends_with("By Date"));

        config.save().unwrap();
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(
            reloaded.settings.cameras.get("Canon EOS 600D").map(String::as_str),
            Some("Canon")
        );
    }

    #[test]
    fn test_unparsable_file_survives_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        let original = r#"{"cameras": {"Canon EOS 600D": 7}}"#;
        fs::write(&path, original).unwrap();

        let config = Config::load_from(&path).unwrap();
        config.save().unwrap();

        let backup = config.backup_path.unwrap();
        assert_eq!(fs::read_to_string(backup).unwrap(), original);
    }
}
