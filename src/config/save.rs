use crate::config::types::{Config, UserSettings};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn save_settings(settings: &UserSettings, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;

    Ok(())
}

/// 記住本次使用的來源與目標資料夾
pub fn remember_directories(settings: &mut UserSettings, source: &Path, destination: &Path) {
    settings.directories.source = source.to_path_buf();
    settings.directories.destination = destination.to_path_buf();
}

impl Config {
    pub fn save(&self) -> Result<()> {
        save_settings(&self.settings, &self.settings_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{SortMode, SortOptions};
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load_keeps_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let mut config = Config::load_from(&path).unwrap();
        config
            .settings
            .cameras
            .insert("DMC-FZ200".to_string(), "Panasonic".to_string());
        config.settings.sort = SortOptions {
            mode: SortMode::Move,
            by_datetime: true,
            ..SortOptions::default()
        };
        remember_directories(
            &mut config.settings,
            Path::new("/in"),
            Path::new("/out"),
        );
        config.save().unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.settings, config.settings);
    }

    #[test]
    fn test_saved_directories_use_capitalised_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        save_settings(&UserSettings::default(), &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"Source\""));
        assert!(raw.contains("\"Destination\""));
    }
}
