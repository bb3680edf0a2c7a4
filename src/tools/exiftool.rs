//! 影片等 EXIF 讀不到的檔案改用外部 exiftool
//!
//! 執行 `exiftool -j -G -n`，欄位名稱為 `"<Group>:<Tag>"`，例如 `QuickTime:MediaCreateDate`。

use super::metadata::TagMap;
use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::path::Path;
use std::process::Command;

/// 只描述檔案本身、與拍攝無關的群組
const IGNORED_GROUPS: [&str; 3] = ["ExifTool:", "File:", "System:"];

pub fn read_exiftool_tags(path: &Path) -> Result<TagMap> {
    let output = Command::new("exiftool")
        .args(["-j", "-G", "-n"])
        .arg(path)
        .output()
        .with_context(|| format!("Failed to run exiftool on {}", path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("exiftool failed: {}", stderr.trim());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_exiftool_json(&stdout)
}

pub(crate) fn parse_exiftool_json(raw: &str) -> Result<TagMap> {
    let records: Vec<Map<String, Value>> =
        serde_json::from_str(raw).context("Failed to parse exiftool output")?;

    let Some(record) = records.into_iter().next() else {
        return Ok(TagMap::new());
    };

    Ok(record
        .into_iter()
        .filter(|(key, _)| key != "SourceFile")
        .filter(|(key, _)| !IGNORED_GROUPS.iter().any(|group| key.starts_with(group)))
        .map(|(key, value)| (key, value_to_string(value)))
        .collect())
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quicktime_record() {
        let raw = r#"[{
            "SourceFile": "/videos/GOPR0001.MP4",
            "ExifTool:ExifToolVersion": 12.4,
            "File:FileSize": 1048576,
            "QuickTime:MediaCreateDate": "2020:08:01 10:20:30",
            "QuickTime:Model": "HERO7 Black",
            "QuickTime:ImageWidth": 1920
        }]"#;

        let tags = parse_exiftool_json(raw).unwrap();

        assert_eq!(tags.len(), 3);
        assert_eq!(
            tags.get("QuickTime:MediaCreateDate").map(String::as_str),
            Some("2020:08:01 10:20:30")
        );
        assert_eq!(
            tags.get("QuickTime:ImageWidth").map(String::as_str),
            Some("1920")
        );
        assert!(!tags.contains_key("SourceFile"));
        assert!(!tags.contains_key("File:FileSize"));
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_exiftool_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_exiftool_json("Error: File not found").is_err());
    }
}
