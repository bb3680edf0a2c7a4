use crate::config::CameraMap;
use crate::error::FileError;
use crate::tools::camera_model;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CameraTableError {
    #[error("The camera '{0}' is already in the table")]
    AlreadyPresent(String),
    #[error("Cannot parse EXIF data from file '{}'", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: FileError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraRow {
    pub exif_camera: String,
    pub pretty_name: String,
}

/// 可編輯的相機對照表；套用前可以暫時存在不完整的列
#[derive(Debug, Clone, Default)]
pub struct CameraTable {
    rows: Vec<CameraRow>,
}

impl CameraTable {
    #[must_use]
    pub fn from_map(cameras: &CameraMap) -> Self {
        Self {
            rows: cameras
                .iter()
                .map(|(exif_camera, pretty_name)| CameraRow {
                    exif_camera: exif_camera.clone(),
                    pretty_name: pretty_name.clone(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[CameraRow] {
        &self.rows
    }

    #[must_use]
    pub fn contains(&self, exif_camera: &str) -> bool {
        self.rows.iter().any(|row| row.exif_camera == exif_camera)
    }

    pub fn add(&mut self, exif_camera: &str, pretty_name: &str) -> Result<(), CameraTableError> {
        let exif_camera = exif_camera.trim();
        if !exif_camera.is_empty() && self.contains(exif_camera) {
            return Err(CameraTableError::AlreadyPresent(exif_camera.to_string()));
        }

        self.rows.push(CameraRow {
            exif_camera: exif_camera.to_string(),
            pretty_name: pretty_name.trim().to_string(),
        });
        Ok(())
    }

    /// 從檔案讀出相機型號並新增一列（顯示名稱留空）
    pub fn add_from_image(&mut self, path: &Path) -> Result<String, CameraTableError> {
        let exif_camera = camera_model(path).map_err(|source| CameraTableError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        self.add(&exif_camera, "")?;
        Ok(exif_camera)
    }

    pub fn set_pretty_name(&mut self, index: usize, pretty_name: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.pretty_name = pretty_name.trim().to_string();
        }
    }

    pub fn position(&self, exif_camera: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.exif_camera == exif_camera)
    }

    pub fn remove(&mut self, index: usize) -> Option<CameraRow> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    /// 套用：略過原始字串或顯示名稱為空的列
    #[must_use]
    pub fn to_map(&self) -> CameraMap {
        self.rows
            .iter()
            .filter(|row| !row.exif_camera.is_empty() && !row.pretty_name.is_empty())
            .map(|row| (row.exif_camera.clone(), row.pretty_name.clone()))
            .collect()
    }
}
