//! 管理相機對照表
//!
//! 將 EXIF 相機字串對應到易讀名稱，整理時作為相機資料夾名稱

mod camera_table;
mod main;

pub use camera_table::{CameraRow, CameraTable, CameraTableError};
pub use main::CameraManager;
