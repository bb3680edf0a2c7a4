//! 把來源資料夾展開成工作清單

use super::worker::SortJob;
use crate::tools::{list_directories, scan_all_files, scan_direct_files};
use anyhow::Result;
use log::info;
use std::path::Path;

/// 一般整理：來源下所有檔案（遞迴）都整理到目標資料夾
///
/// 目標位於來源之內時，已經在目標裡的檔案不再處理。
pub fn plan_sort(source: &Path, destination: &Path) -> Result<Vec<SortJob>> {
    let files: Vec<_> = scan_all_files(source)?
        .into_iter()
        .filter(|path| destination == source || !path.starts_with(destination))
        .collect();

    info!("來源 {} 共 {} 個檔案", source.display(), files.len());

    Ok(vec![SortJob {
        files,
        destination: destination.to_path_buf(),
    }])
}

/// 就地整理：來源本身與每個子資料夾各自成為一個工作，只處理該層的檔案
///
/// 資料夾清單在開始前就列好，整理時新建立的日期資料夾不會再被處理。
pub fn plan_within_dirs(source: &Path) -> Result<Vec<SortJob>> {
    let directories = list_directories(source)?;
    info!("來源 {} 共 {} 個資料夾", source.display(), directories.len());

    directories
        .into_iter()
        .map(|dir| {
            Ok(SortJob {
                files: scan_direct_files(&dir)?,
                destination: dir,
            })
        })
        .collect()
}
