//! 背景整理執行緒
//!
//! 依序處理每個檔案：讀取中繼資料、決定目標路徑、複製或移動。
//! 單一檔案失敗只記錄並略過；每個檔案之間檢查中斷旗標。

use super::router::{destination_dir, resolve_collision};
use crate::config::{CameraMap, SortMode, SortOptions};
use crate::error::FileError;
use crate::tools::{
    copy_preserving_times, files_identical, move_file, parse_camera, parse_date, read_tags,
};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

static WORKER_RUNNING: AtomicBool = AtomicBool::new(false);

/// 是否有整理執行緒正在執行
#[must_use]
pub fn is_worker_running() -> bool {
    WORKER_RUNNING.load(Ordering::SeqCst)
}

/// 一組要整理到同一個目標資料夾的檔案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortJob {
    pub files: Vec<PathBuf>,
    pub destination: PathBuf,
}

/// 整理結果統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortReport {
    /// 已處理（含略過）的檔案數
    pub processed: usize,
    pub sorted: usize,
    /// 目標已有相同內容而未搬動
    pub duplicates: usize,
    /// 失敗而略過
    pub skipped: usize,
    pub cancelled: bool,
}

/// 送回介面的通知
#[derive(Debug)]
pub enum WorkerEvent {
    Progress {
        processed: usize,
        total: usize,
        path: PathBuf,
    },
    Done(SortReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Sorted(PathBuf),
    Duplicate(PathBuf),
}

pub struct Worker {
    jobs: Vec<SortJob>,
    options: SortOptions,
    cameras: CameraMap,
    shutdown_signal: Arc<AtomicBool>,
}

impl Worker {
    pub fn new(
        jobs: Vec<SortJob>,
        options: SortOptions,
        cameras: CameraMap,
        shutdown_signal: Arc<AtomicBool>,
    ) -> Self {
        Self {
            jobs,
            options,
            cameras,
            shutdown_signal,
        }
    }

    #[must_use]
    pub fn total_files(&self) -> usize {
        self.jobs.iter().map(|job| job.files.len()).sum()
    }

    /// 在名為 `WorkerThread` 的執行緒上執行，進度經由 `events` 回報
    pub fn spawn(self, events: Sender<WorkerEvent>) -> Result<JoinHandle<SortReport>> {
        WORKER_RUNNING.store(true, Ordering::SeqCst);

        let spawned = thread::Builder::new()
            .name("WorkerThread".to_string())
            .spawn(move || {
                let report = self.run(|processed, total, path| {
                    let _ = events.send(WorkerEvent::Progress {
                        processed,
                        total,
                        path: path.to_path_buf(),
                    });
                });
                let _ = events.send(WorkerEvent::Done(report));
                report
            });

        if spawned.is_err() {
            WORKER_RUNNING.store(false, Ordering::SeqCst);
        }
        spawned.context("Failed to start worker thread")
    }

    /// 在目前執行緒上整理所有工作；每處理完一個檔案呼叫 `on_progress(已處理, 總數, 路徑)`
    pub fn run<F>(&self, mut on_progress: F) -> SortReport
    where
        F: FnMut(usize, usize, &Path),
    {
        WORKER_RUNNING.store(true, Ordering::SeqCst);

        let total = self.total_files();
        info!(
            "開始整理 {} 個檔案 - 模式: {}, 就地整理: {}, 依日期時間: {}, 依相機: {}",
            total,
            self.options.effective_mode(),
            self.options.within_dirs,
            self.options.by_datetime,
            self.options.by_camera
        );

        let mut report = SortReport::default();

        'jobs: for job in &self.jobs {
            debug!("目標資料夾: {}", job.destination.display());

            for path in &job.files {
                if self.shutdown_signal.load(Ordering::SeqCst) {
                    warn!("收到中斷訊號，停止整理");
                    report.cancelled = true;
                    break 'jobs;
                }

                match self.process_file(path, &job.destination) {
                    Ok(FileOutcome::Sorted(_)) => report.sorted += 1,
                    Ok(FileOutcome::Duplicate(existing)) => {
                        info!(
                            "'{}': 目標已有相同檔案 {}",
                            path.display(),
                            existing.display()
                        );
                        report.duplicates += 1;
                    }
                    Err(e) => {
                        warn!("'{}': {e}", path.display());
                        report.skipped += 1;
                    }
                }
                report.processed += 1;

                if !self.shutdown_signal.load(Ordering::SeqCst) {
                    on_progress(report.processed, total, path);
                }
            }
        }

        // 最後一個檔案處理中收到的中斷
        if self.shutdown_signal.load(Ordering::SeqCst) {
            report.cancelled = true;
        }

        WORKER_RUNNING.store(false, Ordering::SeqCst);
        info!(
            "整理結束 - 完成: {}, 重複: {}, 略過: {}, 中斷: {}",
            report.sorted, report.duplicates, report.skipped, report.cancelled
        );

        report
    }

    /// 整理單一檔案到 `destination/日期/相機/`
    pub fn process_file(&self, path: &Path, destination: &Path) -> Result<FileOutcome, FileError> {
        let tags = read_tags(path)?;
        let date = parse_date(&tags, self.options.by_datetime)?;
        let camera = if self.options.by_camera {
            parse_camera(&tags, &self.cameras)
        } else {
            String::new()
        };

        let dir = destination_dir(destination, &date, &camera);
        fs::create_dir_all(&dir).map_err(FileError::CreateDir)?;

        let file_name = path.file_name().unwrap_or_default();
        let natural = dir.join(file_name);

        if natural == path {
            debug!("已在正確位置: {}", path.display());
            return Ok(FileOutcome::Sorted(natural));
        }

        if self.options.skip_identical && natural.exists() {
            match files_identical(path, &natural) {
                Ok(true) => return Ok(FileOutcome::Duplicate(natural)),
                Ok(false) => {}
                Err(e) => debug!("無法比對 {}: {e:#}", natural.display()),
            }
        }

        let target = resolve_collision(&dir, file_name);
        info!("{date}  {camera} -> {}", target.display());

        match self.options.effective_mode() {
            SortMode::Copy => copy_preserving_times(path, &target).map_err(FileError::Copy)?,
            SortMode::Move => move_file(path, &target).map_err(FileError::Move)?,
        }

        Ok(FileOutcome::Sorted(target))
    }
}
