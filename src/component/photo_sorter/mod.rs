//! 依拍攝日期與相機整理照片與影片
//!
//! 讀取 EXIF / QuickTime 中繼資料，將檔案複製或移動到 `目標/日期/相機/`

mod main;
mod planner;
mod router;
mod worker;

pub use main::PhotoSorter;
pub use planner::{plan_sort, plan_within_dirs};
pub use router::{destination_dir, resolve_collision};
pub use worker::{
    FileOutcome, SortJob, SortReport, Worker, WorkerEvent, is_worker_running,
};
