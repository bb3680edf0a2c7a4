//! 整合測試 - 從規劃到背景執行緒完成整理的完整流程

use std::fs;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc;

use photo_sort::component::photo_sorter::{Worker, WorkerEvent, plan_sort, plan_within_dirs};
use photo_sort::config::{CameraMap, Config, SortMode, SortOptions};
use photo_sort::test_support::write_photo;
use tempfile::TempDir;

fn cameras() -> CameraMap {
    let mut cameras = CameraMap::new();
    cameras.insert("Canon EOS 600D".to_string(), "Canon".to_string());
    cameras
}

/// 複製模式：來源保留，目標依日期與相機分層，同名檔案加上編號
#[test]
fn test_copy_sort_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("To Sort");
    let destination = temp_dir.path().join("By Date");
    fs::create_dir_all(source.join("card1")).unwrap();
    fs::create_dir_all(source.join("card2")).unwrap();

    write_photo(&source.join("card1/IMG_0001.TIF"), "Canon EOS 600D", "2019:07:14 10:00:00").unwrap();
    write_photo(&source.join("card2/IMG_0001.TIF"), "Canon EOS 600D", "2019:07:14 11:00:00").unwrap();
    write_photo(&source.join("card2/P1000001.TIF"), "DMC-FZ200", "2020:01:02 03:04:05").unwrap();
    fs::write(source.join("card2/readme.txt"), "not a photo").unwrap();

    let jobs = plan_sort(&source, &destination).unwrap();
    let worker = Worker::new(
        jobs,
        SortOptions::default(),
        cameras(),
        Arc::new(AtomicBool::new(false)),
    );
    assert_eq!(worker.total_files(), 4);

    let (tx, rx) = mpsc::channel();
    let handle = worker.spawn(tx).unwrap();
    let progress_events = rx
        .iter()
        .filter(|event| matches!(event, WorkerEvent::Progress { .. }))
        .count();
    let report = handle.join().unwrap();

    assert_eq!(progress_events, 4);
    assert_eq!(report.processed, 4);
    assert_eq!(report.sorted, 3);
    assert_eq!(report.skipped, 1);

    let canon = destination.join("2019_07_14").join("Canon");
    assert!(canon.join("IMG_0001.TIF").exists());
    assert!(canon.join("IMG_0001 (1).TIF").exists());
    assert!(
        destination
            .join("2020_01_02")
            .join("DMC-FZ200")
            .join("P1000001.TIF")
            .exists()
    );

    // 複製模式不動來源
    assert!(source.join("card1/IMG_0001.TIF").exists());
    assert!(source.join("card2/readme.txt").exists());
}

/// 就地整理：每個資料夾的檔案移到該資料夾底下的日期資料夾
#[test]
fn test_within_dirs_moves_into_each_directory() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("Albums");
    fs::create_dir_all(source.join("Trip")).unwrap();

    write_photo(&source.join("root.TIF"), "Canon EOS 600D", "2018:05:06 07:08:09").unwrap();
    write_photo(&source.join("Trip/beach.TIF"), "Canon EOS 600D", "2019:08:01 12:00:00").unwrap();

    let options = SortOptions {
        mode: SortMode::Copy,
        within_dirs: true,
        by_camera: false,
        ..SortOptions::default()
    };
    assert_eq!(options.effective_mode(), SortMode::Move);

    let jobs = plan_within_dirs(&source).unwrap();
    let worker = Worker::new(jobs, options, cameras(), Arc::new(AtomicBool::new(false)));
    let report = worker.run(|_, _, _| {});

    assert_eq!(report.sorted, 2);
    assert!(source.join("2018_05_06/root.TIF").exists());
    assert!(source.join("Trip/2019_08_01/beach.TIF").exists());
    assert!(!source.join("root.TIF").exists());
    assert!(!source.join("Trip/beach.TIF").exists());
    // 新建立的日期資料夾不會再被整理一次
    assert!(!source.join("2018_05_06/2018_05_06").exists());
}

/// 設定檔：相機對照與資料夾寫回後可以再讀出
#[test]
fn test_settings_persist_cameras() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let mut config = Config::load_from(&path).unwrap();
    config.settings.cameras = cameras();
    config.settings.directories.source = temp_dir.path().join("in");
    config.save().unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.settings.cameras, cameras());
    assert_eq!(
        reloaded.settings.directories.source,
        temp_dir.path().join("in")
    );
}
