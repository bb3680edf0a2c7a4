use super::planner::{plan_sort, plan_within_dirs};
use super::worker::{SortReport, Worker, WorkerEvent};
use crate::config::save::remember_directories;
use crate::config::{Config, SortOptions};
use crate::tools::{ensure_directory_exists, validate_directory_exists};
use anyhow::{Result, anyhow};
use console::style;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::time::Duration;

/// 整理照片元件
pub struct PhotoSorter {
    shutdown_signal: Arc<AtomicBool>,
}

impl PhotoSorter {
    pub const fn new(shutdown_signal: Arc<AtomicBool>) -> Self {
        Self { shutdown_signal }
    }

    pub fn run(&self, config: &mut Config) -> Result<()> {
        println!("{}", style(t!("sorter.title")).cyan().bold());

        let options = config.settings.sort;
        self.print_options(&options);

        let source = self.prompt_directory(
            &t!("sorter.prompt_source"),
            &config.settings.directories.source,
        )?;
        validate_directory_exists(&source)?;

        let destination = if options.within_dirs {
            source.clone()
        } else {
            self.prompt_directory(
                &t!("sorter.prompt_destination"),
                &config.settings.directories.destination,
            )?
        };

        // 就地整理時目標欄位停用，保留上次的目標資料夾
        let remembered_destination = if options.within_dirs {
            config.settings.directories.destination.clone()
        } else {
            destination.clone()
        };
        remember_directories(&mut config.settings, &source, &remembered_destination);
        if let Err(e) = config.save() {
            warn!("無法儲存資料夾設定: {e:#}");
        }

        println!("{}", style(t!("sorter.scanning")).dim());
        let jobs = if options.within_dirs {
            plan_within_dirs(&source)?
        } else {
            plan_sort(&source, &destination)?
        };

        let worker = Worker::new(
            jobs,
            options,
            config.settings.cameras.clone(),
            Arc::clone(&self.shutdown_signal),
        );
        let total = worker.total_files();

        if total == 0 {
            println!("{}", style(t!("sorter.nothing_to_sort")).yellow());
            return Ok(());
        }

        println!(
            "{}",
            style(t!("sorter.found", count = total)).green()
        );

        if !self.confirm_start()? {
            println!("{}", style(t!("common.cancelled")).yellow());
            return Ok(());
        }
        // 確認後才建立目標資料夾
        ensure_directory_exists(&destination)?;

        self.shutdown_signal.store(false, Ordering::SeqCst);
        let report = self.execute(worker, total)?;
        self.print_result(&report);

        Ok(())
    }

    fn prompt_directory(&self, prompt: &str, default: &Path) -> Result<PathBuf> {
        let path: String = Input::new()
            .with_prompt(prompt)
            .default(default.display().to_string())
            .interact_text()?;
        Ok(PathBuf::from(path.trim()))
    }

    fn confirm_start(&self) -> Result<bool> {
        let confirm = Confirm::new()
            .with_prompt(t!("sorter.confirm"))
            .default(true)
            .interact()?;
        Ok(confirm)
    }

    fn print_options(&self, options: &SortOptions) {
        let yes_no = |flag: bool| {
            if flag {
                style(t!("common.yes")).green()
            } else {
                style(t!("common.no")).dim()
            }
        };

        println!();
        println!(
            "  {} {}",
            style(t!("options.mode")).dim(),
            style(options.effective_mode()).cyan()
        );
        println!(
            "  {} {}",
            style(t!("options.within_dirs")).dim(),
            yes_no(options.within_dirs)
        );
        println!(
            "  {} {}",
            style(t!("options.by_datetime")).dim(),
            yes_no(options.by_datetime)
        );
        println!(
            "  {} {}",
            style(t!("options.by_camera")).dim(),
            yes_no(options.by_camera)
        );
        println!(
            "  {} {}",
            style(t!("options.skip_identical")).dim(),
            yes_no(options.skip_identical)
        );
        println!();
    }

    /// 啟動背景執行緒並顯示進度直到結束
    fn execute(&self, worker: Worker, total: usize) -> Result<SortReport> {
        let progress_bar = ProgressBar::new(total as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {msg}")?
                .progress_chars("#>-"),
        );
        progress_bar.set_message(t!("sorter.progress", current = 0, total = total).to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(200));

        let (tx, rx) = mpsc::channel();
        let handle = worker.spawn(tx)?;

        for event in rx {
            match event {
                WorkerEvent::Progress {
                    processed, total, ..
                } => {
                    progress_bar.set_position(processed as u64);
                    progress_bar.set_message(
                        t!("sorter.progress", current = processed, total = total).to_string(),
                    );
                }
                WorkerEvent::Done(report) if report.cancelled => {
                    progress_bar.abandon_with_message(t!("sorter.interrupted").to_string());
                }
                WorkerEvent::Done(_) => {
                    progress_bar.finish_with_message(t!("sorter.done").to_string());
                }
            }
        }

        handle
            .join()
            .map_err(|_| anyhow!("Worker thread panicked"))
    }

    fn print_result(&self, report: &SortReport) {
        println!();
        println!("{}", style(t!("sorter.result_title")).cyan().bold());

        if report.cancelled {
            println!("  {}", style(t!("sorter.cancelled")).yellow());
        }

        let plural = if report.sorted == 1 { "" } else { "s" };
        println!(
            "  {}",
            style(t!("sorter.complete", count = report.sorted, plural = plural)).green()
        );

        if report.duplicates > 0 {
            println!(
                "  {}",
                style(t!("sorter.duplicates", count = report.duplicates)).dim()
            );
        }

        if report.skipped > 0 {
            println!(
                "  {}",
                style(t!("sorter.skipped", count = report.skipped)).red()
            );
        }

        info!(
            "整理完成 - 處理: {}, 完成: {}, 重複: {}, 略過: {}",
            report.processed, report.sorted, report.duplicates, report.skipped
        );
    }
}
