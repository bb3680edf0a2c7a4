use crate::component::photo_sorter::is_worker_running;
use console::Term;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Ctrl-C：整理中時設定中斷旗標，讓工作執行緒在下一個檔案前停止；否則直接離開
#[must_use]
pub fn setup_shutdown_signal() -> Arc<AtomicBool> {
    let shutdown_signal = Arc::new(AtomicBool::new(false));
    let signal_clone = Arc::clone(&shutdown_signal);

    ctrlc::set_handler(move || {
        if is_worker_running() {
            signal_clone.store(true, Ordering::SeqCst);
            eprintln!("\nCancelling after the current file...");
        } else {
            let _ = Term::stdout().show_cursor();
            std::process::exit(130);
        }
    })
    .expect("無法設定 Ctrl-C 處理器");

    shutdown_signal
}
