use crate::component::{CameraManager, PhotoSorter};
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use log::warn;
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn run_photo_sorter(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    term.clear_screen()?;
    let sorter = PhotoSorter::new(Arc::clone(shutdown_signal));

    if let Err(e) = sorter.run(config) {
        eprintln!("{} {e:#}", style(t!("common.error_prefix")).red().bold());
    }

    pause(term)?;
    Ok(())
}

pub fn run_camera_manager(term: &Term, config: &mut Config) -> Result<()> {
    let mut manager = CameraManager::new(&config.settings.cameras);

    if let Some(cameras) = manager.run(term)? {
        config.settings.cameras = cameras;
        if let Err(e) = config.save() {
            warn!("無法儲存相機對照表: {e:#}");
            eprintln!("{} {e:#}", style(t!("common.error_prefix")).red().bold());
            pause(term)?;
        }
    }

    Ok(())
}
