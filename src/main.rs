use anyhow::Result;
use console::{Term, style};
use log::{info, warn};
use photo_sort::config::types::Config;
use photo_sort::init;
use photo_sort::menu::show_main_menu;
use photo_sort::signal::setup_shutdown_signal;
use rust_i18n::t;

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en-US");

fn main() -> Result<()> {
    init::init();
    let term = Term::stdout();
    let shutdown_signal = setup_shutdown_signal();

    // Load config and set locale
    let mut config = Config::new()?;
    rust_i18n::set_locale(config.settings.language.as_str());
    if let Some(backup) = &config.backup_path {
        println!(
            "{}",
            style(t!("settings.load_failed", path = backup.display()))
                .yellow()
                .bold()
        );
        photo_sort::pause(&term)?;
    }

    loop {
        match show_main_menu(&term, &shutdown_signal, &mut config) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                println!("\n{}", style(t!("main_menu.goodbye")).green().bold());
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e}");
                eprintln!("{} {}", style(t!("common.error_prefix")).red().bold(), e);
                break;
            }
        }
    }

    // Save cameras and directories on close
    if let Err(e) = config.save() {
        warn!("無法儲存設定: {e:#}");
    }

    Ok(())
}
