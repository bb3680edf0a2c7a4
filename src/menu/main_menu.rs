use crate::config::types::{Config, Language, SortMode, SortOptions};
use crate::menu::handlers::{run_camera_manager, run_photo_sorter};
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{MultiSelect, Select};
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let options = vec![
        t!("main_menu.opt_sort"),
        t!("main_menu.opt_cameras"),
        t!("main_menu.opt_options"),
        t!("main_menu.opt_settings"),
        t!("main_menu.exit"),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("main_menu.prompt"))
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_photo_sorter(term, shutdown_signal, config)?;
            Ok(true)
        }
        Some(1) => {
            run_camera_manager(term, config)?;
            Ok(true)
        }
        Some(2) => {
            show_sort_options_menu(term, config)?;
            Ok(true)
        }
        Some(3) => {
            show_language_menu(term, config)?;
            Ok(true)
        }
        Some(4) => Ok(false),
        None => Ok(false), // ESC pressed - exit
        _ => unreachable!(),
    }
}

/// 整理選項：先選複製或移動，再勾選其他選項
fn show_sort_options_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("options.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let current = config.settings.sort;

    let modes = [SortMode::Copy, SortMode::Move];
    let mode_items: Vec<String> = vec![
        t!("options.mode_copy").to_string(),
        t!("options.mode_move").to_string(),
    ];
    let default_index = modes
        .iter()
        .position(|&m| m == current.mode)
        .unwrap_or(0);

    let Some(mode_index) = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("options.mode_prompt"))
        .items(&mode_items)
        .default(default_index)
        .interact_on_opt(term)?
    else {
        return Ok(());
    };

    let flag_items: Vec<String> = vec![
        t!("options.within_dirs").to_string(),
        t!("options.by_datetime").to_string(),
        t!("options.by_camera").to_string(),
        t!("options.skip_identical").to_string(),
    ];
    let defaults = [
        current.within_dirs,
        current.by_datetime,
        current.by_camera,
        current.skip_identical,
    ];

    // ESC pressed - return without saving
    let Some(chosen) = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("options.flags_prompt"))
        .items(&flag_items)
        .defaults(&defaults)
        .interact_on_opt(term)?
    else {
        return Ok(());
    };

    let updated = SortOptions {
        mode: modes[mode_index],
        within_dirs: chosen.contains(&0),
        by_datetime: chosen.contains(&1),
        by_camera: chosen.contains(&2),
        skip_identical: chosen.contains(&3),
    };

    if updated.within_dirs && updated.mode == SortMode::Copy {
        println!("\n{}", style(t!("options.within_dirs_moves")).yellow());
    }

    if updated != current {
        config.settings.sort = updated;
        config.save()?;
        println!("\n{}", style(t!("settings.saved")).green());
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}

/// 語言設定選單
fn show_language_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.language.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let languages = Language::ALL;

    let items: Vec<String> = languages.iter().map(|l: &Language| l.to_string()).collect();

    let default_index = languages
        .iter()
        .position(|&l| l == config.settings.language)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("settings.language.prompt"))
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    // ESC pressed - return without saving
    let Some(selection) = selection else {
        return Ok(());
    };

    let selected_lang = languages[selection];

    if selected_lang != config.settings.language {
        config.settings.language = selected_lang;
        rust_i18n::set_locale(selected_lang.as_str());
        config.save()?;
        println!(
            "\n{} {}",
            style(t!("settings.saved")).green(),
            selected_lang
        );
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}
