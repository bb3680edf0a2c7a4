use super::camera_table::CameraTable;
use crate::config::CameraMap;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use log::info;
use rust_i18n::t;
use std::path::PathBuf;

/// 相機對照編輯對話框
pub struct CameraManager {
    table: CameraTable,
}

impl CameraManager {
    #[must_use]
    pub fn new(cameras: &CameraMap) -> Self {
        Self {
            table: CameraTable::from_map(cameras),
        }
    }

    /// 套用時回傳新的對照表；取消（或 ESC）回傳 `None`
    pub fn run(&mut self, term: &Term) -> Result<Option<CameraMap>> {
        loop {
            term.clear_screen()?;

            println!("{}", style(t!("cameras.title")).cyan().bold());
            println!("{}", style(t!("common.esc_hint")).dim());
            self.print_table();

            let options = vec![
                t!("cameras.opt_add"),
                t!("cameras.opt_add_from"),
                t!("cameras.opt_edit"),
                t!("cameras.opt_remove"),
                t!("cameras.opt_apply"),
                t!("cameras.opt_cancel"),
            ];

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(t!("cameras.prompt"))
                .items(&options)
                .default(0)
                .interact_on_opt(term)?;

            match selection {
                Some(0) => self.add(term)?,
                Some(1) => self.add_from_image(term)?,
                Some(2) => self.edit(term)?,
                Some(3) => self.remove(term)?,
                Some(4) => {
                    let cameras = self.table.to_map();
                    info!("套用相機對照表: {cameras:?}");
                    return Ok(Some(cameras));
                }
                Some(5) | None => return Ok(None),
                _ => unreachable!(),
            }
        }
    }

    fn print_table(&self) {
        println!();
        if self.table.rows().is_empty() {
            println!("  {}", style(t!("cameras.empty")).dim());
        }
        for row in self.table.rows() {
            let pretty = if row.pretty_name.is_empty() {
                style(t!("cameras.unnamed").to_string()).yellow()
            } else {
                style(row.pretty_name.clone()).green()
            };
            println!("  {} {} {}", row.exif_camera, style("→").dim(), pretty);
        }
        println!();
    }

    fn add(&mut self, term: &Term) -> Result<()> {
        let exif_camera: String = Input::new()
            .with_prompt(t!("cameras.prompt_exif"))
            .interact_text()?;
        let pretty_name: String = Input::new()
            .with_prompt(t!("cameras.prompt_pretty"))
            .default(exif_camera.trim().to_string())
            .interact_text()?;

        if let Err(e) = self.table.add(&exif_camera, &pretty_name) {
            eprintln!("{} {e}", style(t!("common.error_prefix")).red().bold());
            pause(term)?;
        }
        Ok(())
    }

    fn add_from_image(&mut self, term: &Term) -> Result<()> {
        let path: String = Input::new()
            .with_prompt(t!("cameras.prompt_image"))
            .interact_text()?;

        match self.table.add_from_image(&PathBuf::from(path.trim())) {
            Ok(exif_camera) => {
                let pretty_name: String = Input::new()
                    .with_prompt(t!("cameras.prompt_pretty"))
                    .default(exif_camera.clone())
                    .interact_text()?;
                if let Some(index) = self.table.position(&exif_camera) {
                    self.table.set_pretty_name(index, &pretty_name);
                }
            }
            Err(e) => {
                eprintln!("{} {e}", style(t!("common.error_prefix")).red().bold());
                pause(term)?;
            }
        }
        Ok(())
    }

    fn select_row(&self, term: &Term) -> Result<Option<usize>> {
        if self.table.rows().is_empty() {
            return Ok(None);
        }

        let items: Vec<String> = self
            .table
            .rows()
            .iter()
            .map(|row| format!("{} → {}", row.exif_camera, row.pretty_name))
            .collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("cameras.prompt_select"))
            .items(&items)
            .default(0)
            .interact_on_opt(term)?;
        Ok(selection)
    }

    fn edit(&mut self, term: &Term) -> Result<()> {
        let Some(index) = self.select_row(term)? else {
            return Ok(());
        };

        let current = self.table.rows()[index].pretty_name.clone();
        let pretty_name: String = Input::new()
            .with_prompt(t!("cameras.prompt_pretty"))
            .default(current)
            .interact_text()?;
        self.table.set_pretty_name(index, &pretty_name);
        Ok(())
    }

    fn remove(&mut self, term: &Term) -> Result<()> {
        if let Some(index) = self.select_row(term)? {
            self.table.remove(index);
        }
        Ok(())
    }
}
