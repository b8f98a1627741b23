use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        edit_config,
        editor,
    } = cmd
    {
        if *init {
            let written = Config::init(Some(path))?;
            success(format!("Config file: {}", written.display()));
        }

        if *print_config {
            if path.exists() {
                info(format!("Configuration file: {}\n", path.display()));
            } else {
                info(format!(
                    "{} does not exist, showing defaults\n",
                    path.display()
                ));
            }
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            if !path.exists() {
                Config::init(Some(path))?;
            }
            edit(path, editor.as_deref())?;
        }

        if !*init && !*print_config && !*edit_config {
            info("Nothing to do: use --print, --init or --edit");
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor = requested.unwrap_or(&default_editor);

    match Command::new(editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{}'", editor));
            return Ok(());
        }
        _ if editor == default_editor => {
            return Err(edit_failed(path, editor));
        }
        _ => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor, default_editor
            ));
        }
    }

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited using fallback '{}'",
                default_editor
            ));
            Ok(())
        }
        _ => Err(edit_failed(path, &default_editor)),
    }
}

fn edit_failed(path: &Path, editor: &str) -> AppError {
    AppError::Config(format!(
        "failed to edit {} with '{}'",
        path.display(),
        editor
    ))
}
