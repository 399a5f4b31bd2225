use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Open the config file in `editor`, else $EDITOR/$VISUAL, else the
    /// platform default. A failing requested editor falls back to the default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => {
                println!("✅ Configuration file edited successfully using '{requested}'");
                Ok(())
            }
            _ => {
                eprintln!(
                    "⚠️  Editor '{requested}' not available, falling back to '{default_editor}'"
                );
                match Command::new(&default_editor).arg(path).status() {
                    Ok(s) if s.success() => Ok(()),
                    Ok(_) | Err(_) => Err(AppError::Config(format!(
                        "failed to edit configuration file using '{default_editor}'"
                    ))),
                }
            }
        }
    }
}
