use std::fs;
use std::process::Command;

use crate::errors::{AppError, AppResult};

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &str) -> AppResult<()> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
        Ok(())
    }

    /// Open the file in `editor`, `$EDITOR`, or a platform default.
    pub fn edit(path: &str, editor: &Option<String>) -> AppResult<()> {
        let default_editor = if cfg!(windows) { "notepad" } else { "nano" };
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| default_editor.into());

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start '{ed}': {e}")))?;

        if !status.success() {
            return Err(AppError::Config(format!("'{ed}' exited with {status}")));
        }
        Ok(())
    }
}
