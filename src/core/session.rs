use crate::core::transform::{save_with, with_default_extension};
use crate::domain::model::Mode;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{ReverserError, Result};
use crate::utils::validation::validate_file_name;
use std::path::PathBuf;

/// What a shell currently displays: the selected mode and the last result.
#[derive(Debug, Clone, Default)]
pub struct Session {
    mode: Mode,
    result: Option<String>,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self { mode, result: None }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.mode())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Applies the selected mode to `input` and keeps the result on display.
    ///
    /// Input that is blank after trimming leaves the session untouched.
    pub fn reverse(&mut self, input: &str) -> Result<&str> {
        let text = input.trim();
        if text.is_empty() {
            tracing::debug!("reverse requested with empty input");
            return Err(ReverserError::EmptyInput);
        }

        let result = self.mode.apply(text);
        tracing::debug!(mode = %self.mode, chars = result.chars().count(), "reversed text");
        Ok(self.result.insert(result).as_str())
    }

    /// Saves the displayed result to `path` (`.txt` appended when it has no extension).
    ///
    /// Returns the path the storage actually wrote, after resolving it.
    pub fn save<S: Storage>(&self, storage: &S, path: &str) -> Result<PathBuf> {
        let result = self.result.as_deref().ok_or(ReverserError::NothingToSave)?;
        let path = path.trim();
        validate_file_name("filename", path)?;

        save_with(storage, result, &with_default_extension(path))
    }

    pub fn clear(&mut self) {
        self.result = None;
    }
}
