//! JSON key-value files
//!
//! One serde type per file. A missing file reads as the type's default, so
//! a fresh install needs no setup step.

use crate::error::{Result, SettingsError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Typed handle to a JSON file on disk
#[derive(Debug, Clone)]
pub struct PreferenceFile<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> PreferenceFile<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file, or the default value when it does not exist
    pub fn load(&self) -> Result<T> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                debug!(path = %self.path.display(), "Loaded preference file");
                Ok(serde_json::from_str(&contents)?)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Preference file missing, using defaults");
                Ok(T::default())
            }
            Err(source) => Err(self.io_error(source)),
        }
    }

    /// Write the value as pretty JSON, creating parent directories
    pub fn save(&self, value: &T) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(value)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), "Saved preference file");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> SettingsError {
        SettingsError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
