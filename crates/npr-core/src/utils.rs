//! Shared utility functions for npr crates

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Get the user's home directory
///
/// The HOME environment variable wins over `dirs::home_dir()` so that
/// containers and test harnesses that override HOME are respected.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    dirs::home_dir().ok_or(Error::HomeDirNotFound)
}
