//! Registry root locations
//!
//! Each supported browser keeps its profiles.ini under a per-OS directory.
//! The templates below are expanded against `$HOME` / `$APPDATA`.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Firefox-family browsers with a known registry root
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Browser {
    Firefox,
    Librewolf,
}

/// Operating-system families that place the registry differently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
}

impl Platform {
    /// Platform this binary was built for
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }
}

impl Browser {
    /// Unexpanded registry root for this browser on `platform`
    pub fn root_template(self, platform: Platform) -> &'static str {
        match (self, platform) {
            (Browser::Firefox, Platform::Windows) => r"$APPDATA\Mozilla\Firefox",
            (Browser::Firefox, Platform::MacOs) => "$HOME/Library/Application Support/Firefox",
            (Browser::Firefox, Platform::Unix) => "$HOME/.mozilla/firefox",
            (Browser::Librewolf, Platform::Windows) => r"$APPDATA\librewolf",
            (Browser::Librewolf, Platform::MacOs) => {
                "$HOME/Library/Application Support/librewolf"
            }
            (Browser::Librewolf, Platform::Unix) => "$HOME/.mozilla/librewolf",
        }
    }

    /// Expanded registry root for the current platform
    pub fn profiles_directory(self) -> Result<PathBuf> {
        expand_root(self.root_template(Platform::current()))
    }
}

/// Expand `$VAR` references in a root template
pub fn expand_root(template: &str) -> Result<PathBuf> {
    let expanded = shellexpand::env(template).map_err(|e| Error::Environment(e.to_string()))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Get the registry root from an explicit override or the browser table
///
/// Priority:
/// 1. Manual path provided via CLI or parameter
/// 2. The browser's location for the current OS
///
/// The result is made absolute once, against the current directory.
pub fn get_profiles_directory(browser: Browser, manual_path: Option<&Path>) -> Result<PathBuf> {
    let root = match manual_path {
        Some(path) => validate_and_use_profiles_dir(path)?,
        None => browser.profiles_directory()?,
    };
    let root = std::path::absolute(&root)?;
    debug!(root = %root.display(), ?browser, "using registry root");
    Ok(root)
}

/// Validate a manually supplied registry root
fn validate_and_use_profiles_dir(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(Error::InvalidProfilesDirectory(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}
