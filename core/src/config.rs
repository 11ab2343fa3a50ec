// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use jiff::civil::Weekday;

use crate::error::{Error, Result};

/// The name of the RENTCAL application.
pub const APP_NAME: &str = "rentcal";

/// Configuration for the RENTCAL core.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for storing application state. The database lives here.
    ///
    /// When unset after normalization, an in-memory database is used.
    pub state_dir: Option<PathBuf>,

    /// First column of the calendar grid.
    pub week_start: WeekStart,

    /// Insert example apartments when the database has none.
    pub seed_examples: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: None,
            week_start: WeekStart::default(),
            seed_examples: true,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<()> {
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(expand_path(a).map_err(|e| {
                    Error::Config(format!("Failed to expand state directory path: {e}"))
                })?)
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        };

        Ok(())
    }
}

/// Day the calendar week starts on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl From<WeekStart> for Weekday {
    fn from(value: WeekStart) -> Self {
        match value {
            WeekStart::Sunday => Weekday::Sunday,
            WeekStart::Monday => Weekday::Monday,
        }
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| Error::Config("Invalid path".to_string()))?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| Error::Config("User-specific home directory not found".into()))
}

fn get_config_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| Error::Config("User-specific config directory not found".into()))
}

fn get_state_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| Error::Config("User-specific state directory not found".into()))
}
