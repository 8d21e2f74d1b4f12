// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    path::{Path, PathBuf},
    str::FromStr,
};

use tokio::fs;

use calendarun_core::{APP_NAME, Config as CoreConfig};

const CALENDARUN_CONFIG_ENV: &str = "CALENDARUN_CONFIG";
const CALENDARUN_DEV_ENV: &str = "CALENDARUN_DEV";

const CALENDARUN_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const CALENDARUN_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Locates, reads and normalizes the configuration file.
///
/// The `--config` flag wins over `CALENDARUN_CONFIG`, which wins over the
/// default location under the user config directory.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CALENDARUN_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({CALENDARUN_DEV_ENV} is set): config must be explicitly specified via --config or {CALENDARUN_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()?;

    let config = raw.normalize(path.parent())?;
    config.core.validate()?;
    Ok(config)
}

/// Configuration of the command-line application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Layout settings.
    pub core: CoreConfig,

    /// File holding the schedules, if any.
    pub schedules: Option<PathBuf>,
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,

    #[serde(default)]
    schedules: Option<PathBuf>,
}

impl ConfigRaw {
    /// Expands the schedule path; relative paths are taken from the config file's directory.
    fn normalize(self, base: Option<&Path>) -> Result<Config, Box<dyn Error>> {
        let schedules = match self.schedules {
            Some(path) => {
                let path = expand_path(&path)
                    .map_err(|e| format!("Failed to expand schedules path: {e}"))?;
                match base {
                    Some(base) if path.is_relative() => Some(base.join(path)),
                    _ => Some(path),
                }
            }
            None => {
                tracing::warn!("no schedules file configured, calendar will be empty");
                None
            }
        };

        Ok(Config {
            core: self.core,
            schedules,
        })
    }
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

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

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(CALENDARUN_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if CALENDARUN_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if CALENDARUN_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            CALENDARUN_DEV_ENV,
            val,
            CALENDARUN_DEV_VALID_TRUE.join(", "),
            CALENDARUN_DEV_VALID_FALSE.join(", ")
        );
        None
    }
}
