// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ansi_term::{Color, Style};
use color_eyre::Result;
use eyre::{eyre, WrapErr};
use serde_derive::{Deserialize, Serialize};
use std::env;
use std::fs::read_to_string;
use std::io::{ErrorKind, IsTerminal};
use std::path::PathBuf;

pub fn config_toml_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| eyre!("Could not find config directory"))?;
    path.push("chudnovsky");
    path.push("config.toml");
    Ok(path)
}

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: Output,
    pub colors: Colors,
    pub log: Log,
}

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Output {
    /// Print how long the calculation took and how many terms it
    /// summed.
    pub show_metrics: bool,
}

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Colors {
    /// Whether colored output should be enabled. Detected from the
    /// terminal when unset.
    pub enabled: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Log {
    /// A tracing filter directive such as `warn` or
    /// `chudnovsky_core=trace`. Overridden by `CHUDNOVSKY_LOG`.
    pub filter: String,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            filter: "warn".to_owned(),
        }
    }
}

pub struct Theme {
    pub plain: Style,
    pub bits: Style,
    pub value: Style,
}

impl Theme {
    fn colored() -> Theme {
        Theme {
            plain: Style::default(),
            bits: Style::new().bold(),
            value: Style::new().fg(Color::Cyan),
        }
    }

    fn disabled() -> Theme {
        Theme {
            plain: Style::default(),
            bits: Style::default(),
            value: Style::default(),
        }
    }
}

impl Config {
    pub fn colors_enabled(&self) -> bool {
        self.colors.enabled.unwrap_or_else(|| {
            env::var("NO_COLOR") == Err(env::VarError::NotPresent)
                && std::io::stdout().is_terminal()
        })
    }

    pub fn get_theme(&self) -> Theme {
        if self.colors_enabled() {
            Theme::colored()
        } else {
            Theme::disabled()
        }
    }
}

/// Loads the configuration from `override_path`, or from the default
/// location. Only a missing default file falls back to the defaults.
pub fn read_config(override_path: Option<&str>) -> Result<Config> {
    let (path, explicit) = match override_path {
        Some(path) => (PathBuf::from(path), true),
        None => (config_toml_path()?, false),
    };
    let text = match read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound && !explicit => {
            return Ok(Config::default())
        }
        Err(err) => {
            return Err(eyre!(err).wrap_err(format!(
                "Cannot read config file `{}`",
                path.display()
            )))
        }
    };
    toml::from_str(&text)
        .wrap_err_with(|| format!("Invalid config file `{}`", path.display()))
}
