// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use color_eyre::Result;
use eyre::{eyre, WrapErr};
use std::env;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::config::Log;

/// Environment variable that takes precedence over `log.filter`.
pub const LOG_ENV: &str = "CHUDNOVSKY_LOG";

fn filter_directives(config: &Log) -> String {
    env::var(LOG_ENV).unwrap_or_else(|_| config.filter.clone())
}

/// Installs the global subscriber. Logs go to stderr so they never mix
/// with the result on stdout.
pub fn init(config: &Log) -> Result<()> {
    let directives = filter_directives(config);
    let filter = EnvFilter::try_new(&directives)
        .wrap_err_with(|| format!("Invalid log filter `{}`", directives))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| eyre!("Failed to install logger: {}", err))
}
