// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chudnovsky_core::Precision;
use clap::{Arg, ArgAction, Command};
use eyre::{eyre, Result};
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;

use chudnovsky::{config, fmt, logging};

fn main() -> Result<ExitCode> {
    let command = Command::new("chudnovsky")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Computes π to a given binary precision with the Chudnovsky series")
        .arg(
            Arg::new("BITS")
                .help("Precision of the calculation, in bits")
                .required_unless_present("config-path")
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .num_args(1)
                .long("config")
                .action(ArgAction::Set)
                .help("Set path to config.toml"),
        )
        .arg(
            Arg::new("config-path")
                .long("config-path")
                .help("Prints a path to the config file, then exits")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("metrics")
                .long("metrics")
                .help("Prints timing and the number of series terms to stderr")
                .action(ArgAction::SetTrue),
        );

    // Usage errors exit with 1 rather than clap's default of 2. Help and
    // version requests are also reported as errors by clap.
    let matches = match command.try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            err.print()?;
            return Ok(if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
    };

    color_eyre::install()?;

    if matches.get_flag("config-path") {
        println!("{}", config::config_toml_path()?.display());
        return Ok(ExitCode::SUCCESS);
    }

    let config = config::read_config(matches.get_one::<String>("config").map(|s| &**s))?;
    logging::init(&config.log)?;

    let bits = matches
        .get_one::<String>("BITS")
        .ok_or_else(|| eyre!("Missing precision"))?;
    let precision: Precision = bits.parse()?;

    let start = Instant::now();
    let calculation = chudnovsky_core::calculate(precision)?;
    let elapsed = start.elapsed();
    info!(?elapsed, iterations = calculation.iterations, "finished");

    println!("{}", fmt::result_line(&config, &calculation));
    if config.output.show_metrics || matches.get_flag("metrics") {
        eprintln!("{}", fmt::metrics_line(&calculation, elapsed));
    }
    Ok(ExitCode::SUCCESS)
}
