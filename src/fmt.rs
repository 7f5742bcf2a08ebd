// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ansi_term::{ANSIString, ANSIStrings};
use chudnovsky_core::Calculation;
use std::time::Duration;

use crate::config::Config;

/// The line printed for a finished calculation, e.g.
/// `Calculated π with precision 64 bits: 3.1415926535897932385`.
pub fn result_line(config: &Config, calculation: &Calculation) -> String {
    let theme = config.get_theme();
    let strings: &[ANSIString<'static>] = &[
        theme.plain.paint("Calculated π with precision "),
        theme.bits.paint(calculation.precision.bits().to_string()),
        theme.plain.paint(" bits: "),
        theme.value.paint(calculation.to_fixed()),
    ];
    ANSIStrings(strings).to_string()
}

pub fn metrics_line(calculation: &Calculation, elapsed: Duration) -> String {
    format!(
        "Finished in {:?} using {} terms",
        elapsed, calculation.iterations
    )
}
