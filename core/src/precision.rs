// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::estimate;
use crate::Error;

/// A validated number of significant bits for one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(NonZeroU64);

impl Precision {
    pub fn new(bits: u64) -> Result<Precision, Error> {
        NonZeroU64::new(bits)
            .map(Precision)
            .ok_or(Error::NotPositive(0))
    }

    pub fn bits(self) -> u64 {
        self.0.get()
    }

    /// Number of series terms summed at this precision.
    pub fn iterations(self) -> u64 {
        estimate::iterations(self.bits())
    }

    /// Number of fractional decimal digits worth displaying.
    pub fn decimal_digits(self) -> u64 {
        estimate::decimal_digits(self.bits())
    }
}

impl FromStr for Precision {
    type Err = Error;

    fn from_str(text: &str) -> Result<Precision, Error> {
        let text = text.trim();
        match text.parse::<u64>() {
            Ok(bits) => Precision::new(bits),
            // Distinguish "-5" from "five" for the error message.
            Err(_) => match text.parse::<i64>() {
                Ok(value) => Err(Error::NotPositive(value)),
                Err(_) => Err(Error::NotAnInteger(text.to_owned())),
            },
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{} bits", self.bits())
    }
}
