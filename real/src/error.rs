// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use displaydoc::Display;
use thiserror::Error;

#[derive(Error, Display, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precision must be at least 1 bit
    ZeroPrecision,
    /// Division by zero
    DivisionByZero,
    /// Can't take the square root of a negative number
    NegativeSqrt,
    /// Invalid decimal literal `{0}`
    Parse(String),
}
