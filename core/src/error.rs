// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use displaydoc::Display;
use thiserror::Error;

#[derive(Error, Display, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// precision must be positive, got {0}
    NotPositive(i64),
    /// precision must be a positive integer, got `{0}`
    NotAnInteger(String),
    /// {0}
    Arithmetic(#[from] chudnovsky_real::Error),
}
