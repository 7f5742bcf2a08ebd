// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Computes π to an arbitrary binary precision by summing the
//! Chudnovsky series term by term.
//!
//! Each evaluation works at one fixed precision: the number of series
//! terms is estimated from it, every intermediate value is rounded to
//! it (round-to-nearest), and the result is a
//! [`BigFloat`](chudnovsky_real::BigFloat) of that precision.
//!
//! ## Example
//!
//! ```rust
//! # fn main() -> Result<(), chudnovsky_core::Error> {
//! let pi = chudnovsky_core::compute_pi(200)?;
//! let text = pi.to_fixed(15, chudnovsky_real::Round::Nearest);
//! assert_eq!(text, "3.141592653589793");
//! # Ok(())
//! # }
//! ```
//!
//! [`calculate`] returns the same value together with what a front end
//! usually wants to print alongside it.
//!
//! ```rust
//! use chudnovsky_core::Precision;
//!
//! # fn main() -> Result<(), chudnovsky_core::Error> {
//! let precision: Precision = "64".parse()?;
//! let calculation = chudnovsky_core::calculate(precision)?;
//! assert_eq!(calculation.iterations, 2);
//! assert!(calculation.to_fixed().starts_with("3.14159265358979323"));
//! # Ok(())
//! # }
//! ```

use chudnovsky_real::{BigFloat, Context, Round};
use tracing::debug;

mod combine;
mod error;
pub mod estimate;
mod precision;
mod series;

pub use error::Error;
pub use precision::Precision;

/// The result of one evaluation.
#[derive(Clone, Debug)]
pub struct Calculation {
    pub precision: Precision,
    pub iterations: u64,
    pub value: BigFloat,
}

impl Calculation {
    /// Renders π with as many fractional digits as the precision can
    /// carry, rounded to nearest.
    pub fn to_fixed(&self) -> String {
        self.value
            .to_fixed(self.precision.decimal_digits(), Round::Nearest)
    }
}

/// Evaluates π at `precision`.
pub fn calculate(precision: Precision) -> Result<Calculation, Error> {
    let ctx = Context::new(precision.bits())?.with_round(Round::Nearest);
    let iterations = precision.iterations();
    debug!(
        bits = ctx.precision(),
        round = ?ctx.round_mode(),
        iterations,
        "computing pi"
    );

    let finished = series::Series::new(&ctx, iterations).run()?;
    let value = combine::combine(&ctx, &finished)?;

    Ok(Calculation {
        precision,
        iterations,
        value,
    })
}

/// Computes π to `bits` bits of precision.
pub fn compute_pi(bits: u64) -> Result<BigFloat, Error> {
    let precision = Precision::new(bits)?;
    calculate(precision).map(|calculation| calculation.value)
}
