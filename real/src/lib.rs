// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Binary floating point numbers of arbitrary precision.
//!
//! Values are plain [`BigFloat`]s. All arithmetic goes through a
//! [`Context`], which carries the working precision in bits and the
//! [`Round`] mode applied to every result, so there is no global
//! precision state.
//!
//! ```rust
//! use chudnovsky_real::Context;
//!
//! # fn main() -> Result<(), chudnovsky_real::Error> {
//! let ctx = Context::new(64)?;
//! let two = ctx.from_int(2);
//! let root = ctx.sqrt(&two)?;
//! assert_eq!(ctx.to_fixed(&root, 10), "1.4142135624");
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod float;
mod round;

pub use context::Context;
pub use error::Error;
pub use float::BigFloat;
pub use round::Round;
