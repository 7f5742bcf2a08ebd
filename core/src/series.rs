// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chudnovsky_real::{BigFloat, Context};
use tracing::trace;

use crate::Error;

/// The Chudnovsky constant C. The series divides by successive powers
/// of C^3.
pub(crate) const C: u64 = 640_320;

const LINEAR_BASE: u128 = 13_591_409;
const LINEAR_STEP: u128 = 545_140_134;

/// What the combiner needs once every term has been added.
#[derive(Clone, Debug)]
pub(crate) struct Finished {
    pub sum: BigFloat,
    pub c3: BigFloat,
}

/// Sums the series term by term.
///
/// At the start of term k, `power` (X) holds C^(3k), `coefficient` (K)
/// holds the coefficient product of terms 0..k, and `sum` holds the
/// first k terms.
pub(crate) struct Series<'a> {
    ctx: &'a Context,
    iterations: u64,
    c3: BigFloat,
    sum: BigFloat,
    coefficient: BigFloat,
    power: BigFloat,
}

impl<'a> Series<'a> {
    pub(crate) fn new(ctx: &'a Context, iterations: u64) -> Series<'a> {
        let c = ctx.from_int(C);
        Series {
            ctx,
            iterations,
            c3: ctx.pow(&c, 3),
            sum: ctx.zero(),
            coefficient: ctx.one(),
            power: ctx.one(),
        }
    }

    pub(crate) fn run(mut self) -> Result<Finished, Error> {
        for k in 0..self.iterations {
            self.step(k)?;
        }
        Ok(Finished {
            sum: self.sum,
            c3: self.c3,
        })
    }

    fn step(&mut self, k: u64) -> Result<(), Error> {
        trace!(k, "adding series term");
        let ctx = self.ctx;

        let numerator = ctx.from_int(LINEAR_BASE + LINEAR_STEP * k as u128);
        let term = ctx.div(&ctx.mul(&self.coefficient, &numerator), &self.power)?;
        let term = if k % 2 == 1 { ctx.neg(&term) } else { term };
        self.sum = ctx.add(&self.sum, &term);

        // The last term's coefficient would never be read.
        if k + 1 < self.iterations {
            let multiplier = self.multiplier(k)?;
            self.coefficient = ctx.mul(&self.coefficient, &multiplier);
        }

        self.power = ctx.mul(&self.power, &self.c3);
        Ok(())
    }

    /// K(k+1) / K(k) = (6k+1)...(6k+6) / ((3k+1)(3k+2)(3k+3) (k+1)^3)
    fn multiplier(&self, k: u64) -> Result<BigFloat, Error> {
        let ctx = self.ctx;
        let six = self.product(6 * k as u128, 6);
        let three = self.product(3 * k as u128, 3);
        let cube = ctx.pow(&ctx.from_int(k as u128 + 1), 3);
        let denominator = ctx.mul(&three, &cube);
        Ok(ctx.div(&six, &denominator)?)
    }

    /// (start + 1) * (start + 2) * ... * (start + count)
    fn product(&self, start: u128, count: u128) -> BigFloat {
        (1..=count).fold(self.ctx.one(), |acc, i| {
            self.ctx.mul(&acc, &self.ctx.from_int(start + i))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context::new(256).unwrap()
    }

    #[test]
    fn first_term_is_exact() {
        let ctx = ctx();
        let finished = Series::new(&ctx, 1).run().unwrap();
        assert_eq!(finished.sum, ctx.from_int(13_591_409));
        assert_eq!(finished.c3, ctx.from_int(262_537_412_640_768_000u64));
    }

    #[test]
    fn coefficients() {
        let ctx = ctx();
        let mut series = Series::new(&ctx, 3);
        series.step(0).unwrap();
        // 6! / (3! * 1^3)
        assert_eq!(series.coefficient, ctx.from_int(120));
        assert_eq!(series.power, series.c3);

        series.step(1).unwrap();
        // 120 * (7 * 8 * 9 * 10 * 11 * 12) / (4 * 5 * 6 * 2^3)
        assert_eq!(series.coefficient, ctx.from_int(120 * 693));
        assert_eq!(series.power, ctx.mul(&series.c3, &series.c3));
    }

    #[test]
    fn last_term_keeps_coefficient() {
        let ctx = ctx();
        let mut series = Series::new(&ctx, 1);
        series.step(0).unwrap();
        assert_eq!(series.coefficient, ctx.one());
    }

    #[test]
    fn terms_alternate() {
        let ctx = ctx();
        let one = Series::new(&ctx, 1).run().unwrap().sum;
        let two = Series::new(&ctx, 2).run().unwrap().sum;
        let three = Series::new(&ctx, 3).run().unwrap().sum;
        assert!(two < one);
        assert!(three > two);
        assert!(three < one);
    }
}
