// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{cmp::Ordering, fmt, ops};

use num::{BigInt, Signed, Zero};

use crate::round::{shift_round, Round};

/// A binary floating point number n = m * 2^e.
///
/// Values produced by a [`Context`](crate::Context) have a mantissa of
/// exactly `precision` significant bits, which makes the representation
/// of a value unique within one precision. Zero is always stored as
/// `0 * 2^0`.
///
/// Equality and ordering compare the numeric values, so values of
/// different precisions can be compared directly. To check that two
/// results are bit-identical, compare [`mantissa`](BigFloat::mantissa)
/// and [`exponent`](BigFloat::exponent).
#[derive(Clone)]
pub struct BigFloat {
    mantissa: BigInt,
    exponent: i64,
}

impl BigFloat {
    pub(crate) fn new(mantissa: BigInt, exponent: i64) -> BigFloat {
        if mantissa.is_zero() {
            BigFloat::zero()
        } else {
            BigFloat { mantissa, exponent }
        }
    }

    pub fn zero() -> BigFloat {
        BigFloat {
            mantissa: BigInt::zero(),
            exponent: 0,
        }
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Number of significant bits in the mantissa.
    pub fn bits(&self) -> u64 {
        self.mantissa.bits()
    }

    /// Position of the most significant bit, such that
    /// 2^(msb - 1) <= |n| < 2^msb. Meaningless for zero.
    pub fn msb(&self) -> i64 {
        self.bits() as i64 + self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.mantissa.is_positive()
    }

    pub fn abs(&self) -> BigFloat {
        BigFloat {
            mantissa: self.mantissa.abs(),
            exponent: self.exponent,
        }
    }

    /// Renders the number with exactly `digits` digits after the
    /// decimal point, rounding the last digit with `round`.
    pub fn to_fixed(&self, digits: u64, round: Round) -> String {
        let scale = num::pow(BigInt::from(10), digits as usize);
        let scaled = &self.mantissa * scale;
        let scaled = if self.exponent >= 0 {
            scaled << self.exponent as u64
        } else {
            shift_round(scaled, self.exponent.unsigned_abs(), round)
        };

        let mut text = scaled.magnitude().to_str_radix(10);
        let digits = digits as usize;
        if digits > 0 {
            if text.len() <= digits {
                let padding = "0".repeat(digits + 1 - text.len());
                text.insert_str(0, &padding);
            }
            text.insert(text.len() - digits, '.');
        }
        if scaled.is_negative() {
            text.insert(0, '-');
        }
        text
    }

    fn cmp_value(&self, other: &BigFloat) -> Ordering {
        match self.mantissa.sign().cmp(&other.mantissa.sign()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        if self.is_zero() {
            return Ordering::Equal;
        }

        // Same sign from here on; a larger magnitude means a larger
        // value only for positive numbers.
        let magnitude = match self.msb().cmp(&other.msb()) {
            Ordering::Equal => {
                let exponent = self.exponent.min(other.exponent);
                let left = &self.mantissa << (self.exponent - exponent) as u64;
                let right = &other.mantissa << (other.exponent - exponent) as u64;
                return left.cmp(&right);
            }
            unequal => unequal,
        };
        if self.is_negative() {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

impl PartialEq for BigFloat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

impl Eq for BigFloat {}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_value(other))
    }
}

impl Ord for BigFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

impl ops::Neg for BigFloat {
    type Output = BigFloat;

    fn neg(mut self) -> Self::Output {
        self.mantissa = -self.mantissa;
        self
    }
}

impl<'a> ops::Neg for &'a BigFloat {
    type Output = BigFloat;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl fmt::Debug for BigFloat {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{} * 2^{}", &self.mantissa, self.exponent)
    }
}

impl fmt::Display for BigFloat {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.to_fixed(20, Round::Nearest))
    }
}
