// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use num::bigint::Sign;
use num::{BigInt, BigUint, Integer, Zero};

use crate::round::shift_round;
use crate::{BigFloat, Error, Round};

/// Working precision and rounding mode shared by a group of
/// operations.
///
/// Every operation computes its result as if exactly and then rounds it
/// once to `precision` significant bits, so results are
/// deterministic and independent of the precision of the inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Context {
    precision: u64,
    round: Round,
}

impl Context {
    pub fn new(precision: u64) -> Result<Context, Error> {
        if precision == 0 {
            return Err(Error::ZeroPrecision);
        }
        Ok(Context {
            precision,
            round: Round::Nearest,
        })
    }

    pub fn with_round(self, round: Round) -> Context {
        Context { round, ..self }
    }

    pub fn precision(&self) -> u64 {
        self.precision
    }

    pub fn round_mode(&self) -> Round {
        self.round
    }

    pub fn zero(&self) -> BigFloat {
        BigFloat::zero()
    }

    pub fn one(&self) -> BigFloat {
        self.from_int(1)
    }

    pub fn from_int(&self, value: impl Into<BigInt>) -> BigFloat {
        self.round(value.into(), 0)
    }

    /// Brings `mantissa * 2^exponent` to exactly `precision` bits.
    fn round(&self, mantissa: BigInt, exponent: i64) -> BigFloat {
        if mantissa.is_zero() {
            return BigFloat::zero();
        }
        let bits = mantissa.bits();
        if bits > self.precision {
            let shift = bits - self.precision;
            let mut mantissa = shift_round(mantissa, shift, self.round);
            let mut exponent = exponent + shift as i64;
            // Rounding up can carry into a new bit, leaving a power of two.
            if mantissa.bits() > self.precision {
                mantissa >>= 1u32;
                exponent += 1;
            }
            BigFloat::new(mantissa, exponent)
        } else {
            let shift = self.precision - bits;
            BigFloat::new(mantissa << shift, exponent - shift as i64)
        }
    }

    /// Rounds `numer / denom * 2^exponent`. The denominator must be
    /// non-zero.
    fn round_ratio(&self, numer: &BigInt, denom: &BigInt, exponent: i64) -> BigFloat {
        if numer.is_zero() {
            return BigFloat::zero();
        }
        // At least precision + 2 quotient bits, plus a sticky bit for
        // anything left in the remainder.
        let shift =
            (self.precision as i64 + 2 + denom.bits() as i64 - numer.bits() as i64).max(0);
        let (quotient, remainder) =
            (numer.magnitude() << shift as u64).div_rem(denom.magnitude());
        let mut quotient = quotient << 1u32;
        if !remainder.is_zero() {
            quotient += 1u32;
        }
        let sign = if numer.sign() == denom.sign() {
            Sign::Plus
        } else {
            Sign::Minus
        };
        self.round(BigInt::from_biguint(sign, quotient), exponent - shift - 1)
    }

    pub fn add(&self, left: &BigFloat, right: &BigFloat) -> BigFloat {
        if left.is_zero() {
            return self.round(right.mantissa().clone(), right.exponent());
        }
        if right.is_zero() {
            return self.round(left.mantissa().clone(), left.exponent());
        }
        let (high, low) = if left.msb() >= right.msb() {
            (left, right)
        } else {
            (right, left)
        };

        // Both `high` and every rounding boundary near it are multiples
        // of 2^grid. An addend entirely below 2^(grid - 1) can only
        // decide which way to round, so it is replaced by a single
        // sticky unit at that position instead of aligning the
        // mantissas bit for bit.
        let grid = high.exponent().min(high.msb() - self.precision as i64 - 2);
        if low.msb() < grid {
            let sticky = if low.is_negative() { -1 } else { 1 };
            let shift = (high.exponent() - grid + 1) as u64;
            let mantissa = (high.mantissa() << shift) + sticky;
            return self.round(mantissa, grid - 1);
        }

        let exponent = high.exponent().min(low.exponent());
        let mantissa = (high.mantissa() << (high.exponent() - exponent) as u64)
            + (low.mantissa() << (low.exponent() - exponent) as u64);
        self.round(mantissa, exponent)
    }

    pub fn sub(&self, left: &BigFloat, right: &BigFloat) -> BigFloat {
        self.add(left, &-right)
    }

    pub fn neg(&self, value: &BigFloat) -> BigFloat {
        self.round(-value.mantissa(), value.exponent())
    }

    pub fn mul(&self, left: &BigFloat, right: &BigFloat) -> BigFloat {
        self.round(
            left.mantissa() * right.mantissa(),
            left.exponent() + right.exponent(),
        )
    }

    pub fn mul_int(&self, left: &BigFloat, right: i64) -> BigFloat {
        self.round(left.mantissa() * right, left.exponent())
    }

    pub fn div(&self, left: &BigFloat, right: &BigFloat) -> Result<BigFloat, Error> {
        if right.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.round_ratio(
            left.mantissa(),
            right.mantissa(),
            left.exponent() - right.exponent(),
        ))
    }

    /// Raises `base` to a non-negative integer power. The power is
    /// computed exactly and rounded once.
    pub fn pow(&self, base: &BigFloat, exp: u64) -> BigFloat {
        let mantissa = num::pow(base.mantissa().clone(), exp as usize);
        self.round(mantissa, base.exponent() * exp as i64)
    }

    pub fn sqrt(&self, value: &BigFloat) -> Result<BigFloat, Error> {
        if value.is_zero() {
            return Ok(BigFloat::zero());
        }
        if value.is_negative() {
            return Err(Error::NegativeSqrt);
        }

        // Scale the mantissa so its root has precision + 2 bits and the
        // remaining exponent is even.
        let wanted = 2 * (self.precision + 2);
        let mut shift = wanted.saturating_sub(value.bits());
        if (value.exponent() - shift as i64).rem_euclid(2) != 0 {
            shift += 1;
        }
        let scaled = value.mantissa().magnitude() << shift;
        let root = scaled.sqrt();
        let exact = &root * &root == scaled;
        let mut root = root << 1u32;
        if !exact {
            root += 1u32;
        }
        let exponent = (value.exponent() - shift as i64) / 2 - 1;
        Ok(self.round(BigInt::from_biguint(Sign::Plus, root), exponent))
    }

    /// Parses a decimal literal such as `-12.375`.
    pub fn parse(&self, text: &str) -> Result<BigFloat, Error> {
        let invalid = || Error::Parse(text.to_owned());
        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (unsigned, ""),
        };
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
            return Err(invalid());
        }

        let digits = format!("{}{}", integer, fraction);
        let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        let numer = BigInt::from_biguint(sign, magnitude);
        let denom = num::pow(BigInt::from(10), fraction.len());
        Ok(self.round_ratio(&numer, &denom, 0))
    }

    /// Renders `value` with `digits` fractional digits, using this
    /// context's rounding mode for the last digit.
    pub fn to_fixed(&self, value: &BigFloat, digits: u64) -> String {
        value.to_fixed(digits, self.round)
    }
}
