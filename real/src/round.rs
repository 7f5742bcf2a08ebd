// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use num::bigint::{BigInt, BigUint, Sign};
use num::{Integer, One, Zero};

/// How a result that can't be represented exactly is brought back to
/// the working precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Round {
    /// Round to the nearest representable value, ties to even.
    Nearest,
    /// Round towards zero (truncate).
    Zero,
    /// Round towards negative infinity.
    Down,
    /// Round towards positive infinity.
    Up,
}

impl Default for Round {
    fn default() -> Self {
        Round::Nearest
    }
}

impl Round {
    /// Decides whether a truncated magnitude has to be bumped by one
    /// unit, given what was cut off. `half` is the value of the highest
    /// discarded bit position, `remainder` the discarded bits.
    fn round_away(
        self,
        negative: bool,
        quotient: &BigUint,
        remainder: &BigUint,
        half: &BigUint,
    ) -> bool {
        if remainder.is_zero() {
            return false;
        }
        match self {
            Round::Nearest => remainder > half || (remainder == half && quotient.is_odd()),
            Round::Zero => false,
            Round::Down => negative,
            Round::Up => !negative,
        }
    }
}

/// Computes `value / 2^shift`, rounded to an integer.
pub(crate) fn shift_round(value: BigInt, shift: u64, round: Round) -> BigInt {
    if shift == 0 {
        return value;
    }
    let (sign, magnitude) = value.into_parts();
    let negative = sign == Sign::Minus;
    let quotient = &magnitude >> shift;
    let remainder = magnitude - (&quotient << shift);
    let half = BigUint::one() << (shift - 1);
    let quotient = if round.round_away(negative, &quotient, &remainder, &half) {
        quotient + 1u32
    } else {
        quotient
    };
    BigInt::from_biguint(sign, quotient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    fn check(value: i64, shift: u64, round: Round) -> i64 {
        let result = shift_round(BigInt::from(value), shift, round);
        i64::try_from(result).unwrap()
    }

    #[test]
    fn nearest_ties_to_even() {
        // 5 / 2 = 2.5
        assert_eq!(check(5, 1, Round::Nearest), 2);
        // 7 / 2 = 3.5
        assert_eq!(check(7, 1, Round::Nearest), 4);
        // 11 / 4 = 2.75
        assert_eq!(check(11, 2, Round::Nearest), 3);
        assert_eq!(check(-5, 1, Round::Nearest), -2);
        assert_eq!(check(-7, 1, Round::Nearest), -4);
    }

    #[test]
    fn directed() {
        assert_eq!(check(9, 2, Round::Zero), 2);
        assert_eq!(check(-9, 2, Round::Zero), -2);
        assert_eq!(check(9, 2, Round::Down), 2);
        assert_eq!(check(-9, 2, Round::Down), -3);
        assert_eq!(check(9, 2, Round::Up), 3);
        assert_eq!(check(-9, 2, Round::Up), -2);
    }

    #[test]
    fn exact_is_untouched() {
        for round in [Round::Nearest, Round::Zero, Round::Down, Round::Up] {
            assert_eq!(check(12, 2, round), 3);
            assert_eq!(check(-12, 2, round), -3);
            assert_eq!(check(12, 0, round), 12);
        }
    }
}
