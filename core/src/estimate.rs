// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// log10(2), the number of decimal digits carried by one bit.
pub const DIGITS_PER_BIT: f64 = 0.30103;

/// Decimal digits each term of the Chudnovsky series adds to the
/// result.
pub const DIGITS_PER_TERM: f64 = 14.181647;

/// Number of decimal digits that `bits` of precision can represent,
/// rounded down.
pub fn decimal_digits(bits: u64) -> u64 {
    (bits as f64 * DIGITS_PER_BIT) as u64
}

/// Number of series terms needed to reach `bits` of precision. Always
/// at least one.
pub fn iterations(bits: u64) -> u64 {
    let digits = bits as f64 * DIGITS_PER_BIT;
    let terms = (digits / DIGITS_PER_TERM) as u64;
    terms.saturating_add(1).max(1)
}
