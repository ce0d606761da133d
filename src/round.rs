// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Decimal rounding for table cells.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoundError {
    /// Asked to round a NaN or an infinity.
    #[error("cannot round non-finite value {value}")]
    NotFinite { value: f64 },
}

/// Round `value` half-away-from-zero to `decimals` decimal places, returning a
/// fixed-point decimal string with exactly `decimals` fractional digits (none
/// when `decimals` is 0).
///
/// Ties are decided on the shortest decimal representation of the float (the
/// `{}` form), not on its binary expansion: the f64 nearest to 2.15 is a hair
/// below it, so a binary-nearest rounding of 2.15 at one decimal place gives
/// "2.1", while this function gives "2.2". That keeps table cells matching
/// what the values look like when printed.
pub fn round_half_up(value: f64, decimals: u32) -> Result<String, RoundError> {
    if !value.is_finite() {
        return Err(RoundError::NotFinite { value });
    }

    // `{}` never produces scientific notation for an f64.
    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = match repr.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (repr.as_str(), ""),
    };
    let decimals = decimals as usize;

    // The kept digits, integer part then `decimals` fractional digits.
    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    for i in 0..decimals {
        digits.push(frac_part.as_bytes().get(i).map_or(0, |b| b - b'0'));
    }

    // The dropped remainder is at least half exactly when its first digit is
    // 5 or more.
    let round_up = frac_part.len() > decimals && frac_part.as_bytes()[decimals] >= b'5';
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            *d += 1;
            if *d == 10 {
                *d = 0;
            } else {
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for &d in &digits[..int_len] {
        out.push((b'0' + d) as char);
    }
    if decimals > 0 {
        out.push('.');
        for &d in &digits[int_len..] {
            out.push((b'0' + d) as char);
        }
    }
    Ok(out)
}
