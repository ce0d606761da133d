// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calendar dates from raw measurement-set timestamps.

use hifitime::Epoch;
use thiserror::Error;

use crate::constants::DAYSEC;

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// The timestamp does not correspond to a representable calendar date.
    #[error("cannot convert {mjs} modified Julian seconds to a calendar date")]
    InvalidEpoch { mjs: f64 },
}

/// Convert a timestamp in modified Julian seconds (the raw time unit of a
/// measurement set's TIME column) to a `"YYYY Mon DD"` date string, e.g.
/// `"2023 Jul 04"`.
pub fn mjs_to_date(mjs: f64) -> Result<String, TimeError> {
    if !mjs.is_finite() {
        return Err(TimeError::InvalidEpoch { mjs });
    }

    let epoch = Epoch::from_mjd_utc(mjs / DAYSEC);
    let (year, month, day, _, _, _, _) = epoch.to_gregorian_utc();
    if !(0..=9999).contains(&year) {
        return Err(TimeError::InvalidEpoch { mjs });
    }
    let month = (month as usize)
        .checked_sub(1)
        .and_then(|i| MONTH_ABBREV.get(i))
        .ok_or(TimeError::InvalidEpoch { mjs })?;

    Ok(format!("{year:04} {month} {day:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_dates() {
        // MJD 60129 is 2023-07-04.
        assert_eq!(mjs_to_date(60129.0 * DAYSEC).unwrap(), "2023 Jul 04");
        // MJD 51544 is 2000-01-01.
        assert_eq!(mjs_to_date(51544.0 * DAYSEC).unwrap(), "2000 Jan 01");
    }

    #[test]
    fn test_mid_day_truncates_to_date() {
        // 18:00 on MJD 60129; only the date survives.
        assert_eq!(mjs_to_date(60129.75 * DAYSEC).unwrap(), "2023 Jul 04");
    }

    #[test]
    fn test_invalid_epochs() {
        assert!(matches!(
            mjs_to_date(f64::NAN),
            Err(TimeError::InvalidEpoch { .. })
        ));
        assert!(matches!(
            mjs_to_date(f64::INFINITY),
            Err(TimeError::InvalidEpoch { .. })
        ));
    }
}
