// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Rendering spectral-window frequencies for the table.

use thiserror::Error;

use crate::constants::HZ_PER_GHZ;
use crate::round::{round_half_up, RoundError};
use crate::source::MetadataSource;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FreqError {
    #[error("no mean frequency known for spectral window {spw}")]
    UnknownSpectralWindow { spw: u32 },

    #[error(transparent)]
    Round(#[from] RoundError),
}

/// Render the mean frequencies of `spws` as a comma-separated list of GHz
/// values rounded to one decimal place, e.g. `"97.5, 99.6"`.
///
/// The input order is kept as-is and repeated values are not collapsed; the
/// list mirrors the spectral-window order of the observation's scans.
pub fn resolve_frequencies<S: MetadataSource + ?Sized>(
    src: &S,
    spws: &[u32],
) -> Result<String, FreqError> {
    let ghz = spws
        .iter()
        .map(|&spw| {
            let hz = src
                .mean_frequency_hz(spw)
                .ok_or(FreqError::UnknownSpectralWindow { spw })?;
            Ok(round_half_up(hz / HZ_PER_GHZ, 1)?)
        })
        .collect::<Result<Vec<String>, FreqError>>()?;
    Ok(ghz.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryMetadata;

    fn source_with_freqs(freqs: &[(u32, f64)]) -> MemoryMetadata {
        MemoryMetadata {
            mean_freqs_hz: freqs.iter().copied().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_rendering() {
        let src = source_with_freqs(&[(17, 97.54e9), (19, 99.66e9), (21, 230.0e9)]);
        assert_eq!(
            resolve_frequencies(&src, &[17, 19, 21]).unwrap(),
            "97.5, 99.7, 230.0"
        );
    }

    #[test]
    fn test_order_preserved_and_repeats_kept() {
        let src = source_with_freqs(&[(17, 97.54e9), (19, 99.66e9)]);
        assert_eq!(
            resolve_frequencies(&src, &[19, 17, 19]).unwrap(),
            "99.7, 97.5, 99.7"
        );
    }

    #[test]
    fn test_empty_spw_list() {
        let src = source_with_freqs(&[]);
        assert_eq!(resolve_frequencies(&src, &[]).unwrap(), "");
    }

    #[test]
    fn test_unknown_spw() {
        let src = source_with_freqs(&[(17, 97.54e9)]);
        assert_eq!(
            resolve_frequencies(&src, &[17, 42]),
            Err(FreqError::UnknownSpectralWindow { spw: 42 })
        );
    }
}
