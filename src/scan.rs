// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Merging per-scan timing and spectral-window metadata into per-observation
//! figures.

use std::collections::BTreeSet;

use thiserror::Error;

/// One scan of an observation: the timestamp of every integration (modified
/// Julian seconds, time-ordered) and the spectral windows that were active.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanRecord {
    pub times: Vec<f64>,
    pub spws: Vec<u32>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("observation has no scans")]
    NoScans,

    #[error("scan {scan_index} has no integrations")]
    EmptyScan { scan_index: usize },

    /// Every scan of an observation must use the same spectral windows.
    #[error("consistency check failed: scan {scan_index} uses spectral windows {found:?} but the first scan uses {expected:?}")]
    InconsistentSpectralWindows {
        scan_index: usize,
        expected: Vec<u32>,
        found: Vec<u32>,
    },
}

/// Timing and spectral-window metadata for one observation, merged over all
/// of its scans.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanSummary {
    /// The earliest integration timestamp of any scan \[modified Julian
    /// seconds\]
    pub start_mjs: f64,

    /// On-source time \[minutes\]: the sum of each scan's first-to-last span.
    /// Gaps between scans are not counted. Unrounded; display rounding is the
    /// caller's business.
    pub duration_min: f64,

    /// The spectral windows shared by every scan, in the first scan's order.
    pub spws: Vec<u32>,
}

/// Merge an observation's scans into a [ScanSummary], verifying that every
/// scan used the same set of spectral windows. A mismatch fails the whole
/// observation; there is no partial result.
pub fn aggregate(scans: &[ScanRecord]) -> Result<ScanSummary, ScanError> {
    let mut duration_secs = 0.0;
    let mut start_mjs = f64::INFINITY;
    let mut first_spws: Option<(&[u32], BTreeSet<u32>)> = None;

    for (scan_index, scan) in scans.iter().enumerate() {
        let (first, last) = match (scan.times.first(), scan.times.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(ScanError::EmptyScan { scan_index }),
        };
        duration_secs += last - first;
        start_mjs = scan.times.iter().fold(start_mjs, |acc, &t| acc.min(t));

        let spw_set: BTreeSet<u32> = scan.spws.iter().copied().collect();
        match &first_spws {
            None => first_spws = Some((scan.spws.as_slice(), spw_set)),
            Some((expected, expected_set)) => {
                if spw_set != *expected_set {
                    return Err(ScanError::InconsistentSpectralWindows {
                        scan_index,
                        expected: expected.to_vec(),
                        found: scan.spws.clone(),
                    });
                }
            }
        }
    }

    let (spws, _) = first_spws.ok_or(ScanError::NoScans)?;
    Ok(ScanSummary {
        start_mjs,
        duration_min: duration_secs / crate::constants::SECS_PER_MIN,
        spws: spws.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn scan(times: &[f64], spws: &[u32]) -> ScanRecord {
        ScanRecord {
            times: times.to_vec(),
            spws: spws.to_vec(),
        }
    }

    #[test]
    fn test_duration_sums_scan_spans() {
        // Two disjoint scans with a long gap between them; the gap must not
        // count towards on-source time.
        let scans = [
            scan(&[1000.0, 1030.0, 1060.0], &[17, 19]),
            scan(&[5000.0, 5030.0, 5090.0], &[17, 19]),
        ];
        let summary = aggregate(&scans).unwrap();
        assert_abs_diff_eq!(summary.duration_min, (60.0 + 90.0) / 60.0);
        assert_abs_diff_eq!(summary.start_mjs, 1000.0);
        assert_eq!(summary.spws, vec![17, 19]);
    }

    #[test]
    fn test_start_is_overall_minimum() {
        // Scans need not arrive in time order.
        let scans = [
            scan(&[5000.0, 5060.0], &[3]),
            scan(&[1000.0, 1060.0], &[3]),
        ];
        let summary = aggregate(&scans).unwrap();
        assert_abs_diff_eq!(summary.start_mjs, 1000.0);
    }

    #[test]
    fn test_inconsistent_spws() {
        let scans = [
            scan(&[1000.0, 1060.0], &[17, 19]),
            scan(&[2000.0, 2060.0], &[17, 21]),
        ];
        assert_eq!(
            aggregate(&scans),
            Err(ScanError::InconsistentSpectralWindows {
                scan_index: 1,
                expected: vec![17, 19],
                found: vec![17, 21],
            })
        );
    }

    #[test]
    fn test_spw_order_does_not_matter() {
        // Same set, different order: still consistent, and the first scan's
        // order wins.
        let scans = [
            scan(&[1000.0, 1060.0], &[19, 17]),
            scan(&[2000.0, 2060.0], &[17, 19]),
        ];
        let summary = aggregate(&scans).unwrap();
        assert_eq!(summary.spws, vec![19, 17]);
    }

    #[test]
    fn test_no_scans() {
        assert_eq!(aggregate(&[]), Err(ScanError::NoScans));
    }

    #[test]
    fn test_empty_scan() {
        let scans = [scan(&[1000.0, 1060.0], &[3]), scan(&[], &[3])];
        assert_eq!(
            aggregate(&scans),
            Err(ScanError::EmptyScan { scan_index: 1 })
        );
    }

    #[test]
    fn test_single_integration_scan_adds_nothing() {
        let scans = [scan(&[1000.0], &[3]), scan(&[2000.0, 2120.0], &[3])];
        let summary = aggregate(&scans).unwrap();
        assert_abs_diff_eq!(summary.duration_min, 2.0);
    }
}
