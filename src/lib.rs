// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Core code to turn radio-interferometer observation metadata into a
//! publication-style summary table: per-scan timing and spectral windows are
//! merged into one row per observation, rows are grouped by band, and repeated
//! identifying cells are collapsed the way AAS journals like them.

pub mod baseline;
pub mod constants;
pub mod freq;
pub mod round;
pub mod scan;
pub mod source;
pub mod summary;
pub mod table;
pub mod time;

// Re-exports.
pub use baseline::baseline_range;
pub use freq::resolve_frequencies;
pub use round::round_half_up;
pub use scan::{aggregate, ScanRecord, ScanSummary};
pub use source::{generate_table, summarize_observations, MemoryMetadata, MetadataSource};
pub use summary::{build_row, ObservationSummary};
pub use table::write_table;
pub use time::mjs_to_date;

pub use hifitime;
pub use indexmap;
pub use ndarray;
pub use rayon;

#[cfg(test)]
#[test]
fn hifitime_works_as_expected() {
    use hifitime::Epoch;

    let mjd = 60129.0;
    let epoch = Epoch::from_mjd_utc(mjd);
    approx::assert_abs_diff_eq!(epoch.to_mjd_utc_days(), mjd);

    let (year, month, day, _, _, _, _) = epoch.to_gregorian_utc();
    assert_eq!((year, month, day), (2023, 7, 4));
}
