// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Read-only access to measurement metadata, and the driver that turns
//! datasets into the final table.

use std::collections::BTreeMap;
use std::io;

use indexmap::IndexMap;
use log::{info, trace};
use ndarray::Array2;
use rayon::prelude::*;
use thiserror::Error;

use crate::scan::ScanRecord;
use crate::summary::{build_row, ObservationSummary, SummaryError};
use crate::table::write_table;

/// Everything the table generator needs to know about one dataset, already
/// loaded into memory. Implement this over whatever backend holds the
/// measurement set; the core issues no I/O of its own and never sees backend
/// types. All lookups are keyed by plain integer ids.
pub trait MetadataSource {
    /// Every observation id present in the dataset, in the order rows should
    /// be emitted.
    fn observation_ids(&self) -> Vec<u32>;

    /// The scans of an observation: per-integration timestamps plus the
    /// spectral windows active during each scan.
    fn scans(&self, obs_id: u32) -> Vec<ScanRecord>;

    /// The mean frequency of a spectral window \[Hz\].
    fn mean_frequency_hz(&self, spw: u32) -> Option<f64>;

    /// The observer (P.I.) recorded for an observation.
    fn observer(&self, obs_id: u32) -> Option<String>;

    /// The raw per-visibility uvw coordinates of an observation, shape
    /// `(3, n)` \[metres\].
    fn uvws(&self, obs_id: u32) -> Array2<f64>;
}

/// A [MetadataSource] backed by plain maps. Backend adapters fill one of
/// these from their own accessors and hand it to the driver.
#[derive(Clone, Debug, Default)]
pub struct MemoryMetadata {
    pub scans: BTreeMap<u32, Vec<ScanRecord>>,
    pub observers: BTreeMap<u32, String>,
    pub mean_freqs_hz: BTreeMap<u32, f64>,
    pub uvws: BTreeMap<u32, Array2<f64>>,
}

impl MetadataSource for MemoryMetadata {
    fn observation_ids(&self) -> Vec<u32> {
        self.scans.keys().copied().collect()
    }

    fn scans(&self, obs_id: u32) -> Vec<ScanRecord> {
        self.scans.get(&obs_id).cloned().unwrap_or_default()
    }

    fn mean_frequency_hz(&self, spw: u32) -> Option<f64> {
        self.mean_freqs_hz.get(&spw).copied()
    }

    fn observer(&self, obs_id: u32) -> Option<String> {
        self.observers.get(&obs_id).cloned()
    }

    fn uvws(&self, obs_id: u32) -> Array2<f64> {
        self.uvws
            .get(&obs_id)
            .cloned()
            .unwrap_or_else(|| Array2::zeros((3, 0)))
    }
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// One summary row per observation in the dataset, in observation-id order.
///
/// Rows are independent, so they are built in parallel; collecting by id
/// keeps the output order deterministic regardless of completion order. The
/// first failing observation fails the lot; there is no skip-and-continue
/// here (a caller wanting that policy can filter observation ids itself).
pub fn summarize_observations<S: MetadataSource + Sync>(
    src: &S,
    project_code: Option<&str>,
) -> Result<Vec<ObservationSummary>, SummaryError> {
    src.observation_ids()
        .par_iter()
        .map(|&obs_id| {
            trace!("building summary row for observation {obs_id}");
            build_row(src, obs_id, project_code)
        })
        .collect()
}

/// Generate the whole table: one band section per dataset, in the order
/// given, written to `buf`.
///
/// Datasets sharing a band label land in the same section, in dataset order.
/// `project_code` applies to every row of every dataset in this call.
pub fn generate_table<S: MetadataSource + Sync, W: io::Write>(
    datasets: &[(S, &str)],
    project_code: Option<&str>,
    header: bool,
    footer: bool,
    buf: &mut W,
) -> Result<(), TableError> {
    let mut groups: IndexMap<String, Vec<ObservationSummary>> = IndexMap::new();
    for (src, band_label) in datasets {
        info!("processing {band_label}");
        let rows = summarize_observations(src, project_code)?;
        groups
            .entry((*band_label).to_string())
            .or_insert_with(Vec::new)
            .extend(rows);
    }

    write_table(buf, &groups, header, footer)?;
    Ok(())
}
