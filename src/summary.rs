// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! One summary row per observation.

use thiserror::Error;

use crate::baseline::{baseline_range, BaselineError};
use crate::freq::{resolve_frequencies, FreqError};
use crate::round::{round_half_up, RoundError};
use crate::scan::{aggregate, ScanError};
use crate::source::MetadataSource;
use crate::time::{mjs_to_date, TimeError};

/// One rendered row of the observation table. Every field is already
/// display-formatted; the table assembler only decides which cells to blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservationSummary {
    pub project_code: Option<String>,

    /// The principal investigator (the observer recorded in the metadata).
    pub pi: String,

    /// `"YYYY Mon DD"`
    pub date: String,

    /// Minutes, one decimal place.
    pub on_source_time: String,

    /// `"min -- max"`, whole metres.
    pub baselines: String,

    /// Comma-separated GHz values, one decimal place.
    pub frequencies: String,
}

/// A failure while building one observation's row. Every variant carries the
/// observation id, so the caller knows which observation broke and why.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummaryError {
    #[error("observation {obs_id}: no observer recorded")]
    UnknownObserver { obs_id: u32 },

    #[error("observation {obs_id}: {source}")]
    Baseline { obs_id: u32, source: BaselineError },

    #[error("observation {obs_id}: {source}")]
    Scan { obs_id: u32, source: ScanError },

    #[error("observation {obs_id}: {source}")]
    Time { obs_id: u32, source: TimeError },

    #[error("observation {obs_id}: {source}")]
    Frequency { obs_id: u32, source: FreqError },

    #[error("observation {obs_id}: {source}")]
    Round { obs_id: u32, source: RoundError },
}

/// Build the summary row for one observation from its raw metadata.
///
/// `project_code` is passed through into the row untouched; it is per-call,
/// with no shared default.
pub fn build_row<S: MetadataSource + ?Sized>(
    src: &S,
    obs_id: u32,
    project_code: Option<&str>,
) -> Result<ObservationSummary, SummaryError> {
    let uvws = src.uvws(obs_id);
    let (umin, umax) = baseline_range(uvws.view())
        .map_err(|source| SummaryError::Baseline { obs_id, source })?;

    let scans = src.scans(obs_id);
    let merged = aggregate(&scans).map_err(|source| SummaryError::Scan { obs_id, source })?;

    let date =
        mjs_to_date(merged.start_mjs).map_err(|source| SummaryError::Time { obs_id, source })?;
    let frequencies = resolve_frequencies(src, &merged.spws)
        .map_err(|source| SummaryError::Frequency { obs_id, source })?;

    let pi = src
        .observer(obs_id)
        .ok_or(SummaryError::UnknownObserver { obs_id })?;

    let round =
        |v, d| round_half_up(v, d).map_err(|source| SummaryError::Round { obs_id, source });
    let on_source_time = round(merged.duration_min, 1)?;
    let baselines = format!("{} -- {}", round(umin, 0)?, round(umax, 0)?);

    Ok(ObservationSummary {
        project_code: project_code.map(str::to_string),
        pi,
        date,
        on_source_time,
        baselines,
        frequencies,
    })
}
