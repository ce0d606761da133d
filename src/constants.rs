// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Useful constants.

/// Seconds per day (86400)
pub const DAYSEC: f64 = 86400.0;
/// Seconds per minute.
pub const SECS_PER_MIN: f64 = 60.0;
/// Hertz per gigahertz.
pub const HZ_PER_GHZ: f64 = 1e9;

/// The non-breaking placeholder written in place of a table cell that repeats
/// the cell directly above it.
pub const DEDUP_CELL: &str = "~";
