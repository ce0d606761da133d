// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Projected baseline lengths from raw uvw coordinates.

use itertools::{Itertools, MinMaxResult};
use ndarray::ArrayView2;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BaselineError {
    #[error("no uvw samples to take a baseline range over")]
    NoSamples,

    #[error("bad array shape supplied to argument {argument} of function {function}. expected {expected}, received {received}")]
    BadArrayShape {
        argument: String,
        function: String,
        expected: String,
        received: String,
    },
}

/// The minimum and maximum projected baseline length \[metres\] over a
/// `(3, n)` array of per-visibility uvw coordinates (rows u, v, w; the shape
/// of a measurement set's UVW column).
///
/// The projected length of a sample is `sqrt(u^2 + v^2)`; w holds the
/// line-of-sight component and plays no part in the length.
pub fn baseline_range(uvw: ArrayView2<f64>) -> Result<(f64, f64), BaselineError> {
    let dims = uvw.dim();
    if dims.0 != 3 {
        return Err(BaselineError::BadArrayShape {
            argument: "uvw".to_string(),
            function: "baseline_range".to_string(),
            expected: "(3, n)".to_string(),
            received: format!("{:?}", dims),
        });
    }

    let lengths = uvw
        .columns()
        .into_iter()
        .map(|sample| (sample[0].powi(2) + sample[1].powi(2)).sqrt());
    match lengths.minmax() {
        MinMaxResult::NoElements => Err(BaselineError::NoSamples),
        MinMaxResult::OneElement(length) => Ok((length, length)),
        MinMaxResult::MinMax(min, max) => Ok((min, max)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array, Axis};

    #[test]
    fn test_baseline_range() {
        // Columns are (u, v, w) samples: lengths 5, 13, 25.
        let uvw = array![[3.0, 5.0, 7.0], [4.0, 12.0, 24.0], [9.0, -2.0, 0.5]];
        let (min, max) = baseline_range(uvw.view()).unwrap();
        assert_abs_diff_eq!(min, 5.0);
        assert_abs_diff_eq!(max, 25.0);
    }

    #[test]
    fn test_w_is_ignored() {
        let mut uvw = array![[3.0, 5.0], [4.0, 12.0], [100.0, -7.0]];
        let before = baseline_range(uvw.view()).unwrap();
        uvw.row_mut(2).mapv_inplace(|w| -w);
        let after = baseline_range(uvw.view()).unwrap();
        assert_abs_diff_eq!(before.0, after.0);
        assert_abs_diff_eq!(before.1, after.1);
    }

    #[test]
    fn test_permutation_invariance() {
        let uvw = array![[3.0, 5.0, 7.0], [4.0, 12.0, 24.0], [0.0, 0.0, 0.0]];
        let mut permuted = Array::zeros((3, 3));
        for (out_idx, in_idx) in [2, 0, 1].into_iter().enumerate() {
            permuted
                .index_axis_mut(Axis(1), out_idx)
                .assign(&uvw.index_axis(Axis(1), in_idx));
        }
        assert_eq!(
            baseline_range(uvw.view()).unwrap(),
            baseline_range(permuted.view()).unwrap()
        );
    }

    #[test]
    fn test_single_sample() {
        let uvw = array![[3.0], [4.0], [12.0]];
        let (min, max) = baseline_range(uvw.view()).unwrap();
        assert_abs_diff_eq!(min, 5.0);
        assert_abs_diff_eq!(max, 5.0);
        assert!(min <= max);
    }

    #[test]
    fn test_empty_input() {
        let uvw = Array::zeros((3, 0));
        assert_eq!(baseline_range(uvw.view()), Err(BaselineError::NoSamples));
    }

    #[test]
    fn test_bad_shape() {
        let uvw = Array::zeros((2, 4));
        assert!(matches!(
            baseline_range(uvw.view()),
            Err(BaselineError::BadArrayShape { .. })
        ));
    }
}
