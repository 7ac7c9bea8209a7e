//! A scalar quantity sampled over a [`Grid`], plus the per-field time-handling policy.

use crate::error::{Error, Result};
use crate::grid::{Grid, SDepth, Vertical};
use ndarray::{Array1, Array4};
use std::sync::Arc;
use tracing::warn;

/// A scalar field defined on a shared, immutable [`Grid`].
///
/// `data` is row-major with axis order `(t, z, y, x)` (the NEMO convention); when the grid's
/// `zdim` is `1` the z-axis is degenerate but still present.
#[derive(Clone, Debug)]
pub struct Field {
    grid: Arc<Grid>,
    data: Array4<f32>,
    time: Array1<f64>,
    allow_time_extrapolation: bool,
    time_periodic: bool,
}

impl Field {
    /// Builds a field from a materialized data array and time axis.
    ///
    /// Validates that `data`'s shape matches `grid`'s `(zdim, ydim, xdim)` in its last three
    /// axes and `time`'s length in its first, and that `time` is strictly increasing.
    pub fn new(
        grid: Arc<Grid>,
        data: Array4<f32>,
        time: Array1<f64>,
        allow_time_extrapolation: bool,
        time_periodic: bool,
    ) -> Result<Self> {
        let tdim = time.len();
        if tdim == 0 {
            let err = Error::InvalidField("tdim must be at least 1".to_string());
            warn!(%err, "rejecting field construction");
            return Err(err);
        }
        if !time.windows(2).into_iter().all(|w| w[0] < w[1]) {
            let err = Error::InvalidField("time must be strictly increasing".to_string());
            warn!(%err, "rejecting field construction");
            return Err(err);
        }

        let expected = [tdim, grid.zdim(), grid.ydim(), grid.xdim()];
        if data.shape() != expected {
            let err = Error::InvalidField(format!(
                "data shape {:?} does not match expected (tdim, zdim, ydim, xdim) = {expected:?}",
                data.shape()
            ));
            warn!(%err, "rejecting field construction");
            return Err(err);
        }

        if let Vertical::S(SDepth::TimeVarying(table)) = grid.vertical() {
            if table.shape()[0] != tdim {
                let err = Error::InvalidField(format!(
                    "time-varying S-grid depth table has {} frames but field has tdim = {tdim}",
                    table.shape()[0]
                ));
                warn!(%err, "rejecting field construction");
                return Err(err);
            }
        }

        Ok(Self {
            grid,
            data,
            time,
            allow_time_extrapolation,
            time_periodic,
        })
    }

    /// The grid this field is defined on.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// A cloned handle to the shared grid, for passing to another [`Field`] (e.g. a `V`
    /// companion of a `U` field, which must share the same grid for [`crate::interpolation::sample_uv`]).
    #[must_use]
    pub fn grid_handle(&self) -> Arc<Grid> {
        Arc::clone(&self.grid)
    }

    /// The underlying `(tdim, zdim, ydim, xdim)` data array.
    #[must_use]
    pub const fn data(&self) -> &Array4<f32> {
        &self.data
    }

    /// The time axis, strictly increasing, length `tdim`.
    #[must_use]
    pub const fn time(&self) -> &Array1<f64> {
        &self.time
    }

    /// Number of time frames.
    #[must_use]
    pub fn tdim(&self) -> usize {
        self.time.len()
    }

    /// Whether queries with `t` outside `[time[0], time[tdim-1]]` are permitted to extrapolate
    /// from the nearest frame rather than fail with `TimeExtrapolation`.
    #[must_use]
    pub const fn allow_time_extrapolation(&self) -> bool {
        self.allow_time_extrapolation
    }

    /// Whether the time axis should be treated as periodic with period
    /// `time[tdim-1] - time[0]`.
    #[must_use]
    pub const fn time_periodic(&self) -> bool {
        self.time_periodic
    }
}
