//! Builder façade over [`Grid`]/[`Field`] construction.
//!
//! This module does no file, socket, or environment access of its own — it exists so a caller
//! wiring up a grid/field from whatever source format it reads (NetCDF, zarr, an in-memory test
//! fixture) has one place to set the handful of boolean policy flags without threading them
//! through every constructor call.

use crate::error::Result;
use crate::field::Field;
use crate::grid::{Grid, GridRegistry, SDepth};
use ndarray::{Array1, Array2, Array4};
use std::sync::Arc;

/// Collects the mesh-geometry flags shared by every [`Grid`] constructor.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridBuilder {
    sphere_mesh: bool,
    zonal_periodic: bool,
}

impl GridBuilder {
    /// Starts a builder with both flags off (a plain Cartesian, non-periodic mesh).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sphere_mesh: false,
            zonal_periodic: false,
        }
    }

    /// Sets whether horizontal coordinates are longitude/latitude with spherical wraparound.
    #[must_use]
    pub const fn sphere_mesh(mut self, sphere_mesh: bool) -> Self {
        self.sphere_mesh = sphere_mesh;
        self
    }

    /// Sets whether the x-axis wraps around (zonal periodicity).
    #[must_use]
    pub const fn zonal_periodic(mut self, zonal_periodic: bool) -> Self {
        self.zonal_periodic = zonal_periodic;
        self
    }

    /// Builds a rectilinear grid with a fixed 1-D depth axis.
    pub fn rectilinear_z(
        self,
        registry: &mut GridRegistry,
        lon: Array1<f32>,
        lat: Array1<f32>,
        depth: Array1<f32>,
    ) -> Result<Grid> {
        Grid::new_rectilinear_z(registry, lon, lat, depth, self.sphere_mesh, self.zonal_periodic)
    }

    /// Builds a rectilinear grid with a terrain-following depth table.
    pub fn rectilinear_s(
        self,
        registry: &mut GridRegistry,
        lon: Array1<f32>,
        lat: Array1<f32>,
        depth: SDepth,
    ) -> Result<Grid> {
        Grid::new_rectilinear_s(registry, lon, lat, depth, self.sphere_mesh, self.zonal_periodic)
    }

    /// Builds a curvilinear grid with a fixed 1-D depth axis.
    pub fn curvilinear_z(
        self,
        registry: &mut GridRegistry,
        lon: Array2<f32>,
        lat: Array2<f32>,
        depth: Array1<f32>,
    ) -> Result<Grid> {
        Grid::new_curvilinear_z(registry, lon, lat, depth, self.sphere_mesh, self.zonal_periodic)
    }

    /// Builds a curvilinear grid with a terrain-following depth table.
    pub fn curvilinear_s(
        self,
        registry: &mut GridRegistry,
        lon: Array2<f32>,
        lat: Array2<f32>,
        depth: SDepth,
    ) -> Result<Grid> {
        Grid::new_curvilinear_s(registry, lon, lat, depth, self.sphere_mesh, self.zonal_periodic)
    }
}

/// Collects the time-handling policy flags shared by [`Field::new`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldBuilder {
    allow_time_extrapolation: bool,
    time_periodic: bool,
}

impl FieldBuilder {
    /// Starts a builder with both flags off (queries outside the time axis fail).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_time_extrapolation: false,
            time_periodic: false,
        }
    }

    /// Sets whether queries past either end of the time axis extrapolate from the nearest frame.
    #[must_use]
    pub const fn allow_time_extrapolation(mut self, allow: bool) -> Self {
        self.allow_time_extrapolation = allow;
        self
    }

    /// Sets whether the time axis wraps around with period `time[tdim-1] - time[0]`.
    #[must_use]
    pub const fn time_periodic(mut self, periodic: bool) -> Self {
        self.time_periodic = periodic;
        self
    }

    /// Builds the field, validating `data`'s shape against `grid` and `time`'s monotonicity.
    pub fn build(self, grid: Arc<Grid>, data: Array4<f32>, time: Array1<f64>) -> Result<Field> {
        Field::new(
            grid,
            data,
            time,
            self.allow_time_extrapolation,
            self.time_periodic,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn builds_a_rectilinear_field_through_both_builders() {
        let mut registry = GridRegistry::new();
        let grid = Arc::new(
            GridBuilder::new()
                .rectilinear_z(
                    &mut registry,
                    array![0.0, 1.0],
                    array![0.0, 1.0],
                    array![0.0, 1.0],
                )
                .unwrap(),
        );

        let data = Array4::<f32>::zeros((1, 2, 2, 2));
        let field = FieldBuilder::new()
            .time_periodic(true)
            .build(grid, data, array![0.0])
            .unwrap();

        assert!(field.time_periodic());
        assert!(!field.allow_time_extrapolation());
    }
}
