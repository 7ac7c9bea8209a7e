//! Spatial interpolation kernels over raw data planes/volumes: bilinear, trilinear and their
//! nearest-neighbor counterparts.
//!
//! Every kernel takes the left-edge cell indices `(xi, yi[, zi])` and the cell-local fractions
//! `(ξ, η[, ζ])` already produced by a horizontal/vertical search, and returns a `f64` (blending
//! weights are computed in double precision; callers cast to `f32` once, at the very end of a
//! full temporal sample).

use ndarray::{ArrayView2, ArrayView3};

/// Bilinear interpolation of a `(ydim, xdim)` plane at cell `(xi, yi)`.
#[must_use]
pub fn bilinear2d(data: ArrayView2<'_, f32>, xi: usize, yi: usize, xi_frac: f64, eta: f64) -> f64 {
    let d00 = f64::from(data[[yi, xi]]);
    let d10 = f64::from(data[[yi, xi + 1]]);
    let d11 = f64::from(data[[yi + 1, xi + 1]]);
    let d01 = f64::from(data[[yi + 1, xi]]);

    (1.0 - xi_frac) * (1.0 - eta) * d00
        + xi_frac * (1.0 - eta) * d10
        + xi_frac * eta * d11
        + (1.0 - xi_frac) * eta * d01
}

/// Trilinear interpolation of a `(zdim, ydim, xdim)` volume at cell `(xi, yi, zi)`.
#[must_use]
pub fn trilinear3d(
    data: ArrayView3<'_, f32>,
    xi: usize,
    yi: usize,
    zi: usize,
    xi_frac: f64,
    eta: f64,
    zeta: f64,
) -> f64 {
    let f0 = bilinear2d(data.index_axis(ndarray::Axis(0), zi), xi, yi, xi_frac, eta);
    let f1 = bilinear2d(
        data.index_axis(ndarray::Axis(0), zi + 1),
        xi,
        yi,
        xi_frac,
        eta,
    );
    (1.0 - zeta) * f0 + zeta * f1
}

/// Nearest-neighbor lookup on a `(ydim, xdim)` plane: picks `xi`/`xi+1` and `yi`/`yi+1` by
/// whether the local fraction is below or at/above one half.
#[must_use]
pub fn nearest2d(data: ArrayView2<'_, f32>, xi: usize, yi: usize, xi_frac: f64, eta: f64) -> f64 {
    let i = if xi_frac < 0.5 { xi } else { xi + 1 };
    let j = if eta < 0.5 { yi } else { yi + 1 };
    f64::from(data[[j, i]])
}

/// Nearest-neighbor lookup on a `(zdim, ydim, xdim)` volume.
#[must_use]
pub fn nearest3d(
    data: ArrayView3<'_, f32>,
    xi: usize,
    yi: usize,
    zi: usize,
    xi_frac: f64,
    eta: f64,
    zeta: f64,
) -> f64 {
    let k = if zeta < 0.5 { zi } else { zi + 1 };
    nearest2d(data.index_axis(ndarray::Axis(0), k), xi, yi, xi_frac, eta)
}
