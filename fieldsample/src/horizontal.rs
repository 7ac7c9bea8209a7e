//! Horizontal bracket search on rectilinear (1-D axis) meshes.
//!
//! Curvilinear meshes go through [`crate::curvilinear`] instead; this module handles the plain
//! axis-aligned case, including the sphere/zonal-periodic x-axis variant.

use crate::bracket::bracket_column;
use crate::error::ErrorKind;
use crate::geo::fold_into_window;
use crate::hint::Hint;
use crate::index_fix::fix_1d;
use ndarray::Array1;

/// Maximum number of wrap-around steps the sphere x-search will take before giving up.
const MAX_SPHERE_STEPS: usize = 10_000;

/// Brackets `(x, y)` on a rectilinear mesh, updating `hint.xi`/`hint.yi`.
pub fn search_rectilinear_xy(
    lon: &Array1<f32>,
    lat: &Array1<f32>,
    x: f32,
    y: f32,
    sphere_mesh: bool,
    zonal_periodic: bool,
    hint: &mut Hint,
) -> Result<(f64, f64), ErrorKind> {
    let xi_frac = if sphere_mesh {
        search_x_sphere(lon, x, &mut hint.xi, zonal_periodic)?
    } else {
        bracket_column(lon.len(), |k| f64::from(lon[k]), f64::from(x), &mut hint.xi)?
    };

    let eta = bracket_column(lat.len(), |k| f64::from(lat[k]), f64::from(y), &mut hint.yi)?;

    Ok((xi_frac, eta))
}

/// Sphere x-axis search: folds longitudes into a window centered on the query point before
/// comparing, so the 360° wrap never produces a false "outside the bracket" result.
fn search_x_sphere(
    lon: &Array1<f32>,
    x: f32,
    xi: &mut usize,
    zonal_periodic: bool,
) -> Result<f64, ErrorKind> {
    let xdim = lon.len();
    let x = f64::from(x);

    if !zonal_periodic {
        let first = f64::from(lon[0]);
        let last = f64::from(lon[xdim - 1]);
        let (lo, hi) = if first <= last {
            (first, last)
        } else {
            (last, first)
        };
        if x < lo || x > hi {
            return Err(ErrorKind::OutOfBounds);
        }
    }

    let mut i = (*xi).min(xdim - 2);
    let mut x0 = fold_into_window(f64::from(lon[i]), x - 225.0, x + 225.0);
    let mut x1 = fold_into_window(f64::from(lon[i + 1]), x0 - 180.0, x0 + 180.0);

    let mut steps = 0usize;
    while !(x0 <= x && x <= x1) {
        steps += 1;
        if steps > MAX_SPHERE_STEPS {
            return Err(ErrorKind::OutOfBounds);
        }

        let step: isize = if x < x0 { -1 } else { 1 };
        i = fix_1d(i as isize + step, xdim, true);
        x0 = fold_into_window(f64::from(lon[i]), x - 225.0, x + 225.0);
        x1 = fold_into_window(f64::from(lon[i + 1]), x0 - 180.0, x0 + 180.0);
    }

    *xi = i;
    Ok((x - x0) / (x1 - x0))
}
