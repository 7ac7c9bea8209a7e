//! Quadrilateral cell inversion for curvilinear (general quad) meshes.
//!
//! Each cell is a bilinear patch `(x, y) = (a0 + a1 ξ + a2 η + a3 ξη, b0 + b1 ξ + b2 η + b3 ξη)`
//! fit to its four corners. Recovering `(ξ, η)` for a query point means solving a quadratic in
//! `η`, then substituting back for `ξ`.

use crate::error::ErrorKind;
use crate::geo::fold_into_window;
use crate::hint::Hint;
use crate::index_fix::fix_2d;
use ndarray::Array2;

const MAX_WALK_STEPS: usize = 1_000_000;

/// Corner coordinates of cell `(xi, yi)` in winding order `(xi,yi) -> (xi+1,yi) -> (xi+1,yi+1)
/// -> (xi,yi+1)`.
fn corners(lon: &Array2<f32>, lat: &Array2<f32>, xi: usize, yi: usize) -> ([f64; 4], [f64; 4]) {
    let x = [
        f64::from(lon[[yi, xi]]),
        f64::from(lon[[yi, xi + 1]]),
        f64::from(lon[[yi + 1, xi + 1]]),
        f64::from(lon[[yi + 1, xi]]),
    ];
    let y = [
        f64::from(lat[[yi, xi]]),
        f64::from(lat[[yi, xi + 1]]),
        f64::from(lat[[yi + 1, xi + 1]]),
        f64::from(lat[[yi + 1, xi]]),
    ];
    (x, y)
}

/// Inverts the bilinear patch for one cell, returning `(ξ, η)`.
///
/// On a sphere mesh the corner longitudes are first folded into a window around the query
/// point so the patch doesn't see a spurious 360° jump across the date line. If the quadratic
/// discriminant is negative, its square root is `NaN`; in that case (and whenever the degenerate
/// linear branch produces a non-finite `η`) the previous iteration's `(ξ, η)` is returned
/// unchanged rather than propagating the `NaN`.
fn solve_cell(x: f64, y: f64, mut xs: [f64; 4], ys: [f64; 4], sphere: bool, prev: (f64, f64)) -> (f64, f64) {
    if sphere {
        xs[0] = fold_into_window(xs[0], x - 225.0, x + 225.0);
        let x0 = xs[0];
        for v in xs.iter_mut().skip(1) {
            *v = fold_into_window(*v, x0 - 180.0, x0 + 180.0);
        }
    }

    let a0 = xs[0];
    let a1 = -xs[0] + xs[1];
    let a2 = -xs[0] + xs[3];
    let a3 = xs[0] - xs[1] + xs[2] - xs[3];
    let b0 = ys[0];
    let b1 = -ys[0] + ys[1];
    let b2 = -ys[0] + ys[3];
    let b3 = ys[0] - ys[1] + ys[2] - ys[3];

    let aa = a3 * b2 - a2 * b3;
    let bb = a3 * b0 - a0 * b3 + a1 * b2 - a2 * b1 + x * b3 - y * a3;
    let cc = a1 * b0 - a0 * b1 + x * b1 - y * a1;

    let eta = if aa.abs() < 1e-12 {
        -cc / bb
    } else {
        let discriminant = bb * bb - 4.0 * aa * cc;
        (-bb + discriminant.sqrt()) / (2.0 * aa)
    };

    if !eta.is_finite() {
        return prev;
    }

    let xi_local = (x - a0 - a2 * eta) / (a1 + a3 * eta);
    if !xi_local.is_finite() {
        return prev;
    }

    (xi_local, eta)
}

/// Walks the curvilinear mesh from `hint.xi`/`hint.yi` until the query point lands inside the
/// current cell's unit square, stepping toward whichever side overflowed.
///
/// A query pinned against a true domain corner (`ξ < 0 ∧ η < 0` at the first cell, or
/// `ξ > 1 ∧ η > 1` at the last) is reported out of bounds immediately rather than spinning; any
/// other walk runs for up to 1,000,000 steps before giving up the same way.
pub fn search_curvilinear_xy(
    lon: &Array2<f32>,
    lat: &Array2<f32>,
    x: f32,
    y: f32,
    sphere_mesh: bool,
    hint: &mut Hint,
) -> Result<(f64, f64), ErrorKind> {
    let ydim = lon.shape()[0];
    let xdim = lon.shape()[1];
    let x = f64::from(x);
    let y = f64::from(y);

    let mut xi = hint.xi.min(xdim - 2);
    let mut yi = hint.yi.min(ydim - 2);
    let mut prev = (0.5, 0.5);

    for _ in 0..MAX_WALK_STEPS {
        let (xs, ys) = corners(lon, lat, xi, yi);
        let (xi_local, eta_local) = solve_cell(x, y, xs, ys, sphere_mesh, prev);

        if xi_local.is_nan() || eta_local.is_nan() {
            return Err(ErrorKind::Error);
        }
        prev = (xi_local, eta_local);

        let inside_x = (0.0..=1.0).contains(&xi_local);
        let inside_y = (0.0..=1.0).contains(&eta_local);
        if inside_x && inside_y {
            hint.xi = xi;
            hint.yi = yi;
            return Ok((xi_local, eta_local));
        }

        let at_low_corner = xi_local < 0.0 && eta_local < 0.0 && xi == 0 && yi == 0;
        let at_high_corner =
            xi_local > 1.0 && eta_local > 1.0 && xi == xdim - 2 && yi == ydim - 2;
        if at_low_corner || at_high_corner {
            return Err(ErrorKind::OutOfBounds);
        }

        let step_x: isize = if xi_local < 0.0 {
            -1
        } else if xi_local > 1.0 {
            1
        } else {
            0
        };
        let step_y: isize = if eta_local < 0.0 {
            -1
        } else if eta_local > 1.0 {
            1
        } else {
            0
        };

        let (nxi, nyi) = fix_2d(xi as isize + step_x, yi as isize + step_y, xdim, ydim, sphere_mesh);
        xi = nxi;
        yi = nyi;
    }

    Err(ErrorKind::OutOfBounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn unit_square_mesh() -> (Array2<f32>, Array2<f32>) {
        let mut lon = Array2::<f32>::zeros((3, 3));
        let mut lat = Array2::<f32>::zeros((3, 3));
        for j in 0..3 {
            for i in 0..3 {
                lon[[j, i]] = i as f32;
                lat[[j, i]] = j as f32;
            }
        }
        (lon, lat)
    }

    #[test]
    fn locates_center_of_origin_cell() {
        let (lon, lat) = unit_square_mesh();
        let mut hint = Hint::default();
        let (xi_frac, eta) = search_curvilinear_xy(&lon, &lat, 0.5, 0.5, false, &mut hint).unwrap();
        assert_eq!((hint.xi, hint.yi), (0, 0));
        assert!((xi_frac - 0.5).abs() < 1e-6);
        assert!((eta - 0.5).abs() < 1e-6);
    }

    #[test]
    fn walks_from_stale_hint_to_correct_cell() {
        let (lon, lat) = unit_square_mesh();
        let mut hint = Hint::default();
        let (xi_frac, eta) = search_curvilinear_xy(&lon, &lat, 1.5, 1.5, false, &mut hint).unwrap();
        assert_eq!((hint.xi, hint.yi), (1, 1));
        assert!((xi_frac - 0.5).abs() < 1e-6);
        assert!((eta - 0.5).abs() < 1e-6);
    }

    #[test]
    fn reports_out_of_bounds_past_the_low_corner() {
        let (lon, lat) = unit_square_mesh();
        let mut hint = Hint::default();
        assert_eq!(
            search_curvilinear_xy(&lon, &lat, -5.0, -5.0, false, &mut hint),
            Err(ErrorKind::OutOfBounds)
        );
    }
}
