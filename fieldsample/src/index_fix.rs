//! Clamp/wrap helpers applied to cell indices after a horizontal search step.

/// Fixes a single out-of-range x-index.
///
/// `xdim` is the number of grid points along the axis, so the largest valid left-edge index is
/// `xdim - 2`. On a sphere, stepping past either end wraps to the opposite end (zonal
/// periodicity); otherwise it clamps.
#[must_use]
pub fn fix_1d(xi: isize, xdim: usize, sphere: bool) -> usize {
    debug_assert!(xdim >= 2);
    let max_i = (xdim - 2) as isize;
    if xi < 0 {
        if sphere { max_i as usize } else { 0 }
    } else if xi > max_i {
        if sphere { 0 } else { max_i as usize }
    } else {
        xi as usize
    }
}

/// Fixes a pair of out-of-range `(xi, yi)` indices for a curvilinear cell walk.
///
/// `yi` is always clamped (there is no meridional wrap). When `sphere` is set and `yi` saturates
/// at the top boundary, `xi` is additionally reflected through the pole (`xi := xdim - xi`)
/// before being re-fixed. This polar fold is an unusual convention — a particle walking past the
/// pole row reappears on the opposite side of the grid rather than simply stopping at the
/// boundary — but it is kept deliberately rather than simplified to a plain clamp. The result is
/// clamped into `[0, xdim - 2]` so it always remains a safe array index.
#[must_use]
pub fn fix_2d(xi: isize, yi: isize, xdim: usize, ydim: usize, sphere: bool) -> (usize, usize) {
    debug_assert!(ydim >= 2);
    let mut xi_fixed = fix_1d(xi, xdim, sphere);
    let max_j = (ydim - 2) as isize;
    let saturated_top = sphere && yi > max_j;
    let yi_fixed = yi.clamp(0, max_j) as usize;

    if saturated_top {
        let reflected = xdim as isize - xi_fixed as isize;
        xi_fixed = reflected.clamp(0, (xdim - 2) as isize) as usize;
    }

    (xi_fixed, yi_fixed)
}
