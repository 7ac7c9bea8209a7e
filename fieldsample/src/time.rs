//! Time-axis bracket search, with an optional periodic fold.

use ndarray::Array1;

/// Brackets `*t` within `tvals`, updating `*ti` to the left edge of the bracket.
///
/// If `periodic` and `*t` falls outside `[tvals[0], tvals[tdim-1]]`, `*t` is first folded back
/// into range by a single subtraction of the axis period (`tvals[tdim-1] - tvals[0]`) — one fold
/// always suffices since the subtracted multiple is computed directly from how far out of range
/// `*t` is, rather than by repeated halving. `*ti` is reset to the end of the axis the fold
/// approached from, so the subsequent walk moves in the right direction. Non-periodic
/// out-of-range queries are left for the caller to reject (extrapolation policy is a field-level
/// concern, not this function's).
pub fn search_time_index(t: &mut f64, tvals: &Array1<f64>, ti: &mut usize, periodic: bool) {
    let tdim = tvals.len();
    if tdim == 1 {
        *ti = 0;
        return;
    }

    let first = tvals[0];
    let last = tvals[tdim - 1];

    if periodic && (*t < first || *t > last) {
        let period = last - first;
        let above = *t > last;
        let k = ((*t - first) / period).floor();
        *t -= k * period;
        *ti = if above { 0 } else { tdim - 1 };
    }

    while *ti + 1 < tdim && *t >= tvals[*ti + 1] {
        *ti += 1;
    }
    while *ti > 0 && *t < tvals[*ti] {
        *ti -= 1;
    }
}
