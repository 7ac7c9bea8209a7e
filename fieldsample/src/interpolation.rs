//! Top-level sampling orchestration: dispatches the horizontal/vertical search by grid kind,
//! walks the time axis, and blends frames.

use crate::curvilinear::search_curvilinear_xy;
use crate::error::ErrorKind;
use crate::field::Field;
use crate::grid::{Grid, Horizontal, Vertical};
use crate::hint::Hint;
use crate::horizontal::search_rectilinear_xy;
use crate::sampler::{bilinear2d, nearest2d, nearest3d, trilinear3d};
use crate::time::search_time_index;
use crate::vertical::{search_vertical_s, search_vertical_z};
use ndarray::{ArrayView3, Axis};
use tracing::trace;

/// Which spatial kernel a [`sample`] call should use.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InterpMethod {
    /// Bilinear (2-D) or trilinear (3-D) interpolation.
    Linear,
    /// Nearest-neighbor lookup.
    Nearest,
}

/// Locates `(x, y, z)` on `grid`, dispatching the horizontal search by [`crate::grid::GridKind`]
/// and the vertical search by whether the grid carries a fixed or terrain-following depth axis.
///
/// `t`, `t0` and `t1` are only consulted for a terrain-following (`S`) vertical axis whose depth
/// table is time-varying, where they pick the blend weight between consecutive depth-table
/// frames. Updates `hint` in place and returns `(ξ, η, ζ)`, each guaranteed in `[0, 1]` on
/// success.
pub fn search_indices(
    grid: &Grid,
    x: f32,
    y: f32,
    z: f32,
    t: f64,
    t0: f64,
    t1: f64,
    hint: &mut Hint,
) -> Result<(f64, f64, f64), ErrorKind> {
    let (xi_frac, eta) = match grid.horizontal() {
        Horizontal::Rectilinear { lon, lat } => {
            search_rectilinear_xy(lon, lat, x, y, grid.sphere_mesh(), grid.zonal_periodic(), hint)?
        }
        Horizontal::Curvilinear { lon, lat } => {
            search_curvilinear_xy(lon, lat, x, y, grid.sphere_mesh(), hint)?
        }
    };

    let zeta = match grid.vertical() {
        Vertical::Z(depth) => search_vertical_z(depth, z, &mut hint.zi)?,
        Vertical::S(sdepth) => search_vertical_s(
            sdepth, hint.xi, hint.yi, xi_frac, eta, z, &mut hint.zi, hint.ti, t, t0, t1,
        )?,
    };

    if !(0.0..=1.0).contains(&xi_frac) || !(0.0..=1.0).contains(&eta) || !(0.0..=1.0).contains(&zeta)
    {
        return Err(ErrorKind::OutOfBounds);
    }

    Ok((xi_frac, eta, zeta))
}

fn sample_frame(
    frame: ArrayView3<'_, f32>,
    zdim: usize,
    hint: &Hint,
    xi_frac: f64,
    eta: f64,
    zeta: f64,
    method: InterpMethod,
) -> f64 {
    if zdim == 1 {
        let plane = frame.index_axis(Axis(0), 0);
        match method {
            InterpMethod::Linear => bilinear2d(plane, hint.xi, hint.yi, xi_frac, eta),
            InterpMethod::Nearest => nearest2d(plane, hint.xi, hint.yi, xi_frac, eta),
        }
    } else {
        match method {
            InterpMethod::Linear => {
                trilinear3d(frame, hint.xi, hint.yi, hint.zi, xi_frac, eta, zeta)
            }
            InterpMethod::Nearest => {
                nearest3d(frame, hint.xi, hint.yi, hint.zi, xi_frac, eta, zeta)
            }
        }
    }
}

/// Samples `field` at `(x, y, z, t)`, using and updating `hint` as the search seed.
///
/// Rejects `t` outside `[time[0], time[tdim-1]]` with [`ErrorKind::TimeExtrapolation`] unless the
/// field allows time periodicity or extrapolation. Otherwise walks the time axis; if the folded
/// `t` lands strictly between two frames, both are spatially sampled and blended linearly in
/// time, else the bracketing frame is sampled directly.
pub fn sample(
    field: &Field,
    x: f32,
    y: f32,
    z: f32,
    t: f64,
    hint: &mut Hint,
    method: InterpMethod,
) -> Result<f32, ErrorKind> {
    let grid = field.grid();
    let time = field.time();
    let tdim = time.len();

    if !field.time_periodic()
        && !field.allow_time_extrapolation()
        && (t < time[0] || t > time[tdim - 1])
    {
        trace!(t, lo = time[0], hi = time[tdim - 1], "sample: t outside time axis");
        return Err(ErrorKind::TimeExtrapolation);
    }

    let mut tt = t;
    search_time_index(&mut tt, time, &mut hint.ti, field.time_periodic());

    let ti = hint.ti;
    let data = field.data();
    let zdim = grid.zdim();

    if ti < tdim - 1 && tt > time[ti] {
        let t0 = time[ti];
        let t1 = time[ti + 1];
        let (xi_frac, eta, zeta) = search_indices(grid, x, y, z, tt, t0, t1, hint)?;

        let f0 = sample_frame(
            data.index_axis(Axis(0), ti),
            zdim,
            hint,
            xi_frac,
            eta,
            zeta,
            method,
        );
        let f1 = sample_frame(
            data.index_axis(Axis(0), ti + 1),
            zdim,
            hint,
            xi_frac,
            eta,
            zeta,
            method,
        );

        Ok((f0 + (f1 - f0) * (tt - t0) / (t1 - t0)) as f32)
    } else {
        let t0 = time[ti];
        let t1 = t0 + 1.0;
        let (xi_frac, eta, zeta) = search_indices(grid, x, y, z, tt, t0, t1, hint)?;

        let f0 = sample_frame(
            data.index_axis(Axis(0), ti),
            zdim,
            hint,
            xi_frac,
            eta,
            zeta,
            method,
        );
        Ok(f0 as f32)
    }
}

/// Samples a `(U, V)` vector field pair at the same point, sharing one hint.
///
/// `u` and `v` must share the same grid (see [`Field::grid_handle`]); this is the caller's
/// responsibility, not checked here.
pub fn sample_uv(
    u: &Field,
    v: &Field,
    x: f32,
    y: f32,
    z: f32,
    t: f64,
    hint: &mut Hint,
    method: InterpMethod,
) -> Result<(f32, f32), ErrorKind> {
    let uu = sample(u, x, y, z, t, hint, method)?;
    let vv = sample(v, x, y, z, t, hint, method)?;
    Ok((uu, vv))
}

/// Samples a `(U, V)` vector field pair and rotates it from grid-relative to true
/// zonal/meridional components using four pre-computed rotation fields.
///
/// The rotation is intentionally asymmetric: `U_true = U cos(θ_U) - V sin(θ_V)` and
/// `V_true = U sin(θ_U) + V cos(θ_V)`, pairing each velocity component with the sine/cosine
/// sampled from its *own* rotation field rather than a single shared angle. A conventional 2x2
/// rotation would use the same pair of angles in both rows; this asymmetry is kept as-is.
#[allow(clippy::too_many_arguments)]
pub fn sample_uv_rotated(
    u: &Field,
    v: &Field,
    cos_u: &Field,
    sin_u: &Field,
    cos_v: &Field,
    sin_v: &Field,
    x: f32,
    y: f32,
    z: f32,
    t: f64,
    hint: &mut Hint,
    method: InterpMethod,
) -> Result<(f32, f32), ErrorKind> {
    let uu = sample(u, x, y, z, t, hint, method)?;
    let vv = sample(v, x, y, z, t, hint, method)?;
    let cu = sample(cos_u, x, y, z, t, hint, method)?;
    let su = sample(sin_u, x, y, z, t, hint, method)?;
    let cv = sample(cos_v, x, y, z, t, hint, method)?;
    let sv = sample(sin_v, x, y, z, t, hint, method)?;

    let u_true = uu * cu - vv * sv;
    let v_true = uu * su + vv * cv;
    Ok((u_true, v_true))
}
