//! Vertical bracket search: fixed depth axes, and terrain-following (`S`) depth tables.

use crate::bracket::bracket_column;
use crate::error::ErrorKind;
use crate::grid::SDepth;
use crate::sampler::bilinear2d;
use arrayvec::ArrayVec;
use ndarray::{Array1, Axis};

/// Depth columns up to this length are brought onto the stack; longer ones spill to a heap
/// `Vec`. NEMO-class ocean configurations run 50-100 levels, so this comfortably covers the
/// common case.
const MAX_STACK_ZDIM: usize = 128;

/// Brackets `z` within a fixed 1-D depth axis.
pub fn search_vertical_z(depth: &Array1<f32>, z: f32, zi: &mut usize) -> Result<f64, ErrorKind> {
    bracket_column(depth.len(), |k| f64::from(depth[k]), f64::from(z), zi)
}

/// Brackets `z` within a terrain-following depth table at horizontal cell `(xi, yi)`.
///
/// Builds a synthetic column by bilinearly interpolating the depth table in `(xi_frac, eta)`
/// at each vertical level. When the table is time-varying (`z4d`), the two frames bracketing
/// `ti`/`ti + 1` (clamped to the last frame) are blended with the same `(t - t0) / (t1 - t0)`
/// weight the caller used to pick `t0`/`t1`.
#[allow(clippy::too_many_arguments)]
pub fn search_vertical_s(
    sdepth: &SDepth,
    xi: usize,
    yi: usize,
    xi_frac: f64,
    eta: f64,
    z: f32,
    zi: &mut usize,
    ti: usize,
    t: f64,
    t0: f64,
    t1: f64,
) -> Result<f64, ErrorKind> {
    let zdim = match sdepth {
        SDepth::Static(table) => table.shape()[0],
        SDepth::TimeVarying(table) => table.shape()[1],
    };
    let weight = (t - t0) / (t1 - t0);

    let level_value = |k: usize| -> f64 {
        match sdepth {
            SDepth::Static(table) => {
                bilinear2d(table.index_axis(Axis(0), k), xi, yi, xi_frac, eta)
            }
            SDepth::TimeVarying(table) => {
                let tdim = table.shape()[0];
                let ti1 = (ti + 1).min(tdim - 1);
                let lo = bilinear2d(
                    table.index_axis(Axis(0), ti).index_axis(Axis(0), k),
                    xi,
                    yi,
                    xi_frac,
                    eta,
                );
                let hi = bilinear2d(
                    table.index_axis(Axis(0), ti1).index_axis(Axis(0), k),
                    xi,
                    yi,
                    xi_frac,
                    eta,
                );
                lo + (hi - lo) * weight
            }
        }
    };

    if zdim <= MAX_STACK_ZDIM {
        let mut col: ArrayVec<f64, MAX_STACK_ZDIM> = ArrayVec::new();
        for k in 0..zdim {
            col.push(level_value(k));
        }
        bracket_column(zdim, |k| col[k], f64::from(z), zi)
    } else {
        let col: Vec<f64> = (0..zdim).map(level_value).collect();
        bracket_column(zdim, |k| col[k], f64::from(z), zi)
    }
}
