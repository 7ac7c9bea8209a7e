#![warn(clippy::all, clippy::cargo, clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]
#![allow(clippy::multiple_crate_versions)]

//! Field sampling core for Lagrangian particle tracking.
//!
//! Given a structured mesh ([`grid::Grid`]) and a scalar or vector quantity defined on it
//! ([`field::Field`]), [`interpolation::sample`] locates a query point `(x, y, z, t)` within the
//! mesh and interpolates a value, carrying a per-particle [`hint::Hint`] forward so repeated
//! nearby queries only need a short local search rather than a search from scratch.
//!
//! Four mesh shapes are supported, split across two independent axes:
//! rectilinear (1-D lon/lat axes) vs. curvilinear (2-D lon/lat arrays), and
//! `Z` (fixed depth axis) vs. `S` (terrain-following depth table). [`grid::GridKind`] names the
//! resulting four combinations, but callers never need to branch on it themselves — it only
//! affects which search routine `sample` dispatches to internally.

/// Shared monotone-walk search over a bracketing axis.
pub mod bracket;
/// Quadrilateral cell inversion for curvilinear meshes.
pub mod curvilinear;
/// Fallible construction errors and hot-path result codes.
pub mod error;
/// A time-varying quantity defined on a [`grid::Grid`].
pub mod field;
/// Spherical/zonal-periodic longitude arithmetic.
pub mod geo;
/// Structured mesh geometry: horizontal layout and vertical coordinate.
pub mod grid;
/// Per-particle last-known-cell cache.
pub mod hint;
/// Rectilinear horizontal axis search, including spherical wraparound.
pub mod horizontal;
/// Index clamping and polar/zonal wraparound fixups.
pub mod index_fix;
/// Sampling orchestration: index search, temporal blending, vector rotation.
pub mod interpolation;
/// Builder façade for constructing grids and fields.
pub mod io;
/// Bilinear/trilinear/nearest interpolation kernels.
pub mod sampler;
/// Time-axis bracket search with optional periodic fold.
pub mod time;
/// Vertical bracket search for `Z` and `S` coordinate grids.
pub mod vertical;

pub use error::{Error, ErrorKind, Result};
pub use field::Field;
pub use grid::{Grid, GridKind, GridRegistry, Horizontal, SDepth, Vertical};
pub use hint::{Hint, HintTable};
pub use interpolation::{sample, sample_uv, sample_uv_rotated, InterpMethod};
pub use io::{FieldBuilder, GridBuilder};
