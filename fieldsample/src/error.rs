//! Error types for grid/field construction and for the sampling hot path.
//!
//! The two error types are kept separate on purpose: [`Error`] covers fallible *construction*
//! (shape mismatches, non-monotonic coordinate arrays) and carries a descriptive message, while
//! [`ErrorKind`] is the small, `Copy`, ABI-stable result of a *sample* call and is returned from
//! every query on the hot path.

use thiserror::Error;

/// Error returned when constructing a [`crate::grid::Grid`] or [`crate::field::Field`] from
/// caller-supplied arrays.
#[derive(Debug, Error)]
pub enum Error {
    /// A grid's coordinate or depth arrays are inconsistent (wrong shape, too few points, or
    /// not strictly monotonic where required).
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
    /// A field's data array does not match the shape implied by its grid, or its time axis is
    /// not strictly monotonic.
    #[error("invalid field: {0}")]
    InvalidField(String),
}

/// Result alias for construction-time operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of a single sample query.
///
/// The discriminants are fixed at `0..=5` in case a caller needs ABI-stable interop (e.g. an
/// `i32` FFI boundary upstream of this crate). Do not renumber these without checking every
/// caller that depends on the numeric value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[repr(i32)]
pub enum ErrorKind {
    /// The query succeeded with the value described by the caller's own bookkeeping; never
    /// returned from inside this crate, but reserved so a caller can store its particle-lifecycle
    /// decision alongside values coming from this crate's [`crate::interpolation::sample`].
    #[error("success")]
    Success = 0,
    /// Reserved outcome for caller policy: retry the step that led to this query (e.g. with a
    /// smaller time step). Never returned by this crate.
    #[error("repeat")]
    Repeat = 1,
    /// Reserved outcome for caller policy: delete the particle that issued this query. Never
    /// returned by this crate.
    #[error("delete")]
    Delete = 2,
    /// An unsupported grid kind was dispatched on, a local coordinate came out NaN, or another
    /// programming/data error was detected.
    #[error("error")]
    Error = 3,
    /// The query point lies outside the sampled domain, horizontally or vertically, or an
    /// iteration limit in a search loop was exhausted.
    #[error("out of bounds")]
    OutOfBounds = 4,
    /// `t` lies outside `[time[0], time[tdim-1]]` and both time periodicity and time
    /// extrapolation are disabled for the field being sampled.
    #[error("time extrapolation")]
    TimeExtrapolation = 5,
}
