//! Structured mesh geometry: rectilinear or curvilinear horizontal coordinates, fixed or
//! terrain-following vertical coordinates.

use crate::error::{Error, Result};
use ndarray::{Array1, Array2, Array3, Array4};
use tracing::warn;

/// Discriminates the four supported mesh shapes. Derived from a [`Grid`]'s horizontal and
/// vertical representation rather than stored directly, so the two axes can never disagree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GridKind {
    /// 1-D longitude/latitude axes, fixed 1-D depth.
    RectilinearZ,
    /// 1-D longitude/latitude axes, terrain-following depth table.
    RectilinearS,
    /// 2-D longitude/latitude arrays, fixed 1-D depth.
    CurvilinearZ,
    /// 2-D longitude/latitude arrays, terrain-following depth table.
    CurvilinearS,
}

/// Horizontal coordinate representation.
#[derive(Clone, Debug)]
pub enum Horizontal {
    /// Axis-aligned mesh: 1-D `lon` of length `xdim`, 1-D `lat` of length `ydim`.
    Rectilinear {
        /// Longitude (or plain x) coordinate, length `xdim`.
        lon: Array1<f32>,
        /// Latitude (or plain y) coordinate, length `ydim`.
        lat: Array1<f32>,
    },
    /// General quadrilateral mesh: 2-D `lon`/`lat` shaped `(ydim, xdim)`.
    Curvilinear {
        /// Longitude, shaped `(ydim, xdim)`.
        lon: Array2<f32>,
        /// Latitude, shaped `(ydim, xdim)`.
        lat: Array2<f32>,
    },
}

impl Horizontal {
    fn xdim(&self) -> usize {
        match self {
            Self::Rectilinear { lon, .. } => lon.len(),
            Self::Curvilinear { lon, .. } => lon.shape()[1],
        }
    }

    fn ydim(&self) -> usize {
        match self {
            Self::Rectilinear { lat, .. } => lat.len(),
            Self::Curvilinear { lat, .. } => lat.shape()[0],
        }
    }

    fn is_curvilinear(&self) -> bool {
        matches!(self, Self::Curvilinear { .. })
    }
}

/// A terrain-following depth table, either static or time-varying.
#[derive(Clone, Debug)]
pub enum SDepth {
    /// Shaped `(zdim, ydim, xdim)`, shared by every time frame.
    Static(Array3<f32>),
    /// Shaped `(tdim, zdim, ydim, xdim)`, one depth table per time frame (`z4d = true`).
    TimeVarying(Array4<f32>),
}

impl SDepth {
    fn zdim(&self) -> usize {
        match self {
            Self::Static(t) => t.shape()[0],
            Self::TimeVarying(t) => t.shape()[1],
        }
    }

    fn ydim(&self) -> usize {
        match self {
            Self::Static(t) => t.shape()[1],
            Self::TimeVarying(t) => t.shape()[2],
        }
    }

    fn xdim(&self) -> usize {
        match self {
            Self::Static(t) => t.shape()[2],
            Self::TimeVarying(t) => t.shape()[3],
        }
    }

    /// `true` if this is the time-varying (`z4d`) form.
    #[must_use]
    pub const fn is_time_varying(&self) -> bool {
        matches!(self, Self::TimeVarying(_))
    }

    /// Number of time frames, if time-varying.
    #[must_use]
    pub fn tdim(&self) -> Option<usize> {
        match self {
            Self::Static(_) => None,
            Self::TimeVarying(t) => Some(t.shape()[0]),
        }
    }
}

/// Vertical coordinate representation.
#[derive(Clone, Debug)]
pub enum Vertical {
    /// Fixed 1-D depth vector, strictly increasing, length `zdim`.
    Z(Array1<f32>),
    /// Terrain-following depth table.
    S(SDepth),
}

impl Vertical {
    fn zdim(&self) -> usize {
        match self {
            Self::Z(d) => d.len(),
            Self::S(s) => s.zdim(),
        }
    }
}

/// A structured mesh: horizontal coordinates plus a vertical coordinate convention.
///
/// Logically immutable after construction; every sampling operation takes `&Grid`.
#[derive(Clone, Debug)]
pub struct Grid {
    grid_id: usize,
    horizontal: Horizontal,
    vertical: Vertical,
    sphere_mesh: bool,
    zonal_periodic: bool,
}

/// Assigns dense, sequential `grid_id`s to newly constructed grids.
///
/// Owned by the embedding application (typically one per simulation), never shared implicitly:
/// there is no global counter inside this crate.
#[derive(Debug, Default)]
pub struct GridRegistry {
    next_id: usize,
}

impl GridRegistry {
    /// Creates an empty registry; the first grid it assigns gets `grid_id == 0`.
    #[must_use]
    pub const fn new() -> Self {
        Self { next_id: 0 }
    }

    fn next(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn strictly_increasing(values: &Array1<f32>) -> bool {
    values.windows(2).into_iter().all(|w| w[0] < w[1])
}

impl Grid {
    fn validate_common(horizontal: &Horizontal, vertical: &Vertical) -> Result<()> {
        let xdim = horizontal.xdim();
        let ydim = horizontal.ydim();

        if xdim < 2 {
            return Err(Error::InvalidGrid(format!(
                "xdim must be at least 2, got {xdim}"
            )));
        }
        if ydim < 2 {
            return Err(Error::InvalidGrid(format!(
                "ydim must be at least 2, got {ydim}"
            )));
        }

        if let Horizontal::Curvilinear { lon, lat } = horizontal {
            if lon.shape() != lat.shape() {
                return Err(Error::InvalidGrid(format!(
                    "curvilinear lon/lat shape mismatch: {:?} vs {:?}",
                    lon.shape(),
                    lat.shape()
                )));
            }
        }

        match vertical {
            Vertical::Z(depth) => {
                if depth.is_empty() {
                    return Err(Error::InvalidGrid("zdim must be at least 1".to_string()));
                }
                if !strictly_increasing(depth) {
                    return Err(Error::InvalidGrid(
                        "depth must be strictly increasing".to_string(),
                    ));
                }
            }
            Vertical::S(s) => {
                if s.zdim() == 0 {
                    return Err(Error::InvalidGrid("zdim must be at least 1".to_string()));
                }
                if s.xdim() != xdim || s.ydim() != ydim {
                    return Err(Error::InvalidGrid(format!(
                        "S-grid depth table horizontal shape ({}, {}) does not match mesh ({xdim}, {ydim})",
                        s.ydim(),
                        s.xdim()
                    )));
                }
            }
        }

        Ok(())
    }

    fn new(
        registry: &mut GridRegistry,
        horizontal: Horizontal,
        vertical: Vertical,
        sphere_mesh: bool,
        zonal_periodic: bool,
    ) -> Result<Self> {
        if let Err(err) = Self::validate_common(&horizontal, &vertical) {
            warn!(%err, "rejecting grid construction");
            return Err(err);
        }

        Ok(Self {
            grid_id: registry.next(),
            horizontal,
            vertical,
            sphere_mesh,
            zonal_periodic,
        })
    }

    /// Builds a rectilinear grid with a fixed 1-D depth axis.
    pub fn new_rectilinear_z(
        registry: &mut GridRegistry,
        lon: Array1<f32>,
        lat: Array1<f32>,
        depth: Array1<f32>,
        sphere_mesh: bool,
        zonal_periodic: bool,
    ) -> Result<Self> {
        Self::new(
            registry,
            Horizontal::Rectilinear { lon, lat },
            Vertical::Z(depth),
            sphere_mesh,
            zonal_periodic,
        )
    }

    /// Builds a rectilinear grid with a terrain-following depth table.
    pub fn new_rectilinear_s(
        registry: &mut GridRegistry,
        lon: Array1<f32>,
        lat: Array1<f32>,
        depth: SDepth,
        sphere_mesh: bool,
        zonal_periodic: bool,
    ) -> Result<Self> {
        Self::new(
            registry,
            Horizontal::Rectilinear { lon, lat },
            Vertical::S(depth),
            sphere_mesh,
            zonal_periodic,
        )
    }

    /// Builds a curvilinear grid with a fixed 1-D depth axis.
    pub fn new_curvilinear_z(
        registry: &mut GridRegistry,
        lon: Array2<f32>,
        lat: Array2<f32>,
        depth: Array1<f32>,
        sphere_mesh: bool,
        zonal_periodic: bool,
    ) -> Result<Self> {
        Self::new(
            registry,
            Horizontal::Curvilinear { lon, lat },
            Vertical::Z(depth),
            sphere_mesh,
            zonal_periodic,
        )
    }

    /// Builds a curvilinear grid with a terrain-following depth table.
    pub fn new_curvilinear_s(
        registry: &mut GridRegistry,
        lon: Array2<f32>,
        lat: Array2<f32>,
        depth: SDepth,
        sphere_mesh: bool,
        zonal_periodic: bool,
    ) -> Result<Self> {
        Self::new(
            registry,
            Horizontal::Curvilinear { lon, lat },
            Vertical::S(depth),
            sphere_mesh,
            zonal_periodic,
        )
    }

    /// The dense identifier assigned at construction time; indexes into a [`crate::hint::HintTable`].
    #[must_use]
    pub const fn grid_id(&self) -> usize {
        self.grid_id
    }

    /// Number of grid points along the x-axis.
    #[must_use]
    pub fn xdim(&self) -> usize {
        self.horizontal.xdim()
    }

    /// Number of grid points along the y-axis.
    #[must_use]
    pub fn ydim(&self) -> usize {
        self.horizontal.ydim()
    }

    /// Number of grid points along the vertical axis.
    #[must_use]
    pub fn zdim(&self) -> usize {
        self.vertical.zdim()
    }

    /// `true` if horizontal coordinates are longitude/latitude in degrees with periodic
    /// arithmetic applying during search.
    #[must_use]
    pub const fn sphere_mesh(&self) -> bool {
        self.sphere_mesh
    }

    /// `true` if the x-axis wraps around (zonal periodicity).
    #[must_use]
    pub const fn zonal_periodic(&self) -> bool {
        self.zonal_periodic
    }

    /// The horizontal coordinate representation.
    #[must_use]
    pub const fn horizontal(&self) -> &Horizontal {
        &self.horizontal
    }

    /// The vertical coordinate representation.
    #[must_use]
    pub const fn vertical(&self) -> &Vertical {
        &self.vertical
    }

    /// The [`GridKind`] implied by this grid's horizontal/vertical representation.
    #[must_use]
    pub fn kind(&self) -> GridKind {
        match (self.horizontal.is_curvilinear(), &self.vertical) {
            (false, Vertical::Z(_)) => GridKind::RectilinearZ,
            (false, Vertical::S(_)) => GridKind::RectilinearS,
            (true, Vertical::Z(_)) => GridKind::CurvilinearZ,
            (true, Vertical::S(_)) => GridKind::CurvilinearS,
        }
    }
}
