//! Per-particle hint state: the last-found cell indices, reused as the starting point of the
//! next nearby query.

/// Last-found indices for one grid, owned by a single particle for the duration of a query.
///
/// `xi`/`yi`/`zi` are valid left-edges (`coord[i] <= value <= coord[i+1]`) after a successful
/// sample; `ti` is the index of the time frame at or before the last sampled time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Hint {
    /// Last-found x cell index.
    pub xi: usize,
    /// Last-found y cell index.
    pub yi: usize,
    /// Last-found z cell index.
    pub zi: usize,
    /// Last-found time frame index.
    pub ti: usize,
}

/// A particle's hints across every grid it samples, indexed by `grid_id`.
///
/// Hints are advisory: a stale or zeroed hint only costs an extra search step, never
/// correctness. The table grows on first use of a new `grid_id` rather than requiring every
/// grid to be known up front.
#[derive(Clone, Debug, Default)]
pub struct HintTable {
    hints: Vec<Hint>,
}

impl HintTable {
    /// Creates a table with room for `num_grids` grids, all hints zeroed.
    #[must_use]
    pub fn new(num_grids: usize) -> Self {
        Self {
            hints: vec![Hint::default(); num_grids],
        }
    }

    /// Returns a mutable reference to the hint for `grid_id`, growing the table if needed.
    pub fn get_mut(&mut self, grid_id: usize) -> &mut Hint {
        if grid_id >= self.hints.len() {
            self.hints.resize(grid_id + 1, Hint::default());
        }
        &mut self.hints[grid_id]
    }

    /// Returns the hint for `grid_id`, or the zeroed default if it has never been touched.
    #[must_use]
    pub fn get(&self, grid_id: usize) -> Hint {
        self.hints.get(grid_id).copied().unwrap_or_default()
    }
}
