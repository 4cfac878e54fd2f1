use bitvec::prelude::*;

use crate::spatial::grid::Grid;
use crate::spatial::position::Position;

/// Fixed-size set of grid cells touched by a walk
///
/// Indexed by the grid's row-major flat index. Positions outside the grid are
/// never members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitedSet {
    bits: BitVec,
    cols: usize,
}

impl VisitedSet {
    /// Create an empty set sized for `grid`
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    /// Create an empty set for a `rows` by `cols` grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            cols,
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let [row, col] = pos.as_index()?;
        let flat = row.checked_mul(self.cols)?.checked_add(col)?;
        (col < self.cols && flat < self.bits.len()).then_some(flat)
    }

    /// Mark `pos` as visited, returning `true` if it was not already
    pub fn insert(&mut self, pos: Position) -> bool {
        let Some(flat) = self.index(pos) else {
            return false;
        };
        !self.bits.replace(flat, true)
    }

    /// Number of visited cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Visited positions in row-major order
    pub fn positions(&self) -> Vec<Position> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.bits
            .iter_ones()
            .map(|flat| Position::new((flat / self.cols) as i32, (flat % self.cols) as i32))
            .collect()
    }
}
