//! Placement grid store.
//!
//! Authoritative 2D grid of occupant ids backed by a flat row-major
//! vector. Dimensions are fixed per session; a viewport tier switch goes
//! through [`PlacementGrid::reset`], which discards prior placements.
//!
//! `place` overwrites occupied cells silently while `try_move` rejects
//! occupied destinations. The asymmetry is part of the observed contract
//! and is pinned by tests rather than "fixed" here.

use crate::types::{Cell, GridPos, OccupantId};

/// The placement grid: `rows` x `cols` cells, row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl PlacementGrid {
    /// Create a fresh all-empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Replace the grid with a fresh all-empty one of the given size.
    ///
    /// No occupant migration: prior placement data is destroyed.
    pub fn reset(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.cells.clear();
        self.cells.resize(rows * cols, None);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, pos: GridPos) -> Option<usize> {
        if pos.col < 0 || pos.row < 0 {
            return None;
        }
        let (col, row) = (pos.col as usize, pos.row as usize);
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Cell contents at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: GridPos) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub fn is_occupied(&self, pos: GridPos) -> bool {
        matches!(self.get(pos), Some(Some(_)))
    }

    /// Set the cell to `id`, overwriting any existing occupant.
    ///
    /// Out-of-range writes are ignored; callers only place on cells
    /// visible in the current grid.
    pub fn place(&mut self, pos: GridPos, id: OccupantId) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = Some(id);
        }
    }

    /// Clear the cell. Removing an already-empty cell is a no-op.
    pub fn remove(&mut self, pos: GridPos) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = None;
        }
    }

    /// Move the occupant at `from` to `to`.
    ///
    /// Fails (returning `false`, grid untouched) when the destination is
    /// out of bounds or already occupied. A self-move succeeds and
    /// changes nothing: the destination is occupied only by the entity
    /// being moved, and rejecting it would turn a drop-in-place into a
    /// visual revert.
    pub fn try_move(&mut self, from: GridPos, to: GridPos) -> bool {
        if from == to {
            return self.index(to).is_some();
        }
        let Some(to_idx) = self.index(to) else {
            return false;
        };
        if self.cells[to_idx].is_some() {
            return false;
        }
        let Some(from_idx) = self.index(from) else {
            return false;
        };
        self.cells[to_idx] = self.cells[from_idx];
        self.cells[from_idx] = None;
        true
    }

    /// Iterate occupied cells as `(pos, id)`, row-major.
    pub fn occupants(&self) -> impl Iterator<Item = (GridPos, OccupantId)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|id| {
                let pos = GridPos::new((i % self.cols) as i32, (i / self.cols) as i32);
                (pos, id)
            })
        })
    }

    /// Flat view of the cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_guard_matches_extent() {
        let grid = PlacementGrid::new(3, 4);
        assert_eq!(grid.index(GridPos::new(0, 0)), Some(0));
        assert_eq!(grid.index(GridPos::new(3, 2)), Some(11));
        assert_eq!(grid.index(GridPos::new(-1, 0)), None);
        assert_eq!(grid.index(GridPos::new(0, -1)), None);
        assert_eq!(grid.index(GridPos::new(4, 0)), None);
        assert_eq!(grid.index(GridPos::new(0, 3)), None);
    }

    #[test]
    fn reset_discards_placements() {
        let mut grid = PlacementGrid::new(3, 3);
        grid.place(GridPos::new(1, 1), 5);
        grid.reset(7, 7);
        assert_eq!(grid.rows(), 7);
        assert_eq!(grid.cols(), 7);
        assert!(grid.cells().iter().all(Option::is_none));
    }

    #[test]
    fn occupants_iterates_row_major() {
        let mut grid = PlacementGrid::new(2, 2);
        grid.place(GridPos::new(1, 0), 3);
        grid.place(GridPos::new(0, 1), 8);
        let got: Vec<_> = grid.occupants().collect();
        assert_eq!(got, vec![(GridPos::new(1, 0), 3), (GridPos::new(0, 1), 8)]);
    }
}
