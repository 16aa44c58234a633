//! Board model: the sparse locked-cell map and its dense per-tick projection
//!
//! The durable state is the map of permanently settled cells, keyed by
//! (column, row). Rows may be negative for cells that settled above the
//! visible top of the well. The dense matrix is rebuilt from the map every
//! tick and is never itself the source of truth.

use ratatui::style::Color;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Playfield dimensions
pub const COLUMNS: usize = 10;
pub const ROWS: usize = 20;

/// A cell in the dense matrix - either empty or filled with a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// Dense ROWS x COLUMNS projection, indexed [row][column], row 0 at the top
pub type Matrix = [[Cell; COLUMNS]; ROWS];

/// An all-empty dense matrix, the starting point of every projection
pub fn empty_matrix() -> Matrix {
    [[Cell::Empty; COLUMNS]; ROWS]
}

/// The well and its settled cells
#[derive(Debug, Clone)]
pub struct Board {
    /// Locked cells keyed (column, row); row < 0 is above the visible top
    locked: HashMap<(i32, i32), Color>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with a fresh, empty locked map
    pub fn new() -> Self {
        Self {
            locked: HashMap::new(),
        }
    }

    /// Project the locked map onto a dense matrix.
    /// Entries with a negative row stay in the map but are not projected.
    pub fn materialize(&self) -> Matrix {
        let mut matrix = empty_matrix();
        for (&(x, y), &color) in &self.locked {
            if (0..ROWS as i32).contains(&y) {
                matrix[y as usize][x as usize] = Cell::Filled(color);
            }
        }
        matrix
    }

    /// Settle a piece's cells into the locked map
    pub fn lock(&mut self, cells: &[(i32, i32)], color: Color) {
        for &cell in cells {
            self.locked.insert(cell, color);
        }
    }

    /// Remove every full row of the given matrix from the locked map, then
    /// shift every locked cell strictly above the topmost cleared row down by
    /// the cleared count. Returns the number of rows cleared.
    ///
    /// The matrix is the caller's dense projection for this tick, with the
    /// falling piece already overlaid. Re-keying runs in descending row order
    /// so moved cells never collide with cells yet to move.
    pub fn clear_rows(&mut self, matrix: &Matrix) -> usize {
        let mut cleared = 0;
        let mut topmost = 0i32;

        for i in (0..ROWS).rev() {
            if matrix[i].iter().all(Cell::is_filled) {
                cleared += 1;
                topmost = i as i32;
                for j in 0..COLUMNS {
                    self.locked.remove(&(j as i32, i as i32));
                }
            }
        }

        if cleared > 0 {
            let mut keys: Vec<(i32, i32)> = self.locked.keys().copied().collect();
            keys.sort_by_key(|&(_, y)| Reverse(y));
            for (x, y) in keys {
                if y < topmost {
                    if let Some(color) = self.locked.remove(&(x, y)) {
                        self.locked.insert((x, y + cleared as i32), color);
                    }
                }
            }
        }

        cleared
    }

    /// Loss condition: any settled cell intruding into the near-top rows
    pub fn has_topped_out(&self) -> bool {
        self.locked.keys().any(|&(_, y)| y < 1)
    }

    /// Locked color at a coordinate, if settled
    pub fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        self.locked.get(&(x, y)).copied()
    }

    /// Number of settled cells
    pub fn cell_count(&self) -> usize {
        self.locked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked.is_empty()
    }
}
