//! Active falling piece and collision checks
//!
//! Every player-driven change follows the same algorithm: mutate the one
//! field involved, test validity against the dense matrix, and restore the
//! saved value if the test fails. No move is validated before mutation.

use crate::board::{COLUMNS, Cell, Matrix, ROWS};
use crate::shape::{COL_OFFSET, ROW_OFFSET, ShapeKind, Template};
use ratatui::style::Color;

/// The currently falling (or previewed) piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: ShapeKind,
    /// Rotation index, interpreted modulo the kind's state count
    pub rotation: i32,
    /// Anchor column
    pub x: i32,
    /// Anchor row; zero or negative while the piece enters from above
    pub y: i32,
}

impl Piece {
    /// Create a piece at the fixed spawn anchor, rotation 0
    pub fn spawn(kind: ShapeKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: COLUMNS as i32 / 2,
            y: 0,
        }
    }

    /// The active rotation template, with the index normalized into range
    pub fn template(&self) -> &'static Template {
        let states = self.kind.rotation_states();
        &states[self.rotation.rem_euclid(states.len() as i32) as usize]
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Absolute (column, row) coordinates occupied by the piece.
    /// Always exactly 4 cells for every kind and rotation index.
    pub fn cells(&self) -> Vec<(i32, i32)> {
        let mut cells = Vec::with_capacity(4);
        for (i, line) in self.template().iter().enumerate() {
            for (j, byte) in line.bytes().enumerate() {
                if byte == b'#' {
                    cells.push((self.x + j as i32 - COL_OFFSET, self.y + i as i32 - ROW_OFFSET));
                }
            }
        }
        cells
    }

    /// Whether the piece's current placement is legal against the matrix.
    /// Cells above the visible top (row < 0) never check occupancy; the
    /// piece may protrude above the well while spawning or rotating.
    pub fn is_valid(&self, matrix: &Matrix) -> bool {
        self.cells().into_iter().all(|(x, y)| {
            if x < 0 || x >= COLUMNS as i32 || y >= ROWS as i32 {
                return false;
            }
            y < 0 || matrix[y as usize][x as usize] == Cell::Empty
        })
    }

    /// Try to move one column left, returns true if the move stuck
    pub fn move_left(&mut self, matrix: &Matrix) -> bool {
        self.x -= 1;
        if self.is_valid(matrix) {
            true
        } else {
            self.x += 1;
            false
        }
    }

    /// Try to move one column right, returns true if the move stuck
    pub fn move_right(&mut self, matrix: &Matrix) -> bool {
        self.x += 1;
        if self.is_valid(matrix) {
            true
        } else {
            self.x -= 1;
            false
        }
    }

    /// Try to move one row down, returns true if the move stuck
    pub fn soft_drop(&mut self, matrix: &Matrix) -> bool {
        self.y += 1;
        if self.is_valid(matrix) {
            true
        } else {
            self.y -= 1;
            false
        }
    }

    /// Try to rotate clockwise, returns true if the rotation stuck
    pub fn rotate_cw(&mut self, matrix: &Matrix) -> bool {
        self.rotation += 1;
        if self.is_valid(matrix) {
            true
        } else {
            self.rotation -= 1;
            false
        }
    }

    /// Apply one gravity step. Returns true when the piece should lock:
    /// the step was invalid with the anchor below the top row. An invalid
    /// step at the top row boundary neither reverts nor locks, so a piece
    /// is never locked the instant it spawns.
    pub fn fall(&mut self, matrix: &Matrix) -> bool {
        self.y += 1;
        if !self.is_valid(matrix) && self.y > 0 {
            self.y -= 1;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::empty_matrix;

    fn sorted_cells(piece: &Piece) -> Vec<(i32, i32)> {
        let mut cells = piece.cells();
        cells.sort();
        cells
    }

    #[test]
    fn test_spawn_anchor() {
        let piece = Piece::spawn(ShapeKind::T);
        assert_eq!((piece.x, piece.y), (5, 0));
        assert_eq!(piece.rotation, 0);
    }

    #[test]
    fn test_four_distinct_cells_for_every_rotation() {
        for kind in ShapeKind::all() {
            for rotation in -4..8 {
                let piece = Piece { kind, rotation, x: 5, y: 10 };
                let mut cells = piece.cells();
                assert_eq!(cells.len(), 4, "{:?} r{}", kind, rotation);
                cells.sort();
                cells.dedup();
                assert_eq!(cells.len(), 4, "{:?} r{}", kind, rotation);
            }
        }
    }

    #[test]
    fn test_o_piece_rotation_is_identity() {
        let base = Piece { kind: ShapeKind::O, rotation: 0, x: 5, y: 10 };
        for rotation in [1, 2, 3, -5] {
            let rotated = Piece { rotation, ..base.clone() };
            assert_eq!(sorted_cells(&rotated), sorted_cells(&base));
        }
    }

    #[test]
    fn test_rotation_wraps_after_full_turn() {
        let matrix = empty_matrix();
        let mut piece = Piece { kind: ShapeKind::T, rotation: 0, x: 5, y: 10 };
        let before = sorted_cells(&piece);
        for _ in 0..4 {
            assert!(piece.rotate_cw(&matrix));
        }
        assert_eq!(sorted_cells(&piece), before);
    }

    #[test]
    fn test_move_left_rejected_at_wall() {
        let matrix = empty_matrix();
        let mut piece = Piece { kind: ShapeKind::I, rotation: 0, x: 5, y: 10 };
        while piece.move_left(&matrix) {}

        // Vertical I occupies a single column, flush against the wall
        assert!(piece.cells().iter().all(|&(x, _)| x == 0));

        let before = piece.clone();
        assert!(!piece.move_left(&matrix));
        assert_eq!(piece, before);
    }

    #[test]
    fn test_move_right_rejected_at_wall() {
        let matrix = empty_matrix();
        let mut piece = Piece { kind: ShapeKind::O, rotation: 0, x: 5, y: 10 };
        while piece.move_right(&matrix) {}

        let before = piece.clone();
        assert!(!piece.move_right(&matrix));
        assert_eq!(piece, before);
    }

    #[test]
    fn test_is_valid_idempotent() {
        let matrix = empty_matrix();
        let piece = Piece { kind: ShapeKind::S, rotation: 1, x: 5, y: 10 };
        assert_eq!(piece.is_valid(&matrix), piece.is_valid(&matrix));
    }

    #[test]
    fn test_valid_while_above_visible_top() {
        let matrix = empty_matrix();
        // Vertical I at y=0 has cells at rows -2..=1
        let piece = Piece { kind: ShapeKind::I, rotation: 0, x: 5, y: 0 };
        assert!(piece.cells().iter().any(|&(_, y)| y < 0));
        assert!(piece.is_valid(&matrix));
    }

    #[test]
    fn test_rejected_below_floor() {
        let matrix = empty_matrix();
        let piece = Piece { kind: ShapeKind::O, rotation: 0, x: 5, y: 20 };
        assert!(!piece.is_valid(&matrix));
    }

    #[test]
    fn test_fall_signals_lock_on_floor() {
        let matrix = empty_matrix();
        let mut piece = Piece { kind: ShapeKind::O, rotation: 0, x: 5, y: 18 };
        assert!(!piece.fall(&matrix));
        assert_eq!(piece.y, 19);

        // Next step would leave the well: reverted, lock signaled
        assert!(piece.fall(&matrix));
        assert_eq!(piece.y, 19);
    }

    #[test]
    fn test_fall_suppresses_lock_at_top_boundary() {
        // A fully occupied well blocks the piece immediately
        let mut matrix = empty_matrix();
        for row in matrix.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Cell::Filled(ShapeKind::I.color());
            }
        }

        let mut piece = Piece { kind: ShapeKind::O, rotation: 0, x: 5, y: -1 };
        // Invalid after the step, but the anchor is still at the top row:
        // no lock signal, and the step is not reverted
        assert!(!piece.fall(&matrix));
        assert_eq!(piece.y, 0);
    }
}
