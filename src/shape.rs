//! Shape catalog: the 7 piece kinds and their rotation templates
//!
//! Each rotation state is a 5x7 occupancy grid over a local frame.
//! Template cell (j, i) maps to board coordinate (x + j - 2, y + i - 4)
//! where (x, y) is the piece anchor. The tables are enumerated data,
//! never computed, so the classic clockwise rotation order is exact.

use ratatui::style::Color;

/// One rotation state: 7 rows of 5 columns, '#' marks an occupied cell.
pub type Template = [&'static str; 7];

/// Column offset of the local frame relative to the piece anchor.
pub const COL_OFFSET: i32 = 2;
/// Row offset of the local frame relative to the piece anchor.
pub const ROW_OFFSET: i32 = 4;

const I_STATES: [Template; 2] = [
    [".....", ".....", "..#..", "..#..", "..#..", "..#..", "....."],
    [".....", ".....", ".....", "####.", ".....", ".....", "....."],
];

const O_STATES: [Template; 1] = [
    [".....", ".....", ".....", ".##..", ".##..", ".....", "....."],
];

const S_STATES: [Template; 2] = [
    [".....", ".....", "..#..", ".##..", ".#...", ".....", "....."],
    [".....", ".....", ".##..", "..##.", ".....", ".....", "....."],
];

const Z_STATES: [Template; 2] = [
    [".....", ".....", "..#..", "..##.", "...#.", ".....", "....."],
    [".....", ".....", ".##..", "##...", ".....", ".....", "....."],
];

const J_STATES: [Template; 4] = [
    [".....", ".....", ".#...", ".###.", ".....", ".....", "....."],
    [".....", ".....", "..##.", "..#..", "..#..", ".....", "....."],
    [".....", ".....", ".....", ".###.", "...#.", ".....", "....."],
    [".....", ".....", "..#..", "..#..", ".##..", ".....", "....."],
];

const L_STATES: [Template; 4] = [
    [".....", ".....", "...#.", ".###.", ".....", ".....", "....."],
    [".....", ".....", "..#..", "..#..", "..##.", ".....", "....."],
    [".....", ".....", ".....", ".###.", ".#...", ".....", "....."],
    [".....", ".....", ".##..", "..#..", "..#..", ".....", "....."],
];

const T_STATES: [Template; 4] = [
    [".....", ".....", "..#..", ".###.", ".....", ".....", "....."],
    [".....", ".....", "..#..", "..##.", "..#..", ".....", "....."],
    [".....", ".....", ".....", ".###.", "..#..", ".....", "....."],
    [".....", ".....", "..#..", ".##..", "..#..", ".....", "....."],
];

/// The 7 piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    S,
    Z,
    J,
    L,
    T,
}

impl ShapeKind {
    /// All kinds, for random selection
    pub fn all() -> [ShapeKind; 7] {
        [
            ShapeKind::I,
            ShapeKind::O,
            ShapeKind::S,
            ShapeKind::Z,
            ShapeKind::J,
            ShapeKind::L,
            ShapeKind::T,
        ]
    }

    /// Ordered rotation states for this kind (1 for O, 2 for I/S/Z, 4 for J/L/T)
    pub fn rotation_states(&self) -> &'static [Template] {
        match self {
            ShapeKind::I => &I_STATES,
            ShapeKind::O => &O_STATES,
            ShapeKind::S => &S_STATES,
            ShapeKind::Z => &Z_STATES,
            ShapeKind::J => &J_STATES,
            ShapeKind::L => &L_STATES,
            ShapeKind::T => &T_STATES,
        }
    }

    /// Fixed display color for this kind
    pub fn color(&self) -> Color {
        match self {
            ShapeKind::I => Color::Rgb(85, 255, 255),
            ShapeKind::O => Color::Rgb(255, 255, 85),
            ShapeKind::S => Color::Rgb(223, 75, 223),
            ShapeKind::Z => Color::Rgb(100, 200, 115),
            ShapeKind::J => Color::Rgb(255, 85, 85),
            ShapeKind::L => Color::Rgb(255, 170, 0),
            ShapeKind::T => Color::Rgb(120, 108, 245),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_cells(template: &Template) -> usize {
        template
            .iter()
            .map(|line| line.bytes().filter(|&b| b == b'#').count())
            .sum()
    }

    #[test]
    fn test_state_counts() {
        assert_eq!(ShapeKind::I.rotation_states().len(), 2);
        assert_eq!(ShapeKind::O.rotation_states().len(), 1);
        assert_eq!(ShapeKind::S.rotation_states().len(), 2);
        assert_eq!(ShapeKind::Z.rotation_states().len(), 2);
        assert_eq!(ShapeKind::J.rotation_states().len(), 4);
        assert_eq!(ShapeKind::L.rotation_states().len(), 4);
        assert_eq!(ShapeKind::T.rotation_states().len(), 4);
    }

    #[test]
    fn test_every_state_has_four_cells() {
        for kind in ShapeKind::all() {
            for template in kind.rotation_states() {
                assert_eq!(filled_cells(template), 4, "{:?}", kind);
            }
        }
    }

    #[test]
    fn test_template_dimensions() {
        for kind in ShapeKind::all() {
            for template in kind.rotation_states() {
                assert_eq!(template.len(), 7);
                for line in template {
                    assert_eq!(line.len(), 5);
                }
            }
        }
    }

    #[test]
    fn test_kind_count() {
        assert_eq!(ShapeKind::all().len(), 7);
    }
}
