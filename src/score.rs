//! Line-clear scoring

/// Points awarded for clearing the given number of rows at once.
/// Counts outside 1..=4 (including 0) award nothing.
pub fn line_clear_points(rows: usize) -> u64 {
    match rows {
        1 => 40,
        2 => 100,
        3 => 300,
        4 => 1200,
        _ => 0,
    }
}

/// Running score, only ever incremented by line clears
#[derive(Debug, Clone, Default)]
pub struct Score {
    pub points: u64,
    /// Total rows cleared, for the stats readout
    pub lines: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a line clear
    pub fn add_clear(&mut self, rows: usize) {
        self.points += line_clear_points(rows);
        self.lines += rows as u32;
    }
}
