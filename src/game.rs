//! Game loop controller
//!
//! One `tick` advances the whole game: rebuild the dense matrix from the
//! locked map, apply time-gated gravity, drain queued intents in arrival
//! order, overlay the falling piece for rendering, settle and clear on a
//! pending lock, then run the loss check. `GameOver` is terminal; further
//! ticks and intents are ignored.

use crate::board::{Board, COLUMNS, Cell, Matrix, ROWS, empty_matrix};
use crate::piece::Piece;
use crate::score::Score;
use crate::spawner::Spawner;
use std::collections::VecDeque;
use std::time::Duration;

/// Fixed gravity interval (fall speed never changes)
pub const FALL_INTERVAL: Duration = Duration::from_millis(270);

/// Discrete inputs the core understands. `Quit` belongs to the driver:
/// it stops the loop and is never applied to the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    GameOver,
}

/// The whole game: board, active and preview pieces, score, timing
pub struct Game {
    pub board: Board,
    pub current: Piece,
    pub next: Piece,
    pub score: Score,
    pub state: GameState,
    spawner: Spawner,
    /// Time accumulated toward the next gravity step
    fall_timer: Duration,
    /// Intents queued since the last tick, applied in arrival order
    intents: VecDeque<Intent>,
    /// Dense matrix of the last tick, with the falling piece overlaid
    frame: Matrix,
}

impl Game {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a game with a fixed piece sequence (for deterministic play)
    pub fn with_seed(seed: u64) -> Self {
        let mut spawner = Spawner::with_seed(seed);
        let current = spawner.next();
        let next = spawner.next();
        Self {
            board: Board::new(),
            current,
            next,
            score: Score::new(),
            state: GameState::Running,
            spawner,
            fall_timer: Duration::ZERO,
            intents: VecDeque::new(),
            frame: empty_matrix(),
        }
    }

    /// Queue an intent for the next tick. Ignored once the game is over.
    pub fn push_intent(&mut self, intent: Intent) {
        if self.state == GameState::GameOver {
            return;
        }
        self.intents.push_back(intent);
    }

    /// Advance the game by one tick of elapsed real time
    pub fn tick(&mut self, delta: Duration) {
        if self.state == GameState::GameOver {
            self.intents.clear();
            return;
        }

        // Fresh projection of the locked map; the dense matrix is never
        // carried over between ticks
        let mut matrix = self.board.materialize();

        // Gravity
        let mut pending_lock = false;
        self.fall_timer += delta;
        if self.fall_timer >= FALL_INTERVAL {
            self.fall_timer = Duration::ZERO;
            pending_lock = self.current.fall(&matrix);
        }

        // Player input, in arrival order
        while let Some(intent) = self.intents.pop_front() {
            match intent {
                Intent::MoveLeft => {
                    self.current.move_left(&matrix);
                }
                Intent::MoveRight => {
                    self.current.move_right(&matrix);
                }
                Intent::SoftDrop => {
                    self.current.soft_drop(&matrix);
                }
                Intent::Rotate => {
                    self.current.rotate_cw(&matrix);
                }
                Intent::Quit => {}
            }
        }

        // Overlay the falling piece for this frame's render
        let cells = self.current.cells();
        for &(x, y) in &cells {
            if (0..ROWS as i32).contains(&y) && (0..COLUMNS as i32).contains(&x) {
                matrix[y as usize][x as usize] = Cell::Filled(self.current.color());
            }
        }

        // Settle, promote the preview, clear and score
        if pending_lock {
            self.board.lock(&cells, self.current.color());
            self.current = std::mem::replace(&mut self.next, self.spawner.next());
            let cleared = self.board.clear_rows(&matrix);
            if cleared > 0 {
                self.score.add_clear(cleared);
                tracing::debug!(cleared, points = self.score.points, "rows cleared");
            }
        }

        self.frame = matrix;

        if self.board.has_topped_out() {
            tracing::info!(points = self.score.points, lines = self.score.lines, "game over");
            self.state = GameState::GameOver;
        }
    }

    /// Dense matrix of the last tick, for the presentation layer
    pub fn frame(&self) -> &Matrix {
        &self.frame
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
