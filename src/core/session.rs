//! Session orchestrator - the Playing/GameOver state machine.
//!
//! Owns the board and the active piece and is the only place they meet.
//! Every command builds a candidate piece state, asks the board whether
//! it is legal, and either commits it or drops it. A blocked down-step
//! is the one exception: it freezes the piece into the board, clears
//! completed lines, and then decides between respawn and game over.

use thiserror::Error;

use crate::core::board::Board;
use crate::core::piece::ActivePiece;
use crate::core::rng::SeededRng;
use crate::core::shape::PieceTemplate;
use crate::core::snapshot::{ActiveSnapshot, SessionSnapshot};
use crate::types::Command;

/// Session construction failures.
///
/// There is no runtime error surface: a rejected move is a normal
/// outcome and game over is a designed end state, so configuration is
/// the only thing that can actually be wrong.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },
    #[error("piece palette is empty")]
    EmptyPalette,
    #[error("palette entry {index} has no filled cells")]
    BlankShape { index: usize },
    #[error("palette entry {index} is wider than the board ({width} > {cols})")]
    ShapeTooWide {
        index: usize,
        width: usize,
        cols: usize,
    },
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: ActivePiece,
    palette: Vec<PieceTemplate>,
    rng: SeededRng,
    lines_cleared: u32,
    game_over: bool,
}

impl GameSession {
    /// Create a session with the default seed.
    pub fn new(
        cols: usize,
        rows: usize,
        palette: Vec<PieceTemplate>,
    ) -> Result<Self, ConfigError> {
        Self::with_seed(cols, rows, palette, 1)
    }

    /// Create a session, validating the configuration up front.
    pub fn with_seed(
        cols: usize,
        rows: usize,
        palette: Vec<PieceTemplate>,
        seed: u32,
    ) -> Result<Self, ConfigError> {
        if cols == 0 || rows == 0 {
            return Err(ConfigError::InvalidDimensions { cols, rows });
        }
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        for (index, template) in palette.iter().enumerate() {
            if template.shape.is_blank() {
                return Err(ConfigError::BlankShape { index });
            }
            if template.shape.width() > cols {
                return Err(ConfigError::ShapeTooWide {
                    index,
                    width: template.shape.width(),
                    cols,
                });
            }
        }

        let mut rng = SeededRng::new(seed);
        let active = ActivePiece::spawn(&palette, &mut rng, cols);
        Ok(Self {
            board: Board::new(cols, rows),
            active,
            palette,
            rng,
            lines_cleared: 0,
            game_over: false,
        })
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for scenario setup in tests and tools.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    /// Apply one command and return the resulting state view.
    ///
    /// After game over every command is a no-op and the returned
    /// snapshot stops changing.
    pub fn apply(&mut self, cmd: Command) -> SessionSnapshot {
        if !self.game_over {
            match cmd {
                Command::Left => self.try_commit(self.active.translated(-1, 0)),
                Command::Right => self.try_commit(self.active.translated(1, 0)),
                Command::Rotate => self.try_commit(self.active.rotated()),
                Command::Tick => self.step_down(),
            }
        }
        self.snapshot()
    }

    /// Commit a candidate iff the board accepts it; rejection is silent.
    fn try_commit(&mut self, candidate: ActivePiece) {
        if self
            .board
            .is_valid(candidate.shape(), candidate.x(), candidate.y())
        {
            self.active.commit(candidate);
        }
    }

    /// One gravity step: descend, or lock the piece where it is.
    fn step_down(&mut self) {
        let candidate = self.active.translated(0, 1);
        if self
            .board
            .is_valid(candidate.shape(), candidate.x(), candidate.y())
        {
            self.active.commit(candidate);
            return;
        }

        self.board
            .freeze(self.active.shape(), self.active.x(), self.active.y());
        self.lines_cleared += self.board.clear_lines() as u32;

        // A piece that locks before fully entering the visible board
        // means the stack has reached the top. Terminal: no replacement
        // piece ever becomes observable.
        if self.active.y() < 0 {
            self.game_over = true;
            return;
        }

        self.active = ActivePiece::spawn(&self.palette, &mut self.rng, self.board.cols());
    }

    /// Read-only copy of the whole session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid: self.board.to_matrix(),
            active: ActiveSnapshot {
                shape: self.active.shape().to_rows(),
                x: self.active.x(),
                y: self.active.y(),
                color: self.active.color(),
            },
            lines_cleared: self.lines_cleared,
            game_over: self.game_over,
        }
    }
}
