//! Core module - pure game logic with no I/O dependencies.
//!
//! This module contains the whole simulation engine: grid, piece,
//! candidate transforms, and the session state machine. It has zero
//! dependencies on terminals, timers, or input handling.

pub mod board;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;

// Re-export commonly used types.
pub use board::Board;
pub use piece::ActivePiece;
pub use rng::SeededRng;
pub use session::{ConfigError, GameSession};
pub use shape::{standard_palette, PieceTemplate, Shape};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
