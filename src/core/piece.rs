//! The active falling piece.
//!
//! Movement is candidate-based: [`ActivePiece::translated`] and
//! [`ActivePiece::rotated`] build new piece values without touching the
//! original, the board validates them, and [`ActivePiece::commit`] is
//! the single place an accepted candidate mutates the live piece.
//! Rejected candidates are simply dropped, never stored.

use crate::core::rng::SeededRng;
use crate::core::shape::{PieceTemplate, Shape};
use crate::types::CellValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    shape: Shape,
    color: CellValue,
    /// Top-left corner of the shape matrix in grid coordinates.
    x: i32,
    /// May be negative while the piece is still entering from above.
    y: i32,
}

impl ActivePiece {
    pub fn new(shape: Shape, color: CellValue, x: i32, y: i32) -> Self {
        Self { shape, color, x, y }
    }

    /// Draw a template uniformly at random and place it horizontally
    /// centered (rounding left), one row above the visible top.
    pub fn spawn(palette: &[PieceTemplate], rng: &mut SeededRng, cols: usize) -> Self {
        let template = &palette[rng.next_range(palette.len() as u32) as usize];
        let x = (cols as i32 - template.shape.width() as i32) / 2;
        Self::new(template.shape.clone(), template.color, x, -1)
    }

    /// Candidate shifted by (dx, dy). Pure; the receiver is unchanged.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            shape: self.shape.clone(),
            color: self.color,
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Candidate rotated 90 degrees clockwise at the current position.
    ///
    /// No wall kicks: a rotation that does not fit is rejected by the
    /// caller and the piece never repositions to compensate.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            color: self.color,
            x: self.x,
            y: self.y,
        }
    }

    /// Adopt an accepted candidate's shape and position.
    ///
    /// The color id stays with the live piece; candidates only ever
    /// change geometry.
    pub fn commit(&mut self, candidate: ActivePiece) {
        self.shape = candidate.shape;
        self.x = candidate.x;
        self.y = candidate.y;
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> CellValue {
        self.color
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}
