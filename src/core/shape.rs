//! Piece shape matrices and the standard palette.
//!
//! A [`Shape`] is a small rectangular matrix of cell values in the
//! piece's own frame: 0 is empty, nonzero entries carry the color id
//! that lands in the board when the piece freezes. Rotation is a pure
//! transform; four clockwise turns reproduce the original matrix.

use crate::types::CellValue;

/// Rectangular cell matrix, row-major flat storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    width: usize,
    height: usize,
    cells: Vec<CellValue>,
}

impl Shape {
    /// Build a shape from rows of cell values. Rows must be non-empty
    /// and share one length.
    pub fn from_rows<R: AsRef<[CellValue]>>(rows: &[R]) -> Self {
        assert!(!rows.is_empty(), "shape needs at least one row");
        let width = rows[0].as_ref().len();
        assert!(width > 0, "shape rows must be non-empty");

        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), width, "shape rows must be rectangular");
            cells.extend_from_slice(row);
        }
        Self {
            width,
            height: rows.len(),
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Iterate nonzero cells as `(dx, dy, value)` in the local frame.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i32, i32, CellValue)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, &value)| {
                (value != 0).then_some(((i % width) as i32, (i / width) as i32, value))
            })
    }

    /// True if no cell is filled.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&v| v == 0)
    }

    /// 90-degree clockwise rotation: transpose, then mirror each row.
    ///
    /// A `width x height` matrix becomes `height x width`; output cell
    /// (x, y) comes from input cell (y, height - 1 - x).
    pub fn rotated_cw(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..self.width {
            for x in 0..self.height {
                cells.push(self.cells[(self.height - 1 - x) * self.width + y]);
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Rows as owned vectors, for snapshots and tests.
    pub fn to_rows(&self) -> Vec<Vec<CellValue>> {
        (0..self.height)
            .map(|y| self.cells[y * self.width..(y + 1) * self.width].to_vec())
            .collect()
    }
}

/// One palette entry: a canonical shape plus the color id it renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceTemplate {
    pub shape: Shape,
    pub color: CellValue,
}

impl PieceTemplate {
    pub fn new(shape: Shape, color: CellValue) -> Self {
        Self { shape, color }
    }
}

/// The classic seven-piece palette (I, J, L, O, S, T, Z).
///
/// Cell values double as color ids 1..=7.
pub fn standard_palette() -> Vec<PieceTemplate> {
    vec![
        PieceTemplate::new(Shape::from_rows(&[&[1, 1, 1, 1]]), 1),
        PieceTemplate::new(Shape::from_rows(&[&[2, 0, 0], &[2, 2, 2]]), 2),
        PieceTemplate::new(Shape::from_rows(&[&[0, 0, 3], &[3, 3, 3]]), 3),
        PieceTemplate::new(Shape::from_rows(&[&[4, 4], &[4, 4]]), 4),
        PieceTemplate::new(Shape::from_rows(&[&[0, 5, 5], &[5, 5, 0]]), 5),
        PieceTemplate::new(Shape::from_rows(&[&[0, 6, 0], &[6, 6, 6]]), 6),
        PieceTemplate::new(Shape::from_rows(&[&[7, 7, 0], &[0, 7, 7]]), 7),
    ]
}
