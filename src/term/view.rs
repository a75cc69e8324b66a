//! GameView: maps a `SessionSnapshot` into a terminal frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::SessionSnapshot;
use crate::term::frame::Frame;
use crate::types::CellValue;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view of the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    /// 2x1 compensates for typical terminal glyph aspect ratio.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the snapshot centered in the viewport.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);

        let rows = snap.grid.len() as u16;
        let cols = snap.grid.first().map_or(0, Vec::len) as u16;
        let board_px_w = cols * self.cell_w;
        let frame_w = board_px_w + 2;
        let frame_h = rows + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let border = Color::Grey;

        self.draw_border(&mut frame, start_x, start_y, frame_w, frame_h, border);

        // Settled cells.
        for (y, row) in snap.grid.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value != 0 {
                    self.draw_cell(&mut frame, start_x, start_y, x as u16, y as u16, value);
                }
            }
        }

        // Active piece; rows still above the visible top are not drawn.
        for (dy, shape_row) in snap.active.shape.iter().enumerate() {
            for (dx, &value) in shape_row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let gx = snap.active.x + dx as i32;
                let gy = snap.active.y + dy as i32;
                if gx >= 0 && gx < cols as i32 && gy >= 0 && gy < rows as i32 {
                    self.draw_cell(&mut frame, start_x, start_y, gx as u16, gy as u16, value);
                }
            }
        }

        // Status line under the board.
        let status_y = start_y + frame_h;
        frame.put_str(
            start_x,
            status_y,
            &format!("lines: {}", snap.lines_cleared),
            Color::Grey,
            Color::Reset,
        );
        if snap.game_over {
            frame.put_str(
                start_x,
                status_y + 1,
                "GAME OVER - press q",
                Color::Red,
                Color::Reset,
            );
        }

        frame
    }

    fn draw_cell(&self, frame: &mut Frame, start_x: u16, start_y: u16, x: u16, y: u16, value: CellValue) {
        let color = cell_color(value);
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y;
        for dx in 0..self.cell_w {
            frame.put_char(px + dx, py, '█', color, Color::Reset);
        }
    }

    fn draw_border(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16, color: Color) {
        if w < 2 || h < 2 {
            return;
        }
        for dx in 1..w - 1 {
            frame.put_char(x + dx, y, '─', color, Color::Reset);
            frame.put_char(x + dx, y + h - 1, '─', color, Color::Reset);
        }
        for dy in 1..h - 1 {
            frame.put_char(x, y + dy, '│', color, Color::Reset);
            frame.put_char(x + w - 1, y + dy, '│', color, Color::Reset);
        }
        frame.put_char(x, y, '┌', color, Color::Reset);
        frame.put_char(x + w - 1, y, '┐', color, Color::Reset);
        frame.put_char(x, y + h - 1, '└', color, Color::Reset);
        frame.put_char(x + w - 1, y + h - 1, '┘', color, Color::Reset);
    }
}

/// Cell colors follow the classic palette: cyan, blue, orange, yellow,
/// green, purple, red for ids 1..=7.
fn cell_color(value: CellValue) -> Color {
    match value {
        1 => Color::Cyan,
        2 => Color::Blue,
        3 => Color::Rgb { r: 255, g: 165, b: 0 },
        4 => Color::Yellow,
        5 => Color::Green,
        6 => Color::Magenta,
        7 => Color::Red,
        _ => Color::White,
    }
}
