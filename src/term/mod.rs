//! Terminal driver module.
//!
//! A small game-oriented rendering layer: the view maps a session
//! snapshot into a [`frame::Frame`] of styled cells (pure, testable),
//! and the renderer flushes frames to the real terminal.

pub mod frame;
pub mod renderer;
pub mod view;

pub use frame::{Frame, StyledCell};
pub use renderer::TerminalRenderer;
pub use view::{GameView, Viewport};
