//! Terminal rendering layer.
//!
//! `GameView` is pure: it maps an engine snapshot into a styled character
//! framebuffer. `TerminalRenderer` owns the crossterm terminal lifecycle
//! and flushes framebuffers to it.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
