//! Core module - pure game logic with no external dependencies
//!
//! Board, pieces, collision, scoring, gravity timing, and the session
//! lifecycle. Zero dependencies on UI or I/O, fully deterministic for a
//! given seed.

pub mod board;
pub mod gravity;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use board::Board;
pub use gravity::GravityTimer;
pub use pieces::Shape;
pub use rng::SimpleRng;
pub use scoring::line_points;
pub use session::{GameSession, Tetromino};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
