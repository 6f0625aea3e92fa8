//! Blockfall - a terminal falling-block puzzle game.
//!
//! `core` is the engine (pure, deterministic, no I/O); `term` renders a
//! session snapshot to the terminal; `input` maps key events onto the
//! engine's command surface.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
