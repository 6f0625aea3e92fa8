//! RNG module - deterministic piece and color draws
//!
//! A small LCG (constants from Numerical Recipes) keeps the engine fully
//! deterministic for a given seed. Piece kinds are drawn uniformly and
//! independently from the 7 kinds; colors are uniform 24-bit RGB.

use crate::types::{PieceKind, Rgb};

/// Simple LCG (Linear Congruential Generator) RNG
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a piece kind, uniform over the 7 kinds
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// Draw a uniform 24-bit RGB color
    pub fn next_color(&mut self) -> Rgb {
        let v = self.next_u32();
        Rgb::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Current internal state (usable as a seed to continue the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}
