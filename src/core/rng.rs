//! RNG module - seedable randomness and the brick source
//!
//! A simple LCG keeps piece sequences and mission choices reproducible in
//! tests: same seed, same game. The brick source draws on demand and keeps
//! one brick pre-buffered so the preview always has something to show.

use crate::core::bricks::Brick;
use crate::types::BrickKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Produces the next brick on demand, pre-buffering one brick ahead
/// so the upcoming kind can be previewed before it spawns.
#[derive(Debug, Clone)]
pub struct BrickSource {
    rng: SimpleRng,
    buffered: Brick,
}

impl BrickSource {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let buffered = Self::random_brick(&mut rng);
        Self { rng, buffered }
    }

    fn random_brick(rng: &mut SimpleRng) -> Brick {
        let idx = rng.next_range(BrickKind::ALL.len() as u32) as usize;
        Brick::new(BrickKind::ALL[idx])
    }

    /// Take the buffered brick and refill the buffer
    pub fn draw(&mut self) -> Brick {
        let next = Self::random_brick(&mut self.rng);
        std::mem::replace(&mut self.buffered, next)
    }

    /// Peek at the upcoming brick without consuming it
    pub fn peek_next(&self) -> &Brick {
        &self.buffered
    }

    /// Current RNG state, used to restart a game with the same sequence
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for BrickSource {
    fn default() -> Self {
        Self::new(1)
    }
}
