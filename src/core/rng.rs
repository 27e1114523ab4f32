//! RNG module - deterministic pseudo-random source for board generation
//!
//! A simple LCG (Linear Congruential Generator) using constants from
//! Numerical Recipes. The same seed reproduces the same sequence of boards,
//! which keeps generation testable.

/// Simple LCG RNG
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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current RNG state (for restarting a session with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}
