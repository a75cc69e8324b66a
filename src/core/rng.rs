//! RNG module - deterministic seeded randomness for piece selection.
//!
//! A small LCG keeps piece sequences reproducible from a seed, which the
//! tests rely on; no external randomness enters the engine.

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid a 0 seed, which would make the first draws degenerate.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Generate a value in [0, max). `max` must be nonzero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}
