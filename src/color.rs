//! Per-triangle color selection.
//!
//! The original reference painted every triangle with a fresh call to the
//! process-global C `rand()`, which makes a render run irreproducible and
//! makes concurrent rendering from multiple threads a data race on hidden
//! state. [`ColorSource`] makes that an explicit, caller-owned value instead.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Supplies one color per triangle as [`crate::render`] walks the strip.
///
/// Implementations are free to return the same color every time or hold
/// internal state (an RNG, a palette cursor) across calls.
pub trait ColorSource {
    /// Returns the `0xRRGGBBAA` color to paint the next triangle with.
    fn next_color(&mut self) -> u32;
}

/// Paints every triangle the same fixed color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedColor(pub u32);

impl ColorSource for FixedColor {
    fn next_color(&mut self) -> u32 {
        self.0
    }
}

/// Reproduces the original's "random low byte, fixed high bytes" look
/// (`0xff000080 | (rand() & 0xff)`), but from a caller-owned, seedable RNG
/// rather than hidden global state.
#[derive(Clone, Debug)]
pub struct RandomColor {
    rng: SmallRng,
}

impl RandomColor {
    /// Builds a `RandomColor` seeded from the OS entropy source.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Builds a `RandomColor` with a fixed seed, for reproducible renders.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColor {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomColor {
    fn next_color(&mut self) -> u32 {
        let low: u8 = self.rng.gen();
        0xff000080 | (low as u32)
    }
}

/// Adapts any `FnMut() -> u32` closure into a [`ColorSource`].
impl<F: FnMut() -> u32> ColorSource for F {
    fn next_color(&mut self) -> u32 {
        self()
    }
}
