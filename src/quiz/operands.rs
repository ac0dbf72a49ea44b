//! Sources of the random second operand.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest second operand a question can have.
pub const MAX_OPERAND: u32 = 12;

/// Supplies the second operand of each generated question.
///
/// Implementations should return values in `0..=MAX_OPERAND`, drawn
/// uniformly. The session clamps anything larger.
pub trait OperandSource: Send {
    fn next_operand(&mut self) -> u32;
}

impl<F> OperandSource for F
where
    F: FnMut() -> u32 + Send,
{
    fn next_operand(&mut self) -> u32 {
        self()
    }
}

/// Uniform operands from a [`StdRng`].
pub struct RandomOperands {
    rng: StdRng,
}

impl RandomOperands {
    /// Seeded from the operating system; sequences are not reproducible.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOperands {
    fn default() -> Self {
        Self::new()
    }
}

impl OperandSource for RandomOperands {
    fn next_operand(&mut self) -> u32 {
        self.rng.random_range(0..=MAX_OPERAND)
    }
}
