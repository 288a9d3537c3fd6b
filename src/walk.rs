use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::geometry::{Position, ORIGIN};
use crate::path::Path;

/// Number of steps a walk takes unless told otherwise.
pub const NUM_STEPS: usize = 300_000;

/// Per-axis movement of a single step, each component in `{-1, 0, 1}`.
pub type Step = (i64, i64);

/// A 2D lattice walk of a fixed number of steps.
///
/// The walker starts at the origin and records its position after every
/// move. Nothing bounds it and nothing ends it early; it simply stops once
/// `steps` positions have been recorded.
pub struct Walk<R = XorShiftRng>
where
    R: Rng,
{
    position: Position,
    steps: usize,
    path: Path,
    rng: R,
}

impl Walk<XorShiftRng> {
    pub fn new(steps: usize, seed: u64) -> Self {
        debug!("Seeding walk of {} steps with {}", steps, seed);

        Self::with_rng(steps, XorShiftRng::seed_from_u64(seed))
    }
}

impl<R> Walk<R>
where
    R: Rng,
{
    pub fn with_rng(steps: usize, rng: R) -> Self {
        Self {
            position: ORIGIN,
            steps,
            path: Path::with_capacity(steps),
            rng,
        }
    }

    /// Draws one delta; x first, then y.
    pub fn random_step(rng: &mut R) -> Step {
        let dx = rng.gen_range(-1..=1);
        let dy = rng.gen_range(-1..=1);

        (dx, dy)
    }

    pub fn done(&self) -> bool {
        self.remaining() == 0
    }

    pub fn remaining(&self) -> usize {
        self.steps - self.path.len()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn step(&mut self) -> Option<Position> {
        if self.done() {
            return None;
        }

        let delta = Self::random_step(&mut self.rng);

        self.position = self.position.offset(delta);
        self.path.push(self.position);

        trace!("step {:?} -> {}", delta, self.position);

        Some(self.position)
    }

    pub fn run(&mut self) -> usize {
        let mut taken = 0;

        while self.step().is_some() {
            taken += 1;
        }

        taken
    }

    /// Runs up to `count` steps, returning how many were taken.
    pub fn step_batch(&mut self, count: usize) -> usize {
        let mut taken = 0;

        for _ in 0..count {
            if self.step().is_none() {
                break;
            }

            taken += 1;
        }

        taken
    }

    pub fn into_path(self) -> Path {
        self.path
    }
}
