use qsim::{Circuit, Seed, Simulator};

use crate::errors::Result;

/// The endpoint always asks the simulator for exactly one measurement.
const SHOTS_PER_MOVE: u32 = 1;

/// One measured classical bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseOutcome {
    Zero,
    One,
}

impl CollapseOutcome {
    pub fn bit(&self) -> u8 {
        match self {
            CollapseOutcome::Zero => 0,
            CollapseOutcome::One => 1,
        }
    }
}

/// Seam for the quantum simulator collaborator, so tests can swap in a
/// failing backend.
pub trait CollapseBackend: Send + Sync {
    fn collapse(&self, seed: Seed) -> Result<CollapseOutcome>;
}

/// Statevector-simulator implementation of the coin flip.
#[derive(Debug, Default)]
pub struct StatevectorBackend;

impl CollapseBackend for StatevectorBackend {
    fn collapse(&self, seed: Seed) -> Result<CollapseOutcome> {
        let circuit = Circuit::coin_flip();
        let simulator = Simulator::with_seed(seed.rng_word());
        let counts = simulator.run(&circuit, SHOTS_PER_MOVE)?;

        // Hardware-style counts: whichever bit-string occurred carries the
        // single shot.
        let outcome = if counts.contains("0") {
            CollapseOutcome::Zero
        } else {
            CollapseOutcome::One
        };

        Ok(outcome)
    }
}
