use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::circuit::Circuit;
use crate::error::{Result, SimulatorError};
use crate::state::StateVector;

/// Frequency table of measured bit-strings, keyed the way hardware-style
/// backends report counts ("0" / "1").
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Counts {
    table: HashMap<String, u64>,
}

impl Counts {
    fn record(&mut self, bit: u8) {
        let key = if bit == 0 { "0" } else { "1" };
        *self.table.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Count for a bit-string, 0 when it never occurred.
    pub fn get(&self, outcome: &str) -> u64 {
        self.table.get(outcome).copied().unwrap_or(0)
    }

    /// Whether the bit-string occurred at least once.
    pub fn contains(&self, outcome: &str) -> bool {
        self.table.contains_key(outcome)
    }

    /// Total shots recorded.
    pub fn total(&self) -> u64 {
        self.table.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.table.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Deterministic single-qubit shot simulator.
///
/// The measurement stream is drawn from an `StdRng` seeded with the
/// caller's seed, so identical (seed, circuit, shots) runs reproduce
/// identical counts on a given crate version.
#[derive(Debug, Clone)]
pub struct Simulator {
    seed: u64,
}

impl Simulator {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Execute the circuit for the requested number of shots.
    ///
    /// Each shot evolves a fresh |0> state through the gate list, then
    /// samples the terminal measurement against the seeded RNG.
    pub fn run(&self, circuit: &Circuit, shots: u32) -> Result<Counts> {
        if shots == 0 {
            return Err(SimulatorError::ZeroShots);
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut counts = Counts::default();

        for _ in 0..shots {
            let mut state = StateVector::zero();
            for &gate in circuit.gates() {
                state.apply(gate);
                if !state.is_normalized() {
                    return Err(SimulatorError::NormalizationBroken {
                        gate: gate.name(),
                        norm: state.norm_sqr(),
                    });
                }
            }

            let bit = if rng.gen::<f64>() < state.prob_zero() { 0 } else { 1 };
            counts.record(bit);
        }

        Ok(counts)
    }
}
