use num_complex::Complex64;

use crate::gates::Gate;

/// Tolerance for float drift when checking the norm invariant.
const NORM_TOLERANCE: f64 = 1e-9;

/// Amplitudes of a single qubit in the computational basis.
///
/// Every shot starts from |0> and evolves by left-multiplying gate
/// unitaries; the squared norm stays 1 across any gate sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    amplitudes: [Complex64; 2],
}

impl StateVector {
    /// The |0> ground state.
    pub fn zero() -> Self {
        Self {
            amplitudes: [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        }
    }

    /// Apply a gate unitary to the state in place.
    pub fn apply(&mut self, gate: Gate) {
        let m = gate.matrix();
        let [a0, a1] = self.amplitudes;
        self.amplitudes = [
            m[0][0] * a0 + m[0][1] * a1,
            m[1][0] * a0 + m[1][1] * a1,
        ];
    }

    /// Probability of measuring 0 in the computational basis.
    pub fn prob_zero(&self) -> f64 {
        self.amplitudes[0].norm_sqr()
    }

    /// Total squared norm of the state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes[0].norm_sqr() + self.amplitudes[1].norm_sqr()
    }

    pub fn is_normalized(&self) -> bool {
        (self.norm_sqr() - 1.0).abs() < NORM_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_state_measures_zero() {
        let state = StateVector::zero();
        assert!((state.prob_zero() - 1.0).abs() < 1e-12);
        assert!(state.is_normalized());
    }

    #[test]
    fn test_hadamard_gives_equal_superposition() {
        let mut state = StateVector::zero();
        state.apply(Gate::Hadamard);
        assert!((state.prob_zero() - 0.5).abs() < 1e-12);
        assert!(state.is_normalized());
    }

    #[test]
    fn test_pauli_x_flips_the_qubit() {
        let mut state = StateVector::zero();
        state.apply(Gate::PauliX);
        assert!(state.prob_zero() < 1e-12);
    }

    #[test]
    fn test_norm_survives_gate_sequences() {
        let mut state = StateVector::zero();
        for gate in [
            Gate::Hadamard,
            Gate::PauliZ,
            Gate::Hadamard,
            Gate::PauliX,
            Gate::Hadamard,
        ] {
            state.apply(gate);
            assert!(state.is_normalized());
        }
    }

    #[test]
    fn test_h_z_h_equals_x() {
        // H Z H |0> = X |0> = |1>
        let mut state = StateVector::zero();
        state.apply(Gate::Hadamard);
        state.apply(Gate::PauliZ);
        state.apply(Gate::Hadamard);
        assert!(state.prob_zero() < 1e-12);
    }
}
