use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// Single-qubit gates supported by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Equal-superposition transform
    Hadamard,
    /// Bit flip
    PauliX,
    /// Phase flip
    PauliZ,
}

impl Gate {
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Hadamard => "H",
            Gate::PauliX => "X",
            Gate::PauliZ => "Z",
        }
    }

    /// The gate's 2x2 unitary in the computational basis, row major.
    pub fn matrix(&self) -> [[Complex64; 2]; 2] {
        let re = |x: f64| Complex64::new(x, 0.0);
        match self {
            Gate::Hadamard => [
                [re(FRAC_1_SQRT_2), re(FRAC_1_SQRT_2)],
                [re(FRAC_1_SQRT_2), re(-FRAC_1_SQRT_2)],
            ],
            Gate::PauliX => [[re(0.0), re(1.0)], [re(1.0), re(0.0)]],
            Gate::PauliZ => [[re(1.0), re(0.0)], [re(0.0), re(-1.0)]],
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// M * M-dagger must be the identity for every gate.
    fn assert_unitary(gate: Gate) {
        let m = gate.matrix();
        for row in 0..2 {
            for col in 0..2 {
                let mut sum = Complex64::new(0.0, 0.0);
                for k in 0..2 {
                    sum += m[row][k] * m[col][k].conj();
                }
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!(
                    (sum - Complex64::new(expected, 0.0)).norm() < 1e-12,
                    "{} is not unitary at ({}, {})",
                    gate,
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_all_gates_are_unitary() {
        for gate in [Gate::Hadamard, Gate::PauliX, Gate::PauliZ] {
            assert_unitary(gate);
        }
    }

    #[test]
    fn test_gate_names() {
        assert_eq!(Gate::Hadamard.to_string(), "H");
        assert_eq!(Gate::PauliX.to_string(), "X");
        assert_eq!(Gate::PauliZ.to_string(), "Z");
    }

    #[test]
    fn test_hadamard_is_self_inverse() {
        let m = Gate::Hadamard.matrix();
        // H * H = I
        for row in 0..2 {
            for col in 0..2 {
                let mut sum = Complex64::new(0.0, 0.0);
                for k in 0..2 {
                    sum += m[row][k] * m[k][col];
                }
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!((sum - Complex64::new(expected, 0.0)).norm() < 1e-12);
            }
        }
    }
}
