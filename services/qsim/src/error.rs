use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulatorError {
    #[error("Requested zero shots")]
    ZeroShots,

    #[error("State norm drifted to {norm} after gate {gate}")]
    NormalizationBroken { gate: &'static str, norm: f64 },
}

pub type Result<T> = std::result::Result<T, SimulatorError>;
