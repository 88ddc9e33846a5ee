pub mod circuit;
pub mod error;
pub mod gates;
pub mod seed;
pub mod simulator;
pub mod state;

pub use circuit::{Circuit, CircuitBuilder};
pub use error::SimulatorError;
pub use gates::Gate;
pub use seed::Seed;
pub use simulator::{Counts, Simulator};
pub use state::StateVector;
