use qsim::Seed;
use serde::{Deserialize, Serialize};

/// Board cells echoed back when the client omits them.
const DEFAULT_CELL1: i64 = 0;
const DEFAULT_CELL2: i64 = 1;

/// Body of a POST /quantum-move request.
///
/// Everything is optional: the seed falls back to 42, the cells to their
/// documented defaults; `move` is opaque metadata echoed back untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveRequest {
    #[serde(rename = "move")]
    pub player_move: Option<String>,
    pub cell1: Option<i64>,
    pub cell2: Option<i64>,
    pub seed: Option<Seed>,
}

impl MoveRequest {
    pub fn seed(&self) -> Seed {
        self.seed.unwrap_or_default()
    }

    pub fn cell1(&self) -> i64 {
        self.cell1.unwrap_or(DEFAULT_CELL1)
    }

    pub fn cell2(&self) -> i64 {
        self.cell2.unwrap_or(DEFAULT_CELL2)
    }
}

/// Successful collapse payload: the measured bit plus echoed move metadata.
#[derive(Debug, Clone, Serialize)]
pub struct CollapseResponse {
    pub collapse_result: u8,
    #[serde(rename = "move", skip_serializing_if = "Option::is_none")]
    pub player_move: Option<String>,
    pub cell1: i64,
    pub cell2: i64,
}
