use axum::{extract::State, Json};

use crate::{
    domain::{CollapseResponse, MoveRequest},
    errors::Result,
    extractors::CollapseJson,
    state::AppState,
};

/// POST /quantum-move: run the seeded coin-flip circuit and echo the move.
pub async fn quantum_move(
    State(state): State<AppState>,
    CollapseJson(req): CollapseJson<MoveRequest>,
) -> Result<Json<CollapseResponse>> {
    let seed = req.seed();
    let span = tracing::info_span!(
        "quantum_move",
        %seed,
        cell1 = req.cell1(),
        cell2 = req.cell2(),
    );
    let _enter = span.enter();

    let outcome = state.collapse.collapse(seed)?;

    tracing::info!(collapse_result = outcome.bit(), "Collapse computed");
    metrics::counter!("quantum_moves_total").increment(1);

    let cell1 = req.cell1();
    let cell2 = req.cell2();
    Ok(Json(CollapseResponse {
        collapse_result: outcome.bit(),
        player_move: req.player_move,
        cell1,
        cell2,
    }))
}
