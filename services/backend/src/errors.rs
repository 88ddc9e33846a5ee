use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Everything the move handler can fail with.
///
/// The transport contract is uniform: every variant renders as a 500
/// envelope carrying the message text and a defaulted `collapse_result`
/// of 0, so clients always read the same shape.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Simulation failed: {0}")]
    Simulation(#[from] qsim::SimulatorError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected malformed request");
            }
            AppError::Simulation(e) => {
                tracing::error!(error = %e, "Simulator failure");
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
            }
        }
        metrics::counter!("collapse_errors_total").increment(1);

        let body = Json(json!({
            "error": self.to_string(),
            "collapse_result": 0,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
