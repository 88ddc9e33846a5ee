/// Common test utilities and fixtures for integration tests
use std::path::PathBuf;
use std::sync::Arc;

use axum_test::TestServer;
use backend::{
    build_router,
    config::Config,
    errors::Result,
    services::collapse::{CollapseBackend, CollapseOutcome},
    state::AppState,
};
use qsim::Seed;
use serde_json::Value;

pub fn test_config() -> Config {
    Config {
        api_port: 8080,
        metrics_port: 9090,
        static_dir: None,
    }
}

/// In-process server with the real statevector simulator.
pub fn test_server() -> TestServer {
    TestServer::new(build_router(AppState::new(test_config())))
        .expect("Failed to start test server")
}

/// In-process server serving a front-end asset tree.
pub fn static_server(static_dir: PathBuf) -> TestServer {
    let config = Config {
        static_dir: Some(static_dir),
        ..test_config()
    };
    TestServer::new(build_router(AppState::new(config))).expect("Failed to start test server")
}

/// In-process server whose simulator always fails.
pub fn failing_server() -> TestServer {
    let state = AppState::with_backend(test_config(), Arc::new(FailingBackend));
    TestServer::new(build_router(state)).expect("Failed to start test server")
}

struct FailingBackend;

impl CollapseBackend for FailingBackend {
    fn collapse(&self, _seed: Seed) -> Result<CollapseOutcome> {
        Err(anyhow::anyhow!("simulator offline").into())
    }
}

/// Helper function to parse the uniform error envelope
pub fn parse_envelope(body: &Value) -> (String, i64) {
    let error = body
        .get("error")
        .and_then(Value::as_str)
        .expect("No error in envelope")
        .to_string();
    let collapse_result = body
        .get("collapse_result")
        .and_then(Value::as_i64)
        .expect("No collapse_result in envelope");
    (error, collapse_result)
}
