use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{controller::path::IdPath, error::AppError, state::AppState};


/// Renders a handler result the way axum would and splits it into status and JSON body.
async fn into_parts(result: Result<impl IntoResponse, AppError>) -> (StatusCode, Value) {
    let response: Response = match result {
        Ok(ok) => ok.into_response(),
        Err(err) => err.into_response(),
    };
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
