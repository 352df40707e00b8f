use crate::error::ServerResult;
use crate::middleware::RequestId;
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use matcher::MatchResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Search request
///
/// Missing fields are treated as empty strings, which the matcher rejects.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KmpRequest {
    /// Text to search in
    #[serde(default)]
    pub text: String,

    /// Pattern to search for
    #[serde(default)]
    pub pattern: String,
}

/// Run a traced KMP search (POST /kmp)
///
/// Responds with the full [`MatchResult`]. Empty text or pattern yields
/// `400 Bad Request` with the same body shape and only `error` populated.
pub async fn run_search(
    State(state): State<Arc<ServerState>>,
    RequestId(request_id): RequestId,
    payload: Result<Json<KmpRequest>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<MatchResult>)> {
    let Json(request) = payload?;
    state.check_input_limits(&request.text, &request.pattern)?;

    let result = matcher::search(&request.text, &request.pattern);

    let status = match result.error {
        Some(err) => {
            tracing::info!(request_id = %request_id, error = %err, "kmp search rejected");
            StatusCode::BAD_REQUEST
        }
        None => {
            tracing::info!(
                request_id = %request_id,
                text_len = request.text.len(),
                pattern_len = request.pattern.len(),
                matches = result.positions.len(),
                comparisons = result.comparisons,
                steps = result.steps.len(),
                "kmp search completed"
            );
            StatusCode::OK
        }
    };

    Ok((status, Json(result)))
}
