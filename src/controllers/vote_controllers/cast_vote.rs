use axum::{extract::State, Json};

use crate::controllers::vote_controllers::models::{CastVoteRequest, CastVoteResponse};
use crate::state::AppState;
use crate::workflow::SubmitOutcome;

pub async fn cast_vote(
    State(state): State<AppState>,
    Json(payload): Json<CastVoteRequest>,
) -> Json<CastVoteResponse> {
    match state.workflow.submit(payload.product_id.as_deref()).await {
        SubmitOutcome::Ignored => Json(CastVoteResponse {
            status: "ignored".to_string(),
            message: None,
            clicks: None,
            results: None,
        }),
        SubmitOutcome::Completed {
            accepted,
            message,
            clicks,
            results,
        } => Json(CastVoteResponse {
            status: if accepted { "recorded" } else { "failed" }.to_string(),
            message: Some(message),
            clicks: Some(clicks),
            results: Some(results.into()),
        }),
    }
}
