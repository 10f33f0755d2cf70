use axum::{extract::State, Json};

use crate::controllers::vote_controllers::models::ResultsResponse;
use crate::state::AppState;

/// Refresh-only path: re-read the collection and return the current tally. A
/// store failure becomes an error placeholder in the payload, not an HTTP
/// error.
pub async fn get_results(State(state): State<AppState>) -> Json<ResultsResponse> {
    Json(state.workflow.refresh().await.into())
}
