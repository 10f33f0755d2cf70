use axum::{extract::State, Json};
use std::collections::BTreeMap;

use crate::models::vote_models::VoteRecord;
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Raw dump of the vote collection, keyed by the store-generated keys.
pub async fn list_votes(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, VoteRecord>>> {
    let votes = state.store.read_all_votes().await?;
    Ok(Json(votes))
}
