use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::vote_controllers::{cast_vote, get_results, list_votes};
use crate::state::AppState;

pub fn vote_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            post(cast_vote::cast_vote).get(list_votes::list_votes),
        )
        .route("/results", get(get_results::get_results))
        .with_state(state)
}
