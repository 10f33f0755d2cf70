use axum::{routing::get, Router};

use crate::controllers::content_controllers::get_content;
use crate::state::AppState;

pub fn content_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_content::get_content))
        .with_state(state)
}
