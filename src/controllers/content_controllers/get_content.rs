use axum::{extract::State, Json};

use crate::controllers::content_controllers::models::ContentResponse;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::render;

pub async fn get_content(State(state): State<AppState>) -> AppResult<Json<ContentResponse>> {
    let body = state
        .fetcher
        .fetch_texts()
        .await
        .map_err(|e| AppError::FetchError(e.message))?;

    let html = render::render_cards(&body.data);
    let count = body.data.len().min(3);

    Ok(Json(ContentResponse { count, html }))
}
