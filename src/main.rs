use axum::{
    http::{HeaderValue, Method},
    response::Json,
    routing::get,
    Router,
};
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use voting_backend::{routes, state, store, utils};

static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

const DEFAULT_FAKER_URL: &str = "https://fakerapi.it/api/v2/texts?_quantity=3&_characters=120";

#[tokio::main]
async fn main() {
    dotenv().ok();

    let vote_store = store::init_store();

    let faker_url = std::env::var("FAKER_API_URL").unwrap_or_else(|_| {
        eprintln!("FAKER_API_URL not set, using default faker endpoint");
        DEFAULT_FAKER_URL.to_string()
    });
    let fetcher = Arc::new(utils::fetcher::TextFetcher::new(faker_url));

    let app_state = state::AppState::new(vote_store, fetcher);

    let cors_origin = std::env::var("CORS_ORIGIN").unwrap_or_else(|_| {
        eprintln!("CORS_ORIGIN environment variable not set");
        std::process::exit(1);
    });

    let origin = cors_origin.parse::<HeaderValue>().unwrap_or_else(|_| {
        eprintln!("Failed to parse CORS origin: {}", cors_origin);
        std::process::exit(1);
    });

    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            axum::http::header::USER_AGENT,
        ]);

    let app = Router::new()
        .route("/", get(root))
        .nest(
            "/api/votes",
            routes::vote_routes::vote_routes(app_state.clone()),
        )
        .nest(
            "/api/content",
            routes::content_routes::content_routes(app_state.clone()),
        )
        .layer(cors);

    let server_addr = std::env::var("SERVER_ADDR").unwrap_or_else(|_| {
        eprintln!("SERVER_ADDR environment variable not set, using default 0.0.0.0:8000");
        "0.0.0.0:8000".to_string()
    });

    let addr: SocketAddr = server_addr.parse().unwrap_or_else(|_| {
        eprintln!("Failed to parse SERVER_ADDR: {}", server_addr);
        std::process::exit(1);
    });

    println!("Server running at http://{}", addr);
    println!("CORS origin: {}", cors_origin);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn root() -> Json<serde_json::Value> {
    let elapsed = START_TIME.elapsed();
    let seconds = elapsed.as_secs();
    let minutes = seconds / 60;
    let hours = minutes / 60;

    let uptime_message = if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    };

    Json(json!({
        "status": "ok",
        "message": format!("Voting backend is running! Uptime: {}", uptime_message)
    }))
}
