//! End-to-end tests of the voting routes against the in-memory store.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use voting_backend::routes::vote_routes::vote_routes;
use voting_backend::state::AppState;
use voting_backend::store::memory::MemoryVoteStore;
use voting_backend::utils::fetcher::TextFetcher;

fn test_app() -> (Router, Arc<MemoryVoteStore>) {
    let store = Arc::new(MemoryVoteStore::new());
    let fetcher = Arc::new(TextFetcher::new("http://127.0.0.1:9/unreachable".to_string()));
    let state = AppState::new(store.clone(), fetcher);
    let app = Router::new().nest("/api/votes", vote_routes(state));
    (app, store)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn vote_request(product_id: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/votes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "productID": product_id }).to_string(),
        ))
        .unwrap()
}

fn results_request() -> Request<Body> {
    Request::builder()
        .uri("/api/votes/results")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn casting_a_vote_returns_a_refreshed_tally() {
    let (app, _store) = test_app();

    let (status, body) = send(&app, vote_request(json!("product2"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "recorded");
    assert_eq!(body["message"], "Vote recorded successfully!");
    assert_eq!(body["clicks"], 1);

    let results = &body["results"];
    assert_eq!(results["total"], 1);
    let product2 = results["options"]
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["id"] == "product2")
        .unwrap();
    assert_eq!(product2["count"], 1);
    assert_eq!(product2["percentage"].as_f64().unwrap(), 100.0);
}

#[tokio::test]
async fn missing_selection_is_ignored() {
    let (app, store) = test_app();

    let (status, body) = send(&app, vote_request(Value::Null)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ignored");
    assert!(body.get("clicks").is_none());
    assert!(store.is_empty());
}

#[tokio::test]
async fn empty_collection_yields_all_zero_results() {
    let (app, _store) = test_app();

    let (status, body) = send(&app, results_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    let options = body["options"].as_array().unwrap();
    assert_eq!(options.len(), 3);
    for option in options {
        assert_eq!(option["count"], 0);
        assert_eq!(option["percentage"].as_f64().unwrap(), 0.0);
    }
}

#[tokio::test]
async fn percentages_round_to_one_decimal_across_the_api() {
    let (app, _store) = test_app();

    send(&app, vote_request(json!("product1"))).await;
    send(&app, vote_request(json!("product2"))).await;
    send(&app, vote_request(json!("product2"))).await;

    let (_, body) = send(&app, results_request()).await;

    let percentages: Vec<f64> = body["options"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["percentage"].as_f64().unwrap())
        .collect();

    assert_eq!(percentages, vec![33.3, 66.7, 0.0]);
}

#[tokio::test]
async fn failed_append_reports_the_error_but_still_refreshes() {
    let (app, store) = test_app();
    send(&app, vote_request(json!("product1"))).await;

    store.set_fail_appends(true);
    let (status, body) = send(&app, vote_request(json!("product2"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "failed");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Error recording the vote"));
    // The counter moved even though the append failed.
    assert_eq!(body["clicks"], 2);
    // The refresh still ran and reflects the untouched collection.
    assert_eq!(body["results"]["total"], 1);
}

#[tokio::test]
async fn failed_read_becomes_an_inline_error_not_an_http_error() {
    let (app, store) = test_app();
    store.set_fail_reads(true);

    let (status, body) = send(&app, results_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Error fetching the votes"));
    assert!(body["html"].as_str().unwrap().contains("results-error"));
}

#[tokio::test]
async fn raw_vote_dump_lists_records_by_generated_key() {
    let (app, _store) = test_app();
    send(&app, vote_request(json!("product3"))).await;
    send(&app, vote_request(json!("product3"))).await;

    let (status, body) = send(
        &app,
        Request::builder()
            .uri("/api/votes")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_object().unwrap();
    assert_eq!(records.len(), 2);
    for record in records.values() {
        assert_eq!(record["productID"], "product3");
        assert!(record["date"].as_str().unwrap().contains('T'));
    }
}

#[tokio::test]
async fn unrecognized_options_are_accepted_but_never_tallied() {
    let (app, store) = test_app();

    let (_, body) = send(&app, vote_request(json!("productX"))).await;

    assert_eq!(body["status"], "recorded");
    assert_eq!(body["results"]["total"], 0);
    assert_eq!(store.len(), 1);
}
