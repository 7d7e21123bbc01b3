//! Read API behavior over an in-memory store.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use lending_pool_indexer::db::memory::InMemoryRepository;
use lending_pool_indexer::db::models::{PositionClosed, PositionCreated, Repaid};
use lending_pool_indexer::db::Repositories;
use lending_pool_indexer::mappings::{handle_position_created, handle_repaid};
use lending_pool_indexer::router::create_router;
use lending_pool_indexer::testing::{
    create_position_created_event, create_repaid_event, MockEventDefaults,
};
use primitive_types::{H160, U256};
use serde_json::{json, Value};
use tower::ServiceExt;

struct Seeded {
    app: axum::Router,
    repaid_id: String,
}

fn seeded_router() -> Seeded {
    let created = Arc::new(InMemoryRepository::<PositionCreated>::new());
    let repaid = Arc::new(InMemoryRepository::<Repaid>::new());
    let user = H160::from_low_u64_be(2);

    let later = MockEventDefaults::default().with_block(20, 200).with_log_index(4);
    let earlier = MockEventDefaults::default().with_block(10, 100).with_log_index(3);
    let entity = handle_repaid(&create_repaid_event(user, U256::from(500), &later), repaid.as_ref())
        .expect("seed repaid");
    handle_repaid(&create_repaid_event(user, U256::from(100), &earlier), repaid.as_ref())
        .expect("seed repaid");
    handle_position_created(
        &create_position_created_event(user, U256::from(1234), &earlier),
        created.as_ref(),
    )
    .expect("seed position created");

    let repos = Repositories {
        position_closed: Arc::new(InMemoryRepository::<PositionClosed>::new()),
        position_created: created,
        repaid,
    };
    Seeded {
        app: create_router(repos),
        repaid_id: entity.id,
    }
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn returns_entity_by_id() {
    let seeded = seeded_router();

    let (status, body) = get(seeded.app, &format!("/v0/repaid/{}", seeded.repaid_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(seeded.repaid_id));
    assert_eq!(body["user"], json!("0x0000000000000000000000000000000000000002"));
    assert_eq!(body["amount"], json!("500"));
    assert_eq!(body["blockNumber"], json!("20"));
}

#[tokio::test]
async fn id_lookup_is_case_insensitive() {
    let seeded = seeded_router();
    let upper = seeded.repaid_id.to_uppercase().replacen("0X", "0x", 1);

    let (status, _) = get(seeded.app, &format!("/v0/repaid/{}", upper)).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_entity_is_not_found() {
    let seeded = seeded_router();

    let (status, _) = get(seeded.app, "/v0/position-closed/0xdeadbeef").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lists_user_repayments_oldest_first() {
    let seeded = seeded_router();

    let (status, body) = get(
        seeded.app,
        "/v0/users/0x0000000000000000000000000000000000000002/repaid",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let amounts: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|r| r["amount"].as_str().unwrap())
        .collect();
    assert_eq!(amounts, vec!["100", "500"]);
}

#[tokio::test]
async fn user_listing_normalizes_address_case() {
    let seeded = seeded_router();

    let (status, body) = get(
        seeded.app,
        "/v0/users/0000000000000000000000000000000000000002/position-created",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["timestamp"], json!("1234"));
}

#[tokio::test]
async fn invalid_user_address_is_bad_request() {
    let seeded = seeded_router();

    let (status, _) = get(seeded.app, "/v0/users/not-an-address/repaid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
