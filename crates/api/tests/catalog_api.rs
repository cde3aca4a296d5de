//! Integration tests for `GET /api/catalog/{category}`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: unfiltered listing wraps the result in a data envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lists_category_in_data_envelope() {
    let app = common::build_test_app();
    let response = get(app, "/api/catalog/cakes").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["data"]["carousel"]["title"], "Cakes Collection");
    assert_eq!(json["data"]["text"], "Here are some cakes!");
    assert_eq!(json["data"]["carousel"]["items"].as_array().unwrap().len(), 5);
}

// ---------------------------------------------------------------------------
// Test: style and location filters narrow venues
// ---------------------------------------------------------------------------

#[tokio::test]
async fn filters_venues_by_style_and_location() {
    let app = common::build_test_app();
    let response = get(app, "/api/catalog/Venues?style=modern&location=paris").await;

    let json = body_json(response).await;
    let items = json["data"]["carousel"]["items"].as_array().unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "French Modern Wedding");
    assert_eq!(json["data"]["text"], "Here are some modern venues in paris!");
}

// ---------------------------------------------------------------------------
// Test: cursor rotates the listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cursor_rotates_listing() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/catalog/dresses?cursor=1").await).await;

    assert_eq!(
        json["data"]["carousel"]["items"][0]["title"],
        "Modern Wedding Dress"
    );
}

// ---------------------------------------------------------------------------
// Test: unknown category is a 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_category_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/catalog/flowers").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: malformed query string is a JSON 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_cursor_returns_json_400() {
    let app = common::build_test_app();
    let response = get(app, "/api/catalog/venues?cursor=abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().is_some_and(|e| !e.is_empty()));
}
