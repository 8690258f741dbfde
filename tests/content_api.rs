//! Content API integration tests
//!
//! Ownership rules, stack resolution and snapshot behavior through the full
//! router.

#![cfg(feature = "ssr")]

#[macro_use]
mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use common::TestApp;

async fn only_item(app: &TestApp, cookie: &str) -> Value {
    let response = app.get("/content", Some(cookie)).await;
    assert_status!(response, StatusCode::OK);
    let items = response.json();
    assert_eq!(items.as_array().unwrap().len(), 1, "{}", items);
    items[0].clone()
}

#[tokio::test]
async fn test_full_scenario() {
    let app = TestApp::new().await;
    let alice = app.signed_in("alice").await;
    app.create_stack("go", "blue").await;

    let created = app.create_content(&alice, "blog", &["go"]).await;
    assert_status!(created, StatusCode::CREATED);
    assert_eq!(created.json(), json!({ "message": "Content created successfully" }));

    let item = only_item(&app, &alice).await;
    assert_eq!(item["name"], "blog");
    assert_eq!(item["imgUrl"], "https://example.com/cover.png");
    assert_eq!(item["stack"].as_array().unwrap().len(), 1);
    assert_eq!(item["stack"][0]["name"], "go");
    assert_eq!(item["stack"][0]["color"], "blue");

    let unresolved = app.create_content(&alice, "other", &["rust"]).await;
    assert_status!(unresolved, StatusCode::BAD_REQUEST);
    assert_contains!(unresolved.json()["error"].as_str().unwrap(), "rust");

    // nothing was written for the rejected request
    only_item(&app, &alice).await;
}

#[tokio::test]
async fn test_create_requires_session() {
    let app = TestApp::new().await;
    let response = app
        .post("/content", None, json!({ "name": "blog", "url": "u", "imgUrl": "i", "stack": [] }))
        .await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_owner_comes_from_session() {
    let app = TestApp::new().await;
    let alice = app.signed_in("alice").await;
    let impostor = Uuid::new_v4();

    let response = app
        .post(
            "/content",
            Some(&alice),
            json!({
                "name": "blog",
                "description": "",
                "url": "https://example.com",
                "imgUrl": "https://example.com/a.png",
                "stack": [],
                "user_id": impostor,
            }),
        )
        .await;
    assert_status!(response, StatusCode::CREATED);

    let item = only_item(&app, &alice).await;
    assert_ne!(item["user_id"], json!(impostor));
}

#[tokio::test]
async fn test_listings_are_scoped() {
    let app = TestApp::new().await;
    let alice = app.signed_in("alice").await;
    let bob = app.signed_in("bob").await;

    app.create_content(&alice, "alice post", &[]).await;
    app.create_content(&bob, "bob post", &[]).await;

    assert_eq!(only_item(&app, &alice).await["name"], "alice post");
    assert_eq!(only_item(&app, &bob).await["name"], "bob post");

    let everything = app.get("/contents", None).await;
    assert_status!(everything, StatusCode::OK);
    let names: Vec<String> = everything
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(names, vec!["alice post", "bob post"]);
}

#[tokio::test]
async fn test_update_own_content() {
    let app = TestApp::new().await;
    let alice = app.signed_in("alice").await;
    app.create_stack("go", "blue").await;
    app.create_stack("rust", "orange").await;
    app.create_content(&alice, "blog", &["go"]).await;
    let id = only_item(&app, &alice).await["id"].as_str().unwrap().to_owned();

    let response = app
        .put(
            &format!("/content/{}", id),
            Some(&alice),
            json!({
                "name": "renamed",
                "description": "new description",
                "url": "https://example.org",
                "imgUrl": "https://example.org/b.png",
                "stack": ["rust", "go"],
            }),
        )
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.text(), "Content updated successfully");

    let item = only_item(&app, &alice).await;
    assert_eq!(item["id"], json!(id));
    assert_eq!(item["name"], "renamed");
    assert_eq!(item["description"], "new description");
    assert_eq!(item["stack"][0]["name"], "rust");
    assert_eq!(item["stack"][1]["name"], "go");
}

#[tokio::test]
async fn test_other_user_cannot_touch_content() {
    let app = TestApp::new().await;
    let alice = app.signed_in("alice").await;
    let bob = app.signed_in("bob").await;
    app.create_content(&alice, "blog", &[]).await;
    let before = only_item(&app, &alice).await;
    let uri = format!("/content/{}", before["id"].as_str().unwrap());

    let edit = app
        .put(&uri, Some(&bob), json!({ "name": "mine", "url": "u", "imgUrl": "i", "stack": [] }))
        .await;
    assert_status!(edit, StatusCode::NOT_FOUND);

    let delete = app.delete(&uri, Some(&bob)).await;
    assert_status!(delete, StatusCode::NOT_FOUND);

    assert_eq!(only_item(&app, &alice).await, before);
}

#[tokio::test]
async fn test_foreign_edit_is_not_found_before_validation() {
    let app = TestApp::new().await;
    let alice = app.signed_in("alice").await;
    let bob = app.signed_in("bob").await;
    app.create_content(&alice, "blog", &[]).await;
    let before = only_item(&app, &alice).await;
    let uri = format!("/content/{}", before["id"].as_str().unwrap());

    let unknown_stack = app
        .put(&uri, Some(&bob), json!({ "name": "mine", "url": "u", "imgUrl": "i", "stack": ["zig"] }))
        .await;
    assert_status!(unknown_stack, StatusCode::NOT_FOUND);

    let empty_name = app
        .put(&uri, Some(&bob), json!({ "name": "", "url": "u", "imgUrl": "i", "stack": [] }))
        .await;
    assert_status!(empty_name, StatusCode::NOT_FOUND);

    assert_eq!(only_item(&app, &alice).await, before);
}

#[tokio::test]
async fn test_delete_own_content() {
    let app = TestApp::new().await;
    let alice = app.signed_in("alice").await;
    app.create_content(&alice, "blog", &[]).await;
    let uri = format!("/content/{}", only_item(&app, &alice).await["id"].as_str().unwrap());

    let response = app.delete(&uri, Some(&alice)).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.text(), "Content deleted successfully");

    let again = app.delete(&uri, Some(&alice)).await;
    assert_status!(again, StatusCode::NOT_FOUND);
    assert_eq!(app.get("/content", Some(&alice)).await.json(), json!([]));
}

#[tokio::test]
async fn test_bad_content_id() {
    let app = TestApp::new().await;
    let alice = app.signed_in("alice").await;

    let delete = app.delete("/content/not-a-uuid", Some(&alice)).await;
    assert_status!(delete, StatusCode::BAD_REQUEST);

    let edit = app
        .put("/content/not-a-uuid", Some(&alice), json!({ "name": "x", "url": "u", "imgUrl": "i" }))
        .await;
    assert_status!(edit, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_snapshots_outlive_stack_changes() {
    let app = TestApp::new().await;
    let alice = app.signed_in("alice").await;
    let go = app.create_stack("go", "blue").await;
    app.create_content(&alice, "blog", &["go"]).await;
    let stack_uri = format!("/stacks/{}", go["id"].as_str().unwrap());

    app.put(&stack_uri, None, json!({ "name": "golang", "color": "cyan" })).await;
    assert_eq!(only_item(&app, &alice).await["stack"][0], go);

    app.delete(&stack_uri, None).await;
    assert_eq!(only_item(&app, &alice).await["stack"][0], go);
}
