mod common;

use axum::http::StatusCode;
use common::TestApp;
use mongodb::bson::{doc, oid::ObjectId};
use serde_json::json;

fn post(title: &str, slug: &str) -> serde_json::Value {
    json!({ "title": title, "slug": slug, "excerpt": "summary" })
}

#[tokio::test]
async fn create_post_defaults_to_published() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/api/posts", post("Hello", "hello")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_string());

    let stored = app.store().records("blogpost");
    assert_eq!(stored.len(), 1);
    assert!(stored[0].get_bool("published").unwrap());
}

#[tokio::test]
async fn list_posts_hides_drafts() {
    let app = TestApp::new();
    app.post_json("/api/posts", post("Live", "live")).await;
    let mut draft = post("Draft", "draft");
    draft["published"] = json!(false);
    let (status, _) = app.post_json("/api/posts", draft).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.get("/api/posts").await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["slug"], "live");
    assert_eq!(items[0]["published"], true);
    assert_eq!(app.store().records("blogpost").len(), 2);
}

#[tokio::test]
async fn limit_applies_after_published_filter() {
    let app = TestApp::new();
    app.store().seed(
        "blogpost",
        doc! { "_id": ObjectId::new(), "slug": "draft", "published": false },
    );
    for slug in ["a", "b", "c"] {
        app.store().seed(
            "blogpost",
            doc! { "_id": ObjectId::new(), "slug": slug, "published": true },
        );
    }

    let (_, body) = app.get("/api/posts?limit=2").await;

    let slugs: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["a", "b"]);
}

#[tokio::test]
async fn bad_cover_image_is_422() {
    let app = TestApp::new();
    let mut body = post("Hello", "hello");
    body["cover_image"] = json!("not-a-url");

    let (status, _) = app.post_json("/api/posts", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.store().records("blogpost").is_empty());
}

#[tokio::test]
async fn missing_slug_is_422() {
    let app = TestApp::new();

    let (status, _) = app
        .post_json("/api/posts", json!({ "title": "Hello", "excerpt": "e" }))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn non_integer_limit_is_422() {
    let app = TestApp::new();

    let (status, _) = app.get("/api/posts?limit=ten").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
