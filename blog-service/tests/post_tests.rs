mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_create_post_success() {
    let app = TestApp::spawn().await;

    let (token, user_id) = app.register("nicola", "password123").await;

    let response = app
        .post_authenticated("/posts", &token)
        .json(&json!({
            "title": "Test Post Title",
            "content": "This is a test post content."
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Test Post Title");
    assert_eq!(body["content"], "This is a test post content.");
    assert_eq!(body["authorId"], user_id.as_str());
    assert!(body["id"].is_string());
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());

    // The created post is immediately fetchable
    let post_id = body["id"].as_str().expect("Missing id");
    let fetched = app
        .get_authenticated(&format!("/posts/{}", post_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(fetched.status(), StatusCode::OK);

    let fetched_body: serde_json::Value = fetched.json().await.expect("Failed to parse response");
    assert_eq!(fetched_body, body);
}

#[tokio::test]
async fn test_create_post_requires_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/posts")
        .json(&json!({
            "title": "Unauthorized Post",
            "content": "This should fail"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Unauthorized");
}

#[tokio::test]
async fn test_create_post_rejects_unknown_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post_authenticated("/posts", "bogus-token")
        .json(&json!({
            "title": "Title",
            "content": "Content"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_rejects_empty_title() {
    let app = TestApp::spawn().await;

    let (token, _) = app.register("nicola", "password123").await;

    let response = app
        .post_authenticated("/posts", &token)
        .json(&json!({
            "title": "",
            "content": "Test content"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let errors = body["errors"].as_array().expect("Missing errors array");
    assert_eq!(errors[0]["field"], "title");
    assert_eq!(
        errors[0]["message"],
        "String must contain at least 1 character(s)"
    );
}

#[tokio::test]
async fn test_create_post_missing_fields() {
    let app = TestApp::spawn().await;

    let (token, _) = app.register("nicola", "password123").await;

    let response = app
        .post_authenticated("/posts", &token)
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let errors = body["errors"].as_array().expect("Missing errors array");
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e["message"] == "Required"));
}

#[tokio::test]
async fn test_get_post_rejects_malformed_id_as_not_found() {
    let app = TestApp::spawn().await;

    let (token, _) = app.register("nicola", "password123").await;

    let response = app
        .get_authenticated("/posts/nonexistentId", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Post not found");
}

#[tokio::test]
async fn test_get_post_not_found() {
    let app = TestApp::spawn().await;

    let (token, _) = app.register("nicola", "password123").await;

    let response = app
        .get_authenticated(&format!("/posts/{}", Uuid::new_v4()), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Post not found");
}

#[tokio::test]
async fn test_list_posts() {
    let app = TestApp::spawn().await;

    let (token, _) = app.register("nicola", "password123").await;

    for title in ["First post", "Second post"] {
        let response = app
            .post_authenticated("/posts", &token)
            .json(&json!({
                "title": title,
                "content": "content"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .get_authenticated("/posts", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let posts = body.as_array().expect("Expected array body");
    assert_eq!(posts.len(), 2);

    let titles: Vec<&str> = posts
        .iter()
        .map(|p| p["title"].as_str().expect("Missing title"))
        .collect();
    assert!(titles.contains(&"First post"));
    assert!(titles.contains(&"Second post"));
}

#[tokio::test]
async fn test_update_post() {
    let app = TestApp::spawn().await;

    let (token, _) = app.register("nicola", "password123").await;

    let created: serde_json::Value = app
        .post_authenticated("/posts", &token)
        .json(&json!({
            "title": "Original title",
            "content": "Original content"
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    let post_id = created["id"].as_str().expect("Missing id");

    let response = app
        .put_authenticated(&format!("/posts/{}", post_id), &token)
        .json(&json!({
            "title": "Updated title",
            "content": "Updated content"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Updated title");
    assert_eq!(body["content"], "Updated content");

    let fetched: serde_json::Value = app
        .get_authenticated(&format!("/posts/{}", post_id), &token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(fetched["title"], "Updated title");
    assert_eq!(fetched["content"], "Updated content");
}

#[tokio::test]
async fn test_update_post_not_found() {
    let app = TestApp::spawn().await;

    let (token, _) = app.register("nicola", "password123").await;

    let response = app
        .put_authenticated(&format!("/posts/{}", Uuid::new_v4()), &token)
        .json(&json!({
            "title": "Title",
            "content": "Content"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Post not found");
}

#[tokio::test]
async fn test_delete_post() {
    let app = TestApp::spawn().await;

    let (token, _) = app.register("nicola", "password123").await;

    let created: serde_json::Value = app
        .post_authenticated("/posts", &token)
        .json(&json!({
            "title": "Doomed post",
            "content": "About to go"
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    let post_id = created["id"].as_str().expect("Missing id");

    let response = app
        .delete_authenticated(&format!("/posts/{}", post_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Post deleted");

    // The post is gone afterwards
    let fetched = app
        .get_authenticated(&format!("/posts/{}", post_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_post_not_found() {
    let app = TestApp::spawn().await;

    let (token, _) = app.register("nicola", "password123").await;

    let response = app
        .delete_authenticated(&format!("/posts/{}", Uuid::new_v4()), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Post not found");
}

#[tokio::test]
async fn test_list_posts_requires_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/posts")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Unauthorized");
}
