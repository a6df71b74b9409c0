//! API Integration Tests
//!
//! Each test spawns the full router (middleware included) on a local port
//! over in-memory storage, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_user(server: &TestServer) -> User {
    let response = server.post("/users", &CreateUser::unique()).await.unwrap();
    let body: Envelope<User> = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.into_data()
}

async fn create_post(server: &TestServer, request: &CreatePost) -> Post {
    let response = server.post("/posts", request).await.unwrap();
    let body: Envelope<Post> = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.into_data()
}

async fn create_tag(server: &TestServer) -> Tag {
    let response = server.post("/tags", &CreateTag::unique()).await.unwrap();
    let body: Envelope<Tag> = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.into_data()
}

// ============================================================================
// Service Info
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_api_info_lists_endpoints() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["name"], "blog-server");
    assert!(body["endpoints"].as_array().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_request_id_header_is_echoed() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .client
        .get(format!("{}/health", server.base_url()))
        .header("x-request-id", "abc-123")
        .send()
        .await
        .unwrap();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "abc-123"
    );
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    let server = TestServer::start().await.unwrap();
    let request = CreateUser::unique();

    let response = server.post("/users", &request).await.unwrap();
    let body: Envelope<User> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.message.as_deref(), Some("User created successfully"));
    let user = body.into_data();
    assert_eq!(user.username, request.username);
    assert!(!user.is_admin);

    let response = server.get(&format!("/users/{}", user.id)).await.unwrap();
    let body: Envelope<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    let detail = body.into_data();
    assert_eq!(detail["email"], request.email);
    assert_eq!(detail["_count"]["posts"], 0);
    assert_eq!(detail["posts"], json!([]));
}

#[tokio::test]
async fn test_duplicate_email_or_username_conflicts() {
    let server = TestServer::start().await.unwrap();
    let first = CreateUser::unique();
    server.post("/users", &first).await.unwrap();

    let same_email = CreateUser {
        username: format!("{}x", first.username),
        ..first.clone()
    };
    let response = server.post("/users", &same_email).await.unwrap();
    let body: Envelope<Value> = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert!(!body.success);
    assert_eq!(body.error.as_deref(), Some("Email or username already exists"));

    let same_username = CreateUser {
        email: format!("other.{}", first.email),
        ..first
    };
    let response = server.post("/users", &same_username).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_invalid_user_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/users", &json!({ "email": "not-an-email", "username": "ab" }))
        .await
        .unwrap();
    let body: Envelope<Value> = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.as_deref(), Some("Validation failed"));
}

#[tokio::test]
async fn test_unknown_and_malformed_user_ids() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .get(&format!("/users/{}", uuid::Uuid::new_v4()))
        .await
        .unwrap();
    let body: Envelope<Value> = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.as_deref(), Some("User not found"));
    assert!(body.data.is_none());

    let response = server.get("/users/42").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Posts
// ============================================================================

#[tokio::test]
async fn test_published_post_gets_timestamp_and_draft_does_not() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;

    let draft = create_post(&server, &CreatePost::unique(&author.id)).await;
    assert_eq!(draft.status, "DRAFT");
    assert!(draft.published_at.is_none());

    let published = create_post(&server, &CreatePost::unique(&author.id).published()).await;
    assert_eq!(published.status, "PUBLISHED");
    assert!(published.published_at.is_some());
}

#[tokio::test]
async fn test_client_cannot_backdate_publication() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;

    let response = server
        .post(
            "/posts",
            &json!({
                "title": "Backdated",
                "slug": "backdated",
                "authorId": author.id,
                "status": "PUBLISHED",
                "publishedAt": "1999-01-01T00:00:00Z",
            }),
        )
        .await
        .unwrap();
    let body: Envelope<Post> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let published_at = body.into_data().published_at.unwrap();
    assert!(!published_at.starts_with("1999"));
}

#[tokio::test]
async fn test_each_read_counts_one_view() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;
    let post = create_post(&server, &CreatePost::unique(&author.id)).await;
    assert_eq!(post.view_count, 0);

    for expected in 1..=3 {
        let response = server.get(&format!("/posts/{}", post.id)).await.unwrap();
        let body: Envelope<Value> = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body.into_data()["viewCount"], expected);
    }
}

#[tokio::test]
async fn test_like_and_status_change() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;
    let post = create_post(&server, &CreatePost::unique(&author.id)).await;

    let response = server.post_empty(&format!("/posts/{}/like", post.id)).await.unwrap();
    let body: Envelope<Post> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.into_data().like_count, 1);

    let response = server
        .patch(&format!("/posts/{}/status", post.id), &json!({ "status": "PUBLISHED" }))
        .await
        .unwrap();
    let body: Envelope<Post> = assert_json(response, StatusCode::OK).await.unwrap();
    let updated = body.into_data();
    assert_eq!(updated.status, "PUBLISHED");
    assert!(updated.published_at.is_some());

    let response = server
        .patch(&format!("/posts/{}/status", post.id), &json!({ "status": "HIDDEN" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_slug_conflicts() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;
    let request = CreatePost::unique(&author.id);
    create_post(&server, &request).await;

    let response = server.post("/posts", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_post_listing_includes_author_tags_and_count() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;
    let post = create_post(&server, &CreatePost::unique(&author.id)).await;
    let tag = create_tag(&server).await;
    server
        .put(&format!("/posts/{}/tags/{}", post.id, tag.id))
        .await
        .unwrap();

    let response = server.get("/posts").await.unwrap();
    let body: Envelope<Vec<Value>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.count, Some(1));
    let listing = body.into_data();
    assert_eq!(listing[0]["author"]["username"], author.username);
    assert_eq!(listing[0]["tags"][0]["slug"], tag.slug);
    assert_eq!(listing[0]["_count"]["comments"], 0);
}

// ============================================================================
// Tags
// ============================================================================

#[tokio::test]
async fn test_linking_twice_is_a_no_op() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;
    let post = create_post(&server, &CreatePost::unique(&author.id)).await;
    let tag = create_tag(&server).await;
    let path = format!("/posts/{}/tags/{}", post.id, tag.id);

    let response = server.put(&path).await.unwrap();
    let first: Envelope<LinkResult> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(first.into_data().changed);

    let response = server.put(&path).await.unwrap();
    let second: Envelope<LinkResult> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!second.into_data().changed);

    let response = server.get(&format!("/posts/{}", post.id)).await.unwrap();
    let body: Envelope<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.into_data()["tags"].as_array().map(Vec::len), Some(1));

    let response = server.delete(&path).await.unwrap();
    let removed: Envelope<LinkResult> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(removed.into_data().changed);
}

#[tokio::test]
async fn test_link_unknown_tag_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;
    let post = create_post(&server, &CreatePost::unique(&author.id)).await;

    let response = server
        .put(&format!("/posts/{}/tags/{}", post.id, uuid::Uuid::new_v4()))
        .await
        .unwrap();
    let body: Envelope<Value> = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.as_deref(), Some("Tag not found"));
}

#[tokio::test]
async fn test_bad_tag_color_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/tags", &json!({ "name": "Go", "slug": "go", "color": "blue" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_reply_is_nested_under_parent() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;
    let post = create_post(&server, &CreatePost::unique(&author.id)).await;
    let comments_path = format!("/posts/{}/comments", post.id);

    let response = server
        .post(
            &comments_path,
            &CreateComment {
                content: "First!".to_string(),
                author_id: author.id.clone(),
                parent_id: None,
            },
        )
        .await
        .unwrap();
    let parent: Envelope<Value> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let parent_id = parent.into_data()["id"].as_str().unwrap().to_string();

    let response = server
        .post(
            &comments_path,
            &CreateComment {
                content: "Reply".to_string(),
                author_id: author.id.clone(),
                parent_id: Some(parent_id.clone()),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&comments_path).await.unwrap();
    let body: Envelope<Vec<Value>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.count, Some(1));
    let thread = body.into_data();
    assert_eq!(thread[0]["id"], parent_id.as_str());
    assert_eq!(thread[0]["replies"][0]["content"], "Reply");
    assert_eq!(thread[0]["author"]["username"], author.username);
}

#[tokio::test]
async fn test_comment_on_unknown_post_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let author = create_user(&server).await;

    let response = server
        .post(
            &format!("/posts/{}/comments", uuid::Uuid::new_v4()),
            &CreateComment {
                content: "Hello".to_string(),
                author_id: author.id,
                parent_id: None,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Seeded Store
// ============================================================================

#[tokio::test]
async fn test_seeded_stats() {
    let server = TestServer::start_seeded().await.unwrap();
    let response = server.get("/stats").await.unwrap();
    let body: Envelope<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    let stats = body.into_data();
    assert_eq!(stats["users"], 3);
    assert_eq!(stats["posts"], 4);
    assert_eq!(stats["publishedPosts"], 3);
    assert_eq!(stats["comments"], 5);
    assert_eq!(stats["tags"], 5);
}

#[tokio::test]
async fn test_seeded_tags_are_ordered_by_name() {
    let server = TestServer::start_seeded().await.unwrap();
    let response = server.get("/tags").await.unwrap();
    let body: Envelope<Vec<Value>> = assert_json(response, StatusCode::OK).await.unwrap();
    let names: Vec<&str> = body
        .data
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    assert_eq!(
        names,
        vec!["JavaScript", "Node.js", "React", "Technology", "Tutorial"]
    );

    let response = server.get("/tags/technology").await.unwrap();
    let body: Envelope<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.into_data()["color"], "#3B82F6");
}
