//! End-to-end relay tests: webhook router wired to mocked upstream services
//! Run with: cargo test --test relay_test

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use reelpost::infrastructure::adapters::webhook;
use reelpost::infrastructure::config::Config;
use reelpost::infrastructure::wiring;
use tower::ServiceExt;
use wiremock::{
    matchers::{body_partial_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const TOKEN: &str = "7000000001:AAtesttoken";
const ADMIN: i64 = 6504720757;
const COMMAND: &str = "Movie: Inception\nCategory: Sci-Fi\nLink: http://example.com/file.zip";
const POST_URL: &str = "https://myblog.blogspot.com/2024/01/movie-inception.html";

fn config(server: &MockServer) -> Config {
    let uri = server.uri();
    let mut config = Config::default();
    config.endpoints.telegram = uri.clone();
    config.endpoints.omdb = format!("{}/omdb", uri);
    config.endpoints.shrink = format!("{}/shrink", uri);
    config.endpoints.oauth_token = format!("{}/oauth/token", uri);
    config.endpoints.blogger = format!("{}/blogger/v3", uri);

    let creds = &mut config.credentials;
    creds.telegram_token = TOKEN.to_string();
    creds.omdb_api_key = "omdb-key".to_string();
    creds.shrink_api_token = "shrink-token".to_string();
    creds.blogger_client_id = "cid".to_string();
    creds.blogger_client_secret = "csecret".to_string();
    creds.blogger_refresh_token = "refresh".to_string();
    creds.blog_id = "555".to_string();
    creds.admin_id = Some(ADMIN);
    config
}

fn app(server: &MockServer) -> Router {
    let config = config(server);
    config.validate().expect("test config is complete");
    webhook::router(wiring::app_state(&config).expect("admin id is set"))
}

fn update(chat_id: i64, text: &str) -> Request<Body> {
    let body = serde_json::json!({
        "update_id": 100,
        "message": {
            "message_id": 1,
            "chat": {"id": chat_id, "type": "private"},
            "from": {"id": chat_id, "is_bot": false, "first_name": "Admin"},
            "text": text
        }
    });
    Request::builder()
        .method(Method::POST)
        .uri(format!("/{}", TOKEN))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn mount_telegram(server: &MockServer, chat_id: i64, text: &str) {
    Mock::given(method("POST"))
        .and(path(format!("/bot{}/sendMessage", TOKEN)))
        .and(body_partial_json(serde_json::json!({"chat_id": chat_id, "text": text})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_omdb_found(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/omdb/"))
        .and(query_param("t", "Inception"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Title": "Inception",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Plot": "A thief who steals corporate secrets through dream-sharing technology.",
            "Poster": "https://m.media-amazon.com/images/inception.jpg",
            "imdbRating": "8.8",
            "Response": "True"
        })))
        .mount(server)
        .await;
}

async fn mount_shrink_ok(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/shrink/api"))
        .and(query_param("url", "http://example.com/file.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_string("https://shrinke.me/Xy12"))
        .mount(server)
        .await;
}

async fn mount_oauth_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "ya29.fresh"})),
        )
        .mount(server)
        .await;
}

async fn mount_blogger_ok(server: &MockServer, times: u64) {
    Mock::given(method("POST"))
        .and(path("/blogger/v3/blogs/555/posts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"url": POST_URL})))
        .expect(times)
        .mount(server)
        .await;
}

async fn blogger_bodies(server: &MockServer) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path().starts_with("/blogger/"))
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}

#[tokio::test]
async fn admin_command_publishes_article() {
    let server = MockServer::start().await;
    mount_omdb_found(&server).await;
    mount_shrink_ok(&server).await;
    mount_oauth_ok(&server).await;
    mount_blogger_ok(&server, 1).await;
    mount_telegram(&server, ADMIN, &format!("✅ Posted Successfully!\n🔗 {}", POST_URL)).await;

    let response = app(&server).oneshot(update(ADMIN, COMMAND)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");

    let posts = blogger_bodies(&server).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "Movie: Inception");
    assert_eq!(posts[0]["labels"], serde_json::json!(["Sci-Fi"]));
    let content = posts[0]["content"].as_str().unwrap();
    for needle in [
        "Inception",
        "https://m.media-amazon.com/images/inception.jpg",
        "A thief who steals corporate secrets through dream-sharing technology.",
        "8.8",
        "Action, Adventure, Sci-Fi",
        "Christopher Nolan",
        "https://shrinke.me/Xy12",
        "<strong>Category:</strong> Sci-Fi",
        "<strong>Remark:</strong> Posted via Telegram",
    ] {
        assert!(content.contains(needle), "article missing {}", needle);
    }
}

#[tokio::test]
async fn stranger_is_denied_without_upstream_calls() {
    let server = MockServer::start().await;
    mount_telegram(&server, 12345, "❌ You are not authorized to use this bot.").await;

    let response = app(&server).oneshot(update(12345, COMMAND)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "");

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn malformed_command_gets_usage_hint() {
    let server = MockServer::start().await;
    mount_telegram(
        &server,
        ADMIN,
        "⚠️ Invalid format. Please send like:\nMovie: Name\nCategory: Type\nLink: http://example.com",
    )
    .await;

    let response = app(&server).oneshot(update(ADMIN, "Inception please")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(server.received_requests().await.unwrap_or_default().len(), 1);
}

#[tokio::test]
async fn unknown_movie_stops_before_shrink() {
    let server = MockServer::start().await;
    Mock::given(path("/omdb/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"Response": "False", "Error": "Movie not found!"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(path("/shrink/api")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;
    mount_blogger_ok(&server, 0).await;
    mount_telegram(&server, ADMIN, "❌ Movie not found in OMDb: Zzyzx Road 3").await;

    let text = "Movie: Zzyzx Road 3\nCategory: Drama\nLink: http://example.com/file.zip";
    let response = app(&server).oneshot(update(ADMIN, text)).await.unwrap();
    assert_eq!(body_text(response).await, "");
}

#[tokio::test]
async fn schemeless_link_fails_without_shrink_call() {
    let server = MockServer::start().await;
    mount_omdb_found(&server).await;
    Mock::given(path("/shrink/api")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;
    mount_telegram(&server, ADMIN, "❌ Failed to shorten the link.").await;

    let text = "Movie: Inception\nCategory: Sci-Fi\nLink: example.com/file.zip";
    app(&server).oneshot(update(ADMIN, text)).await.unwrap();
}

#[tokio::test]
async fn oauth_failure_skips_blogger() {
    let server = MockServer::start().await;
    mount_omdb_found(&server).await;
    mount_shrink_ok(&server).await;
    Mock::given(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({"error": "invalid_grant"})))
        .mount(&server)
        .await;
    mount_blogger_ok(&server, 0).await;
    mount_telegram(&server, ADMIN, "❌ Failed to post to Blogger.").await;

    let response = app(&server).oneshot(update(ADMIN, COMMAND)).await.unwrap();
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn blogger_rejection_reports_failure() {
    let server = MockServer::start().await;
    mount_omdb_found(&server).await;
    mount_shrink_ok(&server).await;
    mount_oauth_ok(&server).await;
    Mock::given(path("/blogger/v3/blogs/555/posts/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backendError"))
        .expect(1)
        .mount(&server)
        .await;
    mount_telegram(&server, ADMIN, "❌ Failed to post to Blogger.").await;

    app(&server).oneshot(update(ADMIN, COMMAND)).await.unwrap();
}

#[tokio::test]
async fn resubmitted_command_publishes_twice() {
    let server = MockServer::start().await;
    mount_omdb_found(&server).await;
    mount_shrink_ok(&server).await;
    mount_oauth_ok(&server).await;
    mount_blogger_ok(&server, 2).await;
    Mock::given(path(format!("/bot{}/sendMessage", TOKEN)))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let app = app(&server);
    app.clone().oneshot(update(ADMIN, COMMAND)).await.unwrap();
    app.oneshot(update(ADMIN, COMMAND)).await.unwrap();

    let posts = blogger_bodies(&server).await;
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0], posts[1]);
}

#[tokio::test]
async fn telegram_outage_does_not_change_response() {
    let server = MockServer::start().await;
    mount_omdb_found(&server).await;
    mount_shrink_ok(&server).await;
    mount_oauth_ok(&server).await;
    mount_blogger_ok(&server, 1).await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{}/sendMessage", TOKEN)))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(&server).oneshot(update(ADMIN, COMMAND)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
    assert_eq!(blogger_bodies(&server).await.len(), 1);
}
