/// Common test utilities for integration tests
///
/// Provides a router over a store seeded with two known users and small
/// helpers to send GET requests and form posts through it.

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use roster_api::app::{build_router, AppState};
use roster_api::config::Config;
use roster_shared::models::user::{User, UserStore};
use tower::ServiceExt;

/// Test context containing the router and a handle on its state
pub struct TestContext {
    pub state: AppState,
    pub app: axum::Router,
}

/// Response pieces the tests assert on
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Value of the `Location` header, if any
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

impl TestContext {
    /// Creates a context seeded with Ivan (id 1) and Maria (id 2)
    pub fn new() -> Self {
        let store = UserStore::with_records(
            vec![
                User::new(1, "Ivan", "ivan@x.com"),
                User::new(2, "Maria", "maria@x.com"),
            ],
            3,
        );
        Self::with_store(store)
    }

    /// Creates a context around the given store
    pub fn with_store(store: UserStore) -> Self {
        let state = AppState::new(store, Config::default());
        let app = build_router(state.clone());
        Self { state, app }
    }

    /// Sends a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Sends a url-encoded form POST
    pub async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        self.post(uri, "application/x-www-form-urlencoded", form).await
    }

    /// Sends a POST with an arbitrary content type
    pub async fn post(&self, uri: &str, content_type: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Snapshot of the current store contents
    pub async fn users(&self) -> Vec<User> {
        self.state.users.read().await.list_all().to_vec()
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(body.to_vec()).unwrap(),
        }
    }
}
