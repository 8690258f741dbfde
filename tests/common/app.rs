//! In-process test server
//!
//! Requests go straight into the router with `tower::ServiceExt::oneshot`;
//! nothing binds a port. Each `TestApp` owns its own in-memory database.

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use cms_server::backend::auth::sessions::{SigningSecret, TokenService};
use cms_server::backend::routes::create_router;
use cms_server::backend::server::{AppState, Database};

/// Cheapest cost bcrypt accepts
pub const TEST_BCRYPT_COST: u32 = 4;

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    router: Router,
    pub db: Database,
}

/// A fully buffered response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({}): {}", e, self.text()))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The raw `Set-Cookie` header for a cookie name
    pub fn set_cookie(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with(&format!("{}=", name)))
            .map(str::to_owned)
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let db = Database::in_memory().await.expect("in-memory database");
        let tokens = TokenService::new(&SigningSecret::new(TEST_SECRET));
        let router = create_router(AppState::new(db.clone(), tokens, TEST_BCRYPT_COST));
        Self { router, db }
    }

    /// Send a request; `cookie` is the full `Cookie` header value
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).expect("request")).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body");

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, cookie, None).await
    }

    pub async fn post(&self, uri: &str, cookie: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, uri, cookie, Some(body)).await
    }

    pub async fn put(&self, uri: &str, cookie: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, cookie, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, cookie, None).await
    }

    pub async fn register(&self, username: &str, password: &str) -> TestResponse {
        self.post(
            "/register",
            None,
            serde_json::json!({
                "username": username,
                "email": format!("{}@example.com", username),
                "password": password,
            }),
        )
        .await
    }

    /// Log in and return a `Cookie` header value carrying the session
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post(
                "/login",
                None,
                serde_json::json!({ "username": username, "password": password }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.text());

        let set_cookie = response.set_cookie("token").expect("token cookie");
        set_cookie
            .split(';')
            .next()
            .expect("cookie pair")
            .trim()
            .to_string()
    }

    /// Register and log in a fresh user
    pub async fn signed_in(&self, username: &str) -> String {
        let response = self.register(username, "pw123").await;
        assert_eq!(response.status, StatusCode::OK, "register failed: {}", response.text());
        self.login(username, "pw123").await
    }

    pub async fn create_stack(&self, name: &str, color: &str) -> Value {
        let response = self
            .post("/stacks", None, serde_json::json!({ "name": name, "color": color }))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text());
        response.json()
    }

    pub async fn create_content(&self, cookie: &str, name: &str, stack: &[&str]) -> TestResponse {
        self.post(
            "/content",
            Some(cookie),
            serde_json::json!({
                "name": name,
                "description": format!("{} description", name),
                "url": "https://example.com",
                "imgUrl": "https://example.com/cover.png",
                "stack": stack,
            }),
        )
        .await
    }
}
