//! Router assembly.
//!
//! The returned router expects a `SessionManagerLayer` to be applied on top
//! of it; the route guard extracts the session on every request.

use crate::handlers::auth::{logout, session_info};
use crate::handlers::health::health_check;
use crate::middleware::guard::route_guard;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

pub fn router(static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Session management
        .route("/api/auth/session", get(session_info))
        .route("/api/auth/logout", post(logout))
        // Pages and assets
        .fallback_service(ServeDir::new(static_dir))
        .layer(axum_middleware::from_fn(route_guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SESSION_USER_KEY;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use time::{Duration, OffsetDateTime};
    use tower::ServiceExt;
    use tower_sessions::{
        session::{Id, Record},
        MemoryStore, SessionManagerLayer, SessionStore,
    };

    const MISSING_DIR: &str = "does-not-exist";

    fn app(store: MemoryStore) -> Router {
        router(MISSING_DIR).layer(SessionManagerLayer::new(store))
    }

    /// Stores a session the way the auth provider does after sign-in and
    /// returns the matching cookie.
    async fn signed_in_cookie(store: &MemoryStore) -> String {
        let mut record = Record {
            id: Id::default(),
            data: HashMap::from([(SESSION_USER_KEY.to_string(), json!("user-7"))]),
            expiry_date: OffsetDateTime::now_utc() + Duration::hours(1),
        };
        store.create(&mut record).await.unwrap();
        format!("id={}", record.id)
    }

    fn request(method: &str, path: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_public() {
        let response = app(MemoryStore::default())
            .oneshot(request("GET", "/health", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn session_info_when_signed_out() {
        let response = app(MemoryStore::default())
            .oneshot(request("GET", "/api/auth/session", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "authenticated": false }));
    }

    #[tokio::test]
    async fn session_info_when_signed_in() {
        let store = MemoryStore::default();
        let cookie = signed_in_cookie(&store).await;

        let response = app(store)
            .oneshot(request("GET", "/api/auth/session", Some(&cookie)))
            .await
            .unwrap();

        assert_eq!(
            json_body(response).await,
            json!({ "authenticated": true, "user_id": "user-7" })
        );
    }

    #[tokio::test]
    async fn signed_out_chat_page_redirects() {
        let response = app(MemoryStore::default())
            .oneshot(request("GET", "/chat/abc", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn signed_in_chat_page_reaches_the_fallback() {
        let store = MemoryStore::default();
        let cookie = signed_in_cookie(&store).await;

        let response = app(store)
            .oneshot(request("GET", "/chat/abc", Some(&cookie)))
            .await
            .unwrap();

        // Nothing on disk; getting past the guard is what matters.
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn signed_in_register_page_redirects_home() {
        let store = MemoryStore::default();
        let cookie = signed_in_cookie(&store).await;

        let response = app(store)
            .oneshot(request("GET", "/register", Some(&cookie)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn logout_ends_the_session() {
        let store = MemoryStore::default();
        let cookie = signed_in_cookie(&store).await;
        let app = app(store);

        let response = app
            .clone()
            .oneshot(request("POST", "/api/auth/logout", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["success"], true);

        let response = app
            .oneshot(request("GET", "/chat", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }
}
