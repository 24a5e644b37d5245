pub mod content;
pub mod health;
pub mod leads;

use axum::http::Uri;
use axum::Router;

use crate::error::ApiError;
use crate::middleware;
use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(content::routes())
        .merge(leads::routes())
        .fallback(unknown_route)
        .with_state(state)
}

async fn unknown_route(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// Router plus the HTTP middleware stack.
pub fn build_app(state: AppState) -> Router {
    let config = state.config().clone();
    build_router(state)
        .layer(middleware::body_limit::body_limit_layer(config.max_body_bytes))
        .layer(middleware::request_tracing::trace_layer())
        .layer(middleware::cors::cors_layer(&config.allowed_origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::auth::tests::{test_config, test_state, token, SECRET};
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
        let body = body.to_string();
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, body.len())
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn ping_needs_no_database() {
        let app = build_app(test_state(None));
        let req = Request::get("/v1/ping").body(Body::empty()).unwrap();
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn unknown_route_gets_json_envelope() {
        let app = build_app(test_state(None));
        let req = Request::get("/api/pages").body(Body::empty()).unwrap();
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["type"], "notFound");
        assert_eq!(body["error"]["message"], "no route for /api/pages");
    }

    #[tokio::test]
    async fn content_replace_requires_operator_token() {
        let app = build_app(test_state(Some(SECRET)));
        let req = json_request(Method::PUT, "/api/content", &json!({ "hero": {} }));
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["type"], "unauthorized");
    }

    #[tokio::test]
    async fn leads_listing_rejects_foreign_token() {
        let app = build_app(test_state(Some(SECRET)));
        let req = Request::get("/api/leads")
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", token("not-the-secret", "authenticated", 600)),
            )
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn blank_lead_field_is_rejected_before_storage() {
        let app = build_app(test_state(None));
        let req = json_request(
            Method::POST,
            "/api/contact",
            &json!({ "name": "Ada", "company": "", "email": "ada@acme.io", "message": "Hi" }),
        );
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "company is required");
    }

    #[tokio::test]
    async fn lead_missing_a_field_is_a_client_error() {
        let app = build_app(test_state(None));
        let req = json_request(Method::POST, "/api/contact", &json!({ "name": "Ada" }));
        let resp = app.oneshot(req).await.unwrap();
        assert!(resp.status().is_client_error());
    }

    #[tokio::test]
    async fn oversized_body_is_refused() {
        let app = build_app(test_state(None));
        let big = json!({ "about": { "description": "x".repeat(4096) } });
        let resp = app
            .oneshot(json_request(Method::PUT, "/api/content", &big))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn cors_preflight_allows_site_origin() {
        let app = build_app(test_state(None));
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/content")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:5173")
        );
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "needs DATABASE_URL pointing at a Postgres server"]
    async fn fresh_store_serves_empty_object(pool: sqlx::PgPool) {
        let app = build_app(AppState::new(pool, test_config(None)));
        let req = Request::get("/api/content").body(Body::empty()).unwrap();
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
    }
}
