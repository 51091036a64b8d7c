//! HTTP API application wiring (Axum router).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use axum::{Router, routing::get};

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::build_app;

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
        let res = build_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let res = build_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn allocations_returns_shipment_array() {
        let (status, body) = post_json(
            "/allocations",
            r#"{"order":{"apple":10},"warehouses":[
                {"name":"owd","inventory":{"apple":5}},
                {"name":"dm","inventory":{"apple":5}}]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{"owd": {"apple": 5}}, {"dm": {"apple": 5}}]));
    }

    #[tokio::test]
    async fn unsatisfiable_order_is_an_empty_array_not_an_error() {
        let (status, body) = post_json(
            "/allocations",
            r#"{"order":{"apple":100},"warehouses":[{"name":"owd","inventory":{"apple":5}}]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn plan_reports_rejection_reason() {
        let (status, body) =
            post_json("/allocations/plan", r#"{"order":{"apple":1},"warehouses":[]}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "rejected", "reason": "no_warehouses"}));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let (status, body) = post_json("/allocations", r#"{"order": "#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_json");
    }

    #[tokio::test]
    async fn negative_quantity_is_a_validation_error() {
        let (status, body) = post_json(
            "/allocations",
            r#"{"order":{"apple":-1},"warehouses":[{"name":"owd","inventory":{"apple":5}}]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }
}
