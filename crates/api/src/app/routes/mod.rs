use axum::{Router, routing::post};

pub mod allocations;
pub mod system;

/// Router for the allocation endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/allocations", post(allocations::allocate))
        .route("/allocations/plan", post(allocations::plan))
}
