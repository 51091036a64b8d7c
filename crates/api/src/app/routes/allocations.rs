use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};

use crate::app::{dto, errors};

/// `POST /allocations`: the shipment list, or `[]` when nothing can ship.
pub async fn allocate(
    payload: Result<Json<dto::AllocationRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let shipments = fulfillment_allocation::allocate(&body.order, &body.warehouses);
    tracing::info!(
        items = body.order.len(),
        warehouses = body.warehouses.len(),
        shipments = shipments.len(),
        "allocation computed"
    );

    (StatusCode::OK, Json(shipments)).into_response()
}

/// `POST /allocations/plan`: fulfilled plan with residual stock, or the
/// rejection reason (including per-item shortfalls).
pub async fn plan(
    payload: Result<Json<dto::AllocationRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let outcome = fulfillment_allocation::plan(&body.order, &body.warehouses);
    tracing::info!(
        items = body.order.len(),
        warehouses = body.warehouses.len(),
        fulfilled = outcome.is_fulfilled(),
        "allocation plan computed"
    );

    (StatusCode::OK, Json(outcome)).into_response()
}
