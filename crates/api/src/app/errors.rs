use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

/// Map a JSON extractor rejection to a consistent error body.
///
/// Syntax errors are the client's transport problem (400); well-formed JSON
/// that fails domain validation (blank names, duplicate items, negative
/// quantities) is 422.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    match rejection {
        JsonRejection::JsonDataError(e) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", e.body_text())
        }
        JsonRejection::JsonSyntaxError(e) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_json", e.body_text())
        }
        JsonRejection::MissingJsonContentType(e) => json_error(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "unsupported_media_type",
            e.body_text(),
        ),
        other => json_error(StatusCode::BAD_REQUEST, "bad_request", other.body_text()),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
