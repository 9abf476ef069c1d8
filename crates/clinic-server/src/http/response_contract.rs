// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use clinic_api::{api_error_status, ApiError};
use serde_json::{json, Value};

/// Success envelope: `{"success": true}` plus optional `data` and `message`.
#[must_use]
pub(crate) fn success_response(
    status: StatusCode,
    data: Option<Value>,
    message: Option<&str>,
) -> Response {
    let mut body = json!({"success": true});
    if let Some(data) = data {
        body["data"] = data;
    }
    if let Some(message) = message {
        body["message"] = json!(message);
    }
    (status, Json(body)).into_response()
}

/// Failure envelope: `{"success": false, "error": "<message>"}`, status from
/// the shared error→status mapping.
#[must_use]
pub(crate) fn api_error_response(err: &ApiError) -> Response {
    let status = StatusCode::from_u16(api_error_status(err.code))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({"success": false, "error": err.message}))).into_response()
}
