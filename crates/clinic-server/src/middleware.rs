// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::api_error_response;
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use clinic_api::ApiError;

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("GET,POST,DELETE,OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("content-type"),
    );
}

/// Allow-all CORS. Preflight never reaches the router: any OPTIONS request
/// is answered 200 with an empty body, matching the public contract.
pub(crate) async fn cors_middleware(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::OK.into_response();
        apply_cors_headers(resp.headers_mut());
        resp.headers_mut()
            .insert("content-type", HeaderValue::from_static("application/json"));
        return resp;
    }
    let mut resp = next.run(req).await;
    apply_cors_headers(resp.headers_mut());
    resp
}

/// Rewrites the router's bare 405 into the standard JSON failure envelope.
pub(crate) async fn method_not_allowed_middleware(req: Request, next: Next) -> Response {
    let resp = next.run(req).await;
    if resp.status() == StatusCode::METHOD_NOT_ALLOWED {
        let allow = resp.headers().get("allow").cloned();
        let mut rewritten = api_error_response(&ApiError::method_not_allowed());
        if let Some(allow) = allow {
            rewritten.headers_mut().insert("allow", allow);
        }
        return rewritten;
    }
    resp
}
