// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::{api_error_response, success_response};
use crate::services;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use clinic_api::{ApiError, AppointmentPayload, ContactPayload};
use serde_json::{json, Value};
use tracing::info;

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

fn as_data<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

pub(crate) async fn list_appointments_handler(State(state): State<AppState>) -> Response {
    info!(route = "/api/appointments", "list appointments");
    match services::list_appointments(&state).await {
        Ok(records) => success_response(StatusCode::OK, Some(as_data(&records)), None),
        Err(err) => api_error_response(&err),
    }
}

pub(crate) async fn create_appointment_handler(
    State(state): State<AppState>,
    payload: Result<Json<AppointmentPayload>, JsonRejection>,
) -> Response {
    info!(route = "/api/appointments", "create appointment");
    let Ok(Json(payload)) = payload else {
        return api_error_response(&ApiError::validation("Invalid JSON body"));
    };
    match services::create_appointment(&state, &payload).await {
        Ok(record) => {
            let message = format!("Appointment booked with {}!", record.doctor);
            success_response(StatusCode::CREATED, Some(as_data(&record)), Some(&message))
        }
        Err(err) => api_error_response(&err),
    }
}

pub(crate) async fn list_contacts_handler(State(state): State<AppState>) -> Response {
    info!(route = "/api/contacts", "list contacts");
    match services::list_contacts(&state).await {
        Ok(records) => success_response(StatusCode::OK, Some(as_data(&records)), None),
        Err(err) => api_error_response(&err),
    }
}

pub(crate) async fn create_contact_handler(
    State(state): State<AppState>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Response {
    info!(route = "/api/contacts", "create contact");
    let Ok(Json(payload)) = payload else {
        return api_error_response(&ApiError::validation("Invalid JSON body"));
    };
    match services::create_contact(&state, &payload).await {
        Ok(record) => success_response(
            StatusCode::CREATED,
            Some(as_data(&record)),
            Some("Message sent successfully!"),
        ),
        Err(err) => api_error_response(&err),
    }
}

pub(crate) async fn admin_stats_handler(State(state): State<AppState>) -> Response {
    info!(route = "/api/admin/stats", "compute stats");
    match services::compute_stats(&state).await {
        Ok(stats) => success_response(StatusCode::OK, Some(as_data(&stats)), None),
        Err(err) => api_error_response(&err),
    }
}

pub(crate) async fn admin_clear_handler(State(state): State<AppState>) -> Response {
    info!(route = "/api/admin/clear", "clear all stores");
    match services::clear_all(&state).await {
        Ok(()) => success_response(StatusCode::OK, None, Some("All data cleared")),
        Err(err) => api_error_response(&err),
    }
}
