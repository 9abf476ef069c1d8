// SPDX-License-Identifier: Apache-2.0

use crate::dto::{AppointmentPayload, ContactPayload};
use crate::errors::ApiError;
use regex::Regex;
use std::sync::OnceLock;

/// `local@domain.tld`-shaped, nothing deeper. The pattern runs against the
/// raw submitted value, so surrounding whitespace fails the check rather
/// than being silently trimmed away.
fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// An appointment payload that passed validation, with storage
/// normalization applied: `name`/`phone` trimmed, `email` trimmed and
/// lowercased, `doctor`/`date`/`time` kept as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidAppointment {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
}

/// A contact payload that passed validation; `name`/`message` trimmed,
/// `email` trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Presence rule: the field must exist and be non-empty after trimming.
/// Returns the raw value; the first failing field short-circuits.
fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, ApiError> {
    match value.as_deref() {
        Some(raw) if !raw.trim().is_empty() => Ok(raw),
        _ => Err(ApiError::missing_field(field)),
    }
}

fn checked_email(raw: &str) -> Result<String, ApiError> {
    if !email_regex().is_match(raw) {
        return Err(ApiError::invalid_email());
    }
    Ok(raw.trim().to_lowercase())
}

// Presence of every required field is checked before the email format, so
// a payload with both defects reports the missing field.
pub fn validate_appointment(payload: &AppointmentPayload) -> Result<ValidAppointment, ApiError> {
    let name = required("name", &payload.name)?;
    let email = required("email", &payload.email)?;
    let phone = required("phone", &payload.phone)?;
    let doctor = required("doctor", &payload.doctor)?;
    let date = required("date", &payload.date)?;
    let time = required("time", &payload.time)?;
    let email = checked_email(email)?;
    Ok(ValidAppointment {
        name: name.trim().to_string(),
        email,
        phone: phone.trim().to_string(),
        doctor: doctor.to_string(),
        date: date.to_string(),
        time: time.to_string(),
    })
}

pub fn validate_contact(payload: &ContactPayload) -> Result<ValidContact, ApiError> {
    let name = required("name", &payload.name)?;
    let email = required("email", &payload.email)?;
    let message = required("message", &payload.message)?;
    let email = checked_email(email)?;
    Ok(ValidContact {
        name: name.trim().to_string(),
        email,
        message: message.trim().to_string(),
    })
}
