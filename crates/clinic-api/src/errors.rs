// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ApiErrorCode {
    /// Client-caused: a payload failed a validation rule. Maps to 400.
    ValidationFailed,
    /// Reading or writing a store failed. Maps to 500; the message never
    /// leaks I/O detail to the client.
    PersistenceFailed,
    /// Unsupported verb on a known route. Maps to 405.
    MethodNotAllowed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The message echoes the first failing rule verbatim; clients display it.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::ValidationFailed, message)
    }

    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::validation(format!("{field} is required"))
    }

    #[must_use]
    pub fn invalid_email() -> Self {
        Self::validation("Invalid email format")
    }

    #[must_use]
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::PersistenceFailed, message)
    }

    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::new(ApiErrorCode::MethodNotAllowed, "Method not allowed")
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// HTTP status for an error code, kept in one place so the transport
/// adapters cannot drift.
#[must_use]
pub fn api_error_status(code: ApiErrorCode) -> u16 {
    match code {
        ApiErrorCode::ValidationFailed => 400,
        ApiErrorCode::PersistenceFailed => 500,
        ApiErrorCode::MethodNotAllowed => 405,
    }
}
