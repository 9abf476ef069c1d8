// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

pub mod dto;
pub mod errors;
pub mod validate;

pub use dto::{AppointmentPayload, ContactPayload};
pub use errors::{api_error_status, ApiError, ApiErrorCode};
pub use validate::{validate_appointment, validate_contact, ValidAppointment, ValidContact};
