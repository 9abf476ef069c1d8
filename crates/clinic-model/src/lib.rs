// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

pub mod record;
pub mod stats;

pub use record::{
    Appointment, Contact, RecordKind, APPOINTMENT_STATUS_PENDING, CONTACT_STATUS_UNREAD,
};
pub use stats::{RecentAppointment, RecentContact, Stats};
