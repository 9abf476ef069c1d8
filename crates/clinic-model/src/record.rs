// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Initial status assigned to every appointment; no transition exists in
/// this service, so the value is terminal in practice.
pub const APPOINTMENT_STATUS_PENDING: &str = "pending";

/// Initial status assigned to every contact message. The canonical sentinel
/// is `unread`; see DESIGN.md for why the alternative `new` literal lost.
pub const CONTACT_STATUS_UNREAD: &str = "unread";

/// The two record kinds the service persists, one JSON-array file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Appointments,
    Contacts,
}

impl RecordKind {
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Appointments => "appointments.json",
            Self::Contacts => "contacts.json",
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Appointments => "appointments",
            Self::Contacts => "contacts",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A persisted appointment booking.
///
/// `id` is the creation-time millisecond timestamp, nudged forward under the
/// store's write lock so ids stay strictly increasing within a store even
/// when two creations land in the same millisecond. `timestamp` serializes
/// as an ISO-8601 string. `name`, `email`, and `phone` are stored trimmed
/// (email additionally lowercased); `doctor`, `date`, and `time` are stored
/// as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub status: String,
}

impl Appointment {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == APPOINTMENT_STATUS_PENDING
    }
}

/// A persisted contact-form message. Same id/timestamp scheme as
/// [`Appointment`]; `name` and `message` are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: String,
}

impl Contact {
    #[must_use]
    pub fn is_unread(&self) -> bool {
        self.status == CONTACT_STATUS_UNREAD
    }
}
