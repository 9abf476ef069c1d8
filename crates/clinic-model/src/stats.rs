// SPDX-License-Identifier: Apache-2.0

use crate::record::{Appointment, Contact};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Admin dashboard aggregate. Counts plus the five most recent records of
/// each kind, projected down to the fields the panel displays. Wire keys are
/// camelCase to match the browser-side consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_appointments: usize,
    pub total_contacts: usize,
    pub pending_appointments: usize,
    pub unread_contacts: usize,
    pub recent_appointments: Vec<RecentAppointment>,
    pub recent_contacts: Vec<RecentContact>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentAppointment {
    pub name: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
}

impl From<&Appointment> for RecentAppointment {
    fn from(record: &Appointment) -> Self {
        Self {
            name: record.name.clone(),
            doctor: record.doctor.clone(),
            date: record.date.clone(),
            time: record.time.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentContact {
    pub name: String,
    pub email: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&Contact> for RecentContact {
    fn from(record: &Contact) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            timestamp: record.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_wire_keys_are_camel_case() {
        let stats = Stats {
            total_appointments: 2,
            total_contacts: 1,
            pending_appointments: 2,
            unread_contacts: 1,
            recent_appointments: Vec::new(),
            recent_contacts: Vec::new(),
            last_updated: Utc::now(),
        };
        let json = serde_json::to_value(&stats).expect("serialize stats");
        for key in [
            "totalAppointments",
            "totalContacts",
            "pendingAppointments",
            "unreadContacts",
            "recentAppointments",
            "recentContacts",
            "lastUpdated",
        ] {
            assert!(json.get(key).is_some(), "missing stats key {key}");
        }
    }
}
