// SPDX-License-Identifier: Apache-2.0

use crate::store::{decode_records, empty_store_bytes, encode_records};
use crate::AppState;
use chrono::{DateTime, Utc};
use clinic_api::{
    validate_appointment, validate_contact, ApiError, AppointmentPayload, ContactPayload,
};
use clinic_model::{
    Appointment, Contact, RecentAppointment, RecentContact, RecordKind, Stats,
    APPOINTMENT_STATUS_PENDING, CONTACT_STATUS_UNREAD,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};

/// How many records each `recent*` stats slice carries.
pub const RECENT_LIMIT: usize = 5;

// Client-facing failure messages; I/O detail stays in the logs.
const MSG_READ_APPOINTMENTS: &str = "Failed to read appointments";
const MSG_CREATE_APPOINTMENT: &str = "Failed to create appointment";
const MSG_READ_CONTACTS: &str = "Failed to read contacts";
const MSG_CREATE_CONTACT: &str = "Failed to send message";
const MSG_STATS: &str = "Failed to get statistics";
const MSG_CLEAR: &str = "Failed to clear data";

/// Load a store, absorbing corruption: a document that fails to parse is
/// logged and treated as empty (lenient policy, see DESIGN.md). Genuine I/O
/// failures surface as persistence errors.
async fn load_lenient<T: DeserializeOwned>(
    state: &AppState,
    kind: RecordKind,
    failure_msg: &str,
) -> Result<Vec<T>, ApiError> {
    let bytes = state.store.load(kind).await.map_err(|e| {
        error!(kind = %kind, "store read failed: {e}");
        ApiError::persistence(failure_msg)
    })?;
    match decode_records(&bytes) {
        Ok(records) => Ok(records),
        Err(e) => {
            warn!(kind = %kind, "treating unparseable store as empty: {e}");
            Ok(Vec::new())
        }
    }
}

async fn persist_records<T: Serialize>(
    state: &AppState,
    kind: RecordKind,
    records: &[T],
    failure_msg: &str,
) -> Result<(), ApiError> {
    let bytes = encode_records(records).map_err(|e| {
        error!(kind = %kind, "store encode failed: {e}");
        ApiError::persistence(failure_msg)
    })?;
    state.store.persist(kind, bytes).await.map_err(|e| {
        error!(kind = %kind, "store write failed: {e}");
        ApiError::persistence(failure_msg)
    })
}

/// Next record id: the creation-time millisecond timestamp, nudged past the
/// last assigned id so ids stay strictly increasing even when two creations
/// share a millisecond.
fn next_record_id(last_id: Option<i64>, now_ms: i64) -> i64 {
    match last_id {
        Some(prev) => now_ms.max(prev + 1),
        None => now_ms,
    }
}

pub async fn list_appointments(state: &AppState) -> Result<Vec<Appointment>, ApiError> {
    load_lenient(state, RecordKind::Appointments, MSG_READ_APPOINTMENTS).await
}

pub async fn list_contacts(state: &AppState) -> Result<Vec<Contact>, ApiError> {
    load_lenient(state, RecordKind::Contacts, MSG_READ_CONTACTS).await
}

/// Validate, normalize, and append one appointment. The whole
/// read-modify-write cycle runs under the per-store write lock so a
/// concurrent creation cannot overwrite this one.
pub async fn create_appointment(
    state: &AppState,
    payload: &AppointmentPayload,
) -> Result<Appointment, ApiError> {
    let valid = validate_appointment(payload)?;
    let _guard = state.write_lock(RecordKind::Appointments).lock().await;
    let mut records: Vec<Appointment> =
        load_lenient(state, RecordKind::Appointments, MSG_CREATE_APPOINTMENT).await?;
    let now = Utc::now();
    let record = Appointment {
        id: next_record_id(records.last().map(|r| r.id), now.timestamp_millis()),
        timestamp: now,
        name: valid.name,
        email: valid.email,
        phone: valid.phone,
        doctor: valid.doctor,
        date: valid.date,
        time: valid.time,
        status: APPOINTMENT_STATUS_PENDING.to_string(),
    };
    records.push(record.clone());
    persist_records(
        state,
        RecordKind::Appointments,
        &records,
        MSG_CREATE_APPOINTMENT,
    )
    .await?;
    Ok(record)
}

pub async fn create_contact(
    state: &AppState,
    payload: &ContactPayload,
) -> Result<Contact, ApiError> {
    let valid = validate_contact(payload)?;
    let _guard = state.write_lock(RecordKind::Contacts).lock().await;
    let mut records: Vec<Contact> =
        load_lenient(state, RecordKind::Contacts, MSG_CREATE_CONTACT).await?;
    let now = Utc::now();
    let record = Contact {
        id: next_record_id(records.last().map(|r| r.id), now.timestamp_millis()),
        timestamp: now,
        name: valid.name,
        email: valid.email,
        message: valid.message,
        status: CONTACT_STATUS_UNREAD.to_string(),
    };
    records.push(record.clone());
    persist_records(state, RecordKind::Contacts, &records, MSG_CREATE_CONTACT).await?;
    Ok(record)
}

/// Most-recent-first: descending timestamp, descending id as the stable
/// tie-break, applied uniformly to both recent slices.
fn recent<'a, T, F>(records: &'a [T], key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> (DateTime<Utc>, i64),
{
    let mut ordered: Vec<&T> = records.iter().collect();
    ordered.sort_by(|a, b| {
        let (ts_a, id_a) = key(a);
        let (ts_b, id_b) = key(b);
        ts_b.cmp(&ts_a).then(id_b.cmp(&id_a))
    });
    ordered.truncate(RECENT_LIMIT);
    ordered
}

/// Read-only aggregation over both stores; never mutates either.
pub async fn compute_stats(state: &AppState) -> Result<Stats, ApiError> {
    let appointments: Vec<Appointment> =
        load_lenient(state, RecordKind::Appointments, MSG_STATS).await?;
    let contacts: Vec<Contact> = load_lenient(state, RecordKind::Contacts, MSG_STATS).await?;

    Ok(Stats {
        total_appointments: appointments.len(),
        total_contacts: contacts.len(),
        pending_appointments: appointments.iter().filter(|a| a.is_pending()).count(),
        unread_contacts: contacts.iter().filter(|c| c.is_unread()).count(),
        recent_appointments: recent(&appointments, |a| (a.timestamp, a.id))
            .into_iter()
            .map(RecentAppointment::from)
            .collect(),
        recent_contacts: recent(&contacts, |c| (c.timestamp, c.id))
            .into_iter()
            .map(RecentContact::from)
            .collect(),
        last_updated: Utc::now(),
    })
}

/// Reset both stores to empty. Takes both write locks in a fixed order so a
/// concurrent create cannot interleave between the two truncations.
pub async fn clear_all(state: &AppState) -> Result<(), ApiError> {
    let _appointments = state.write_lock(RecordKind::Appointments).lock().await;
    let _contacts = state.write_lock(RecordKind::Contacts).lock().await;
    for kind in [RecordKind::Appointments, RecordKind::Contacts] {
        state
            .store
            .persist(kind, empty_store_bytes())
            .await
            .map_err(|e| {
                error!(kind = %kind, "store clear failed: {e}");
                ApiError::persistence(MSG_CLEAR)
            })?;
    }
    Ok(())
}
