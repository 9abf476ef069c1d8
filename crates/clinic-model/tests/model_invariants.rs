// SPDX-License-Identifier: Apache-2.0

use chrono::{TimeZone, Utc};
use clinic_model::{Contact, RecordKind, CONTACT_STATUS_UNREAD};

#[test]
fn contact_store_encoding_is_a_json_array_with_stable_keys() {
    let contact = Contact {
        id: 1_735_689_600_001,
        timestamp: Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap(),
        name: "Jo".to_string(),
        email: "jo@x.co".to_string(),
        message: "Hello there".to_string(),
        status: CONTACT_STATUS_UNREAD.to_string(),
    };

    let encoded = serde_json::to_string_pretty(&vec![contact.clone()]).expect("encode store");
    assert!(encoded.starts_with('['), "store must be a JSON array");
    assert!(encoded.contains("  \"id\""), "2-space indent expected");

    let decoded: Vec<Contact> = serde_json::from_str(&encoded).expect("decode store");
    assert_eq!(decoded, vec![contact]);
}

#[test]
fn store_reads_tolerate_records_with_extra_fields() {
    // Hand-edited store files may carry fields this version does not know;
    // a read must not reject them.
    let raw = r#"[{
      "id": 5,
      "timestamp": "2025-01-01T10:00:00Z",
      "name": "Jo",
      "email": "jo@x.co",
      "message": "Hello there",
      "status": "unread",
      "note": "added by hand"
    }]"#;
    let decoded: Vec<Contact> = serde_json::from_str(raw).expect("lenient decode");
    assert_eq!(decoded[0].id, 5);
}

#[test]
fn record_kind_tags_are_distinct() {
    assert_ne!(
        RecordKind::Appointments.tag(),
        RecordKind::Contacts.tag(),
        "kinds must not share a store"
    );
}
