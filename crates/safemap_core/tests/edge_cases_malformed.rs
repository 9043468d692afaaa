//! Storage edge cases: whatever sits in the slot, loading keeps every usable
//! record, coerces odd values and never fails.

use safemap_core::demo::seed_incidents;
use safemap_core::domain::{GeoPoint, IncidentKind, NewIncident, Severity};
use safemap_core::error::AppError;
use safemap_core::ops::add_incident;
use safemap_core::store::{IncidentStore, MemorySlot, StorageSlot, INCIDENTS_STORAGE_KEY};
use time::macros::datetime;

fn store_with(raw: &str) -> IncidentStore<MemorySlot> {
    let mut slot = MemorySlot::new();
    slot.set_item(INCIDENTS_STORAGE_KEY, raw).unwrap();
    IncidentStore::new(slot)
}

struct BrokenSlot;

impl StorageSlot for BrokenSlot {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Err(AppError::storage_read(key, "device unavailable"))
    }

    fn set_item(&mut self, key: &str, _value: &str) -> Result<(), AppError> {
        Err(AppError::storage_write(key, "device unavailable"))
    }

    fn remove_item(&mut self, _key: &str) -> Result<(), AppError> {
        Ok(())
    }
}

#[test]
fn payloads_without_usable_records_load_as_empty() {
    for raw in [
        "",
        "not json",
        "{\"id\":1}",
        "[1,2,3]",
        "[{\"id\":\"one\",\"title\":\"x\",\"location\":{\"lat\":0,\"lng\":0}}]",
        "[{\"id\":1,\"title\":\"x\"}]",
    ] {
        assert!(store_with(raw).load().is_empty(), "expected empty for {raw:?}");
    }
}

const MIXED: &str = r#"[
  {"id":4,"type":"hazard","title":"Real user report","description":"cracked curb",
   "location":{"lat":47.66,"lng":-122.31},"timestamp":"2025-08-03T12:00:00.000Z",
   "severity":"low","verified":false},
  {"id":5,"type":3,"title":"Odd fields","description":null,
   "location":{"lat":47.66,"lng":-122.31},"severity":null,"verified":null},
  {"id":6,"type":"hazard","location":{"lat":47.66,"lng":-122.31}},
  {"id":"seven","title":"Bad id","location":{"lat":47.66,"lng":-122.31}}
]"#;

#[test]
fn one_bad_record_does_not_discard_the_rest() {
    let incidents = store_with(MIXED).load();
    let ids: Vec<i64> = incidents.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![4, 5]);

    assert_eq!(incidents[0].title, "Real user report");
    assert_eq!(incidents[1].kind, IncidentKind::Incident);
    assert_eq!(incidents[1].severity, Severity::Medium);
    assert_eq!(incidents[1].description, "");
    assert_eq!(incidents[1].timestamp, None);
}

#[test]
fn save_after_mixed_load_keeps_user_reports() {
    let mut store = store_with(MIXED);
    let loaded = store.load_or_seed();
    let updated = add_incident(
        &mut store,
        &loaded,
        NewIncident {
            kind: IncidentKind::Lighting,
            title: "Dark stairwell".to_string(),
            description: String::new(),
            location: GeoPoint::new(47.66, -122.31),
            severity: Severity::Medium,
        },
    );
    assert_eq!(updated.last().map(|i| i.id), Some(6));

    let reloaded = store.load();
    let titles: Vec<&str> = reloaded.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Real user report", "Odd fields", "Dark stairwell"]);
}

#[test]
fn malformed_payload_falls_back_to_seed() {
    assert_eq!(store_with("{broken").load_or_seed(), seed_incidents());
}

#[test]
fn unreadable_slot_loads_empty_and_save_does_not_panic() {
    let mut store = IncidentStore::new(BrokenSlot);
    assert!(store.load().is_empty());
    store.save(&seed_incidents());
    assert_eq!(store.try_save(&seed_incidents()).unwrap_err().code, "STORAGE_WRITE_FAILED");
}

#[test]
fn browser_style_records_are_normalized() {
    let raw = r#"[
      {"id":7,"type":"maintenance","title":"Bench","description":"loose bolts",
       "location":{"lat":47.65,"lng":-122.30},"timestamp":"2025-08-01T10:00:00.250Z",
       "severity":"high","verified":false},
      {"id":8,"type":"graffiti","title":"Tag","location":{"lat":47.65,"lng":-122.30},
       "timestamp":"2025-08-02T09:30:00","severity":"urgent"},
      {"id":9,"type":"hazard","title":"Ice","location":{"lat":47.65,"lng":-122.30},
       "timestamp":"yesterday"}
    ]"#;

    let incidents = store_with(raw).load();
    assert_eq!(incidents.len(), 3);

    assert_eq!(incidents[0].timestamp, Some(datetime!(2025-08-01 10:00:00.25 UTC)));
    assert_eq!(incidents[0].kind, IncidentKind::Maintenance);

    assert_eq!(incidents[1].kind, IncidentKind::Incident);
    assert_eq!(incidents[1].severity, Severity::Medium);
    assert_eq!(incidents[1].timestamp, Some(datetime!(2025-08-02 09:30:00 UTC)));
    assert!(!incidents[1].verified);

    assert_eq!(incidents[2].timestamp, None);
}
