use pretty_assertions::assert_eq;
use tempfile::tempdir;
use time::macros::datetime;

use safemap_core::demo::seed_incidents;
use safemap_core::domain::{GeoPoint, IncidentKind, NewIncident, Severity};
use safemap_core::ops::add_incident;
use safemap_core::store::{IncidentStore, MemorySlot, SqliteSlot, StorageSlot, INCIDENTS_STORAGE_KEY};

fn report() -> NewIncident {
    NewIncident {
        kind: IncidentKind::Lighting,
        title: "Streetlight out".to_string(),
        description: "Corner of 43rd & University Way".to_string(),
        location: GeoPoint::new(47.6601, -122.3130),
        severity: Severity::High,
    }
}

#[test]
fn save_then_load_reproduces_collection_to_the_millisecond() {
    let mut store = IncidentStore::new(MemorySlot::new());
    let mut incidents = seed_incidents();
    incidents[0].timestamp = Some(datetime!(2025-07-30 14:30:00.457 UTC));

    store.save(&incidents);
    assert_eq!(store.load(), incidents);
}

#[test]
fn seed_timestamps_survive_storage_as_utc() {
    let mut store = IncidentStore::new(MemorySlot::new());
    store.save(&seed_incidents());

    let raw = store.slot().get_item(INCIDENTS_STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains(r#""timestamp":"2025-07-30T14:30:00.000Z""#));
    assert_eq!(store.load()[0].timestamp, Some(datetime!(2025-07-30 14:30:00 UTC)));
}

#[test]
fn sqlite_slot_persists_across_reopen() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("safemap.sqlite");

    let expected = {
        let mut store = IncidentStore::new(SqliteSlot::open(&path).expect("open"));
        let seeded = store.load_or_seed();
        let out = add_incident(&mut store, &seeded, report());
        assert_eq!(out.len(), 4);
        out
    };

    let reopened = IncidentStore::new(SqliteSlot::open(&path).expect("reopen"));
    assert_eq!(reopened.load(), expected);
}

#[test]
fn quota_failure_keeps_previous_stored_value() {
    let seeds = seed_incidents();
    let mut sizing = IncidentStore::new(MemorySlot::new());
    sizing.save(&seeds);
    let seed_bytes = sizing.slot().get_item(INCIDENTS_STORAGE_KEY).unwrap().unwrap().len();

    let quota = INCIDENTS_STORAGE_KEY.len() + seed_bytes;
    let mut store = IncidentStore::new(MemorySlot::with_quota(quota));
    store.save(&seeds);

    let updated = add_incident(&mut store, &seeds, report());
    assert_eq!(updated.len(), 4, "in-memory result is still returned");
    assert_eq!(store.load(), seeds, "stored value unchanged after failed write");

    let err = store.try_save(&updated).unwrap_err();
    assert_eq!(err.code, "STORAGE_QUOTA_EXCEEDED");
}

#[test]
fn custom_key_isolates_collections() {
    let mut a = IncidentStore::with_key(MemorySlot::new(), "a");
    a.save(&seed_incidents());
    let b = IncidentStore::with_key(a.into_slot(), "b");
    assert!(b.load().is_empty());
    assert_eq!(b.key(), "b");
}
