//! Persistence boundary between the in-memory incident collection and a storage slot.
//!
//! The whole collection is the unit of persistence: every save overwrites the
//! stored array. Reads and writes never fail outward; problems are logged and the
//! caller keeps working with what it has in memory.

mod slot;
mod sqlite;

use std::collections::HashSet;

use tracing::{debug, error, warn};

use crate::demo::seed_incidents;
use crate::domain::Incident;
use crate::error::AppError;

pub use slot::{MemorySlot, StorageSlot};
pub use sqlite::SqliteSlot;

pub const INCIDENTS_STORAGE_KEY: &str = "u-district-safety-incidents";

/// Decode a stored JSON array. Timestamps are normalized by the `Incident` serde adapter.
///
/// Only a value that is not a JSON array is an error. Elements are decoded one at a time:
/// an element lacking a usable `id`, `title` or `location` is skipped with a warning and
/// the rest of the collection is kept.
pub fn decode_incidents(raw: &str) -> Result<Vec<Incident>, AppError> {
    let elements: Vec<serde_json::Value> = serde_json::from_str(raw).map_err(|e| {
        AppError::new("STORAGE_DECODE_FAILED", "Stored incidents are malformed")
            .with_details(e.to_string())
    })?;

    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        let incident: Incident = match serde_json::from_value(element) {
            Ok(incident) => incident,
            Err(e) => {
                warn!(index, error = %e, "skipping undecodable stored incident");
                continue;
            }
        };
        if !seen.insert(incident.id) {
            warn!(id = incident.id, "duplicate incident id in storage; keeping first");
            continue;
        }
        out.push(incident);
    }
    Ok(out)
}

pub fn encode_incidents(incidents: &[Incident]) -> Result<String, AppError> {
    serde_json::to_string(incidents).map_err(|e| {
        AppError::new("STORAGE_ENCODE_FAILED", "Failed to serialize incidents")
            .with_details(e.to_string())
    })
}

/// Incident collection persisted under a single key of a [`StorageSlot`].
pub struct IncidentStore<S: StorageSlot> {
    slot: S,
    key: String,
}

impl<S: StorageSlot> IncidentStore<S> {
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, INCIDENTS_STORAGE_KEY)
    }

    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Read the stored collection. Absent, unreadable or malformed data yields an empty vec.
    pub fn load(&self) -> Vec<Incident> {
        let raw = match self.slot.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored incidents");
                return Vec::new();
            }
        };

        match decode_incidents(&raw) {
            Ok(incidents) => {
                debug!(key = %self.key, count = incidents.len(), "loaded incidents");
                incidents
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "ignoring malformed stored incidents");
                Vec::new()
            }
        }
    }

    /// [`load`](Self::load), falling back to the demo seed when nothing usable is stored.
    pub fn load_or_seed(&self) -> Vec<Incident> {
        let incidents = self.load();
        if incidents.is_empty() {
            return seed_incidents();
        }
        incidents
    }

    pub fn try_save(&mut self, incidents: &[Incident]) -> Result<(), AppError> {
        let encoded = encode_incidents(incidents)?;
        self.slot.set_item(&self.key, &encoded)
    }

    /// Overwrite the stored collection. Failures are logged; in-memory state stays authoritative.
    pub fn save(&mut self, incidents: &[Incident]) {
        match self.try_save(incidents) {
            Ok(()) => debug!(key = %self.key, count = incidents.len(), "saved incidents"),
            Err(e) => error!(key = %self.key, error = %e, "failed to save incidents"),
        }
    }
}
