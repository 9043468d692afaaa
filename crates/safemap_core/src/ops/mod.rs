//! Collection-in / collection-out incident operations.
//!
//! The pure cores (`append_incident`, `remove_incident`, `sort_by_recency`) never
//! touch storage. `add_incident` and `resolve_incident` wrap them and persist the
//! result through the injected [`IncidentStore`].

use time::OffsetDateTime;
use tracing::debug;

use crate::domain::{is_protected_id, Incident, NewIncident};
use crate::normalize::timestamps::truncate_to_millis;
use crate::store::{IncidentStore, StorageSlot};

pub use crate::catalog::{severity_presentation, type_info, IncidentTypeConfig, SeverityPresentation};

/// One past the largest id in use, or 1 for an empty collection.
pub fn next_incident_id(incidents: &[Incident]) -> i64 {
    incidents.iter().map(|i| i.id).max().map_or(1, |max| max + 1)
}

pub fn append_incident(incidents: &[Incident], new: NewIncident, now: OffsetDateTime) -> Vec<Incident> {
    let incident = Incident {
        id: next_incident_id(incidents),
        kind: new.kind,
        title: new.title,
        description: new.description,
        location: new.location,
        timestamp: Some(truncate_to_millis(now)),
        severity: new.severity,
        verified: false,
    };

    let mut out = Vec::with_capacity(incidents.len() + 1);
    out.extend_from_slice(incidents);
    out.push(incident);
    out
}

/// Append a new report stamped with the current time and persist the collection.
///
/// Callers validate the report first (see [`crate::validate::validate_draft`]).
pub fn add_incident<S: StorageSlot>(
    store: &mut IncidentStore<S>,
    incidents: &[Incident],
    new: NewIncident,
) -> Vec<Incident> {
    let updated = append_incident(incidents, new, OffsetDateTime::now_utc());
    if let Some(added) = updated.last() {
        debug!(id = added.id, kind = added.kind.as_str(), "added incident");
    }
    store.save(&updated);
    updated
}

/// The collection without `id`, or `None` when nothing would change
/// (protected demo id or no such incident).
pub fn remove_incident(incidents: &[Incident], id: i64) -> Option<Vec<Incident>> {
    if is_protected_id(id) || !incidents.iter().any(|i| i.id == id) {
        return None;
    }
    Some(incidents.iter().filter(|i| i.id != id).cloned().collect())
}

/// Remove a user-created report and persist. Protected or unknown ids are a no-op.
pub fn resolve_incident<S: StorageSlot>(
    store: &mut IncidentStore<S>,
    incidents: &[Incident],
    id: i64,
) -> Vec<Incident> {
    match remove_incident(incidents, id) {
        Some(updated) => {
            debug!(id, "resolved incident");
            store.save(&updated);
            updated
        }
        None => {
            debug!(id, "resolve ignored (protected or absent)");
            incidents.to_vec()
        }
    }
}

/// Most recent first. Stable for equal timestamps; incidents without a timestamp sort last.
pub fn sort_by_recency(incidents: &[Incident]) -> Vec<Incident> {
    let mut out = incidents.to_vec();
    out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    out
}
