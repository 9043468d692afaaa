use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::OffsetDateTime;
use tracing::warn;

use crate::catalog::{self, IncidentTypeConfig, SeverityPresentation};

/// Ids at or below this value belong to the built-in demo incidents and are never removed.
pub const PROTECTED_SEED_MAX_ID: i64 = 3;

/// Category of a safety report.
///
/// Stored as its lowercase id under the `type` key. Unknown stored values are not
/// rejected: they load as the first configured category and a warning is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IncidentKind {
    #[default]
    Incident,
    Hazard,
    Lighting,
    Maintenance,
}

impl IncidentKind {
    pub const ALL: [IncidentKind; 4] = [
        IncidentKind::Incident,
        IncidentKind::Hazard,
        IncidentKind::Lighting,
        IncidentKind::Maintenance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IncidentKind::Incident => "incident",
            IncidentKind::Hazard => "hazard",
            IncidentKind::Lighting => "lighting",
            IncidentKind::Maintenance => "maintenance",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == raw)
    }

    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| {
            warn!(value = raw, "unrecognized incident type; using default");
            Self::default()
        })
    }

    pub fn config(self) -> &'static IncidentTypeConfig {
        catalog::type_config(self)
    }
}

impl Serialize for IncidentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IncidentKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = lenient_str(deserializer)?;
        Ok(Self::parse_or_default(&raw))
    }
}

/// Urgency of a report; drives list styling and marker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| {
            warn!(value = raw, "unrecognized severity; using medium");
            Self::default()
        })
    }

    pub fn presentation(self) -> SeverityPresentation {
        catalog::presentation_for(self)
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = lenient_str(deserializer)?;
        Ok(Self::parse_or_default(&raw))
    }
}

/// Read any stored JSON value as text. Strings pass through; null, numbers and the
/// rest become their JSON rendering so they reach `parse_or_default` and get coerced.
fn lenient_str<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Optional stored fields: `null` or a value of the wrong shape loads as the default.
fn default_on_invalid<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value.clone()).unwrap_or_else(|e| {
        warn!(%value, error = %e, "unexpected stored value; using default");
        T::default()
    }))
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A single safety report as held in memory and persisted to the storage slot.
///
/// Notes:
/// - `timestamp` is `None` when the stored record had no timestamp or an unparseable one;
///   nothing is synthesized on load.
/// - `id`, `title` and `location` are required; a stored element missing them is
///   skipped on load while the rest of the collection is kept.
/// - Other fields tolerate `null` or a wrongly-typed value and load as their default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Incident {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: IncidentKind,
    pub title: String,
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub description: String,
    pub location: GeoPoint,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::normalize::timestamps::stored"
    )]
    pub timestamp: Option<OffsetDateTime>,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default, deserialize_with = "default_on_invalid")]
    pub verified: bool,
}

impl Incident {
    pub fn is_protected(&self) -> bool {
        is_protected_id(self.id)
    }
}

pub fn is_protected_id(id: i64) -> bool {
    id <= PROTECTED_SEED_MAX_ID
}

/// Fields supplied by the reporter; id, timestamp and verification are assigned on add.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIncident {
    pub kind: IncidentKind,
    pub title: String,
    pub description: String,
    pub location: GeoPoint,
    pub severity: Severity,
}

/// Report form state. `kind` stays `None` until the reporter picks one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportDraft {
    pub kind: Option<IncidentKind>,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}
