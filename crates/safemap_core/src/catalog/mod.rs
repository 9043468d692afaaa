//! Static display metadata for incident categories and severities.
//!
//! Lookups by raw string never fail: unknown categories resolve to the first
//! configured entry and unknown severities to the medium presentation.

use serde::Serialize;

use crate::domain::{IncidentKind, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncidentTypeConfig {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

pub const INCIDENT_TYPES: [IncidentTypeConfig; 4] = [
    IncidentTypeConfig {
        id: "incident",
        label: "Safety Incident",
        color: "red",
        icon: "AlertTriangle",
    },
    IncidentTypeConfig {
        id: "hazard",
        label: "Environmental Hazard",
        color: "orange",
        icon: "Navigation",
    },
    IncidentTypeConfig {
        id: "lighting",
        label: "Lighting Issue",
        color: "yellow",
        icon: "Shield",
    },
    IncidentTypeConfig {
        id: "maintenance",
        label: "Maintenance Needed",
        color: "blue",
        icon: "Users",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityPresentation {
    pub severity: Severity,
    pub style_class: &'static str,
    pub marker_color: &'static str,
    pub label: &'static str,
}

pub fn type_config(kind: IncidentKind) -> &'static IncidentTypeConfig {
    type_info(kind.as_str())
}

/// Display metadata for a stored type string; unknown values get the first entry.
pub fn type_info(kind: &str) -> &'static IncidentTypeConfig {
    INCIDENT_TYPES
        .iter()
        .find(|t| t.id == kind)
        .unwrap_or(&INCIDENT_TYPES[0])
}

pub fn presentation_for(severity: Severity) -> SeverityPresentation {
    match severity {
        Severity::Low => SeverityPresentation {
            severity,
            style_class: "bg-yellow-100 text-yellow-800 border-yellow-200",
            marker_color: "#fbbf24",
            label: "Low - Minor issue",
        },
        Severity::Medium => SeverityPresentation {
            severity,
            style_class: "bg-orange-100 text-orange-800 border-orange-200",
            marker_color: "#f97316",
            label: "Medium - Moderate concern",
        },
        Severity::High => SeverityPresentation {
            severity,
            style_class: "bg-red-100 text-red-800 border-red-200",
            marker_color: "#ef4444",
            label: "High - Immediate attention needed",
        },
    }
}

/// Styling for a stored severity string; unknown values get the medium mapping.
pub fn severity_presentation(severity: &str) -> SeverityPresentation {
    presentation_for(Severity::parse(severity).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_matching_config() {
        for kind in IncidentKind::ALL {
            assert_eq!(type_config(kind).id, kind.as_str());
        }
    }

    #[test]
    fn unknown_type_falls_back_to_first_entry() {
        assert_eq!(type_info("unknown-type"), type_info("incident"));
        assert_eq!(type_info("").label, "Safety Incident");
    }

    #[test]
    fn unknown_severity_uses_medium_styling() {
        assert_eq!(severity_presentation("critical"), severity_presentation("medium"));
        assert_eq!(severity_presentation("high").marker_color, "#ef4444");
    }
}
