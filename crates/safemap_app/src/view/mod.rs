use serde::Serialize;
use time::OffsetDateTime;

use safemap_core::catalog::INCIDENT_TYPES;
use safemap_core::domain::{Incident, Severity};
use safemap_core::ops::sort_by_recency;

/// One row of the "Recent Reports" sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentListItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub severity_class: &'static str,
    pub type_label: &'static str,
    pub type_icon: &'static str,
    pub verified: bool,
    pub demo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentDetailView {
    pub id: i64,
    pub title: String,
    pub severity_chip: String,
    pub severity_class: &'static str,
    pub verified: bool,
    pub demo: bool,
    pub description: String,
    pub reported: String,
    pub type_label: &'static str,
    pub resolve_enabled: bool,
    pub resolve_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn incident_list(incidents: &[Incident]) -> Vec<IncidentListItem> {
    sort_by_recency(incidents)
        .into_iter()
        .map(|incident| {
            let type_info = incident.kind.config();
            IncidentListItem {
                id: incident.id,
                severity: incident.severity,
                severity_class: incident.severity.presentation().style_class,
                type_label: type_info.label,
                type_icon: type_info.icon,
                verified: incident.verified,
                demo: incident.is_protected(),
                title: incident.title,
                description: incident.description,
            }
        })
        .collect()
}

pub fn format_reported(timestamp: Option<OffsetDateTime>) -> String {
    timestamp
        .and_then(|ts| {
            ts.format(time::macros::format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second] UTC"
            ))
            .ok()
        })
        .unwrap_or_else(|| "Unknown".to_string())
}

pub fn incident_detail(incident: &Incident) -> IncidentDetailView {
    let demo = incident.is_protected();
    IncidentDetailView {
        id: incident.id,
        title: incident.title.clone(),
        severity_chip: format!("{} priority", incident.severity.as_str()),
        severity_class: incident.severity.presentation().style_class,
        verified: incident.verified,
        demo,
        description: incident.description.clone(),
        reported: format_reported(incident.timestamp),
        type_label: incident.kind.config().label,
        resolve_enabled: !demo,
        resolve_label: if demo {
            "Demo - Cannot Resolve"
        } else {
            "Mark as Resolved"
        },
    }
}

/// Type choices for the report form, led by the unselected placeholder.
pub fn type_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: "",
        label: "Select type...",
    })
    .chain(INCIDENT_TYPES.iter().map(|t| SelectOption {
        value: t.id,
        label: t.label,
    }))
    .collect()
}

pub fn severity_options() -> Vec<SelectOption> {
    Severity::ALL
        .iter()
        .map(|s| SelectOption {
            value: s.as_str(),
            label: s.presentation().label,
        })
        .collect()
}

pub fn add_report_button_label(click_to_add: bool) -> &'static str {
    if click_to_add {
        "Click on Map to Add Report"
    } else {
        "Add Safety Report"
    }
}
