use crate::domain::{GeoPoint, IncidentKind, NewIncident, ReportDraft};
use crate::error::AppError;

/// Check the reporter-supplied fields of a draft: a type and a non-blank title.
///
/// Returns the chosen type and the trimmed title. Callers that still have to pick a
/// location run this first so a refused draft does not consume one.
pub fn check_draft_fields(draft: &ReportDraft) -> Result<(IncidentKind, &str), AppError> {
    let Some(kind) = draft.kind else {
        return Err(AppError::new(
            "DRAFT_TYPE_REQUIRED",
            "Select the type of concern",
        ));
    };

    let title = draft.title.trim();
    if title.is_empty() {
        return Err(AppError::new("DRAFT_TITLE_REQUIRED", "A title is required"));
    }
    Ok((kind, title))
}

/// Check a report draft before submission and turn it into a [`NewIncident`].
///
/// A type and a non-blank title are required; the location must be a real coordinate.
/// The title is stored trimmed, the description verbatim.
pub fn validate_draft(draft: &ReportDraft, location: GeoPoint) -> Result<NewIncident, AppError> {
    let (kind, title) = check_draft_fields(draft)?;

    if !location.is_valid() {
        return Err(AppError::new(
            "DRAFT_LOCATION_OUT_OF_RANGE",
            "Report location is not a valid coordinate",
        )
        .with_details(format!("lat={}; lng={}", location.lat, location.lng)));
    }

    Ok(NewIncident {
        kind,
        title: title.to_string(),
        description: draft.description.clone(),
        location,
        severity: draft.severity,
    })
}
