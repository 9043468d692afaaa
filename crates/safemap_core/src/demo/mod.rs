use time::macros::datetime;

use crate::domain::{GeoPoint, Incident, IncidentKind, Severity};

/// The three built-in demo reports shown on first load (ids 1..=3, protected).
pub fn seed_incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: 1,
            kind: IncidentKind::Lighting,
            title: "Poor lighting on 45th St".to_string(),
            description: "Street lights are out between 15th and 17th Ave".to_string(),
            location: GeoPoint::new(47.6615, -122.3121),
            timestamp: Some(datetime!(2025-07-30 14:30:00 UTC)),
            severity: Severity::Medium,
            verified: false,
        },
        Incident {
            id: 2,
            kind: IncidentKind::Incident,
            title: "Bike theft reported".to_string(),
            description: "Multiple bikes stolen from HUB bike racks".to_string(),
            location: GeoPoint::new(47.6556, -122.3035),
            timestamp: Some(datetime!(2025-07-29 09:15:00 UTC)),
            severity: Severity::High,
            verified: true,
        },
        Incident {
            id: 3,
            kind: IncidentKind::Hazard,
            title: "Broken glass on sidewalk".to_string(),
            description: "Glass debris near Ave Food Court entrance".to_string(),
            location: GeoPoint::new(47.6608, -122.3142),
            timestamp: Some(datetime!(2025-07-27 16:45:00 UTC)),
            severity: Severity::Low,
            verified: false,
        },
    ]
}
