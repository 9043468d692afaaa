//! Binding between the incident collection and an external interactive map widget.
//!
//! The widget draws tiles and marker graphics; this module decides which markers
//! exist, how they are styled, and which shell messages widget events produce.
//! Markers are not diffed: every collection change removes and recreates them all.

mod popup;

use std::time::Duration;

use tracing::debug;

use safemap_core::domain::{GeoPoint, Incident};

use crate::config::{MapConfig, TEMP_MARKER_PULSE};
use crate::shell::{Effect, Msg};

pub use popup::popup_html;

pub const MARKER_SIZE_PX: u32 = 32;
pub const TEMP_MARKER_COLOR: &str = "#8b5cf6";

/// Opaque id the widget hands back for a marker it placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Incident { id: i64 },
    Temporary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: GeoPoint,
    pub kind: MarkerKind,
    pub fill_color: &'static str,
    pub size_px: u32,
    pub popup_html: Option<String>,
    pub pulse: Option<Duration>,
}

impl MarkerSpec {
    pub fn for_incident(incident: &Incident) -> Self {
        Self {
            position: incident.location,
            kind: MarkerKind::Incident { id: incident.id },
            fill_color: incident.severity.presentation().marker_color,
            size_px: MARKER_SIZE_PX,
            popup_html: Some(popup_html(incident)),
            pulse: None,
        }
    }

    pub fn temporary(position: GeoPoint) -> Self {
        Self {
            position,
            kind: MarkerKind::Temporary,
            fill_color: TEMP_MARKER_COLOR,
            size_px: MARKER_SIZE_PX,
            popup_html: None,
            pulse: Some(TEMP_MARKER_PULSE),
        }
    }
}

/// The external map widget, as seen from the application.
pub trait MapWidget {
    fn configure(&mut self, config: &MapConfig);
    fn add_marker(&mut self, marker: MarkerSpec) -> MarkerHandle;
    fn remove_marker(&mut self, handle: MarkerHandle);
}

#[derive(Debug, Default)]
pub struct MapBinding {
    markers: Vec<(MarkerHandle, i64)>,
    temp_marker: Option<MarkerHandle>,
    click_to_add: bool,
    synced_revision: Option<u64>,
}

impl MapBinding {
    pub fn mount<W: MapWidget>(widget: &mut W, config: &MapConfig) -> Self {
        widget.configure(config);
        Self::default()
    }

    /// Recreate every incident marker unless `revision` was already synced.
    /// Returns whether markers were rebuilt.
    pub fn sync<W: MapWidget>(&mut self, widget: &mut W, incidents: &[Incident], revision: u64) -> bool {
        if self.synced_revision == Some(revision) {
            return false;
        }

        for (handle, _) in self.markers.drain(..) {
            widget.remove_marker(handle);
        }
        for incident in incidents {
            let handle = widget.add_marker(MarkerSpec::for_incident(incident));
            self.markers.push((handle, incident.id));
        }
        self.synced_revision = Some(revision);
        debug!(revision, markers = self.markers.len(), "rebuilt incident markers");
        true
    }

    pub fn marker_activated(&self, handle: MarkerHandle) -> Option<Msg> {
        self.markers
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, id)| Msg::SelectIncident(*id))
    }

    pub fn set_click_to_add(&mut self, enabled: bool) {
        self.click_to_add = enabled;
    }

    pub fn click_to_add(&self) -> bool {
        self.click_to_add
    }

    /// A click on the map itself. Outside click-to-add mode this is plain panning.
    pub fn map_activated<W: MapWidget>(&mut self, widget: &mut W, point: GeoPoint) -> Option<Msg> {
        if !self.click_to_add {
            return None;
        }
        if let Some(old) = self.temp_marker.take() {
            widget.remove_marker(old);
        }
        self.temp_marker = Some(widget.add_marker(MarkerSpec::temporary(point)));
        Some(Msg::LocationChosen(point))
    }

    pub fn clear_temp_marker<W: MapWidget>(&mut self, widget: &mut W) {
        if let Some(handle) = self.temp_marker.take() {
            widget.remove_marker(handle);
        }
    }

    pub fn has_temp_marker(&self) -> bool {
        self.temp_marker.is_some()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Apply the map-facing subset of shell effects.
    pub fn apply_effects<W: MapWidget>(
        &mut self,
        widget: &mut W,
        incidents: &[Incident],
        revision: u64,
        effects: &[Effect],
    ) {
        for effect in effects {
            match effect {
                Effect::RefreshMarkers => {
                    self.sync(widget, incidents, revision);
                }
                Effect::ClickToAddChanged(enabled) => self.set_click_to_add(*enabled),
                Effect::ClearTempMarker => self.clear_temp_marker(widget),
                Effect::ScheduleTempMarkerReset(_) | Effect::ReportRejected(_) => {}
            }
        }
    }
}
