//! Application shell: owns the incident collection and transient UI state.
//!
//! All user input arrives as [`Msg`] values and goes through [`App::update`], which
//! sequences validation, the incident operations and persistence, then returns the
//! [`Effect`]s the host must carry out (marker refresh, timers, form feedback).

mod location;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, warn};

use safemap_core::domain::{GeoPoint, Incident, IncidentKind, ReportDraft, Severity};
use safemap_core::error::AppError;
use safemap_core::ops::{add_incident, resolve_incident};
use safemap_core::store::{IncidentStore, StorageSlot};
use safemap_core::validate::{check_draft_fields, validate_draft};

use crate::config::TEMP_MARKER_CLEAR_DELAY;

pub use location::fallback_location;

#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    Kind(Option<IncidentKind>),
    Title(String),
    Description(String),
    Severity(Severity),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    SelectIncident(i64),
    CloseDetail,
    ToggleClickToAdd,
    LocationChosen(GeoPoint),
    OpenForm,
    EditDraft(DraftEdit),
    SubmitReport,
    CloseForm,
    ResolveIncident(i64),
    TempMarkerResetElapsed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The collection changed; markers must be rebuilt.
    RefreshMarkers,
    ClickToAddChanged(bool),
    ClearTempMarker,
    /// Host should deliver [`Msg::TempMarkerResetElapsed`] after this delay.
    ScheduleTempMarkerReset(Duration),
    /// Submission refused; the form stays open.
    ReportRejected(AppError),
}

pub struct App<S: StorageSlot, R: Rng = StdRng> {
    store: IncidentStore<S>,
    rng: R,
    incidents: Vec<Incident>,
    revision: u64,
    selected: Option<i64>,
    form_open: bool,
    click_to_add: bool,
    pending_location: Option<GeoPoint>,
    draft: ReportDraft,
    clearing_temp_marker: bool,
}

impl<S: StorageSlot, R: Rng> App<S, R> {
    /// Load the stored collection, or the demo seed when nothing usable is stored.
    pub fn start(store: IncidentStore<S>, rng: R) -> Self {
        let incidents = store.load_or_seed();
        debug!(count = incidents.len(), "application started");
        Self {
            store,
            rng,
            incidents,
            revision: 0,
            selected: None,
            form_open: false,
            click_to_add: false,
            pending_location: None,
            draft: ReportDraft::default(),
            clearing_temp_marker: false,
        }
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// Bumped on every collection change; the map binding rebuilds markers when it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn selected_incident(&self) -> Option<&Incident> {
        let id = self.selected?;
        self.incidents.iter().find(|i| i.id == id)
    }

    pub fn form_open(&self) -> bool {
        self.form_open
    }

    pub fn click_to_add(&self) -> bool {
        self.click_to_add
    }

    pub fn pending_location(&self) -> Option<GeoPoint> {
        self.pending_location
    }

    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    pub fn clearing_temp_marker(&self) -> bool {
        self.clearing_temp_marker
    }

    pub fn store(&self) -> &IncidentStore<S> {
        &self.store
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::SelectIncident(id) => {
                if self.incidents.iter().any(|i| i.id == id) {
                    self.selected = Some(id);
                }
                Vec::new()
            }
            Msg::CloseDetail => {
                self.selected = None;
                Vec::new()
            }
            Msg::ToggleClickToAdd => {
                self.click_to_add = !self.click_to_add;
                vec![Effect::ClickToAddChanged(self.click_to_add)]
            }
            Msg::LocationChosen(point) => {
                self.pending_location = Some(point);
                self.form_open = true;
                Vec::new()
            }
            Msg::OpenForm => {
                self.form_open = true;
                Vec::new()
            }
            Msg::EditDraft(edit) => {
                match edit {
                    DraftEdit::Kind(kind) => self.draft.kind = kind,
                    DraftEdit::Title(title) => self.draft.title = title,
                    DraftEdit::Description(description) => self.draft.description = description,
                    DraftEdit::Severity(severity) => self.draft.severity = severity,
                }
                Vec::new()
            }
            Msg::SubmitReport => self.submit_report(),
            Msg::CloseForm => self.finish_form(),
            Msg::ResolveIncident(id) => self.resolve(id),
            Msg::TempMarkerResetElapsed => {
                self.clearing_temp_marker = false;
                Vec::new()
            }
        }
    }

    fn submit_report(&mut self) -> Vec<Effect> {
        if !self.form_open {
            return Vec::new();
        }

        if let Err(e) = check_draft_fields(&self.draft) {
            warn!(code = %e.code, "report submission refused");
            return vec![Effect::ReportRejected(e)];
        }

        let location = match self.pending_location {
            Some(point) => point,
            None => fallback_location(&mut self.rng),
        };

        let new = match validate_draft(&self.draft, location) {
            Ok(new) => new,
            Err(e) => {
                warn!(code = %e.code, "report submission refused");
                return vec![Effect::ReportRejected(e)];
            }
        };

        self.incidents = add_incident(&mut self.store, &self.incidents, new);
        self.revision += 1;
        self.draft = ReportDraft::default();

        let mut effects = vec![Effect::RefreshMarkers];
        effects.extend(self.finish_form());
        effects
    }

    /// Close the form and leave click-to-add mode, clearing any temporary marker.
    fn finish_form(&mut self) -> Vec<Effect> {
        self.form_open = false;
        self.pending_location = None;
        self.clearing_temp_marker = true;

        let mut effects = Vec::new();
        if self.click_to_add {
            self.click_to_add = false;
            effects.push(Effect::ClickToAddChanged(false));
        }
        effects.push(Effect::ClearTempMarker);
        effects.push(Effect::ScheduleTempMarkerReset(TEMP_MARKER_CLEAR_DELAY));
        effects
    }

    fn resolve(&mut self, id: i64) -> Vec<Effect> {
        let before = self.incidents.len();
        self.incidents = resolve_incident(&mut self.store, &self.incidents, id);
        self.selected = None;

        if self.incidents.len() == before {
            return Vec::new();
        }
        self.revision += 1;
        vec![Effect::RefreshMarkers]
    }
}
