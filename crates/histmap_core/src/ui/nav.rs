//! Navigation controller: view toggle, feature cache and modal stack.
//!
//! # Responsibility
//! - Own every piece of mutable presentation state: view mode, cached
//!   features, the three-level modal stack and the photo carousel.
//! - Drive fetch-then-apply transitions against a [`GazetteerApi`].
//!
//! # Invariants
//! - Modal states are exactly `{CLOSED, PLACE_OPEN, PLACE_OPEN+DETAIL_OPEN}`;
//!   a detail modal never exists without a place modal underneath.
//! - Opening a new detail replaces the nested frame's content; there is no
//!   back-stack for event/person chains.
//! - A response mutates state only when its request token is still the
//!   latest issued for its modal region; stale responses are dropped whole.
//! - A failed fetch leaves all state untouched.

use crate::api::client::{FetchError, GazetteerApi};
use crate::model::event::{EventDetail, EventId};
use crate::model::person::{PersonDetail, PersonId};
use crate::model::place::{PlaceDetail, PlaceFeature, PlaceId};
use crate::render::{
    self, DetailView, GalleryView, ListRow, MarkerSpec, PlaceModalView,
};
use crate::ui::carousel::PhotoCarousel;
use log::{debug, error, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Mutually exclusive base display modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Map,
    List,
}

impl ViewMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::List => "list",
        }
    }
}

/// Which layer of the modal stack is on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalLevel {
    Closed,
    PlaceOpen,
    DetailOpen,
}

/// Opaque monotonic token tying a response to the request that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Whether a response was applied or dropped as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Stale,
}

/// Navigation-level error wrapping fetch failures and contract misuse.
#[derive(Debug)]
pub enum NavError {
    /// A nested detail was requested while no place modal is open.
    PlaceNotOpen,
    Fetch(FetchError),
}

impl NavError {
    /// Blocking alert text for fetch failures; contract misuse has none.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::PlaceNotOpen => None,
            Self::Fetch(err) => Some(err.user_message()),
        }
    }
}

impl Display for NavError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlaceNotOpen => {
                write!(f, "detail modal requires an open place modal")
            }
            Self::Fetch(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NavError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PlaceNotOpen => None,
            Self::Fetch(err) => Some(err),
        }
    }
}

impl From<FetchError> for NavError {
    fn from(value: FetchError) -> Self {
        Self::Fetch(value)
    }
}

/// Single owner of all mutable presentation state.
///
/// Frontends read view models through the accessors and feed user actions
/// (clicks, close buttons, carousel arrows) into the operations below.
#[derive(Debug, Default)]
pub struct NavigationController {
    view_mode: ViewMode,
    features: HashMap<PlaceId, PlaceFeature>,
    /// Collection order, preserved for marker/row rendering.
    feature_order: Vec<PlaceId>,
    place_modal: Option<PlaceModalView>,
    detail_modal: Option<DetailView>,
    carousel: PhotoCarousel,
    place_token: u64,
    detail_token: u64,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- view toggle -------------------------------------------------

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switches between map and list; the other mode is hidden.
    pub fn set_view(&mut self, mode: ViewMode) {
        debug!("event=view_toggle module=nav mode={}", mode.as_str());
        self.view_mode = mode;
    }

    // ---- place collection --------------------------------------------

    /// Fetches the place collection once and fills the id-keyed cache.
    ///
    /// On failure the cache stays empty and the error (with its alert
    /// text) propagates; there is no retry.
    pub fn load_places(&mut self, api: &impl GazetteerApi) -> Result<usize, FetchError> {
        let features = api.fetch_places().map_err(|err| {
            error!("event=fetch_failed module=nav op={} error={err}", err.op());
            err
        })?;

        self.feature_order = features.iter().map(|feature| feature.id).collect();
        self.features = features
            .into_iter()
            .map(|feature| (feature.id, feature))
            .collect();
        debug!(
            "event=places_loaded module=nav count={}",
            self.feature_order.len()
        );
        Ok(self.feature_order.len())
    }

    /// Cached feature lookup, id-keyed for the lifetime of the controller.
    pub fn feature(&self, id: PlaceId) -> Option<&PlaceFeature> {
        self.features.get(&id)
    }

    /// One marker per cached feature, in collection order.
    pub fn markers(&self) -> Vec<MarkerSpec> {
        self.feature_order
            .iter()
            .filter_map(|id| self.features.get(id))
            .map(render::marker_spec)
            .collect()
    }

    /// One list row per cached feature, in collection order.
    pub fn list_rows(&self) -> Vec<ListRow> {
        self.feature_order
            .iter()
            .filter_map(|id| self.features.get(id))
            .map(render::list_row)
            .collect()
    }

    // ---- modal stack accessors ---------------------------------------

    pub fn modal_level(&self) -> ModalLevel {
        match (&self.place_modal, &self.detail_modal) {
            (None, _) => ModalLevel::Closed,
            (Some(_), None) => ModalLevel::PlaceOpen,
            (Some(_), Some(_)) => ModalLevel::DetailOpen,
        }
    }

    pub fn place_modal(&self) -> Option<&PlaceModalView> {
        self.place_modal.as_ref()
    }

    pub fn detail_modal(&self) -> Option<&DetailView> {
        self.detail_modal.as_ref()
    }

    /// Gallery snapshot for the place modal's carousel state.
    pub fn gallery(&self) -> GalleryView {
        render::gallery_view(&self.carousel)
    }

    pub fn next_photo(&mut self) {
        self.carousel.next();
    }

    pub fn previous_photo(&mut self) {
        self.carousel.previous();
    }

    // ---- request tokens ----------------------------------------------

    /// Issues the next place-modal request token, superseding any
    /// in-flight place request.
    pub fn issue_place_request(&mut self) -> RequestToken {
        self.place_token += 1;
        RequestToken(self.place_token)
    }

    /// Issues the next detail-modal request token.
    pub fn issue_detail_request(&mut self) -> RequestToken {
        self.detail_token += 1;
        RequestToken(self.detail_token)
    }

    /// Applies a place-detail response unless a newer place request was
    /// issued meanwhile; stale responses are dropped without touching the
    /// modal or carousel.
    pub fn apply_place_response(
        &mut self,
        token: RequestToken,
        detail: &PlaceDetail,
    ) -> ApplyOutcome {
        if token.0 != self.place_token {
            warn!(
                "event=stale_response module=nav region=place place_id={} token={} latest={}",
                detail.id, token.0, self.place_token
            );
            return ApplyOutcome::Stale;
        }

        self.carousel.load(&detail.photos);
        self.place_modal = Some(render::place_modal_view(detail));
        // A fresh place modal starts with no nested frame above it.
        self.detail_modal = None;
        debug!("event=place_opened module=nav place_id={}", detail.id);
        ApplyOutcome::Applied
    }

    /// Applies an event-detail response into the nested frame.
    pub fn apply_event_response(
        &mut self,
        token: RequestToken,
        detail: &EventDetail,
    ) -> Result<ApplyOutcome, NavError> {
        if self.place_modal.is_none() {
            return Err(NavError::PlaceNotOpen);
        }
        if token.0 != self.detail_token {
            warn!(
                "event=stale_response module=nav region=detail event_id={} token={} latest={}",
                detail.id, token.0, self.detail_token
            );
            return Ok(ApplyOutcome::Stale);
        }

        self.detail_modal = Some(DetailView::Event(render::event_detail_view(detail)));
        debug!("event=detail_opened module=nav kind=event event_id={}", detail.id);
        Ok(ApplyOutcome::Applied)
    }

    /// Applies a person-detail response into the nested frame.
    pub fn apply_person_response(
        &mut self,
        token: RequestToken,
        detail: &PersonDetail,
    ) -> Result<ApplyOutcome, NavError> {
        if self.place_modal.is_none() {
            return Err(NavError::PlaceNotOpen);
        }
        if token.0 != self.detail_token {
            warn!(
                "event=stale_response module=nav region=detail person_id={} token={} latest={}",
                detail.id, token.0, self.detail_token
            );
            return Ok(ApplyOutcome::Stale);
        }

        self.detail_modal = Some(DetailView::Person(render::person_detail_view(detail)));
        debug!(
            "event=detail_opened module=nav kind=person person_id={}",
            detail.id
        );
        Ok(ApplyOutcome::Applied)
    }

    // ---- synchronous open/close operations ---------------------------

    /// Fetches one place and opens (or replaces) the place modal.
    pub fn open_place(&mut self, api: &impl GazetteerApi, id: PlaceId) -> Result<(), FetchError> {
        let token = self.issue_place_request();
        let detail = api.fetch_place_details(id).map_err(|err| {
            error!(
                "event=fetch_failed module=nav op={} place_id={id} error={err}",
                err.op()
            );
            err
        })?;
        self.apply_place_response(token, &detail);
        Ok(())
    }

    /// Fetches one event into the nested detail frame above the place
    /// modal, replacing whatever the frame showed before.
    pub fn open_event(&mut self, api: &impl GazetteerApi, id: EventId) -> Result<(), NavError> {
        if self.place_modal.is_none() {
            return Err(NavError::PlaceNotOpen);
        }
        let token = self.issue_detail_request();
        let detail = api.fetch_event_details(id).map_err(|err| {
            error!(
                "event=fetch_failed module=nav op={} event_id={id} error={err}",
                err.op()
            );
            err
        })?;
        self.apply_event_response(token, &detail)?;
        Ok(())
    }

    /// Fetches one person into the nested detail frame above the place
    /// modal, replacing whatever the frame showed before.
    pub fn open_person(&mut self, api: &impl GazetteerApi, id: PersonId) -> Result<(), NavError> {
        if self.place_modal.is_none() {
            return Err(NavError::PlaceNotOpen);
        }
        let token = self.issue_detail_request();
        let detail = api.fetch_person_details(id).map_err(|err| {
            error!(
                "event=fetch_failed module=nav op={} person_id={id} error={err}",
                err.op()
            );
            err
        })?;
        self.apply_person_response(token, &detail)?;
        Ok(())
    }

    /// Pops the nested detail frame, revealing the place modal.
    pub fn close_detail(&mut self) {
        if self.detail_modal.take().is_some() {
            debug!("event=detail_closed module=nav");
        }
    }

    /// Closes the place modal, revealing the base view.
    ///
    /// Any nested frame goes with it; a detail modal cannot outlive the
    /// place modal underneath.
    pub fn close_place(&mut self) {
        if self.place_modal.take().is_some() {
            debug!("event=place_closed module=nav");
        }
        self.detail_modal = None;
        self.carousel.clear();
    }
}
