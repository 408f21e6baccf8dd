//! Core navigation and rendering logic for the HistMap gazetteer client.
//! This crate is the single source of truth for UI-state invariants.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod render;
pub mod ui;

pub use api::client::{FetchError, FetchOp, FetchResult, GazetteerApi, HttpGazetteerApi};
pub use config::{ApiConfig, API_BASE_ENV_VAR, DEFAULT_API_BASE};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings};
pub use model::event::{EventDetail, EventId, EventRef, PlaceRef};
pub use model::person::{PersonDetail, PersonEventRef, PersonId, PersonRef, PlaceNameRef};
pub use model::photo::Photo;
pub use model::place::{Feature, FeatureCollection, PlaceDetail, PlaceFeature, PlaceId};
pub use render::{
    DetailView, EventDetailView, EventLink, GalleryView, ListRow, MarkerSpec, PersonDetailView,
    PersonLink, PlaceModalView,
};
pub use ui::carousel::PhotoCarousel;
pub use ui::nav::{
    ApplyOutcome, ModalLevel, NavError, NavigationController, RequestToken, ViewMode,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
