//! Event models: cross-reference rows and the full detail record.

use crate::model::person::PersonRef;
use crate::model::photo::Photo;
use crate::model::place::PlaceId;
use serde::Deserialize;

/// Stable event identifier assigned by the API.
pub type EventId = i64;

/// Compact event row as listed inside a place detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventRef {
    pub id: EventId,
    pub event_name: String,
    #[serde(default)]
    pub event_date: Option<String>,
}

/// Parent place reference embedded in an event detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceRef {
    pub id: PlaceId,
    pub name: String,
}

/// Full event record returned by the detail endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDetail {
    pub id: EventId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Local/Regional/National/Global label; empty string when unset.
    #[serde(default)]
    pub significance: Option<String>,
    #[serde(default)]
    pub place: Option<PlaceRef>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub persons: Vec<PersonRef>,
}

impl EventDetail {
    /// First displayable photo; the nested detail view shows at most one.
    pub fn first_displayable_photo(&self) -> Option<&Photo> {
        self.photos.iter().find(|photo| photo.is_displayable())
    }
}
