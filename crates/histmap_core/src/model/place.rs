//! Place models: geo-feature collection rows and the full detail record.
//!
//! # Responsibility
//! - Deserialize the `places.geojson` feature collection into flat
//!   `PlaceFeature` records usable for markers and list rows.
//! - Deserialize the place detail payload with its photo/event/person lists.
//!
//! # Invariants
//! - GeoJSON coordinates arrive as `[lng, lat]` and are swapped into
//!   explicit `lat`/`lng` fields exactly once, at parse time.

use crate::model::event::EventRef;
use crate::model::person::PersonRef;
use crate::model::photo::Photo;
use serde::Deserialize;

/// Stable place identifier assigned by the API.
pub type PlaceId = i64;

/// Top-level GeoJSON envelope returned by the collection endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One raw GeoJSON feature as delivered on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub id: PlaceId,
    pub geometry: Geometry,
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// GeoJSON axis order: `[lng, lat]`.
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureProperties {
    pub name: String,
    #[serde(default)]
    pub brief: String,
}

/// Flattened client-side record backing one map pin and one list row.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceFeature {
    pub id: PlaceId,
    pub name: String,
    pub brief: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<Feature> for PlaceFeature {
    fn from(feature: Feature) -> Self {
        let [lng, lat] = feature.geometry.coordinates;
        Self {
            id: feature.id,
            name: feature.properties.name,
            brief: feature.properties.brief,
            lat,
            lng,
        }
    }
}

/// Full place record returned by the detail endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetail {
    pub id: PlaceId,
    #[serde(default)]
    pub name: Option<String>,
    /// Occupation/construction range start, ISO date string.
    #[serde(default)]
    pub date_start: Option<String>,
    #[serde(default)]
    pub date_end: Option<String>,
    #[serde(default)]
    pub brief: Option<String>,
    /// Free-text history body.
    #[serde(default)]
    pub history: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub events: Vec<EventRef>,
    #[serde(default)]
    pub persons: Vec<PersonRef>,
}
