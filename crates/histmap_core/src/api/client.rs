//! Gazetteer API contract and HTTP implementation.
//!
//! # Responsibility
//! - Provide typed fetch APIs for the four read endpoints.
//! - Map every failure mode to a per-operation `FetchError` carrying the
//!   user-facing alert text.
//!
//! # Invariants
//! - A fetch either yields a fully decoded record or an error; callers
//!   never observe partially decoded payloads.

use crate::config::ApiConfig;
use crate::model::event::{EventDetail, EventId};
use crate::model::person::{PersonDetail, PersonId};
use crate::model::place::{FeatureCollection, PlaceDetail, PlaceFeature, PlaceId};
use log::debug;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for fetch APIs.
pub type FetchResult<T> = Result<T, FetchError>;

/// The remote operation a fetch failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOp {
    Places,
    PlaceDetails,
    EventDetails,
    PersonDetails,
}

impl FetchOp {
    /// Blocking alert text shown to the user when this operation fails.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::Places => "Could not load places. Check the API base URL.",
            Self::PlaceDetails => "Could not load place details.",
            Self::EventDetails => "Could not load event details.",
            Self::PersonDetails => "Could not load person details.",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Places => "places",
            Self::PlaceDetails => "place details",
            Self::EventDetails => "event details",
            Self::PersonDetails => "person details",
        }
    }
}

impl Display for FetchOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collapsed per-operation fetch failure.
#[derive(Debug)]
pub enum FetchError {
    /// Network/transport failure before any response arrived.
    Transport { op: FetchOp, source: reqwest::Error },
    /// Response arrived with a non-success HTTP status.
    Status { op: FetchOp, status: u16 },
    /// Response body could not be decoded into the expected shape.
    Decode { op: FetchOp, source: reqwest::Error },
}

impl FetchError {
    pub fn op(&self) -> FetchOp {
        match self {
            Self::Transport { op, .. } | Self::Status { op, .. } | Self::Decode { op, .. } => *op,
        }
    }

    /// Blocking alert text for the failed operation.
    pub fn user_message(&self) -> &'static str {
        self.op().user_message()
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport { op, source } => {
                write!(f, "failed to fetch {op}: {source}")
            }
            Self::Status { op, status } => {
                write!(f, "failed to fetch {op}: HTTP {status}")
            }
            Self::Decode { op, source } => {
                write!(f, "failed to decode {op} payload: {source}")
            }
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport { source, .. } | Self::Decode { source, .. } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

/// Fetch contract for the four read endpoints.
///
/// The navigation controller is generic over this trait so tests and
/// alternative transports can drive it without a live server.
pub trait GazetteerApi {
    /// Fetches the full place collection as flattened features.
    fn fetch_places(&self) -> FetchResult<Vec<PlaceFeature>>;
    /// Fetches the full detail record for one place.
    fn fetch_place_details(&self, id: PlaceId) -> FetchResult<PlaceDetail>;
    /// Fetches the full detail record for one event.
    fn fetch_event_details(&self, id: EventId) -> FetchResult<EventDetail>;
    /// Fetches the full detail record for one person.
    fn fetch_person_details(&self, id: PersonId) -> FetchResult<PersonDetail>;
}

/// Blocking HTTP implementation of [`GazetteerApi`].
pub struct HttpGazetteerApi {
    config: ApiConfig,
    client: reqwest::blocking::Client,
}

impl HttpGazetteerApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn get_json<T: DeserializeOwned>(&self, op: FetchOp, url: &str) -> FetchResult<T> {
        debug!("event=fetch_start module=api op={op} url={url}");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport { op, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                op,
                status: status.as_u16(),
            });
        }

        response.json().map_err(|source| FetchError::Decode { op, source })
    }
}

impl GazetteerApi for HttpGazetteerApi {
    fn fetch_places(&self) -> FetchResult<Vec<PlaceFeature>> {
        let collection: FeatureCollection =
            self.get_json(FetchOp::Places, &self.config.places_url())?;
        Ok(collection
            .features
            .into_iter()
            .map(PlaceFeature::from)
            .collect())
    }

    fn fetch_place_details(&self, id: PlaceId) -> FetchResult<PlaceDetail> {
        self.get_json(FetchOp::PlaceDetails, &self.config.place_details_url(id))
    }

    fn fetch_event_details(&self, id: EventId) -> FetchResult<EventDetail> {
        self.get_json(FetchOp::EventDetails, &self.config.event_details_url(id))
    }

    fn fetch_person_details(&self, id: PersonId) -> FetchResult<PersonDetail> {
        self.get_json(FetchOp::PersonDetails, &self.config.person_details_url(id))
    }
}

#[cfg(test)]
mod tests {
    use super::FetchOp;

    #[test]
    fn user_messages_name_the_failed_operation() {
        assert!(FetchOp::Places.user_message().contains("places"));
        assert!(FetchOp::PlaceDetails.user_message().contains("place details"));
        assert!(FetchOp::EventDetails.user_message().contains("event details"));
        assert!(FetchOp::PersonDetails
            .user_message()
            .contains("person details"));
    }
}
