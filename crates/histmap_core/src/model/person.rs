//! Person models: cross-reference rows and the full detail record.
//!
//! # Invariants
//! - Display names are always rendered as `"Last, First"`.
//! - `brief`/`biography` are delivered by the API but not part of the
//!   rendered person surface; they deserialize for completeness.

use crate::model::event::EventId;
use serde::Deserialize;

/// Stable person identifier assigned by the API.
pub type PersonId = i64;

/// Compact person row as listed inside place and event detail payloads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonRef {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
}

impl PersonRef {
    /// `"Last, First"` display form.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

/// Event row as listed inside a person detail payload.
///
/// The API flattens the parent place name into the row under the join key
/// `place__place_name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonEventRef {
    pub id: EventId,
    pub event_name: String,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default, rename = "place__place_name")]
    pub place_name: Option<String>,
}

/// Place row (name only, non-clickable) inside a person detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceNameRef {
    pub place_name: String,
}

/// Full person record returned by the detail endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonDetail {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    /// ISO date of birth.
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub brief: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    #[serde(default)]
    pub events: Vec<PersonEventRef>,
    #[serde(default)]
    pub places: Vec<PlaceNameRef>,
}

impl PersonDetail {
    /// `"Last, First"` display form used as the detail modal title.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

#[cfg(test)]
mod tests {
    use super::PersonRef;

    #[test]
    fn display_name_is_last_comma_first() {
        let person = PersonRef {
            id: 3,
            first_name: "Ulysses".to_string(),
            last_name: "Grant".to_string(),
        };
        assert_eq!(person.display_name(), "Grant, Ulysses");
    }
}
