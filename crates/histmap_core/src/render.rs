//! Frontend-agnostic view-model construction.
//!
//! # Responsibility
//! - Turn API records into marker specs, list rows and modal view structs.
//! - Own every string-formatting rule: HTML escaping, date-range summary,
//!   cross-reference labels, photo counters.
//!
//! # Invariants
//! - Every interpolated entity field passes through `escape_html` exactly
//!   once before it reaches a `*_html` field.
//! - View construction is pure; no I/O, no shared state.

use crate::model::event::{EventDetail, EventId, EventRef};
use crate::model::person::{PersonDetail, PersonId, PersonRef};
use crate::model::place::{PlaceDetail, PlaceFeature, PlaceId};
use crate::ui::carousel::PhotoCarousel;

/// Fixed marker style used for every place pin.
pub const MARKER_RADIUS: f32 = 7.0;
pub const MARKER_COLOR: &str = "#b10f2e";
pub const MARKER_FILL_OPACITY: f32 = 0.9;
pub const MARKER_STROKE_WEIGHT: f32 = 1.2;

/// Segment separator for meta lines and the date-range summary.
const META_SEPARATOR: &str = " \u{b7} ";

/// Escapes `& < > " '` into HTML entities.
///
/// Applied to all text interpolated into markup so entity names can never
/// inject raw tags.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Joins the present segments of `Start:`/`End:` with `" · "`.
///
/// Absent or empty fields are omitted; both absent yields an empty string.
pub fn date_range_summary(start: Option<&str>, end: Option<&str>) -> String {
    let segments = [
        non_empty(start).map(|value| format!("Start: {value}")),
        non_empty(end).map(|value| format!("End: {value}")),
    ];
    join_present(&segments)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

fn join_present(segments: &[Option<String>]) -> String {
    segments
        .iter()
        .flatten()
        .cloned()
        .collect::<Vec<_>>()
        .join(META_SEPARATOR)
}

/// One map pin with fixed style, escaped tooltip and click subject.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub place_id: PlaceId,
    pub lat: f64,
    pub lng: f64,
    pub radius: f32,
    pub color: &'static str,
    pub fill_opacity: f32,
    pub stroke_weight: f32,
    pub tooltip_html: String,
}

pub fn marker_spec(feature: &PlaceFeature) -> MarkerSpec {
    MarkerSpec {
        place_id: feature.id,
        lat: feature.lat,
        lng: feature.lng,
        radius: MARKER_RADIUS,
        color: MARKER_COLOR,
        fill_opacity: MARKER_FILL_OPACITY,
        stroke_weight: MARKER_STROKE_WEIGHT,
        tooltip_html: format!(
            "<strong>{}</strong><br/>{}",
            escape_html(&feature.name),
            escape_html(&feature.brief)
        ),
    }
}

/// One list-view row with escaped text and click subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub place_id: PlaceId,
    pub name_html: String,
    pub brief_html: String,
}

pub fn list_row(feature: &PlaceFeature) -> ListRow {
    ListRow {
        place_id: feature.id,
        name_html: escape_html(&feature.name),
        brief_html: escape_html(&feature.brief),
    }
}

/// Clickable cross-reference to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLink {
    pub event_id: EventId,
    pub label_html: String,
}

/// Clickable cross-reference to a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonLink {
    pub person_id: PersonId,
    pub label_html: String,
}

fn event_link(event: &EventRef) -> EventLink {
    let label = match non_empty(event.event_date.as_deref()) {
        Some(date) => format!("{} ({date})", event.event_name),
        None => event.event_name.clone(),
    };
    EventLink {
        event_id: event.id,
        label_html: escape_html(&label),
    }
}

fn person_link(person: &PersonRef) -> PersonLink {
    PersonLink {
        person_id: person.id,
        label_html: escape_html(&person.display_name()),
    }
}

/// Top-level place modal contents (gallery rendered separately from the
/// live carousel state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceModalView {
    pub place_id: PlaceId,
    pub title_html: String,
    pub date_summary: String,
    pub history_html: String,
    pub events: Vec<EventLink>,
    pub persons: Vec<PersonLink>,
}

pub fn place_modal_view(detail: &PlaceDetail) -> PlaceModalView {
    let title = non_empty(detail.name.as_deref()).unwrap_or("Historic Place");
    PlaceModalView {
        place_id: detail.id,
        title_html: escape_html(title),
        date_summary: date_range_summary(detail.date_start.as_deref(), detail.date_end.as_deref()),
        history_html: escape_html(detail.history.as_deref().unwrap_or("")),
        events: detail.events.iter().map(event_link).collect(),
        persons: detail.persons.iter().map(person_link).collect(),
    }
}

/// Snapshot of the place-gallery region for the current carousel state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    /// Hidden when the open place has no displayable photo.
    pub visible: bool,
    pub image_url: Option<String>,
    pub caption_html: String,
    /// `"i+1 / N"` position counter; empty while hidden.
    pub counter: String,
}

pub fn gallery_view(carousel: &PhotoCarousel) -> GalleryView {
    match carousel.current() {
        Some(photo) => GalleryView {
            visible: true,
            image_url: photo.url.clone(),
            caption_html: escape_html(photo.caption_text()),
            counter: carousel.counter().unwrap_or_default(),
        },
        None => GalleryView {
            visible: false,
            image_url: None,
            caption_html: String::new(),
            counter: String::new(),
        },
    }
}

/// Single photo slot inside the nested detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPhoto {
    pub url: String,
    pub caption_html: String,
}

/// Nested detail modal contents for an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetailView {
    pub event_id: EventId,
    pub title_html: String,
    /// Present segments of `Date:`/`Significance:`/`Place:` joined with `" · "`.
    pub meta_html: String,
    pub description_html: String,
    /// First displayable photo only.
    pub photo: Option<DetailPhoto>,
    pub persons: Vec<PersonLink>,
}

pub fn event_detail_view(detail: &EventDetail) -> EventDetailView {
    let title = non_empty(detail.name.as_deref()).unwrap_or("Event");
    let segments = [
        non_empty(detail.date.as_deref()).map(|value| format!("Date: {value}")),
        non_empty(detail.significance.as_deref()).map(|value| format!("Significance: {value}")),
        detail
            .place
            .as_ref()
            .and_then(|place| non_empty(Some(place.name.as_str())))
            .map(|name| format!("Place: {name}")),
    ];

    EventDetailView {
        event_id: detail.id,
        title_html: escape_html(title),
        meta_html: escape_html(&join_present(&segments)),
        description_html: escape_html(detail.description.as_deref().unwrap_or("")),
        photo: detail.first_displayable_photo().map(|photo| DetailPhoto {
            url: photo.url.clone().unwrap_or_default(),
            caption_html: escape_html(photo.caption_text()),
        }),
        persons: detail.persons.iter().map(person_link).collect(),
    }
}

/// Nested detail modal contents for a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDetailView {
    pub person_id: PersonId,
    /// `"Last, First"` header.
    pub title_html: String,
    /// `"Born: dob"` or empty.
    pub meta_html: String,
    pub profile_photo_url: Option<String>,
    pub events: Vec<EventLink>,
    /// Plain, non-clickable place names.
    pub places: Vec<String>,
}

pub fn person_detail_view(detail: &PersonDetail) -> PersonDetailView {
    let meta = match non_empty(detail.dob.as_deref()) {
        Some(dob) => format!("Born: {dob}"),
        None => String::new(),
    };

    let events = detail
        .events
        .iter()
        .map(|event| EventLink {
            event_id: event.id,
            // Parenthesized date slot stays even when the date is absent.
            label_html: escape_html(&format!(
                "{} ({}) \u{2013} {}",
                event.event_name,
                event.event_date.as_deref().unwrap_or(""),
                event.place_name.as_deref().unwrap_or("")
            )),
        })
        .collect();

    PersonDetailView {
        person_id: detail.id,
        title_html: escape_html(&detail.display_name()),
        meta_html: escape_html(&meta),
        profile_photo_url: detail
            .profile_photo_url
            .clone()
            .filter(|url| !url.trim().is_empty()),
        events,
        places: detail
            .places
            .iter()
            .map(|place| escape_html(&place.place_name))
            .collect(),
    }
}

/// Tagged union rendered through the single nested-modal surface.
///
/// Opening another subject replaces the current variant in place; there is
/// exactly one nested frame and no back-stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Event(EventDetailView),
    Person(PersonDetailView),
}

impl DetailView {
    pub fn title_html(&self) -> &str {
        match self {
            Self::Event(view) => &view.title_html,
            Self::Person(view) => &view.title_html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::PlaceRef;
    use crate::model::photo::Photo;

    fn feature(name: &str, brief: &str) -> PlaceFeature {
        PlaceFeature {
            id: 11,
            name: name.to_string(),
            brief: brief.to_string(),
            lat: 37.0,
            lng: -89.17,
        }
    }

    #[test]
    fn escape_html_covers_all_special_characters() {
        assert_eq!(
            escape_html(r#"<b>&"Fort" 'Defiance'</b>"#),
            "&lt;b&gt;&amp;&quot;Fort&quot; &#039;Defiance&#039;&lt;/b&gt;"
        );
    }

    #[test]
    fn escape_html_passes_plain_text_through() {
        assert_eq!(escape_html("Cairo Custom House"), "Cairo Custom House");
    }

    #[test]
    fn date_range_summary_omits_absent_segments() {
        assert_eq!(
            date_range_summary(Some("1861"), Some("1865")),
            "Start: 1861 \u{b7} End: 1865"
        );
        assert_eq!(date_range_summary(Some("1861"), None), "Start: 1861");
        assert_eq!(date_range_summary(None, Some("1865")), "End: 1865");
        assert_eq!(date_range_summary(None, None), "");
        assert_eq!(date_range_summary(Some(" "), Some("")), "");
    }

    #[test]
    fn marker_spec_uses_fixed_style_and_escaped_tooltip() {
        let spec = marker_spec(&feature("Fort <Defiance>", "Civil War & camp"));
        assert_eq!(spec.place_id, 11);
        assert_eq!(spec.radius, 7.0);
        assert_eq!(spec.color, "#b10f2e");
        assert_eq!(spec.fill_opacity, 0.9);
        assert_eq!(spec.stroke_weight, 1.2);
        assert_eq!(
            spec.tooltip_html,
            "<strong>Fort &lt;Defiance&gt;</strong><br/>Civil War &amp; camp"
        );
    }

    #[test]
    fn list_row_escapes_name_and_brief() {
        let row = list_row(&feature("Magnolia \"Manor\"", "built by <owner>"));
        assert_eq!(row.name_html, "Magnolia &quot;Manor&quot;");
        assert_eq!(row.brief_html, "built by &lt;owner&gt;");
    }

    #[test]
    fn place_modal_view_falls_back_on_missing_fields() {
        let detail = PlaceDetail {
            id: 4,
            name: None,
            date_start: None,
            date_end: None,
            brief: None,
            history: None,
            latitude: 37.0,
            longitude: -89.1,
            photos: vec![],
            events: vec![],
            persons: vec![],
        };
        let view = place_modal_view(&detail);
        assert_eq!(view.title_html, "Historic Place");
        assert_eq!(view.date_summary, "");
        assert_eq!(view.history_html, "");
        assert!(view.events.is_empty());
        assert!(view.persons.is_empty());
    }

    #[test]
    fn place_event_links_omit_empty_date_parens() {
        let detail = PlaceDetail {
            id: 4,
            name: Some("Custom House".to_string()),
            date_start: Some("1869".to_string()),
            date_end: None,
            brief: None,
            history: Some("Federal building".to_string()),
            latitude: 37.0,
            longitude: -89.1,
            photos: vec![],
            events: vec![
                EventRef {
                    id: 21,
                    event_name: "Dedication".to_string(),
                    event_date: Some("1872-05-01".to_string()),
                },
                EventRef {
                    id: 22,
                    event_name: "Fire".to_string(),
                    event_date: None,
                },
            ],
            persons: vec![PersonRef {
                id: 31,
                first_name: "Mary".to_string(),
                last_name: "Safford".to_string(),
            }],
        };
        let view = place_modal_view(&detail);
        assert_eq!(view.date_summary, "Start: 1869");
        assert_eq!(view.events[0].label_html, "Dedication (1872-05-01)");
        assert_eq!(view.events[1].label_html, "Fire");
        assert_eq!(view.persons[0].label_html, "Safford, Mary");
    }

    #[test]
    fn event_detail_meta_joins_present_segments() {
        let detail = EventDetail {
            id: 21,
            name: Some("Grant's arrival".to_string()),
            date: Some("1861-09-04".to_string()),
            description: Some("Troops occupied the point.".to_string()),
            significance: Some("NATIONAL".to_string()),
            place: Some(PlaceRef {
                id: 4,
                name: "Fort Defiance".to_string(),
            }),
            photos: vec![],
            persons: vec![],
        };
        let view = event_detail_view(&detail);
        assert_eq!(
            view.meta_html,
            "Date: 1861-09-04 \u{b7} Significance: NATIONAL \u{b7} Place: Fort Defiance"
        );
        assert_eq!(view.title_html, "Grant&#039;s arrival");
    }

    #[test]
    fn event_detail_meta_omits_absent_segments() {
        let detail = EventDetail {
            id: 21,
            name: None,
            date: None,
            description: None,
            significance: Some("".to_string()),
            place: None,
            photos: vec![],
            persons: vec![],
        };
        let view = event_detail_view(&detail);
        assert_eq!(view.title_html, "Event");
        assert_eq!(view.meta_html, "");
        assert_eq!(view.description_html, "");
        assert!(view.photo.is_none());
    }

    #[test]
    fn event_detail_shows_first_displayable_photo_only() {
        let detail = EventDetail {
            id: 21,
            name: Some("Muster".to_string()),
            date: None,
            description: None,
            significance: None,
            place: None,
            photos: vec![
                Photo {
                    url: None,
                    caption: Some("broken".to_string()),
                },
                Photo {
                    url: Some("https://example.org/a.jpg".to_string()),
                    caption: Some("camp <view>".to_string()),
                },
                Photo {
                    url: Some("https://example.org/b.jpg".to_string()),
                    caption: None,
                },
            ],
            persons: vec![],
        };
        let view = event_detail_view(&detail);
        let photo = view.photo.expect("first displayable photo expected");
        assert_eq!(photo.url, "https://example.org/a.jpg");
        assert_eq!(photo.caption_html, "camp &lt;view&gt;");
    }

    #[test]
    fn person_detail_view_renders_header_meta_and_links() {
        let detail = PersonDetail {
            id: 31,
            first_name: "Mary".to_string(),
            last_name: "Safford".to_string(),
            dob: Some("1834-12-31".to_string()),
            brief: None,
            biography: None,
            profile_photo_url: Some("https://example.org/safford.jpg".to_string()),
            events: vec![crate::model::person::PersonEventRef {
                id: 21,
                event_name: "Hospital work".to_string(),
                event_date: None,
                place_name: Some("Cairo".to_string()),
            }],
            places: vec![crate::model::person::PlaceNameRef {
                place_name: "St. <John>".to_string(),
            }],
        };
        let view = person_detail_view(&detail);
        assert_eq!(view.title_html, "Safford, Mary");
        assert_eq!(view.meta_html, "Born: 1834-12-31");
        assert_eq!(
            view.profile_photo_url.as_deref(),
            Some("https://example.org/safford.jpg")
        );
        assert_eq!(
            view.events[0].label_html,
            "Hospital work () \u{2013} Cairo"
        );
        assert_eq!(view.places[0], "St. &lt;John&gt;");
    }

    #[test]
    fn person_detail_without_dob_has_empty_meta() {
        let detail = PersonDetail {
            id: 31,
            first_name: "John".to_string(),
            last_name: "Logan".to_string(),
            dob: None,
            brief: None,
            biography: None,
            profile_photo_url: None,
            events: vec![],
            places: vec![],
        };
        let view = person_detail_view(&detail);
        assert_eq!(view.meta_html, "");
        assert!(view.profile_photo_url.is_none());
        assert!(view.events.is_empty());
    }
}
