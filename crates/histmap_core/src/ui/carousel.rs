//! Photo carousel for the place-level gallery.
//!
//! # Responsibility
//! - Hold the displayable-photo sequence of the currently open place and
//!   the position within it.
//! - Provide circular next/previous stepping and the position counter.
//!
//! # Invariants
//! - Only photos with a non-empty URL enter the sequence.
//! - `index < photos.len()` whenever the sequence is non-empty.
//! - Stepping an empty sequence is a no-op; the gallery region is hidden.

use crate::model::photo::Photo;

/// Ordered photo sequence with the currently displayed index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoCarousel {
    photos: Vec<Photo>,
    index: usize,
}

impl PhotoCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the sequence with the displayable subset of `photos` and
    /// resets the index to 0.
    pub fn load(&mut self, photos: &[Photo]) {
        self.photos = photos
            .iter()
            .filter(|photo| photo.is_displayable())
            .cloned()
            .collect();
        self.index = 0;
    }

    /// Empties the sequence, hiding the gallery.
    pub fn clear(&mut self) {
        self.photos.clear();
        self.index = 0;
    }

    /// The gallery region is shown only when at least one photo is loaded.
    pub fn is_visible(&self) -> bool {
        !self.photos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Currently displayed photo, if any.
    pub fn current(&self) -> Option<&Photo> {
        self.photos.get(self.index)
    }

    /// Steps forward, wrapping from the last photo to the first.
    pub fn next(&mut self) {
        if self.photos.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.photos.len();
    }

    /// Steps backward, wrapping from the first photo to the last.
    ///
    /// The wrap adds the length before taking the modulo so the index
    /// arithmetic never underflows.
    pub fn previous(&mut self) {
        if self.photos.is_empty() {
            return;
        }
        self.index = (self.index + self.photos.len() - 1) % self.photos.len();
    }

    /// `"i+1 / N"` position counter; `None` while the sequence is empty.
    pub fn counter(&self) -> Option<String> {
        if self.photos.is_empty() {
            return None;
        }
        Some(format!("{} / {}", self.index + 1, self.photos.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::PhotoCarousel;
    use crate::model::photo::Photo;

    fn photo(url: &str) -> Photo {
        Photo {
            url: Some(url.to_string()),
            caption: None,
        }
    }

    fn loaded(count: usize) -> PhotoCarousel {
        let photos: Vec<Photo> = (0..count)
            .map(|n| photo(&format!("https://example.org/{n}.jpg")))
            .collect();
        let mut carousel = PhotoCarousel::new();
        carousel.load(&photos);
        carousel
    }

    #[test]
    fn previous_at_zero_wraps_to_last() {
        let mut carousel = loaded(4);
        assert_eq!(carousel.index(), 0);
        carousel.previous();
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn next_at_last_wraps_to_zero() {
        let mut carousel = loaded(4);
        for _ in 0..3 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 3);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn single_photo_wraps_onto_itself() {
        let mut carousel = loaded(1);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.previous();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn empty_sequence_is_noop_and_hidden() {
        let mut carousel = PhotoCarousel::new();
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_visible());
        assert!(carousel.current().is_none());
        assert!(carousel.counter().is_none());
    }

    #[test]
    fn load_filters_out_photos_without_url() {
        let mut carousel = PhotoCarousel::new();
        carousel.load(&[
            Photo {
                url: None,
                caption: Some("lost".to_string()),
            },
            photo("https://example.org/kept.jpg"),
            Photo {
                url: Some(String::new()),
                caption: None,
            },
        ]);
        assert_eq!(carousel.len(), 1);
        assert!(carousel.is_visible());
        assert_eq!(
            carousel.current().and_then(|p| p.url.as_deref()),
            Some("https://example.org/kept.jpg")
        );
    }

    #[test]
    fn counter_is_one_based_over_total() {
        let mut carousel = loaded(3);
        assert_eq!(carousel.counter().as_deref(), Some("1 / 3"));
        carousel.next();
        assert_eq!(carousel.counter().as_deref(), Some("2 / 3"));
    }

    #[test]
    fn load_resets_index_to_zero() {
        let mut carousel = loaded(3);
        carousel.next();
        carousel.load(&[photo("https://example.org/fresh.jpg")]);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.len(), 1);
    }
}
