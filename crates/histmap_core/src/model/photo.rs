//! Photo attachment model shared by place and event payloads.

use serde::Deserialize;

/// One photo attachment with optional caption.
///
/// The API may deliver entries without a resolvable URL (media row exists
/// but the file reference is empty); such entries are never displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Photo {
    /// Absolute media URL. Absent or empty means not displayable.
    #[serde(default)]
    pub url: Option<String>,
    /// Human caption shown under the image.
    #[serde(default)]
    pub caption: Option<String>,
}

impl Photo {
    /// Returns whether this photo can be shown (has a non-empty URL).
    pub fn is_displayable(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.trim().is_empty())
    }

    /// Caption text with the empty fallback applied.
    pub fn caption_text(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }
}
