//! HTML tag section.

use serde::{Deserialize, Serialize};

/// Quote character used around HTML attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotesType {
    #[default]
    Double,
    Single,
}

impl QuotesType {
    pub fn as_char(self) -> char {
        match self {
            QuotesType::Double => '"',
            QuotesType::Single => '\'',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    /// Render `data-src` and the `cld-responsive` class instead of `src`.
    pub responsive: bool,
    pub quotes_type: QuotesType,
    /// Format of the poster image generated for video tags.
    pub video_poster_format: String,
    /// Formats of the `<source>` elements generated for video tags, in order.
    pub video_sources: Vec<String>,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            responsive: false,
            quotes_type: QuotesType::Double,
            video_poster_format: "jpg".to_string(),
            video_sources: vec!["webm".to_string(), "mp4".to_string(), "ogv".to_string()],
        }
    }
}
