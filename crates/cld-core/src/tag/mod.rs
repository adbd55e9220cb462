//! HTML `<img>` and `<video>` tags pointing at delivery URLs.

mod image;
mod video;

use std::collections::BTreeMap;

pub use self::image::{image_tag, ImageTag, SrcSet};
pub use self::video::{Poster, VideoTag};

use crate::config::QuotesType;
use crate::escape::html_escape;

/// HTML attributes, rendered sorted by name.
pub type Attributes = BTreeMap<String, String>;

/// ` name="value"` pairs; empty values render as bare boolean attributes.
pub(crate) fn render_attributes(attributes: &Attributes, quotes: QuotesType) -> String {
    let q = quotes.as_char();
    attributes
        .iter()
        .map(|(name, value)| {
            if value.is_empty() {
                format!(" {name}")
            } else {
                format!(" {name}={q}{}{q}", html_escape(value))
            }
        })
        .collect()
}

/// Append `class` to a space separated class attribute.
pub(crate) fn add_class(attributes: &mut Attributes, class: &str) {
    let classes = attributes.entry("class".to_string()).or_default();
    if !classes.split_whitespace().any(|c| c == class) {
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(class);
    }
}
