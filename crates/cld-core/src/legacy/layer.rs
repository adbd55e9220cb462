//! `overlay` / `underlay` option values: a layer string, or a map with
//! public id, resource type, text and font settings.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde_json::{Map, Value};

use super::scalar;
use crate::error::{Error, Result};
use crate::escape::escape_layer_text;

/// Keywords with the value that is left out of the style.
const KEYWORDS: [(&str, Option<&str>); 5] = [
    ("font_weight", Some("normal")),
    ("font_style", Some("normal")),
    ("text_decoration", Some("none")),
    ("text_align", None),
    ("stroke", Some("none")),
];

pub(crate) fn process_layer(layer: Option<&Value>) -> Result<Option<String>> {
    match layer {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => layer_from_map(map).map(Some),
        Some(other) => Ok(scalar(other).filter(|s| !s.is_empty())),
    }
}

fn get(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(scalar).filter(|s| !s.is_empty())
}

fn layer_from_map(map: &Map<String, Value>) -> Result<String> {
    let mut resource_type = get(map, "resource_type").unwrap_or_else(|| "image".to_string());
    let mut delivery_type = get(map, "type").unwrap_or_else(|| "upload".to_string());
    let format = get(map, "format");
    let text = get(map, "text");

    let public_id = get(map, "public_id").map(|id| {
        if delivery_type == "fetch" && is_remote(&id) {
            URL_SAFE.encode(id)
        } else {
            let id = id.replace('/', ":");
            match &format {
                Some(fmt) => format!("{id}.{fmt}"),
                None => id,
            }
        }
    });

    let mut style = None;
    let mut escaped_text = None;
    if text.is_none() && resource_type != "text" {
        if public_id.is_none() && delivery_type != "fetch" {
            return Err(Error::InvalidLayer(
                "must supply public_id for non-text layers".to_string(),
            ));
        }
        if resource_type == "subtitles" {
            style = text_style(map)?;
        }
    } else {
        resource_type = "text".to_string();
        delivery_type = String::new();
        style = text_style(map)?;
        if let Some(text) = &text {
            if public_id.is_some() == style.is_some() {
                return Err(Error::InvalidLayer(
                    "text layers need either style parameters or a public_id".to_string(),
                ));
            }
            escaped_text = Some(escape_layer_text(text));
        }
    }

    let mut components = Vec::new();
    if resource_type != "image" {
        components.push(resource_type);
    }
    if delivery_type != "upload" {
        components.push(delivery_type);
    }
    components.extend(style);
    components.extend(public_id);
    components.extend(escaped_text);
    Ok(components
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(":"))
}

/// `family_size[_keywords...]`, or an explicit `text_style`.
fn text_style(map: &Map<String, Value>) -> Result<Option<String>> {
    if let Some(style) = get(map, "text_style") {
        return Ok(Some(style));
    }
    let family = get(map, "font_family");
    let size = get(map, "font_size");

    let mut keywords = Vec::new();
    for (attr, default) in KEYWORDS {
        if let Some(value) = get(map, attr) {
            if Some(value.as_str()) != default {
                keywords.push(value);
            }
        }
    }
    for (attr, prefix) in [
        ("letter_spacing", "letter_spacing"),
        ("line_spacing", "line_spacing"),
        ("font_antialiasing", "antialias"),
        ("font_hinting", "hinting"),
    ] {
        if let Some(value) = get(map, attr) {
            keywords.push(format!("{prefix}_{value}"));
        }
    }

    if family.is_none() && size.is_none() && keywords.is_empty() {
        return Ok(None);
    }
    let family =
        family.ok_or_else(|| Error::InvalidLayer("must supply font_family for text layers".to_string()))?;
    let size =
        size.ok_or_else(|| Error::InvalidLayer("must supply font_size for text layers".to_string()))?;
    let mut parts = vec![family, size];
    parts.extend(keywords);
    Ok(Some(parts.join("_")))
}

fn is_remote(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    lower.starts_with("http:/") || lower.starts_with("https:/")
}
