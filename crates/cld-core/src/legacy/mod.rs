//! Transformation strings from loosely typed option maps.
//!
//! Accepts the option hashes older integrations pass around
//! (`{"width": 100, "crop": "fill", "effect": "sepia"}`) as
//! `serde_json` values and renders the same transformation grammar as
//! the typed builder.

mod layer;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::transformation::{format_float, normalize_expression};

use self::layer::process_layer;

/// Option name for each qualifier that is copied through unchanged.
const SIMPLE_PARAMS: [(&str, &str); 18] = [
    ("ac", "audio_codec"),
    ("af", "audio_frequency"),
    ("br", "bit_rate"),
    ("cs", "color_space"),
    ("d", "default_image"),
    ("dl", "delay"),
    ("dn", "density"),
    ("du", "duration"),
    ("eo", "end_offset"),
    ("f", "fetch_format"),
    ("g", "gravity"),
    ("ki", "keyframe_interval"),
    ("p", "prefix"),
    ("pg", "page"),
    ("so", "start_offset"),
    ("sp", "streaming_profile"),
    ("vc", "video_codec"),
    ("vs", "video_sampling"),
];

const RESPONSIVE_WIDTH_TRANSFORMATION: &str = "c_limit,w_auto";

/// Render `options` (an object, or an array of objects / strings for
/// chained transformations) into a transformation string.
pub fn generate_transformation_string(options: &Value) -> Result<String> {
    generate(options, false)
}

/// Like [`generate_transformation_string`], but keeps `width` and `height`
/// even without a crop mode (as eager and incoming transformations do).
pub fn generate_with_implicit_crop(options: &Value) -> Result<String> {
    generate(options, true)
}

fn generate(options: &Value, allow_implicit_crop: bool) -> Result<String> {
    match options {
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                let part = match item {
                    Value::Object(_) => generate(item, allow_implicit_crop)?,
                    other => {
                        let mut map = Map::new();
                        map.insert("transformation".to_string(), other.clone());
                        from_map(&map, allow_implicit_crop)?
                    }
                };
                parts.push(part);
            }
            Ok(join_non_empty(parts, "/"))
        }
        Value::Object(map) => from_map(map, allow_implicit_crop),
        Value::Null => Ok(String::new()),
        other => Err(Error::invalid_option(
            "transformation",
            format!("expected an object or array, got {other}"),
        )),
    }
}

fn from_map(options: &Map<String, Value>, allow_implicit_crop: bool) -> Result<String> {
    let opt = |key: &str| options.get(key).filter(|v| !v.is_null());
    let text = |key: &str| opt(key).and_then(scalar).filter(|s| !s.is_empty());

    let responsive_width = opt("responsive_width").is_some_and(is_truthy);

    let (mut width, mut height) = match text("size") {
        Some(size) => {
            let (w, h) = size.split_once('x').unwrap_or((size.as_str(), ""));
            (non_empty(w), non_empty(h))
        }
        None => (text("width"), text("height")),
    };
    let has_layer = text("overlay").is_some()
        || text("underlay").is_some()
        || opt("overlay").is_some_and(Value::is_object)
        || opt("underlay").is_some_and(Value::is_object);
    let crop = text("crop");
    let width_is_auto = width.as_deref().is_some_and(|w| w.starts_with("auto"));
    if crop.is_none() && !has_layer && !width_is_auto && !allow_implicit_crop {
        width = None;
        height = None;
    }

    let angle = match opt("angle") {
        Some(Value::Array(items)) => non_empty(&join_scalars(items, ".")),
        Some(v) => scalar(v),
        None => None,
    };
    let background = text("background").map(|c| hash_to_rgb(&c));
    let color = text("color").map(|c| hash_to_rgb(&c));

    let (base_transformations, named) = base_transformations(opt("transformation"), allow_implicit_crop)?;

    let effect = match opt("effect") {
        Some(Value::Array(items)) => non_empty(&join_scalars(items, ":")),
        Some(Value::Object(map)) => map
            .iter()
            .next()
            .map(|(k, v)| format!("{k}:{}", scalar(v).unwrap_or_default())),
        Some(v) => scalar(v),
        None => None,
    };

    let border = match opt("border") {
        Some(Value::Object(map)) => {
            let width = map.get("width").and_then(scalar).unwrap_or_else(|| "2".to_string());
            let color = map
                .get("color")
                .and_then(scalar)
                .unwrap_or_else(|| "black".to_string());
            Some(format!("{width}px_solid_{}", hash_to_rgb(&color)))
        }
        // A bare number is an HTML border attribute, not a transformation.
        Some(Value::Number(_)) => None,
        Some(v) => scalar(v).filter(|s| !s.chars().all(|c| c.is_ascii_digit())),
        None => None,
    };

    let flags = match opt("flags") {
        Some(Value::Array(items)) => non_empty(&join_scalars(items, ".")),
        Some(v) => scalar(v),
        None => None,
    };

    let (mut start_offset, mut end_offset) = (text("start_offset"), text("end_offset"));
    if let Some(offset) = opt("offset") {
        let (so, eo) = split_range(offset);
        start_offset = so;
        end_offset = eo;
    }

    let fps = match opt("fps") {
        Some(Value::Array(items)) => non_empty(&join_scalars(items, "-")),
        Some(v) => scalar(v),
        None => None,
    };

    let overlay = process_layer(opt("overlay"))?;
    let underlay = process_layer(opt("underlay"))?;
    let if_value = text("if").map(|cond| format!("if_{}", normalize_expression(&cond)));
    let custom_function = match (opt("custom_function"), opt("custom_pre_function")) {
        (Some(f), _) => process_custom_function(f)?,
        (None, Some(f)) => process_custom_function(f)?.map(|f| format!("pre:{f}")),
        (None, None) => None,
    };

    let expr = |v: Option<String>| v.map(|s| normalize_expression(&s)).filter(|s| !s.is_empty());
    let mut params: Vec<(&str, Option<String>)> = vec![
        ("a", expr(angle)),
        ("ar", expr(text("aspect_ratio"))),
        ("b", background),
        ("bo", border),
        ("c", crop),
        ("co", color),
        ("dpr", expr(text("dpr"))),
        ("e", expr(effect)),
        ("fl", flags),
        ("fn", custom_function),
        ("fps", fps),
        ("h", expr(height)),
        ("l", overlay),
        ("o", expr(text("opacity"))),
        ("q", expr(text("quality"))),
        ("r", process_radius(opt("radius"))),
        ("t", named),
        ("u", underlay),
        ("w", expr(width)),
        ("x", expr(text("x"))),
        ("y", expr(text("y"))),
        ("z", expr(text("zoom"))),
    ];
    for (key, option) in SIMPLE_PARAMS {
        let value = match key {
            "so" => start_offset.clone().map(|v| norm_range_value(&v)),
            "eo" => end_offset.clone().map(|v| norm_range_value(&v)),
            "du" => text(option).map(|v| norm_range_value(&v)),
            "vc" => opt(option).and_then(process_video_codec),
            _ => text(option),
        };
        params.push((key, value));
    }

    let mut rendered: Vec<String> = params
        .into_iter()
        .filter_map(|(k, v)| v.filter(|v| !v.is_empty()).map(|v| format!("{k}_{v}")))
        .collect();
    rendered.sort();

    let variables = variables(options, opt("variables"));
    let raw = text("raw_transformation");
    let action = join_non_empty(
        [if_value, non_empty(&variables), non_empty(&rendered.join(",")), raw]
            .into_iter()
            .flatten()
            .collect(),
        ",",
    );

    let mut transformations = base_transformations;
    transformations.push(action);
    if responsive_width {
        transformations.push(RESPONSIVE_WIDTH_TRANSFORMATION.to_string());
    }
    Ok(join_non_empty(transformations, "/"))
}

/// Chained transformations (when any entry is a map) or named
/// transformations joined with `.`.
fn base_transformations(
    value: Option<&Value>,
    allow_implicit_crop: bool,
) -> Result<(Vec<String>, Option<String>)> {
    let items: Vec<&Value> = match value {
        None => return Ok((Vec::new(), None)),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
    };
    if items.iter().any(|v| v.is_object()) {
        let mut chained = Vec::with_capacity(items.len());
        for item in items {
            if item.is_object() {
                chained.push(generate(item, allow_implicit_crop)?);
            } else if let Some(name) = scalar(item) {
                chained.push(format!("t_{name}"));
            }
        }
        Ok((chained, None))
    } else {
        let names: Vec<String> = items.into_iter().filter_map(scalar).collect();
        Ok((Vec::new(), non_empty(&names.join("."))))
    }
}

/// `variables` pairs in order, then `$name` keys sorted.
fn variables(options: &Map<String, Value>, list: Option<&Value>) -> String {
    let mut keyed: Vec<String> = options
        .iter()
        .filter(|(k, _)| k.starts_with('$'))
        .map(|(k, v)| format!("{k}_{}", normalize_expression(&scalar(v).unwrap_or_default())))
        .collect();
    keyed.sort();

    let mut listed = Vec::new();
    if let Some(Value::Array(pairs)) = list {
        for pair in pairs {
            if let Some([name, value]) = pair.as_array().map(Vec::as_slice) {
                if let (Some(name), Some(value)) = (scalar(name), scalar(value)) {
                    listed.push(format!("{name}_{}", normalize_expression(&value)));
                }
            }
        }
    }
    listed.extend(keyed);
    listed.join(",")
}

/// `{codec, profile, level}` → `codec[:profile[:level]]`.
fn process_video_codec(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => {
            let codec = map.get("codec").and_then(scalar)?;
            let mut out = codec;
            if let Some(profile) = map.get("profile").and_then(scalar) {
                out.push(':');
                out.push_str(&profile);
                if let Some(level) = map.get("level").and_then(scalar) {
                    out.push(':');
                    out.push_str(&level);
                }
            }
            Some(out)
        }
        other => scalar(other),
    }
}

/// One to four radii joined with `:`, or a single value / expression.
fn process_radius(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Array(items) => {
            let radii: Vec<String> = items
                .iter()
                .filter_map(scalar)
                .map(|r| normalize_expression(&r))
                .collect();
            non_empty(&radii.join(":"))
        }
        other => scalar(other).map(|r| normalize_expression(&r)),
    }
}

/// `{function_type: "wasm" | "remote", source}`.
fn process_custom_function(value: &Value) -> Result<Option<String>> {
    let Value::Object(map) = value else {
        return Ok(scalar(value));
    };
    let kind = map.get("function_type").and_then(scalar).unwrap_or_default();
    let source = map.get("source").and_then(scalar).unwrap_or_default();
    match kind.as_str() {
        "remote" => Ok(Some(format!("remote:{}", URL_SAFE.encode(source)))),
        "wasm" => Ok(Some(format!("wasm:{}", source.replace('/', ":")))),
        other => Err(Error::invalid_option(
            "custom_function",
            format!("unknown function_type {other:?}"),
        )),
    }
}

/// `"2.5..3"`, `[2.5, 3]` → start and end offsets.
fn split_range(value: &Value) -> (Option<String>, Option<String>) {
    match value {
        Value::Array(items) => (
            items.first().and_then(scalar),
            items.get(1).and_then(scalar),
        ),
        other => match scalar(other) {
            Some(s) => match s.split_once("..") {
                Some((a, b)) => (non_empty(a), non_empty(b)),
                None => (non_empty(&s), None),
            },
            None => (None, None),
        },
    }
}

/// Offsets: `35%` / `35p` become `35p`, plain numbers pass, anything else
/// (`auto`, expressions) is left alone.
fn norm_range_value(value: &str) -> String {
    let (number, modifier) = match value.strip_suffix(['%', 'p', 'P']) {
        Some(n) => (n, "p"),
        None => (value, ""),
    };
    let is_number = !number.is_empty()
        && number.chars().all(|c| c.is_ascii_digit() || c == '.')
        && number.matches('.').count() <= 1
        && !number.starts_with('.')
        && !number.ends_with('.');
    if is_number {
        format!("{number}{modifier}")
    } else {
        value.to_string()
    }
}

/// String form of a scalar option value; numbers keep their integer or
/// float rendering.
pub(crate) fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => format_float(f),
            _ => n.to_string(),
        }),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn join_scalars(items: &[Value], sep: &str) -> String {
    items.iter().filter_map(scalar).collect::<Vec<_>>().join(sep)
}

fn join_non_empty(parts: Vec<String>, sep: &str) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::String(s) => !s.is_empty() && s != "false",
        _ => true,
    }
}

fn hash_to_rgb(color: &str) -> String {
    match color.strip_prefix('#') {
        Some(hex) => format!("rgb:{hex}"),
        None => color.to_string(),
    }
}
