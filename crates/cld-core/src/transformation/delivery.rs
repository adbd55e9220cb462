//! Delivery actions: format, quality, DPR, color space, density and
//! the default image.

use std::fmt;

use super::layer::layer_id;
use super::value::{float, Value};
use super::{component_from_action, Action};
use crate::error::Error;

/// Delivery format (`f_`) with its format-specific flags.
#[derive(Debug, Clone)]
pub struct Format {
    name: String,
    flags: Vec<String>,
}

impl Format {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            flags: Vec::new(),
        }
    }

    /// Let the CDN pick the best format for the requesting browser.
    pub fn auto() -> Self {
        Self::new("auto")
    }

    pub fn png() -> Self {
        Self::new("png")
    }

    pub fn jpg() -> Self {
        Self::new("jpg")
    }

    pub fn webp() -> Self {
        Self::new("webp")
    }

    pub fn avif() -> Self {
        Self::new("avif")
    }

    pub fn gif() -> Self {
        Self::new("gif")
    }

    pub fn svg() -> Self {
        Self::new("svg")
    }

    pub fn mp4() -> Self {
        Self::new("mp4")
    }

    pub fn webm() -> Self {
        Self::new("webm")
    }

    /// Lossy compression for PNG, WebP and animated GIF.
    pub fn lossy(mut self) -> Self {
        self.flags.push("lossy".to_string());
        self
    }

    pub fn progressive(mut self) -> Self {
        self.flags.push("progressive".to_string());
        self
    }

    /// `semi`, `steep` or `none`.
    pub fn progressive_mode(mut self, mode: &str) -> Self {
        self.flags.push(format!("progressive:{mode}"));
        self
    }

    pub fn preserve_transparency(mut self) -> Self {
        self.flags.push("preserve_transparency".to_string());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<Format> for Action {
    fn from(format: Format) -> Self {
        let mut action = Action::new().with("f", format.name);
        for flag in format.flags {
            action.add_flag(flag);
        }
        action
    }
}

component_from_action!(Format);

/// Compression quality (`q_`): a level, an automatic preset or `jpegmini`.
#[derive(Debug, Clone)]
pub struct Quality {
    value: String,
    extra: Option<String>,
    any_format: bool,
    error: Option<Error>,
}

impl Quality {
    fn preset(value: &str) -> Self {
        Self {
            value: value.to_string(),
            extra: None,
            any_format: false,
            error: None,
        }
    }

    /// Numeric quality from 1 to 100.
    pub fn level(level: impl Into<Value>) -> Self {
        let level: Value = level.into();
        let mut q = Self::preset(&level.to_string());
        q.error = super::value::check_range("quality", &level, 1.0, 100.0);
        q
    }

    pub fn auto() -> Self {
        Self::preset("auto")
    }

    pub fn auto_best() -> Self {
        Self::preset("auto:best")
    }

    pub fn auto_good() -> Self {
        Self::preset("auto:good")
    }

    pub fn auto_eco() -> Self {
        Self::preset("auto:eco")
    }

    pub fn auto_low() -> Self {
        Self::preset("auto:low")
    }

    pub fn jpegmini() -> Self {
        Self::preset("jpegmini")
    }

    /// Chroma subsampling, e.g. `420` or `444`.
    pub fn chroma_sub_sampling(mut self, chroma: &str) -> Self {
        self.extra = Some(chroma.to_string());
        self
    }

    /// Maximum quantization for video.
    pub fn quantization(mut self, qmax: u32) -> Self {
        self.extra = Some(format!("qmax_{qmax}"));
        self
    }

    /// Apply automatic quality also to formats that normally skip it.
    pub fn any_format(mut self) -> Self {
        self.any_format = true;
        self
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extra {
            Some(extra) => write!(f, "{}:{extra}", self.value),
            None => f.write_str(&self.value),
        }
    }
}

impl From<Quality> for Action {
    fn from(q: Quality) -> Self {
        let mut action = Action::new().with("q", q.to_string());
        if q.any_format {
            action.add_flag("any_format");
        }
        if let Some(err) = q.error {
            action.record_error(err);
        }
        action
    }
}

component_from_action!(Quality);

/// Device pixel ratio: a number (rendered as a float) or `auto`.
#[derive(Debug, Clone, PartialEq)]
pub enum Dpr {
    Auto,
    Value(Value),
}

impl fmt::Display for Dpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dpr::Auto => f.write_str("auto"),
            Dpr::Value(v) => v.fmt(f),
        }
    }
}

impl From<f64> for Dpr {
    fn from(v: f64) -> Self {
        Dpr::Value(float(v))
    }
}

impl From<u32> for Dpr {
    fn from(v: u32) -> Self {
        Dpr::Value(float(v))
    }
}

impl From<i32> for Dpr {
    fn from(v: i32) -> Self {
        Dpr::Value(float(v))
    }
}

impl From<&str> for Dpr {
    fn from(v: &str) -> Self {
        if v == "auto" {
            Dpr::Auto
        } else {
            Dpr::Value(float(v))
        }
    }
}

/// Color space (`cs_`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpace(String);

impl ColorSpace {
    pub fn srgb() -> Self {
        Self("srgb".to_string())
    }

    pub fn tiny_srgb() -> Self {
        Self("tinysrgb".to_string())
    }

    pub fn cmyk() -> Self {
        Self("cmyk".to_string())
    }

    pub fn no_cmyk() -> Self {
        Self("no_cmyk".to_string())
    }

    pub fn keep_cmyk() -> Self {
        Self("keep_cmyk".to_string())
    }

    pub fn srgb_true_color() -> Self {
        Self("srgb:truecolor".to_string())
    }

    pub fn copy() -> Self {
        Self("copy".to_string())
    }

    /// A custom ICC profile uploaded as a raw asset.
    pub fn icc(public_id: &str) -> Self {
        Self(format!("icc:{public_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Constructors for single-qualifier delivery actions.
pub struct Delivery;

impl Delivery {
    pub fn format(format: Format) -> Action {
        format.into()
    }

    pub fn quality(quality: Quality) -> Action {
        quality.into()
    }

    pub fn dpr(dpr: impl Into<Dpr>) -> Action {
        let dpr: Dpr = dpr.into();
        Action::new().with("dpr", dpr.to_string())
    }

    pub fn color_space(space: ColorSpace) -> Action {
        Action::new().with("cs", space.0)
    }

    /// Density (dpi) for PDF and vector rasterization, 1 to 300.
    pub fn density(dpi: impl Into<Value>) -> Action {
        let mut action = Action::new();
        action.set_checked("density", "dn", dpi.into(), 1.0, 300.0);
        action
    }

    /// Image delivered in place of a missing asset; folders use `:`.
    pub fn default_image(public_id: &str) -> Action {
        Action::new().with("d", layer_id(public_id))
    }
}
