//! Overlays and underlays.
//!
//! A layer renders as up to three actions: the opening action with the
//! `l_`/`u_` qualifier, the source's own transformation, and the closing
//! `fl_layer_apply` action carrying placement, blending and timing.

mod source;
mod text;

use std::fmt;

pub use self::source::Source;
pub use self::text::TextStyle;

pub(crate) use self::source::layer_id;

use super::{Action, Gravity, Value};
use crate::error::Error;

/// Whether the source goes above or below the base asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerStack {
    Overlay,
    Underlay,
}

impl LayerStack {
    pub fn key(self) -> &'static str {
        match self {
            LayerStack::Overlay => "l",
            LayerStack::Underlay => "u",
        }
    }
}

/// Entry point for overlays: `Overlay::source(Source::image("logo"))`.
pub struct Overlay;

impl Overlay {
    pub fn source(source: Source) -> Layer {
        Layer::new(LayerStack::Overlay, source)
    }
}

/// Entry point for underlays.
pub struct Underlay;

impl Underlay {
    pub fn source(source: Source) -> Layer {
        Layer::new(LayerStack::Underlay, source)
    }
}

/// Where the layer is placed on the base asset.
#[derive(Debug, Clone, Default)]
pub struct Position {
    gravity: Option<Gravity>,
    x: Option<Value>,
    y: Option<Value>,
    tiled: bool,
    allow_overflow: Option<bool>,
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gravity(mut self, gravity: impl Into<Gravity>) -> Self {
        self.gravity = Some(gravity.into());
        self
    }

    pub fn offset_x(mut self, x: impl Into<Value>) -> Self {
        self.x = Some(x.into());
        self
    }

    pub fn offset_y(mut self, y: impl Into<Value>) -> Self {
        self.y = Some(y.into());
        self
    }

    /// Repeat the layer across the whole base asset.
    pub fn tiled(mut self) -> Self {
        self.tiled = true;
        self
    }

    /// `false` keeps the layer inside the base asset (`fl_no_overflow`).
    pub fn allow_overflow(mut self, allow: bool) -> Self {
        self.allow_overflow = Some(allow);
        self
    }

    fn apply_to(&self, action: &mut Action) {
        if let Some(g) = &self.gravity {
            action.set("g", g.clone());
        }
        if let Some(x) = &self.x {
            action.set("x", x.clone());
        }
        if let Some(y) = &self.y {
            action.set("y", y.clone());
        }
        if self.tiled {
            action.add_flag("tiled");
        }
        if self.allow_overflow == Some(false) {
            action.add_flag("no_overflow");
        }
    }
}

/// How layer pixels combine with the base asset, rendered as `e_<mode>`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendMode(String);

impl BlendMode {
    pub fn multiply() -> Self {
        Self("multiply".to_string())
    }

    pub fn screen() -> Self {
        Self("screen".to_string())
    }

    pub fn overlay() -> Self {
        Self("overlay".to_string())
    }

    pub fn mask() -> Self {
        Self("mask".to_string())
    }

    /// Blend that resists watermark removal, with an optional level.
    pub fn anti_removal(level: Option<u32>) -> Self {
        match level {
            Some(level) => Self(format!("anti_removal:{level}")),
            None => Self("anti_removal".to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// When a video layer is visible, in seconds (or `p` percentages as strings).
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    start_offset: Option<Value>,
    end_offset: Option<Value>,
    duration: Option<Value>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_offset(mut self, offset: impl Into<Value>) -> Self {
        self.start_offset = Some(offset.into());
        self
    }

    pub fn end_offset(mut self, offset: impl Into<Value>) -> Self {
        self.end_offset = Some(offset.into());
        self
    }

    pub fn duration(mut self, duration: impl Into<Value>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    fn apply_to(&self, action: &mut Action) {
        if let Some(so) = &self.start_offset {
            action.set("so", so.clone());
        }
        if let Some(eo) = &self.end_offset {
            action.set("eo", eo.clone());
        }
        if let Some(du) = &self.duration {
            action.set("du", du.clone());
        }
    }
}

/// A source placed over or under the base asset.
#[derive(Debug, Clone)]
pub struct Layer {
    stack: LayerStack,
    source: Source,
    position: Option<Position>,
    blend_mode: Option<BlendMode>,
    timeline: Option<Timeline>,
    apply: Action,
}

impl Layer {
    pub fn new(stack: LayerStack, source: Source) -> Self {
        Self {
            stack,
            source,
            position: None,
            blend_mode: None,
            timeline: None,
            apply: Action::new(),
        }
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = Some(mode);
        self
    }

    pub fn timeline(mut self, timeline: Timeline) -> Self {
        self.timeline = Some(timeline);
        self
    }

    pub fn stack(&self) -> LayerStack {
        self.stack
    }

    pub fn source_ref(&self) -> &Source {
        &self.source
    }

    /// Extra qualifier on the closing `fl_layer_apply` action.
    pub(crate) fn with_apply_qualifier(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.apply.set(key, value);
        self
    }

    /// Extra flag on the closing `fl_layer_apply` action.
    pub(crate) fn with_apply_flag(mut self, flag: &str) -> Self {
        self.apply.add_flag(flag);
        self
    }

    fn closing_action(&self) -> Action {
        let mut action = self.apply.clone().with_flag("layer_apply");
        if let Some(position) = &self.position {
            position.apply_to(&mut action);
        }
        if let Some(mode) = &self.blend_mode {
            action.set("e", mode.as_str());
        }
        if let Some(timeline) = &self.timeline {
            timeline.apply_to(&mut action);
        }
        action
    }

    pub(crate) fn collect_errors(&self, out: &mut Vec<Error>) {
        self.source.collect_errors(out);
        out.extend(self.apply.errors().iter().cloned());
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            self.source.opening_action(self.stack.key()).to_string(),
            self.source.source_transformation().to_string(),
            self.closing_action().to_string(),
        ];
        let parts: Vec<&str> = parts.iter().map(String::as_str).filter(|s| !s.is_empty()).collect();
        f.write_str(&parts.join("/"))
    }
}
