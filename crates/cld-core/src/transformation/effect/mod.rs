//! Visual and video effects (`e_` actions).

mod styled;
mod video;

use super::qualifier::with_args;
use super::value::{check_one_of, check_range};
use super::{component_from_action, Action, Args, Color, Layer, Overlay, Source, Value};

pub use self::styled::{BlurRegion, Cartoonify, GradientFade, Outline, Shadow, Theme, Vectorize};
pub use self::video::Preview;

/// An `e_<name>[:args]` action with optional side qualifiers (`co_`, `x_`, ...).
#[derive(Debug, Clone)]
pub struct EffectAction {
    name: String,
    args: Args,
    action: Action,
    constraint: Option<Constraint>,
}

/// Accepted values of the first argument.
#[derive(Debug, Clone, Copy)]
enum Constraint {
    Range(&'static str, f64, f64),
    OneOf(&'static str, &'static [f64]),
}

impl EffectAction {
    /// Effect without a level constraint.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Args::new(),
            action: Action::new(),
            constraint: None,
        }
    }

    /// Effect whose first argument (the level) must lie within `min..=max`.
    pub(crate) fn ranged(name: &'static str, min: f64, max: f64) -> Self {
        Self {
            constraint: Some(Constraint::Range(name, min, max)),
            ..Self::new(name)
        }
    }

    /// Effect whose first argument must be one of `allowed`.
    pub(crate) fn one_of(name: &'static str, allowed: &'static [f64]) -> Self {
        Self {
            constraint: Some(Constraint::OneOf(name, allowed)),
            ..Self::new(name)
        }
    }

    /// Effect whose arguments name themselves; unset ones are left out.
    pub(crate) fn labelled(name: impl Into<String>) -> Self {
        Self {
            args: Args::labelled(),
            ..Self::new(name)
        }
    }

    /// Argument `index` is a keyword that may be omitted when unset.
    pub(crate) fn keyword_slot(mut self, index: usize) -> Self {
        self.args.keyword_slot(index);
        self
    }

    /// Range check the first argument under the given label.
    pub(crate) fn with_range(mut self, label: &'static str, min: f64, max: f64) -> Self {
        self.constraint = Some(Constraint::Range(label, min, max));
        self
    }

    /// Strength / amount of the effect (first argument).
    pub fn level(self, level: impl Into<Value>) -> Self {
        self.arg(0, level)
    }

    /// Set the argument at `index`; index 0 is checked against the constraint.
    pub fn arg(mut self, index: usize, value: impl Into<Value>) -> Self {
        let value: Value = value.into();
        if index == 0 {
            let err = match self.constraint {
                Some(Constraint::Range(name, min, max)) => check_range(name, &value, min, max),
                Some(Constraint::OneOf(name, allowed)) => check_one_of(name, &value, allowed),
                None => None,
            };
            if let Some(err) = err {
                self.action.record_error(err);
            }
        }
        self.args.set(index, value);
        self
    }

    /// Color the effect applies (`co_`).
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        let color: Color = color.into();
        self.action.set("co", color);
        self
    }

    pub(crate) fn qualifier(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.action.set(key, value);
        self
    }

    pub(crate) fn record_range(&mut self, name: &'static str, value: &Value, min: f64, max: f64) {
        if let Some(err) = check_range(name, value, min, max) {
            self.action.record_error(err);
        }
    }

    /// The `e_` value: name plus arguments.
    pub fn effect_value(&self) -> String {
        with_args(&self.name, &self.args)
    }
}

impl From<EffectAction> for Action {
    fn from(e: EffectAction) -> Self {
        let value = e.effect_value();
        e.action.with("e", value)
    }
}

component_from_action!(EffectAction);

/// Constructors for image effects. Video effects live in the same namespace.
#[derive(Debug, Clone, Copy)]
pub struct Effect;

impl Effect {
    /// Any effect by name, for effects without a dedicated builder.
    pub fn named(name: &str) -> EffectAction {
        EffectAction::new(name)
    }

    pub fn sepia() -> EffectAction {
        EffectAction::ranged("sepia", 1.0, 100.0)
    }

    pub fn grayscale() -> EffectAction {
        EffectAction::new("grayscale")
    }

    /// Black and white with an optional threshold.
    pub fn blackwhite() -> EffectAction {
        EffectAction::ranged("blackwhite", 0.0, 100.0)
    }

    pub fn negate() -> EffectAction {
        EffectAction::new("negate")
    }

    pub fn blur() -> EffectAction {
        EffectAction::ranged("blur", 1.0, 2000.0)
    }

    pub fn blur_faces() -> EffectAction {
        EffectAction::ranged("blur_faces", 1.0, 2000.0)
    }

    pub fn blur_region() -> BlurRegion {
        BlurRegion::new("blur_region", 1.0, 2000.0)
    }

    pub fn pixelate() -> EffectAction {
        EffectAction::ranged("pixelate", 1.0, 200.0)
    }

    pub fn pixelate_faces() -> EffectAction {
        EffectAction::ranged("pixelate_faces", 1.0, 200.0)
    }

    pub fn pixelate_region() -> BlurRegion {
        BlurRegion::new("pixelate_region", 1.0, 200.0)
    }

    pub fn vignette() -> EffectAction {
        EffectAction::ranged("vignette", 0.0, 100.0)
    }

    pub fn oil_paint() -> EffectAction {
        EffectAction::ranged("oil_paint", 0.0, 100.0)
    }

    pub fn red_eye() -> EffectAction {
        EffectAction::new("redeye")
    }

    pub fn advanced_red_eye() -> EffectAction {
        EffectAction::new("adv_redeye")
    }

    /// Legacy background removal (`e_bgremoval`), optionally keyed on a color.
    pub fn remove_background() -> EffectAction {
        EffectAction::new("bgremoval")
    }

    /// AI based background removal.
    pub fn background_removal() -> EffectAction {
        EffectAction::new("background_removal")
    }

    pub fn noise() -> EffectAction {
        EffectAction::ranged("noise", 0.0, 100.0)
    }

    /// One of the named artistic filters (`al_dente`, `athena`, `zorro`, ...).
    pub fn artistic_filter(filter: &str) -> EffectAction {
        EffectAction::new("art").arg(0, filter)
    }

    pub fn cartoonify() -> Cartoonify {
        Cartoonify::new()
    }

    pub fn outline() -> Outline {
        Outline::new()
    }

    pub fn shadow() -> Shadow {
        Shadow::new()
    }

    /// Colorize by `level` percent; set the color with [`EffectAction::color`].
    pub fn colorize() -> EffectAction {
        EffectAction::ranged("colorize", 0.0, 100.0)
    }

    pub fn gradient_fade() -> GradientFade {
        GradientFade::new()
    }

    /// Make a color transparent within a tolerance (the level).
    pub fn make_transparent() -> EffectAction {
        EffectAction::ranged("make_transparent", 0.0, 100.0)
    }

    pub fn vectorize() -> Vectorize {
        Vectorize::new()
    }

    pub fn theme(color: impl Into<Color>) -> Theme {
        Theme::new(color.into())
    }

    /// Stripes that help color blind viewers tell colors apart.
    pub fn assist_color_blind() -> EffectAction {
        EffectAction::ranged("assist_colorblind", 1.0, 100.0)
    }

    /// X-ray style color blind assistance.
    pub fn assist_color_blind_xray() -> EffectAction {
        EffectAction::new("assist_colorblind").arg(0, "xray")
    }

    /// `deuteranopia`, `protanopia`, `tritanopia`, `cone_monochromacy`, ...
    pub fn simulate_color_blind(condition: &str) -> EffectAction {
        EffectAction::new("simulate_colorblind").arg(0, condition)
    }

    pub fn ordered_dither() -> EffectAction {
        EffectAction::ranged("ordered_dither", 0.0, 18.0)
    }

    /// Apply the style of `source` to the asset.
    pub fn style_transfer(source: Source) -> Layer {
        Overlay::source(source).with_apply_qualifier("e", "style_transfer")
    }

    /// Style transfer that keeps the colors of the original, with a strength.
    pub fn style_transfer_preserving_color(source: Source, strength: impl Into<Value>) -> Layer {
        let strength: Value = strength.into();
        Overlay::source(source)
            .with_apply_qualifier("e", format!("style_transfer:preserve_color:{strength}"))
    }
}
