//! Fluent transformation builder.
//!
//! A [`Transformation`] is an ordered list of components. Each component
//! renders to one or more `/`-separated actions; each action is a sorted,
//! comma-separated list of `key_value` qualifiers:
//!
//! ```
//! use cld_core::transformation::{Effect, Gravity, Resize, Transformation};
//!
//! let t = Transformation::new()
//!     .resize(Resize::fill().width(300).height(200).gravity(Gravity::auto()))
//!     .effect(Effect::sepia().level(50));
//! assert_eq!(t.to_string(), "c_fill,g_auto,h_200,w_300/e_sepia:50");
//! ```

mod action;
mod adjust;
mod color;
mod conditional;
mod corners;
mod delivery;
mod effect;
mod expression;
mod extract;
mod flag;
mod gravity;
mod layer;
mod named;
mod qualifier;
mod reshape;
mod resize;
mod rotate;
mod transcode;
mod value;
mod variable;
mod video_edit;

use std::fmt;
use std::str::FromStr;

pub use self::action::Action;
pub use self::adjust::{Adjust, FillLight, Improve};
pub use self::color::Color;
pub use self::conditional::Conditional;
pub use self::corners::{Border, RoundCorners};
pub use self::delivery::{ColorSpace, Delivery, Dpr, Format, Quality};
pub use self::effect::{
    BlurRegion, Cartoonify, Effect, EffectAction, GradientFade, Outline, Preview, Shadow,
    Theme, Vectorize,
};
pub use self::expression::{normalize as normalize_expression, Expression};
pub use self::extract::{Extract, PageSelector, PsdTools};
pub use self::flag::Flag;
pub use self::gravity::{FocusOn, Gravity};
pub use self::layer::{
    BlendMode, Layer, LayerStack, Overlay, Position, Source, TextStyle, Timeline, Underlay,
};
pub use self::named::NamedTransformation;
pub use self::qualifier::{Args, Qualifier};
pub use self::reshape::{Distort, Reshape, Trim};
pub use self::resize::Resize;
pub use self::rotate::Rotate;
pub use self::transcode::{AnimatedFormat, BitRate, Transcode, VideoCodec};
pub use self::value::{format_float, Value};
pub use self::variable::Variable;
pub use self::video_edit::{Concatenate, VideoEdit, VideoTrim, Volume};

use crate::error::{Error, Result};

/// One element of a transformation.
#[derive(Debug, Clone)]
pub enum Component {
    Action(Action),
    Layer(Box<Layer>),
    Conditional(Box<Conditional>),
    /// A pre-rendered transformation string, emitted verbatim.
    Raw(String),
    Transformation(Transformation),
}

impl Component {
    fn collect_errors(&self, out: &mut Vec<Error>) {
        match self {
            Component::Action(a) => out.extend(a.errors().iter().cloned()),
            Component::Layer(l) => l.collect_errors(out),
            Component::Conditional(c) => c.collect_errors(out),
            Component::Raw(_) => {}
            Component::Transformation(t) => {
                for c in &t.components {
                    c.collect_errors(out);
                }
            }
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Action(a) => a.fmt(f),
            Component::Layer(l) => l.fmt(f),
            Component::Conditional(c) => c.fmt(f),
            Component::Raw(s) => f.write_str(s),
            Component::Transformation(t) => t.fmt(f),
        }
    }
}

impl From<Action> for Component {
    fn from(a: Action) -> Self {
        Component::Action(a)
    }
}

impl From<Layer> for Component {
    fn from(l: Layer) -> Self {
        Component::Layer(Box::new(l))
    }
}

impl From<Conditional> for Component {
    fn from(c: Conditional) -> Self {
        Component::Conditional(Box::new(c))
    }
}

impl From<Transformation> for Component {
    fn from(t: Transformation) -> Self {
        Component::Transformation(t)
    }
}

impl From<&str> for Component {
    fn from(s: &str) -> Self {
        Component::Raw(s.to_string())
    }
}

impl From<String> for Component {
    fn from(s: String) -> Self {
        Component::Raw(s)
    }
}

/// `impl From<$t> for Component` through the type's `Action` conversion.
macro_rules! component_from_action {
    ($($t:ty),* $(,)?) => {
        $(impl From<$t> for $crate::transformation::Component {
            fn from(v: $t) -> Self {
                $crate::transformation::Component::Action(v.into())
            }
        })*
    };
}
pub(crate) use component_from_action;

/// An ordered list of actions rendered as `action/action/...`.
#[derive(Debug, Clone, Default)]
pub struct Transformation {
    components: Vec<Component>,
}

impl Transformation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append any component.
    pub fn add_action(mut self, component: impl Into<Component>) -> Self {
        self.push(component);
        self
    }

    pub fn push(&mut self, component: impl Into<Component>) {
        self.components.push(component.into());
    }

    pub fn resize(self, resize: impl Into<Component>) -> Self {
        self.add_action(resize)
    }

    pub fn adjust(self, adjust: impl Into<Component>) -> Self {
        self.add_action(adjust)
    }

    pub fn effect(self, effect: impl Into<Component>) -> Self {
        self.add_action(effect)
    }

    pub fn rotate(self, rotate: Rotate) -> Self {
        self.add_action(rotate)
    }

    pub fn round_corners(self, corners: RoundCorners) -> Self {
        self.add_action(corners)
    }

    pub fn border(self, border: Border) -> Self {
        self.add_action(border)
    }

    pub fn delivery(self, delivery: impl Into<Component>) -> Self {
        self.add_action(delivery)
    }

    pub fn overlay(self, layer: Layer) -> Self {
        self.add_action(layer)
    }

    pub fn underlay(self, layer: Layer) -> Self {
        self.add_action(layer)
    }

    pub fn named_transformation(self, named: NamedTransformation) -> Self {
        self.add_action(named)
    }

    pub fn add_variable(self, variable: Variable) -> Self {
        self.add_action(variable)
    }

    pub fn conditional(self, conditional: Conditional) -> Self {
        self.add_action(conditional)
    }

    pub fn reshape(self, reshape: impl Into<Component>) -> Self {
        self.add_action(reshape)
    }

    pub fn extract(self, extract: impl Into<Component>) -> Self {
        self.add_action(extract)
    }

    pub fn transcode(self, transcode: impl Into<Component>) -> Self {
        self.add_action(transcode)
    }

    pub fn video_edit(self, edit: impl Into<Component>) -> Self {
        self.add_action(edit)
    }

    pub fn add_flag(self, flag: Flag) -> Self {
        self.add_action(flag)
    }

    /// Append a pre-rendered transformation string.
    pub fn add_raw(self, raw: impl Into<String>) -> Self {
        self.add_action(Component::Raw(raw.into()))
    }

    /// Append all components of another transformation.
    pub fn add_transformation(mut self, other: Transformation) -> Self {
        self.components.extend(other.components);
        self
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn is_empty(&self) -> bool {
        self.components.iter().all(|c| c.to_string().is_empty())
    }

    /// All validation errors recorded by the builders, in order.
    pub fn errors(&self) -> Vec<Error> {
        let mut out = Vec::new();
        for c in &self.components {
            c.collect_errors(&mut out);
        }
        out
    }

    /// Fails with the first recorded validation error.
    pub fn validate(&self) -> Result<()> {
        match self.errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .components
            .iter()
            .map(ToString::to_string)
            .filter(|s| !s.is_empty())
            .collect();
        f.write_str(&parts.join("/"))
    }
}

impl FromStr for Transformation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Transformation::new().add_raw(s.trim_matches('/')))
    }
}

impl From<&str> for Transformation {
    fn from(s: &str) -> Self {
        Transformation::new().add_raw(s.trim_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_transformation_renders_nothing() {
        let t = Transformation::new();
        assert_eq!(t.to_string(), "");
        assert!(t.is_empty());
    }

    #[test]
    fn components_join_with_slash() {
        let t = Transformation::new()
            .resize(Resize::scale().width(100))
            .add_raw("e_grayscale")
            .rotate(Rotate::by_angle(90));
        assert_eq!(t.to_string(), "c_scale,w_100/e_grayscale/a_90");
    }

    #[test]
    fn nested_transformations_flatten() {
        let inner = Transformation::new().resize(Resize::crop().width(50));
        let t = Transformation::new()
            .add_action(inner)
            .delivery(Delivery::format(Format::png()));
        assert_eq!(t.to_string(), "c_crop,w_50/f_png");
    }

    #[test]
    fn empty_components_are_skipped() {
        let t = Transformation::new().add_raw("").add_raw("c_scale,w_10");
        assert_eq!(t.to_string(), "c_scale,w_10");
    }

    #[test]
    fn validate_reports_first_error() {
        let t = Transformation::new()
            .effect(Effect::sepia().level(50))
            .effect(Effect::sepia().level(500));
        let err = t.validate().unwrap_err();
        assert!(matches!(err, Error::OutOfRange { name: "sepia", .. }));
    }

    #[test]
    fn from_str_is_raw() {
        let t: Transformation = "/c_fill,w_10/".parse().unwrap();
        assert_eq!(t.to_string(), "c_fill,w_10");
    }
}
