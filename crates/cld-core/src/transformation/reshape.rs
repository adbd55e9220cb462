//! Shape changes: trimming, shearing, distortion and cutting by an image.

use super::{component_from_action, Action, Color, Layer, Overlay, Source, Value};

/// Remove edges that match the corner (or a given) color: `e_trim[:sim][:color]`.
#[derive(Debug, Clone, Default)]
pub struct Trim {
    color_similarity: Option<Value>,
    color: Option<Color>,
}

impl Trim {
    /// Similarity from 0 to 100; default 10.
    pub fn color_similarity(mut self, similarity: impl Into<Value>) -> Self {
        self.color_similarity = Some(similarity.into());
        self
    }

    pub fn color_override(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl From<Trim> for Action {
    fn from(t: Trim) -> Self {
        let mut args = vec!["trim".to_string()];
        let mut action = Action::new();
        if let Some(sim) = &t.color_similarity {
            if let Some(err) = super::value::check_range("trim similarity", sim, 0.0, 100.0) {
                action.record_error(err);
            }
            args.push(sim.to_string());
        }
        if let Some(color) = &t.color {
            args.push(color.as_str().to_string());
        }
        action.set("e", args.join(":"));
        action
    }
}

component_from_action!(Trim);

/// Four corner points, clockwise from top-left, for a perspective distortion.
#[derive(Debug, Clone)]
pub struct Distort {
    coordinates: [Value; 8],
}

impl Distort {
    pub fn new(coordinates: [Value; 8]) -> Self {
        Self { coordinates }
    }

    pub fn from_points(points: [(i64, i64); 4]) -> Self {
        let [(x1, y1), (x2, y2), (x3, y3), (x4, y4)] = points;
        Self::new([x1, y1, x2, y2, x3, y3, x4, y4].map(Value::from))
    }
}

impl From<Distort> for Action {
    fn from(d: Distort) -> Self {
        let coords: Vec<String> = d.coordinates.iter().map(ToString::to_string).collect();
        Action::new().with("e", format!("distort:{}", coords.join(":")))
    }
}

component_from_action!(Distort);

/// Constructors for reshape actions.
pub struct Reshape;

impl Reshape {
    pub fn trim() -> Trim {
        Trim::default()
    }

    /// Skew by the given angles in degrees: `e_shear:x:y`.
    pub fn shear(skew_x: impl Into<Value>, skew_y: impl Into<Value>) -> Action {
        let x: Value = skew_x.into();
        let y: Value = skew_y.into();
        Action::new().with("e", format!("shear:{x}:{y}"))
    }

    pub fn distort(points: [(i64, i64); 4]) -> Distort {
        Distort::from_points(points)
    }

    /// Bend the image along an arc of `degrees` (negative bends downwards).
    pub fn distort_arc(degrees: impl Into<Value>) -> Action {
        let degrees: Value = degrees.into();
        Action::new().with("e", format!("distort:arc:{degrees}"))
    }

    /// Keep only the parts of the base image covered by `source`.
    pub fn cut_by_image(source: Source) -> Layer {
        Overlay::source(source).with_apply_flag("cutter")
    }
}
