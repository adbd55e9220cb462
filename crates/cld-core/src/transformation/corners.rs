//! Rounded corners (`r_`) and borders (`bo_`).

use super::{component_from_action, Action, Color, Value};

/// Corner radius, in pixels, for all corners or per corner.
#[derive(Debug, Clone)]
pub struct RoundCorners {
    radius: String,
}

impl RoundCorners {
    pub fn by_radius(radius: impl Into<Value>) -> Self {
        let radius: Value = radius.into();
        Self {
            radius: radius.to_string(),
        }
    }

    /// One to four radii, clockwise from the top-left corner.
    /// Extra values beyond four are ignored.
    pub fn by_radii(radii: &[u32]) -> Self {
        let radius = radii
            .iter()
            .take(4)
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(":");
        Self { radius }
    }

    /// A circle or ellipse.
    pub fn max() -> Self {
        Self {
            radius: "max".to_string(),
        }
    }

    pub(crate) fn value(&self) -> &str {
        &self.radius
    }
}

impl From<RoundCorners> for Action {
    fn from(r: RoundCorners) -> Self {
        Action::new().with("r", r.radius)
    }
}

component_from_action!(RoundCorners);

/// A solid border, rendered as `bo_<width>px_solid_<color>`.
#[derive(Debug, Clone)]
pub struct Border {
    width: Value,
    color: Color,
    corners: Option<RoundCorners>,
}

impl Border {
    pub fn solid(width: impl Into<Value>, color: impl Into<Color>) -> Self {
        Self {
            width: width.into(),
            color: color.into(),
            corners: None,
        }
    }

    /// Round the corners together with the border.
    pub fn round_corners(mut self, corners: RoundCorners) -> Self {
        self.corners = Some(corners);
        self
    }
}

impl From<Border> for Action {
    fn from(b: Border) -> Self {
        let mut action = Action::new().with("bo", format!("{}px_solid_{}", b.width, b.color.as_str()));
        if let Some(corners) = b.corners {
            action.set("r", corners.value());
        }
        action
    }
}

component_from_action!(Border);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_forms() {
        assert_eq!(Action::from(RoundCorners::by_radius(20)).to_string(), "r_20");
        assert_eq!(Action::from(RoundCorners::by_radii(&[10, 20, 30])).to_string(), "r_10:20:30");
        assert_eq!(Action::from(RoundCorners::max()).to_string(), "r_max");
    }

    #[test]
    fn too_many_radii_are_truncated() {
        assert_eq!(
            Action::from(RoundCorners::by_radii(&[1, 2, 3, 4, 5])).to_string(),
            "r_1:2:3:4"
        );
    }

    #[test]
    fn border_with_corners() {
        assert_eq!(Action::from(Border::solid(5, "red")).to_string(), "bo_5px_solid_red");
        assert_eq!(
            Action::from(Border::solid(4, "#0000ff").round_corners(RoundCorners::max())).to_string(),
            "bo_4px_solid_rgb:0000ff,r_max"
        );
    }
}
