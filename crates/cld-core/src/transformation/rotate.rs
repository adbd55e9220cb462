//! Rotation (`a_`).

use super::{component_from_action, Action, Value};

/// Rotate by degrees or by one or more modes, joined with `.`.
#[derive(Debug, Clone)]
pub struct Rotate {
    values: Vec<String>,
}

impl Rotate {
    /// Clockwise rotation in degrees; negative rotates counter-clockwise.
    pub fn by_angle(degrees: impl Into<Value>) -> Self {
        let degrees: Value = degrees.into();
        Self {
            values: vec![degrees.to_string()],
        }
    }

    fn mode(mode: &str) -> Self {
        Self {
            values: vec![mode.to_string()],
        }
    }

    /// Rotate 90 degrees clockwise, only when the aspect ratio differs
    /// from the requested one.
    pub fn auto_right() -> Self {
        Self::mode("auto_right")
    }

    pub fn auto_left() -> Self {
        Self::mode("auto_left")
    }

    pub fn horizontal_flip() -> Self {
        Self::mode("hflip")
    }

    pub fn vertical_flip() -> Self {
        Self::mode("vflip")
    }

    /// Ignore the EXIF orientation.
    pub fn ignore() -> Self {
        Self::mode("ignore")
    }

    /// Chain another angle or mode, e.g. `a_hflip.90`.
    pub fn and(mut self, other: Rotate) -> Self {
        self.values.extend(other.values);
        self
    }
}

impl From<Rotate> for Action {
    fn from(r: Rotate) -> Self {
        Action::new().with("a", r.values.join("."))
    }
}

component_from_action!(Rotate);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_and_modes() {
        assert_eq!(Action::from(Rotate::by_angle(45)).to_string(), "a_45");
        assert_eq!(Action::from(Rotate::by_angle(-20)).to_string(), "a_-20");
        assert_eq!(Action::from(Rotate::auto_left()).to_string(), "a_auto_left");
    }

    #[test]
    fn chained_modes() {
        let r = Rotate::horizontal_flip().and(Rotate::by_angle(90));
        assert_eq!(Action::from(r).to_string(), "a_hflip.90");
    }
}
