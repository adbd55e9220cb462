//! Gravity: compass positions, focus-on objects and automatic gravity.

use std::fmt;

/// The `g_` qualifier value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gravity(String);

/// Objects (or face detection) gravity can focus on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusOn(String);

impl FocusOn {
    pub fn new(name: &str) -> Self {
        FocusOn(name.to_string())
    }

    pub fn face() -> Self {
        FocusOn::new("face")
    }

    pub fn faces() -> Self {
        FocusOn::new("faces")
    }

    pub fn advanced_face() -> Self {
        FocusOn::new("adv_face")
    }

    pub fn advanced_faces() -> Self {
        FocusOn::new("adv_faces")
    }

    pub fn custom() -> Self {
        FocusOn::new("custom")
    }

    pub fn body() -> Self {
        FocusOn::new("body")
    }

    pub fn ocr_text() -> Self {
        FocusOn::new("ocr_text")
    }

    /// Lower the weight of this focus when used inside automatic gravity.
    pub fn avoid(self) -> Self {
        FocusOn(format!("{}_avoid", self.0))
    }

    /// Weight of this focus when used inside automatic gravity.
    pub fn weight(self, weight: u32) -> Self {
        FocusOn(format!("{}_{weight}", self.0))
    }
}

impl fmt::Display for FocusOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Gravity {
    pub fn north_west() -> Self {
        Gravity("north_west".into())
    }

    pub fn north() -> Self {
        Gravity("north".into())
    }

    pub fn north_east() -> Self {
        Gravity("north_east".into())
    }

    pub fn west() -> Self {
        Gravity("west".into())
    }

    pub fn center() -> Self {
        Gravity("center".into())
    }

    pub fn east() -> Self {
        Gravity("east".into())
    }

    pub fn south_west() -> Self {
        Gravity("south_west".into())
    }

    pub fn south() -> Self {
        Gravity("south".into())
    }

    pub fn south_east() -> Self {
        Gravity("south_east".into())
    }

    pub fn xy_center() -> Self {
        Gravity("xy_center".into())
    }

    /// `g_auto`
    pub fn auto() -> Self {
        Gravity("auto".into())
    }

    /// `g_auto:faces`, `g_auto:cat_avoid:dog`
    pub fn auto_with(focus: &[FocusOn]) -> Self {
        let mut parts = vec!["auto".to_string()];
        parts.extend(focus.iter().map(ToString::to_string));
        Gravity(parts.join(":"))
    }

    /// `g_face`, `g_cat:dog` -- focus on the first match in order.
    pub fn focus_on(focus: &[FocusOn]) -> Self {
        let parts: Vec<String> = focus.iter().map(ToString::to_string).collect();
        Gravity(parts.join(":"))
    }

    /// Focus on a detected object, optionally falling back to a compass position.
    pub fn focus_on_with_fallback(focus: &[FocusOn], fallback: Gravity) -> Self {
        let mut gravity = Gravity::focus_on(focus);
        gravity.0 = format!("{}:{}", gravity.0, fallback.0);
        gravity
    }

    /// Any gravity string the CDN understands.
    pub fn raw(value: &str) -> Self {
        Gravity(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Gravity {
    fn from(s: &str) -> Self {
        Gravity::raw(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass() {
        assert_eq!(Gravity::south_east().to_string(), "south_east");
        assert_eq!(Gravity::xy_center().to_string(), "xy_center");
    }

    #[test]
    fn auto_gravity_with_focus() {
        assert_eq!(Gravity::auto().to_string(), "auto");
        assert_eq!(
            Gravity::auto_with(&[FocusOn::faces()]).to_string(),
            "auto:faces"
        );
        assert_eq!(
            Gravity::auto_with(&[FocusOn::new("cat").avoid(), FocusOn::new("dog").weight(30)])
                .to_string(),
            "auto:cat_avoid:dog_30"
        );
    }

    #[test]
    fn focus_on_objects() {
        assert_eq!(
            Gravity::focus_on(&[FocusOn::new("cat"), FocusOn::new("dog")]).to_string(),
            "cat:dog"
        );
        assert_eq!(
            Gravity::focus_on_with_fallback(&[FocusOn::face()], Gravity::north()).to_string(),
            "face:north"
        );
    }
}
