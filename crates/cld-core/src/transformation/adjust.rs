//! Color and tone adjustments.

use super::{
    component_from_action, Action, Color, EffectAction, Layer, Overlay, Source, Value,
};

/// Constructors for adjustment actions.
#[derive(Debug, Clone, Copy)]
pub struct Adjust;

impl Adjust {
    pub fn brightness() -> EffectAction {
        EffectAction::ranged("brightness", -99.0, 100.0)
    }

    pub fn contrast() -> EffectAction {
        EffectAction::ranged("contrast", -100.0, 100.0)
    }

    pub fn saturation() -> EffectAction {
        EffectAction::ranged("saturation", -100.0, 100.0)
    }

    pub fn gamma() -> EffectAction {
        EffectAction::ranged("gamma", -50.0, 150.0)
    }

    pub fn hue() -> EffectAction {
        EffectAction::ranged("hue", -100.0, 100.0)
    }

    pub fn vibrance() -> EffectAction {
        EffectAction::ranged("vibrance", -100.0, 100.0)
    }

    pub fn sharpen() -> EffectAction {
        EffectAction::ranged("sharpen", 1.0, 2000.0)
    }

    pub fn unsharp_mask() -> EffectAction {
        EffectAction::ranged("unsharp_mask", 1.0, 2000.0)
    }

    pub fn auto_brightness() -> EffectAction {
        EffectAction::ranged("auto_brightness", 0.0, 100.0)
    }

    pub fn auto_color() -> EffectAction {
        EffectAction::ranged("auto_color", 0.0, 100.0)
    }

    pub fn auto_contrast() -> EffectAction {
        EffectAction::ranged("auto_contrast", 0.0, 100.0)
    }

    pub fn red() -> EffectAction {
        EffectAction::ranged("red", -100.0, 100.0)
    }

    pub fn green() -> EffectAction {
        EffectAction::ranged("green", -100.0, 100.0)
    }

    pub fn blue() -> EffectAction {
        EffectAction::ranged("blue", -100.0, 100.0)
    }

    /// Pixels with opacity below the level become fully transparent.
    pub fn opacity_threshold() -> EffectAction {
        EffectAction::ranged("opacity_threshold", 1.0, 100.0)
    }

    pub fn viesus_correct() -> EffectAction {
        EffectAction::new("viesus_correct")
    }

    pub fn improve() -> Improve {
        Improve::new()
    }

    pub fn fill_light() -> FillLight {
        FillLight::new()
    }

    /// Tint with an amount and up to several colors, optionally with
    /// positions: `Adjust::tint(80, &["red", "blue"])`.
    pub fn tint(amount: impl Into<Value>, colors: &[&str]) -> EffectAction {
        let mut effect = EffectAction::ranged("tint", 0.0, 100.0).level(amount);
        for (i, color) in colors.iter().enumerate() {
            effect = effect.arg(i + 1, Color::new(color).to_string());
        }
        effect
    }

    /// Replace `from` (or the predominant color when `None`) by `to`.
    pub fn replace_color(
        to: impl Into<Color>,
        tolerance: Option<u32>,
        from: Option<Color>,
    ) -> EffectAction {
        let to: Color = to.into();
        let mut effect =
            EffectAction::new("replace_color").arg(0, to.as_str().trim_start_matches("rgb:"));
        if let Some(tolerance) = tolerance {
            effect = effect.arg(1, tolerance);
        }
        if let Some(from) = from {
            effect = effect.arg(2, from.as_str().trim_start_matches("rgb:"));
        }
        effect
    }

    /// Color matrix (3x3 or 4x4, row major).
    pub fn recolor(matrix: &[f64]) -> EffectAction {
        let mut effect = EffectAction::new("recolor");
        for (i, v) in matrix.iter().enumerate() {
            effect = effect.arg(i, v.to_string());
        }
        effect
    }

    /// Opacity of the whole asset (`o_`), 0 to 100.
    pub fn opacity(level: impl Into<Value>) -> Action {
        let mut action = Action::new();
        action.set_checked("opacity", "o", level.into(), 0.0, 100.0);
        action
    }

    /// Apply a 3D lookup table uploaded as a raw asset (`.3dl`).
    pub fn by_3d_lut(lut_public_id: &str) -> Layer {
        Overlay::source(Source::lut(lut_public_id))
    }
}

/// `e_improve[:mode][:blend]`
#[derive(Debug, Clone)]
pub struct Improve {
    inner: EffectAction,
}

impl Improve {
    fn new() -> Self {
        Self {
            inner: EffectAction::new("improve").keyword_slot(0),
        }
    }

    /// `outdoor` or `indoor`.
    pub fn mode(mut self, mode: &str) -> Self {
        self.inner = self.inner.arg(0, mode);
        self
    }

    pub fn blend(mut self, blend: impl Into<Value>) -> Self {
        let blend: Value = blend.into();
        self.inner.record_range("improve blend", &blend, 0.0, 100.0);
        self.inner = self.inner.arg(1, blend);
        self
    }
}

/// `e_fill_light[:blend][:bias]`
#[derive(Debug, Clone)]
pub struct FillLight {
    inner: EffectAction,
}

impl FillLight {
    fn new() -> Self {
        Self {
            inner: EffectAction::new("fill_light"),
        }
    }

    pub fn blend(mut self, blend: impl Into<Value>) -> Self {
        let blend: Value = blend.into();
        self.inner.record_range("fill_light blend", &blend, 0.0, 100.0);
        self.inner = self.inner.arg(0, blend);
        self
    }

    pub fn bias(mut self, bias: impl Into<Value>) -> Self {
        let bias: Value = bias.into();
        self.inner.record_range("fill_light bias", &bias, -100.0, 100.0);
        self.inner = self.inner.arg(1, bias);
        self
    }
}

impl From<Improve> for Action {
    fn from(v: Improve) -> Self {
        v.inner.into()
    }
}

impl From<FillLight> for Action {
    fn from(v: FillLight) -> Self {
        v.inner.into()
    }
}

component_from_action!(Improve, FillLight);

#[cfg(test)]
mod tests {
    use super::*;

    fn render(a: impl Into<Action>) -> String {
        a.into().to_string()
    }

    #[test]
    fn leveled_adjustments() {
        assert_eq!(render(Adjust::brightness().level(50)), "e_brightness:50");
        assert_eq!(render(Adjust::contrast().level(-20)), "e_contrast:-20");
        assert_eq!(render(Adjust::auto_color()), "e_auto_color");
        assert_eq!(render(Adjust::sharpen().level(100)), "e_sharpen:100");
        assert_eq!(render(Adjust::red().level(50)), "e_red:50");
    }

    #[test]
    fn brightness_range() {
        let action: Action = Adjust::brightness().level(-100).into();
        assert_eq!(action.errors().len(), 1);
        let action: Action = Adjust::gamma().level(150).into();
        assert!(action.errors().is_empty());
    }

    #[test]
    fn opacity_is_not_an_effect() {
        assert_eq!(Adjust::opacity(30).to_string(), "o_30");
        assert_eq!(Adjust::opacity(130).errors().len(), 1);
    }

    #[test]
    fn improve_and_fill_light() {
        assert_eq!(render(Adjust::improve().mode("outdoor").blend(50)), "e_improve:outdoor:50");
        assert_eq!(render(Adjust::improve().blend(40)), "e_improve:40");
        assert_eq!(render(Adjust::fill_light().blend(70).bias(20)), "e_fill_light:70:20");
        assert_eq!(render(Adjust::fill_light().bias(20)), "e_fill_light::20");
    }

    #[test]
    fn color_mapping_adjustments() {
        assert_eq!(
            render(Adjust::replace_color("#2F4F4F", Some(20), Some(Color::new("#F5DEB3")))),
            "e_replace_color:2F4F4F:20:F5DEB3"
        );
        assert_eq!(render(Adjust::replace_color("maroon", None, None)), "e_replace_color:maroon");
        assert_eq!(render(Adjust::tint(80, &["red", "blue"])), "e_tint:80:red:blue");
        assert_eq!(
            render(Adjust::recolor(&[0.3, 0.7, 0.1, 0.3, 0.6, 0.1, 0.2, 0.6, 0.3])),
            "e_recolor:0.3:0.7:0.1:0.3:0.6:0.1:0.2:0.6:0.3"
        );
    }

    #[test]
    fn lut_is_a_layer() {
        assert_eq!(
            Adjust::by_3d_lut("iwltbap_aspen.3dl").to_string(),
            "l_lut:iwltbap_aspen.3dl/fl_layer_apply"
        );
    }
}
