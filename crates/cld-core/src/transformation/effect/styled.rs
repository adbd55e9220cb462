//! Effects with several named parameters.

use super::EffectAction;
use crate::transformation::{component_from_action, Action, Color, Value};

macro_rules! effect_into_action {
    ($($t:ty),*) => {
        $(impl From<$t> for Action {
            fn from(v: $t) -> Self {
                v.inner.into()
            }
        })*
        component_from_action!($($t),*);
    };
}

/// `e_outline[:mode][:width][:blur]` with an optional color.
#[derive(Debug, Clone)]
pub struct Outline {
    inner: EffectAction,
}

impl Outline {
    pub(crate) fn new() -> Self {
        Self {
            inner: EffectAction::new("outline").keyword_slot(0),
        }
    }

    /// `inner`, `outer`, `fill`, `inner_fill`, `outer_fill`.
    pub fn mode(mut self, mode: &str) -> Self {
        self.inner = self.inner.arg(0, mode);
        self
    }

    pub fn width(mut self, width: impl Into<Value>) -> Self {
        let width: Value = width.into();
        self.inner.record_range("outline width", &width, 1.0, 100.0);
        self.inner = self.inner.arg(1, width);
        self
    }

    pub fn blur_level(mut self, blur: impl Into<Value>) -> Self {
        let blur: Value = blur.into();
        self.inner.record_range("outline blur", &blur, 0.0, 2000.0);
        self.inner = self.inner.arg(2, blur);
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.inner = self.inner.color(color);
        self
    }
}

/// `e_shadow[:strength]` offset by `x`/`y`.
#[derive(Debug, Clone)]
pub struct Shadow {
    inner: EffectAction,
}

impl Shadow {
    pub(crate) fn new() -> Self {
        Self {
            inner: EffectAction::ranged("shadow", 0.0, 100.0),
        }
    }

    pub fn strength(mut self, strength: impl Into<Value>) -> Self {
        self.inner = self.inner.level(strength);
        self
    }

    pub fn offset_x(mut self, x: impl Into<Value>) -> Self {
        self.inner = self.inner.qualifier("x", x);
        self
    }

    pub fn offset_y(mut self, y: impl Into<Value>) -> Self {
        self.inner = self.inner.qualifier("y", y);
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.inner = self.inner.color(color);
        self
    }
}

/// `e_cartoonify[:line_strength][:color_reduction|bw]`
#[derive(Debug, Clone)]
pub struct Cartoonify {
    inner: EffectAction,
}

impl Cartoonify {
    pub(crate) fn new() -> Self {
        Self {
            inner: EffectAction::new("cartoonify").with_range("cartoonify line strength", 0.0, 100.0),
        }
    }

    pub fn line_strength(mut self, strength: impl Into<Value>) -> Self {
        self.inner = self.inner.level(strength);
        self
    }

    pub fn color_reduction_level(mut self, level: impl Into<Value>) -> Self {
        let level: Value = level.into();
        self.inner
            .record_range("cartoonify color reduction", &level, 0.0, 100.0);
        self.inner = self.inner.arg(1, level);
        self
    }

    /// Black and white instead of a color reduction; the line strength
    /// may then be left out (`e_cartoonify:bw`).
    pub fn black_and_white(mut self) -> Self {
        self.inner = self.inner.keyword_slot(0).arg(1, "bw");
        self
    }
}


/// `e_vectorize:colors:N:detail:D:despeckle:S:paths:P:corners:C`
#[derive(Debug, Clone)]
pub struct Vectorize {
    inner: EffectAction,
}

impl Vectorize {
    pub(crate) fn new() -> Self {
        Self {
            inner: EffectAction::labelled("vectorize"),
        }
    }

    fn named_arg(
        mut self,
        index: usize,
        label: &'static str,
        value: impl Into<Value>,
        min: f64,
        max: f64,
    ) -> Self {
        let value: Value = value.into();
        self.inner.record_range(label, &value, min, max);
        self.inner = self.inner.arg(index, format!("{label}:{value}"));
        self
    }

    pub fn num_of_colors(self, colors: impl Into<Value>) -> Self {
        self.named_arg(0, "colors", colors, 2.0, 30.0)
    }

    /// Either a pixel count (> 1) or a fraction of the image size.
    pub fn detail_level(self, detail: impl Into<Value>) -> Self {
        self.named_arg(1, "detail", detail, 0.0, 1000.0)
    }

    pub fn despeckle_level(self, despeckle: impl Into<Value>) -> Self {
        self.named_arg(2, "despeckle", despeckle, 0.0, 100.0)
    }

    pub fn paths_level(self, paths: impl Into<Value>) -> Self {
        self.named_arg(3, "paths", paths, 0.0, 100.0)
    }

    pub fn corners_level(self, corners: impl Into<Value>) -> Self {
        self.named_arg(4, "corners", corners, 0.0, 100.0)
    }
}

/// `e_theme:color_<c>[:photosensitivity_<p>]`
#[derive(Debug, Clone)]
pub struct Theme {
    inner: EffectAction,
}

impl Theme {
    pub(crate) fn new(color: Color) -> Self {
        Self {
            inner: EffectAction::labelled("theme").arg(0, format!("color_{color}")),
        }
    }

    pub fn photosensitivity(mut self, level: impl Into<Value>) -> Self {
        let level: Value = level.into();
        self.inner
            .record_range("photosensitivity", &level, 0.0, 200.0);
        self.inner = self.inner.arg(1, format!("photosensitivity_{level}"));
        self
    }
}

/// `e_gradient_fade[:symmetric|symmetric_pad][:strength]` with x/y stops.
#[derive(Debug, Clone)]
pub struct GradientFade {
    inner: EffectAction,
}

impl GradientFade {
    pub(crate) fn new() -> Self {
        Self {
            inner: EffectAction::new("gradient_fade").keyword_slot(0),
        }
    }

    pub fn symmetric(mut self) -> Self {
        self.inner = self.inner.arg(0, "symmetric");
        self
    }

    pub fn symmetric_pad(mut self) -> Self {
        self.inner = self.inner.arg(0, "symmetric_pad");
        self
    }

    pub fn strength(mut self, strength: impl Into<Value>) -> Self {
        let strength: Value = strength.into();
        self.inner
            .record_range("gradient_fade", &strength, 0.0, 100.0);
        self.inner = self.inner.arg(1, strength);
        self
    }

    /// Horizontal fade start, as pixels or a fraction (negative fades from the right).
    pub fn horizontal_start_point(mut self, x: impl Into<Value>) -> Self {
        self.inner = self.inner.qualifier("x", x);
        self
    }

    pub fn vertical_start_point(mut self, y: impl Into<Value>) -> Self {
        self.inner = self.inner.qualifier("y", y);
        self
    }
}

/// `e_blur_region` / `e_pixelate_region` limited to a rectangle.
#[derive(Debug, Clone)]
pub struct BlurRegion {
    inner: EffectAction,
}

impl BlurRegion {
    pub(crate) fn new(name: &'static str, min: f64, max: f64) -> Self {
        Self {
            inner: EffectAction::ranged(name, min, max),
        }
    }

    pub fn strength(mut self, strength: impl Into<Value>) -> Self {
        self.inner = self.inner.level(strength);
        self
    }

    pub fn region(
        mut self,
        x: impl Into<Value>,
        y: impl Into<Value>,
        width: impl Into<Value>,
        height: impl Into<Value>,
    ) -> Self {
        self.inner = self
            .inner
            .qualifier("x", x)
            .qualifier("y", y)
            .qualifier("w", width)
            .qualifier("h", height);
        self
    }

    /// Region given by detected OCR text instead of coordinates.
    pub fn ocr_text(mut self) -> Self {
        self.inner = self.inner.qualifier("g", "ocr_text");
        self
    }
}

effect_into_action!(Outline, Shadow, Cartoonify, Vectorize, Theme, GradientFade, BlurRegion);

#[cfg(test)]
mod tests {
    use super::*;

    fn render(a: impl Into<Action>) -> String {
        a.into().to_string()
    }

    #[test]
    fn outline_positions() {
        assert_eq!(
            render(Outline::new().mode("inner").width(5).blur_level(200).color("red")),
            "co_red,e_outline:inner:5:200"
        );
        assert_eq!(render(Outline::new().width(10)), "e_outline:10");
        assert_eq!(
            render(Outline::new().mode("inner").blur_level(200)),
            "e_outline:inner::200"
        );
        assert_eq!(render(Outline::new().blur_level(200)), "e_outline::200");
    }

    #[test]
    fn shadow_with_offsets() {
        assert_eq!(
            render(Shadow::new().strength(50).offset_x(10).offset_y(-10).color("blue")),
            "co_blue,e_shadow:50,x_10,y_-10"
        );
    }

    #[test]
    fn cartoonify_variants() {
        assert_eq!(
            render(Cartoonify::new().line_strength(50).color_reduction_level(70)),
            "e_cartoonify:50:70"
        );
        assert_eq!(render(Cartoonify::new().black_and_white()), "e_cartoonify:bw");
        assert_eq!(
            render(Cartoonify::new().line_strength(40).black_and_white()),
            "e_cartoonify:40:bw"
        );
        assert_eq!(render(Cartoonify::new().color_reduction_level(70)), "e_cartoonify::70");
        assert_eq!(render(Cartoonify::new()), "e_cartoonify");
    }

    #[test]
    fn vectorize_named_arguments() {
        assert_eq!(
            render(Vectorize::new().num_of_colors(3).detail_level(0.5)),
            "e_vectorize:colors:3:detail:0.5"
        );
        assert_eq!(
            render(Vectorize::new().num_of_colors(3).despeckle_level(2)),
            "e_vectorize:colors:3:despeckle:2"
        );
        let action: Action = Vectorize::new().num_of_colors(50).into();
        assert_eq!(action.errors().len(), 1);
    }

    #[test]
    fn theme_and_gradient() {
        assert_eq!(
            render(Theme::new(Color::black()).photosensitivity(110)),
            "e_theme:color_black:photosensitivity_110"
        );
        assert_eq!(
            render(GradientFade::new().symmetric().strength(20).horizontal_start_point(0.5)),
            "e_gradient_fade:symmetric:20,x_0.5"
        );
    }

    #[test]
    fn blur_region_rectangle() {
        assert_eq!(
            render(BlurRegion::new("blur_region", 1.0, 2000.0).strength(500).region(10, 20, 200, 100)),
            "e_blur_region:500,h_100,w_200,x_10,y_20"
        );
    }
}
