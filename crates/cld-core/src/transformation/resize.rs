//! Resize and crop actions (`c_` modes with dimensions).

use super::value::float;
use super::{component_from_action, Action, Color, Gravity, Value};

/// A resize action: crop mode plus width, height, aspect ratio and friends.
#[derive(Debug, Clone)]
pub struct Resize {
    action: Action,
}

impl Resize {
    /// Resize with an arbitrary crop mode name.
    pub fn mode(crop_mode: &str) -> Self {
        Self {
            action: Action::new().with("c", crop_mode),
        }
    }

    /// Change size to exactly the given dimensions, possibly distorting.
    pub fn scale() -> Self {
        Self::mode("scale")
    }

    /// Fit inside the given dimensions keeping the aspect ratio.
    pub fn fit() -> Self {
        Self::mode("fit")
    }

    /// Like `fit`, but only shrinks.
    pub fn limit_fit() -> Self {
        Self::mode("limit")
    }

    /// Like `fit`, but only grows.
    pub fn minimum_fit() -> Self {
        Self::mode("mfit")
    }

    /// Fill the given dimensions exactly, cropping what does not fit.
    pub fn fill() -> Self {
        Self::mode("fill")
    }

    pub fn limit_fill() -> Self {
        Self::mode("lfill")
    }

    /// Fill, padding instead of cropping when the gravity cannot be kept.
    pub fn fill_pad() -> Self {
        Self::mode("fill_pad")
    }

    /// Fit and pad the remaining area with the background color.
    pub fn pad() -> Self {
        Self::mode("pad")
    }

    pub fn limit_pad() -> Self {
        Self::mode("lpad")
    }

    pub fn minimum_pad() -> Self {
        Self::mode("mpad")
    }

    /// Extract a region of the given size.
    pub fn crop() -> Self {
        Self::mode("crop")
    }

    /// Thumbnail around the gravity (typically faces).
    pub fn thumbnail() -> Self {
        Self::mode("thumb")
    }

    pub fn imagga_crop() -> Self {
        Self::mode("imagga_crop")
    }

    pub fn imagga_scale() -> Self {
        Self::mode("imagga_scale")
    }

    /// Content-aware automatic cropping.
    pub fn auto() -> Self {
        Self::mode("auto")
    }

    pub fn width(mut self, width: impl Into<Value>) -> Self {
        self.action.set("w", width);
        self
    }

    pub fn height(mut self, height: impl Into<Value>) -> Self {
        self.action.set("h", height);
        self
    }

    /// Number (`1.5`) or ratio string (`16:9`).
    pub fn aspect_ratio(mut self, ratio: impl Into<Value>) -> Self {
        self.action.set("ar", ratio);
        self
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.action.set("g", gravity);
        self
    }

    pub fn x(mut self, x: impl Into<Value>) -> Self {
        self.action.set("x", x);
        self
    }

    pub fn y(mut self, y: impl Into<Value>) -> Self {
        self.action.set("y", y);
        self
    }

    /// Zoom factor for `crop` and `thumb` modes.
    pub fn zoom(mut self, zoom: impl Into<Value>) -> Self {
        self.action.set("z", float(zoom));
        self
    }

    /// Padding color for the pad modes.
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        let color: Color = color.into();
        self.action.set("b", color);
        self
    }

    /// Dimensions are relative to the underlying asset (in layers).
    pub fn relative(mut self) -> Self {
        self.action.add_flag("relative");
        self
    }

    /// Dimensions are relative to the detected gravity region.
    pub fn region_relative(mut self) -> Self {
        self.action.add_flag("region_relative");
        self
    }

    pub fn ignore_aspect_ratio(mut self) -> Self {
        self.action.add_flag("ignore_aspect_ratio");
        self
    }
}

impl From<Resize> for Action {
    fn from(r: Resize) -> Self {
        r.action
    }
}

component_from_action!(Resize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformation::FocusOn;

    #[test]
    fn scale_with_dimensions() {
        let r = Resize::scale().width(100).height(200);
        assert_eq!(Action::from(r).to_string(), "c_scale,h_200,w_100");
    }

    #[test]
    fn fill_with_gravity_and_ratio() {
        let r = Resize::fill()
            .width(400)
            .aspect_ratio("16:9")
            .gravity(Gravity::auto_with(&[FocusOn::faces()]));
        assert_eq!(Action::from(r).to_string(), "ar_16:9,c_fill,g_auto:faces,w_400");
    }

    #[test]
    fn pad_with_background() {
        let r = Resize::pad().width(300).height(300).background("#000000");
        assert_eq!(Action::from(r).to_string(), "b_rgb:000000,c_pad,h_300,w_300");
    }

    #[test]
    fn thumbnail_zoom_and_flags() {
        let r = Resize::thumbnail().width(150).zoom(1).relative();
        assert_eq!(Action::from(r).to_string(), "c_thumb,fl_relative,w_150,z_1.0");
    }

    #[test]
    fn relative_width_and_variables() {
        let r = Resize::scale().width(0.5);
        assert_eq!(Action::from(r).to_string(), "c_scale,w_0.5");
        let r = Resize::limit_fit().width("$w").height("ih_div_2");
        assert_eq!(Action::from(r).to_string(), "c_limit,h_ih_div_2,w_$w");
    }
}
