//! Video-only effects.

use super::{Effect, EffectAction};
use crate::transformation::{component_from_action, Action, Value};

impl Effect {
    /// Play the video (or animated image) `n` additional times.
    pub fn loop_times(count: impl Into<Value>) -> EffectAction {
        EffectAction::new("loop").arg(0, count)
    }

    pub fn reverse() -> EffectAction {
        EffectAction::new("reverse")
    }

    /// Play forwards then backwards.
    pub fn boomerang() -> EffectAction {
        EffectAction::new("boomerang")
    }

    /// Speed up (positive) or slow down (negative) playback by percent.
    pub fn accelerate() -> EffectAction {
        EffectAction::ranged("accelerate", -50.0, 100.0)
    }

    /// Stabilise; the level is the maximum motion in pixels (16, 32, 48 or 64).
    pub fn deshake() -> EffectAction {
        EffectAction::one_of("deshake", &[16.0, 32.0, 48.0, 64.0])
    }

    /// Fade in over `duration_ms` milliseconds.
    pub fn fade_in(duration_ms: u32) -> EffectAction {
        EffectAction::new("fade").arg(0, duration_ms)
    }

    /// Fade out over `duration_ms` milliseconds.
    pub fn fade_out(duration_ms: u32) -> EffectAction {
        EffectAction::new("fade").arg(0, -(duration_ms as i64))
    }

    /// Marks a video layer as a transition between concatenated clips.
    pub fn transition() -> EffectAction {
        EffectAction::new("transition")
    }

    /// Progress indicator: `bar` or `frame`, with color and width.
    pub fn progress_bar(kind: &str, color: &str, width: impl Into<Value>) -> EffectAction {
        let width: Value = width.into();
        EffectAction::labelled("progressbar")
            .arg(0, format!("type_{kind}"))
            .arg(1, format!("color_{color}"))
            .arg(2, format!("width_{width}"))
    }

    /// AI generated preview made of the most interesting segments.
    pub fn preview() -> Preview {
        Preview::new()
    }
}

/// `e_preview[:duration_D][:max_seg_N][:min_seg_dur_M]`
#[derive(Debug, Clone)]
pub struct Preview {
    inner: EffectAction,
}

impl Preview {
    pub(crate) fn new() -> Self {
        Self {
            inner: EffectAction::labelled("preview"),
        }
    }

    /// Total preview length in seconds.
    pub fn duration(mut self, seconds: impl Into<Value>) -> Self {
        let seconds: Value = seconds.into();
        self.inner = self.inner.arg(0, format!("duration_{seconds}"));
        self
    }

    pub fn maximum_segments(mut self, segments: u32) -> Self {
        self.inner = self.inner.arg(1, format!("max_seg_{segments}"));
        self
    }

    pub fn minimum_segment_duration(mut self, seconds: impl Into<Value>) -> Self {
        let seconds: Value = seconds.into();
        self.inner = self.inner.arg(2, format!("min_seg_dur_{seconds}"));
        self
    }
}

impl From<Preview> for Action {
    fn from(p: Preview) -> Self {
        p.inner.into()
    }
}

component_from_action!(Preview);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn render(a: impl Into<Action>) -> String {
        a.into().to_string()
    }

    #[test]
    fn playback_effects() {
        assert_eq!(render(Effect::loop_times(2)), "e_loop:2");
        assert_eq!(render(Effect::reverse()), "e_reverse");
        assert_eq!(render(Effect::boomerang()), "e_boomerang");
        assert_eq!(render(Effect::accelerate().level(-30)), "e_accelerate:-30");
        assert_eq!(render(Effect::deshake().level(32)), "e_deshake:32");
        let rejected: Action = Effect::deshake().level(17).into();
        assert_eq!(rejected.to_string(), "e_deshake:17");
        assert!(matches!(
            rejected.errors(),
            [Error::InvalidOption { name, .. }] if name == "deshake"
        ));
        let zero: Action = Effect::deshake().level(0).into();
        assert_eq!(zero.errors().len(), 1);
    }

    #[test]
    fn fades() {
        assert_eq!(render(Effect::fade_in(2000)), "e_fade:2000");
        assert_eq!(render(Effect::fade_out(1000)), "e_fade:-1000");
    }

    #[test]
    fn accelerate_range() {
        let action: Action = Effect::accelerate().level(-80).into();
        assert_eq!(action.errors().len(), 1);
    }

    #[test]
    fn preview_arguments() {
        assert_eq!(
            render(
                Effect::preview()
                    .duration(5)
                    .maximum_segments(3)
                    .minimum_segment_duration(1)
            ),
            "e_preview:duration_5:max_seg_3:min_seg_dur_1"
        );
        assert_eq!(render(Effect::preview().duration(12.5)), "e_preview:duration_12.5");
    }

    #[test]
    fn progress_bar() {
        assert_eq!(
            render(Effect::progress_bar("frame", "red", 12)),
            "e_progressbar:type_frame:color_red:width_12"
        );
    }
}
