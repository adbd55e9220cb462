//! Video editing: trimming, concatenation, volume and previews.

use super::effect::Preview;
use super::{component_from_action, Action, Component, Effect, Overlay, Source, Value};

/// Keep part of a video: start offset, end offset and/or duration.
///
/// Offsets are seconds, or percentages given as strings (`"30p"`).
#[derive(Debug, Clone, Default)]
pub struct VideoTrim {
    start_offset: Option<Value>,
    end_offset: Option<Value>,
    duration: Option<Value>,
}

impl VideoTrim {
    pub fn start_offset(mut self, offset: impl Into<Value>) -> Self {
        self.start_offset = Some(offset.into());
        self
    }

    pub fn end_offset(mut self, offset: impl Into<Value>) -> Self {
        self.end_offset = Some(offset.into());
        self
    }

    pub fn duration(mut self, duration: impl Into<Value>) -> Self {
        self.duration = Some(duration.into());
        self
    }
}

impl From<VideoTrim> for Action {
    fn from(t: VideoTrim) -> Self {
        let mut action = Action::new();
        if let Some(so) = t.start_offset {
            action.set("so", so);
        }
        if let Some(eo) = t.end_offset {
            action.set("eo", eo);
        }
        if let Some(du) = t.duration {
            action.set("du", du);
        }
        action
    }
}

component_from_action!(VideoTrim);

/// Append (or prepend) another video, optionally with a transition video.
#[derive(Debug, Clone)]
pub struct Concatenate {
    source: Source,
    duration: Option<Value>,
    transition: Option<Source>,
    prepend: bool,
}

impl Concatenate {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            duration: None,
            transition: None,
            prepend: false,
        }
    }

    /// Seconds of the concatenated video to use.
    pub fn duration(mut self, seconds: impl Into<Value>) -> Self {
        self.duration = Some(seconds.into());
        self
    }

    /// Video used as the transition between the two clips.
    pub fn transition(mut self, transition: Source) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Put the concatenated video before the base video.
    pub fn prepend(mut self) -> Self {
        self.prepend = true;
        self
    }
}

impl From<Concatenate> for Component {
    fn from(c: Concatenate) -> Self {
        let mut source = c.source.with_flag("splice");
        if let Some(duration) = c.duration {
            source = source.qualifier("du", duration);
        }
        if let Some(transition) = c.transition {
            source = source.transformation(Overlay::source(transition.qualifier("e", "transition")));
        }
        let mut layer = Overlay::source(source);
        if c.prepend {
            layer = layer.with_apply_qualifier("so", 0);
        }
        layer.into()
    }
}

/// Audio volume: `e_volume:<level>`, `e_volume:<n>db` or `e_volume:mute`.
#[derive(Debug, Clone)]
pub struct Volume {
    action: Action,
}

impl Volume {
    /// Percentage change from -100 to 400.
    pub fn level(level: impl Into<Value>) -> Self {
        let level: Value = level.into();
        let mut action = Action::new();
        if let Some(err) = super::value::check_range("volume", &level, -100.0, 400.0) {
            action.record_error(err);
        }
        action.set("e", format!("volume:{level}"));
        Self { action }
    }

    pub fn decibels(db: i32) -> Self {
        Self {
            action: Action::new().with("e", format!("volume:{db}db")),
        }
    }

    pub fn mute() -> Self {
        Self {
            action: Action::new().with("e", "volume:mute"),
        }
    }
}

impl From<Volume> for Action {
    fn from(v: Volume) -> Self {
        v.action
    }
}

component_from_action!(Volume);

/// Constructors for video editing actions.
pub struct VideoEdit;

impl VideoEdit {
    pub fn trim() -> VideoTrim {
        VideoTrim::default()
    }

    pub fn concatenate(source: Source) -> Concatenate {
        Concatenate::new(source)
    }

    pub fn volume(level: impl Into<Value>) -> Volume {
        Volume::level(level)
    }

    pub fn mute() -> Volume {
        Volume::mute()
    }

    /// A short summary of the most interesting parts of the video.
    pub fn preview() -> Preview {
        Effect::preview()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformation::Transformation;

    #[test]
    fn trim_offsets() {
        let t = VideoEdit::trim().start_offset(2.5).end_offset("90p");
        assert_eq!(Action::from(t).to_string(), "eo_90p,so_2.5");
        assert_eq!(Action::from(VideoEdit::trim().duration(10)).to_string(), "du_10");
    }

    #[test]
    fn concatenate_video() {
        let c: Component = VideoEdit::concatenate(Source::video("dog")).duration(5).into();
        assert_eq!(c.to_string(), "du_5,fl_splice,l_video:dog/fl_layer_apply");
    }

    #[test]
    fn concatenate_with_transition_prepended() {
        let t = Transformation::new().video_edit(
            VideoEdit::concatenate(Source::video("kitten"))
                .transition(Source::video("fade"))
                .prepend(),
        );
        assert_eq!(
            t.to_string(),
            "fl_splice,l_video:kitten/e_transition,l_video:fade/fl_layer_apply/fl_layer_apply,so_0"
        );
    }

    #[test]
    fn volume_forms() {
        assert_eq!(Action::from(VideoEdit::volume(50)).to_string(), "e_volume:50");
        assert_eq!(Action::from(VideoEdit::mute()).to_string(), "e_volume:mute");
        assert_eq!(Action::from(Volume::decibels(-10)).to_string(), "e_volume:-10db");
        assert_eq!(Action::from(VideoEdit::volume(500)).errors().len(), 1);
    }
}
