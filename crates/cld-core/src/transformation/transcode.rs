//! Video and audio transcoding settings.

use super::qualifier::with_args;
use super::value::float;
use super::{component_from_action, Action, Args, Format, Value};

/// Video codec with optional profile and level: `vc_h264:baseline:3.1`.
#[derive(Debug, Clone)]
pub struct VideoCodec {
    codec: String,
    args: Args,
}

impl VideoCodec {
    pub fn new(codec: &str) -> Self {
        Self {
            codec: codec.to_string(),
            args: Args::new(),
        }
    }

    pub fn auto() -> Self {
        Self::new("auto")
    }

    pub fn h264() -> Self {
        Self::new("h264")
    }

    pub fn h265() -> Self {
        Self::new("h265")
    }

    pub fn vp8() -> Self {
        Self::new("vp8")
    }

    pub fn vp9() -> Self {
        Self::new("vp9")
    }

    pub fn prores() -> Self {
        Self::new("prores")
    }

    pub fn theora() -> Self {
        Self::new("theora")
    }

    /// Do not re-encode the video stream.
    pub fn none() -> Self {
        Self::new("none")
    }

    /// `baseline`, `main`, `high`.
    pub fn profile(mut self, profile: &str) -> Self {
        self.args.set(0, profile);
        self
    }

    pub fn level(mut self, level: impl Into<Value>) -> Self {
        let level: Value = level.into();
        self.args.set(1, level);
        self
    }
}

/// Target bit rate, e.g. `500k` or `2m`; variable unless made constant.
#[derive(Debug, Clone)]
pub struct BitRate {
    rate: Value,
    constant: bool,
}

impl BitRate {
    pub fn new(rate: impl Into<Value>) -> Self {
        Self {
            rate: rate.into(),
            constant: false,
        }
    }

    pub fn constant(mut self) -> Self {
        self.constant = true;
        self
    }
}

/// Conversion of a video to an animated image.
#[derive(Debug, Clone)]
pub struct AnimatedFormat {
    format: &'static str,
    extra_flag: Option<&'static str>,
    delay: Option<Value>,
    sampling: Option<Value>,
}

impl AnimatedFormat {
    fn new(format: &'static str, extra_flag: Option<&'static str>) -> Self {
        Self {
            format,
            extra_flag,
            delay: None,
            sampling: None,
        }
    }

    pub fn gif() -> Self {
        Self::new("gif", None)
    }

    pub fn webp() -> Self {
        Self::new("webp", Some("awebp"))
    }

    pub fn png() -> Self {
        Self::new("png", Some("apng"))
    }

    /// Delay between frames in milliseconds (`dl_`).
    pub fn delay(mut self, ms: impl Into<Value>) -> Self {
        self.delay = Some(ms.into());
        self
    }

    /// Frame sampling (`vs_`): a frame count, or seconds as `"1.1s"`.
    pub fn sampling(mut self, sampling: impl Into<Value>) -> Self {
        self.sampling = Some(sampling.into());
        self
    }
}

impl From<AnimatedFormat> for Action {
    fn from(a: AnimatedFormat) -> Self {
        let mut action = Action::from(Format::new(a.format)).with_flag("animated");
        if let Some(flag) = a.extra_flag {
            action.add_flag(flag);
        }
        if let Some(delay) = a.delay {
            action.set("dl", delay);
        }
        if let Some(sampling) = a.sampling {
            action.set("vs", sampling);
        }
        action
    }
}

component_from_action!(AnimatedFormat);

/// Constructors for transcoding actions.
pub struct Transcode;

impl Transcode {
    pub fn video_codec(codec: VideoCodec) -> Action {
        Action::new().with("vc", with_args(&codec.codec, &codec.args))
    }

    /// `aac`, `vorbis`, `mp3`, `opus`, or `none` to drop the audio track.
    pub fn audio_codec(codec: &str) -> Action {
        Action::new().with("ac", codec)
    }

    /// Sample rate in Hz, e.g. `44100`.
    pub fn audio_frequency(hz: impl Into<Value>) -> Action {
        Action::new().with("af", hz)
    }

    pub fn bit_rate(rate: BitRate) -> Action {
        let value = if rate.constant {
            format!("{}:constant", rate.rate)
        } else {
            rate.rate.to_string()
        };
        Action::new().with("br", value)
    }

    pub fn fps(fps: impl Into<Value>) -> Action {
        Action::new().with("fps", fps)
    }

    /// Frame rate bounds; an open upper bound renders as `from-`.
    pub fn fps_range(from: impl Into<Value>, to: Option<Value>) -> Action {
        let from: Value = from.into();
        let value = match to {
            Some(to) => format!("{from}-{to}"),
            None => format!("{from}-"),
        };
        Action::new().with("fps", value)
    }

    /// Seconds between keyframes, rendered as a float.
    pub fn keyframe_interval(seconds: impl Into<Value>) -> Action {
        Action::new().with("ki", float(seconds))
    }

    /// Adaptive streaming profile name, e.g. `hd` or `4k`.
    pub fn streaming_profile(profile: &str) -> Action {
        Action::new().with("sp", profile)
    }

    pub fn to_animated(format: AnimatedFormat) -> Action {
        format.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_codec_with_profile_and_level() {
        assert_eq!(Transcode::video_codec(VideoCodec::vp9()).to_string(), "vc_vp9");
        assert_eq!(
            Transcode::video_codec(VideoCodec::h264().profile("baseline").level(3.1)).to_string(),
            "vc_h264:baseline:3.1"
        );
    }

    #[test]
    fn audio_settings() {
        assert_eq!(Transcode::audio_codec("aac").to_string(), "ac_aac");
        assert_eq!(Transcode::audio_frequency(44100).to_string(), "af_44100");
    }

    #[test]
    fn bit_rates() {
        assert_eq!(Transcode::bit_rate(BitRate::new("500k")).to_string(), "br_500k");
        assert_eq!(
            Transcode::bit_rate(BitRate::new("2m").constant()).to_string(),
            "br_2m:constant"
        );
    }

    #[test]
    fn frame_rates() {
        assert_eq!(Transcode::fps(25).to_string(), "fps_25");
        assert_eq!(Transcode::fps_range(20, Some(Value::from(30))).to_string(), "fps_20-30");
        assert_eq!(Transcode::fps_range(15, None).to_string(), "fps_15-");
    }

    #[test]
    fn keyframes_and_streaming() {
        assert_eq!(Transcode::keyframe_interval(10).to_string(), "ki_10.0");
        assert_eq!(Transcode::keyframe_interval(0.5).to_string(), "ki_0.5");
        assert_eq!(Transcode::streaming_profile("hd").to_string(), "sp_hd");
    }

    #[test]
    fn animated_formats() {
        assert_eq!(Transcode::to_animated(AnimatedFormat::gif()).to_string(), "f_gif,fl_animated");
        assert_eq!(
            Transcode::to_animated(AnimatedFormat::webp().delay(20).sampling("4s")).to_string(),
            "dl_20,f_webp,fl_animated,fl_awebp,vs_4s"
        );
    }
}
