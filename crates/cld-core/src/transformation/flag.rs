//! Standalone `fl_` flags.

use super::{component_from_action, Action};

/// A delivery or processing flag, rendered as `fl_<name>[:<value>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag(String);

macro_rules! simple_flags {
    ($($fn_name:ident => $flag:literal),* $(,)?) => {
        impl Flag {
            $(pub fn $fn_name() -> Self {
                Flag($flag.to_string())
            })*
        }
    };
}

simple_flags! {
    any_format => "any_format",
    animated => "animated",
    animated_webp => "awebp",
    animated_png => "apng",
    clip => "clip",
    clip_evenodd => "clip_evenodd",
    cutter => "cutter",
    force_icc => "force_icc",
    force_strip => "force_strip",
    get_info => "getinfo",
    ignore_initial_aspect_ratio => "ignore_aspect_ratio",
    immutable_cache => "immutable_cache",
    keep_attribution => "keep_attribution",
    keep_iptc => "keep_iptc",
    layer_apply => "layer_apply",
    lossy => "lossy",
    no_overflow => "no_overflow",
    preserve_transparency => "preserve_transparency",
    png8 => "png8",
    png24 => "png24",
    png32 => "png32",
    rasterize => "rasterize",
    region_relative => "region_relative",
    relative => "relative",
    sanitize => "sanitize",
    splice => "splice",
    strip_profile => "strip_profile",
    text_no_trim => "text_no_trim",
    text_disallow_overflow => "text_disallow_overflow",
    tiff8_lzw => "tiff8_lzw",
    tiled => "tiled",
    truncate_ts => "truncate_ts",
    waveform => "waveform",
}

impl Flag {
    /// Any flag by name.
    pub fn custom(name: &str) -> Self {
        Flag(name.to_string())
    }

    /// Deliver as an attachment, optionally with a file name.
    pub fn attachment(filename: Option<&str>) -> Self {
        Self::with_value("attachment", filename)
    }

    pub fn streaming_attachment(filename: Option<&str>) -> Self {
        Self::with_value("streaming_attachment", filename)
    }

    /// Progressive JPEG, optionally with a mode (`semi`, `steep`, `none`).
    pub fn progressive(mode: Option<&str>) -> Self {
        Self::with_value("progressive", mode)
    }

    fn with_value(name: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Flag(format!("{name}:{v}")),
            _ => Flag(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Flag> for Action {
    fn from(flag: Flag) -> Self {
        Action::new().with_flag(flag.0)
    }
}

component_from_action!(Flag);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_render_with_prefix() {
        assert_eq!(Action::from(Flag::keep_iptc()).to_string(), "fl_keep_iptc");
        assert_eq!(Action::from(Flag::animated_webp()).to_string(), "fl_awebp");
    }

    #[test]
    fn valued_flags() {
        assert_eq!(Action::from(Flag::attachment(Some("photo"))).to_string(), "fl_attachment:photo");
        assert_eq!(Action::from(Flag::attachment(None)).to_string(), "fl_attachment");
        assert_eq!(Action::from(Flag::progressive(Some("semi"))).to_string(), "fl_progressive:semi");
    }
}
