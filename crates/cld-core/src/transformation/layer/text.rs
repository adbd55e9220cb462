//! Text styles for text and subtitle layers.

use std::fmt;

use crate::escape::smart_escape;
use crate::transformation::Value;

/// Font and layout of a text layer, rendered as
/// `family_size[_weight][_style][_decoration][_align][_stroke]...`.
///
/// A style may instead reference a text style preset stored as a public id.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font_family: String,
    font_size: Option<Value>,
    font_weight: Option<String>,
    font_style: Option<String>,
    text_decoration: Option<String>,
    text_align: Option<String>,
    stroke: bool,
    letter_spacing: Option<Value>,
    line_spacing: Option<Value>,
    font_antialias: Option<String>,
    font_hinting: Option<String>,
}

impl TextStyle {
    pub fn new(font_family: &str, font_size: impl Into<Value>) -> Self {
        Self {
            font_size: Some(font_size.into()),
            ..Self::from_public_id(font_family)
        }
    }

    /// Style taken from a previously uploaded text style preset.
    pub fn from_public_id(public_id: &str) -> Self {
        Self {
            font_family: public_id.to_string(),
            font_size: None,
            font_weight: None,
            font_style: None,
            text_decoration: None,
            text_align: None,
            stroke: false,
            letter_spacing: None,
            line_spacing: None,
            font_antialias: None,
            font_hinting: None,
        }
    }

    pub fn font_weight(mut self, weight: &str) -> Self {
        self.font_weight = Some(weight.to_string());
        self
    }

    pub fn bold(self) -> Self {
        self.font_weight("bold")
    }

    pub fn font_style(mut self, style: &str) -> Self {
        self.font_style = Some(style.to_string());
        self
    }

    pub fn italic(self) -> Self {
        self.font_style("italic")
    }

    pub fn text_decoration(mut self, decoration: &str) -> Self {
        self.text_decoration = Some(decoration.to_string());
        self
    }

    pub fn underline(self) -> Self {
        self.text_decoration("underline")
    }

    pub fn strikethrough(self) -> Self {
        self.text_decoration("strikethrough")
    }

    /// `left`, `center`, `right`, `end`, `start`, `justify`.
    pub fn text_align(mut self, align: &str) -> Self {
        self.text_align = Some(align.to_string());
        self
    }

    pub fn stroke(mut self) -> Self {
        self.stroke = true;
        self
    }

    pub fn letter_spacing(mut self, spacing: impl Into<Value>) -> Self {
        self.letter_spacing = Some(spacing.into());
        self
    }

    pub fn line_spacing(mut self, spacing: impl Into<Value>) -> Self {
        self.line_spacing = Some(spacing.into());
        self
    }

    /// `none`, `gray`, `subpixel`, `fast`, `good`, `best`.
    pub fn font_antialias(mut self, antialias: &str) -> Self {
        self.font_antialias = Some(antialias.to_string());
        self
    }

    /// `none`, `slight`, `medium`, `full`.
    pub fn font_hinting(mut self, hinting: &str) -> Self {
        self.font_hinting = Some(hinting.to_string());
        self
    }

    /// Keywords after family and size, skipping the defaults
    /// (`normal` weight and style, `none` decoration).
    fn keywords(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(w) = self.font_weight.as_deref().filter(|w| *w != "normal") {
            out.push(w.to_string());
        }
        if let Some(s) = self.font_style.as_deref().filter(|s| *s != "normal") {
            out.push(s.to_string());
        }
        if let Some(d) = self.text_decoration.as_deref().filter(|d| *d != "none") {
            out.push(d.to_string());
        }
        if let Some(a) = &self.text_align {
            out.push(a.clone());
        }
        if self.stroke {
            out.push("stroke".to_string());
        }
        if let Some(ls) = &self.letter_spacing {
            out.push(format!("letter_spacing_{ls}"));
        }
        if let Some(ls) = &self.line_spacing {
            out.push(format!("line_spacing_{ls}"));
        }
        if let Some(aa) = &self.font_antialias {
            out.push(format!("antialias_{aa}"));
        }
        if let Some(h) = &self.font_hinting {
            out.push(format!("hinting_{h}"));
        }
        out
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(size) = &self.font_size else {
            // Preset public id: slashes become colons like any layer id.
            return f.write_str(&self.font_family.replace('/', ":"));
        };
        let mut parts = vec![smart_escape(&self.font_family), size.to_string()];
        parts.extend(self.keywords());
        f.write_str(&parts.join("_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_and_size() {
        assert_eq!(TextStyle::new("Arial", 18).to_string(), "Arial_18");
        assert_eq!(TextStyle::new("Open Sans", 20).to_string(), "Open%20Sans_20");
    }

    #[test]
    fn keywords_in_order() {
        let style = TextStyle::new("Arial", 18)
            .bold()
            .italic()
            .underline()
            .text_align("center")
            .stroke()
            .letter_spacing(4)
            .line_spacing(2)
            .font_antialias("best")
            .font_hinting("full");
        assert_eq!(
            style.to_string(),
            "Arial_18_bold_italic_underline_center_stroke_letter_spacing_4_line_spacing_2_antialias_best_hinting_full"
        );
    }

    #[test]
    fn normal_keywords_are_skipped() {
        let style = TextStyle::new("Arial", 18)
            .font_weight("normal")
            .font_style("normal")
            .text_decoration("none");
        assert_eq!(style.to_string(), "Arial_18");
    }

    #[test]
    fn preset_public_id() {
        assert_eq!(TextStyle::from_public_id("styles/title").to_string(), "styles:title");
    }
}
