//! Layer sources: the asset (or text) placed over or under the base asset.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;

use super::TextStyle;
use crate::error::Error;
use crate::escape::escape_layer_text;
use crate::transformation::{Action, Color, Component, Transformation, Value};

#[derive(Debug, Clone)]
enum SourceKind {
    Image(String),
    Video(String),
    Audio(String),
    Text { style: TextStyle, text: String },
    Fetch(String),
    Subtitles { public_id: String, style: Option<TextStyle> },
    Lut(String),
}

/// What a layer shows, plus qualifiers and a transformation applied to it
/// before it is placed.
#[derive(Debug, Clone)]
pub struct Source {
    kind: SourceKind,
    format: Option<String>,
    qualifiers: Action,
    transformation: Transformation,
}

impl Source {
    fn new(kind: SourceKind) -> Self {
        let mut qualifiers = Action::new();
        let empty_id = match &kind {
            SourceKind::Image(id)
            | SourceKind::Video(id)
            | SourceKind::Audio(id)
            | SourceKind::Fetch(id)
            | SourceKind::Lut(id) => id.is_empty(),
            SourceKind::Subtitles { public_id, .. } => public_id.is_empty(),
            SourceKind::Text { text, .. } => text.is_empty(),
        };
        if empty_id {
            qualifiers.record_error(Error::InvalidLayer(
                "layer source needs a public id, text or URL".to_string(),
            ));
        }
        Self {
            kind,
            format: None,
            qualifiers,
            transformation: Transformation::new(),
        }
    }

    pub fn image(public_id: &str) -> Self {
        Self::new(SourceKind::Image(public_id.to_string()))
    }

    pub fn video(public_id: &str) -> Self {
        Self::new(SourceKind::Video(public_id.to_string()))
    }

    pub fn audio(public_id: &str) -> Self {
        Self::new(SourceKind::Audio(public_id.to_string()))
    }

    pub fn text(text: &str, style: TextStyle) -> Self {
        Self::new(SourceKind::Text {
            style,
            text: text.to_string(),
        })
    }

    /// A remote image referenced by URL.
    pub fn fetch(url: &str) -> Self {
        Self::new(SourceKind::Fetch(url.to_string()))
    }

    pub fn subtitles(public_id: &str) -> Self {
        Self::new(SourceKind::Subtitles {
            public_id: public_id.to_string(),
            style: None,
        })
    }

    pub fn styled_subtitles(public_id: &str, style: TextStyle) -> Self {
        Self::new(SourceKind::Subtitles {
            public_id: public_id.to_string(),
            style: Some(style),
        })
    }

    /// A 3D lookup table (`.3dl` raw asset).
    pub fn lut(public_id: &str) -> Self {
        Self::new(SourceKind::Lut(public_id.to_string()))
    }

    /// Format of the layer asset (`l_logo.png`).
    pub fn format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    /// Transformation applied to the source before it is placed.
    pub fn transformation(mut self, component: impl Into<Component>) -> Self {
        self.transformation.push(component);
        self
    }

    /// Text (or subtitle) color.
    pub fn text_color(mut self, color: impl Into<Color>) -> Self {
        let color: Color = color.into();
        self.qualifiers.set("co", color);
        self
    }

    /// Background color behind text.
    pub fn background_color(mut self, color: impl Into<Color>) -> Self {
        let color: Color = color.into();
        self.qualifiers.set("b", color);
        self
    }

    /// Any other qualifier rendered next to the `l_`/`u_` qualifier.
    pub fn qualifier(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.qualifiers.set(key, value);
        self
    }

    pub(crate) fn with_flag(mut self, flag: &str) -> Self {
        self.qualifiers.add_flag(flag);
        self
    }

    /// Value of the `l_` / `u_` qualifier.
    pub fn layer_value(&self) -> String {
        let ext = self
            .format
            .as_deref()
            .map(|f| format!(".{f}"))
            .unwrap_or_default();
        match &self.kind {
            SourceKind::Image(id) => format!("{}{ext}", layer_id(id)),
            SourceKind::Video(id) => format!("video:{}{ext}", layer_id(id)),
            SourceKind::Audio(id) => format!("audio:{}{ext}", layer_id(id)),
            SourceKind::Text { style, text } => {
                format!("text:{style}:{}", escape_layer_text(text))
            }
            SourceKind::Fetch(url) => format!("fetch:{}", URL_SAFE.encode(url)),
            SourceKind::Subtitles { public_id, style } => match style {
                Some(style) => format!("subtitles:{style}:{}", layer_id(public_id)),
                None => format!("subtitles:{}", layer_id(public_id)),
            },
            SourceKind::Lut(id) => format!("lut:{}", layer_id(id)),
        }
    }

    /// Qualifiers of the opening action, including the layer key.
    pub(crate) fn opening_action(&self, key: &str) -> Action {
        self.qualifiers.clone().with(key, self.layer_value())
    }

    pub(crate) fn source_transformation(&self) -> &Transformation {
        &self.transformation
    }

    pub(crate) fn collect_errors(&self, out: &mut Vec<Error>) {
        out.extend(self.qualifiers.errors().iter().cloned());
        out.extend(self.transformation.errors());
    }
}

/// Folders in layer public ids are separated by `:`.
pub(crate) fn layer_id(public_id: &str) -> String {
    public_id.replace('/', ":")
}
