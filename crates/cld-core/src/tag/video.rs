use super::{render_attributes, Attributes};
use crate::asset::Asset;
use crate::config::Configuration;
use crate::error::Result;
use crate::escape::html_escape;

/// Poster image shown before playback.
#[derive(Debug, Clone, Default)]
pub enum Poster {
    /// A frame of the video in the configured poster format.
    #[default]
    Default,
    None,
    Url(String),
    Asset(Box<Asset>),
}

/// `<video>` tag with one `<source>` per delivery format.
#[derive(Debug, Clone)]
pub struct VideoTag {
    asset: Asset,
    attributes: Attributes,
    source_types: Option<Vec<String>>,
    poster: Poster,
    fallback: Option<String>,
}

impl VideoTag {
    pub fn new(asset: Asset) -> Self {
        Self {
            asset,
            attributes: Attributes::new(),
            source_types: None,
            poster: Poster::Default,
            fallback: None,
        }
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Boolean attribute such as `controls`, `autoplay`, `muted`.
    pub fn flag_attribute(self, name: impl Into<String>) -> Self {
        self.attribute(name, String::new())
    }

    /// Overrides the configured source formats.
    pub fn source_types(mut self, types: &[&str]) -> Self {
        self.source_types = Some(types.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn poster(mut self, poster: Poster) -> Self {
        self.poster = poster;
        self
    }

    /// Markup shown by browsers without video support.
    pub fn fallback(mut self, html: impl Into<String>) -> Self {
        self.fallback = Some(html.into());
        self
    }

    pub fn to_html(&self, config: &Configuration) -> Result<String> {
        let q = config.tag.quotes_type.as_char();
        let mut attributes = self.attributes.clone();

        let poster = match &self.poster {
            Poster::Default => Some(
                self.asset
                    .clone()
                    .format(config.tag.video_poster_format.clone())
                    .to_url(config)?,
            ),
            Poster::None => None,
            Poster::Url(url) => Some(url.clone()),
            Poster::Asset(asset) => Some(asset.to_url(config)?),
        };
        if let Some(poster) = poster {
            attributes.insert("poster".to_string(), poster);
        }

        let types = self
            .source_types
            .clone()
            .unwrap_or_else(|| config.tag.video_sources.clone());
        let mut inner = String::new();
        if let [single] = types.as_slice() {
            let url = self.asset.clone().format(single.clone()).to_url(config)?;
            attributes.insert("src".to_string(), url);
        } else {
            for source_type in &types {
                let url = self.asset.clone().format(source_type.clone()).to_url(config)?;
                inner.push_str(&format!(
                    "<source src={q}{}{q} type={q}{}{q}>",
                    html_escape(&url),
                    mime_type(source_type)
                ));
            }
        }
        if let Some(fallback) = &self.fallback {
            inner.push_str(fallback);
        }

        Ok(format!(
            "<video{}>{inner}</video>",
            render_attributes(&attributes, config.tag.quotes_type)
        ))
    }
}

fn mime_type(source_type: &str) -> String {
    match source_type {
        "ogv" => "video/ogg".to_string(),
        other => format!("video/{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://res.cloudinary.com/demo/video/upload/dog";

    fn config() -> Configuration {
        Configuration::for_cloud("demo")
    }

    #[test]
    fn default_sources_and_poster() {
        let html = VideoTag::new(Asset::video("dog"))
            .flag_attribute("controls")
            .to_html(&config())
            .unwrap();
        assert_eq!(
            html,
            format!(
                "<video controls poster=\"{BASE}.jpg\">\
                 <source src=\"{BASE}.webm\" type=\"video/webm\">\
                 <source src=\"{BASE}.mp4\" type=\"video/mp4\">\
                 <source src=\"{BASE}.ogv\" type=\"video/ogg\">\
                 </video>"
            )
        );
    }

    #[test]
    fn single_source_uses_src_attribute() {
        let html = VideoTag::new(Asset::video("dog"))
            .source_types(&["mp4"])
            .poster(Poster::None)
            .fallback("Your browser does not support video")
            .to_html(&config())
            .unwrap();
        assert_eq!(
            html,
            format!("<video src=\"{BASE}.mp4\">Your browser does not support video</video>")
        );
    }

    #[test]
    fn poster_url() {
        let html = VideoTag::new(Asset::video("dog"))
            .source_types(&["mp4"])
            .poster(Poster::Url("https://example.com/p.png".into()))
            .to_html(&config())
            .unwrap();
        assert!(html.starts_with("<video poster=\"https://example.com/p.png\" src="));
    }
}
