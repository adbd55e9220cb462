use super::{add_class, render_attributes, Attributes};
use crate::asset::Asset;
use crate::config::Configuration;
use crate::error::Result;
use crate::escape::html_escape;
use crate::transformation::{Resize, Transformation};

/// Responsive image widths for `srcset`, with an optional generated `sizes`.
#[derive(Debug, Clone, Default)]
pub struct SrcSet {
    pub breakpoints: Vec<u32>,
    /// Emit `sizes="(max-width: Wpx) Wpx, ..."` for the breakpoints.
    pub sizes: bool,
}

/// `<img>` tag for an image asset.
#[derive(Debug, Clone)]
pub struct ImageTag {
    asset: Asset,
    attributes: Attributes,
    srcset: Option<SrcSet>,
    responsive: Option<bool>,
}

impl ImageTag {
    pub fn new(asset: Asset) -> Self {
        Self {
            asset,
            attributes: Attributes::new(),
            srcset: None,
            responsive: None,
        }
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn alt(self, alt: impl Into<String>) -> Self {
        self.attribute("alt", alt)
    }

    pub fn class(mut self, class: &str) -> Self {
        add_class(&mut self.attributes, class);
        self
    }

    pub fn srcset(mut self, srcset: SrcSet) -> Self {
        self.srcset = Some(srcset);
        self
    }

    /// Overrides the configured `responsive` setting.
    pub fn responsive(mut self, responsive: bool) -> Self {
        self.responsive = Some(responsive);
        self
    }

    pub fn to_html(&self, config: &Configuration) -> Result<String> {
        let url = self.asset.to_url(config)?;
        let mut attributes = self.attributes.clone();

        if let Some(srcset) = self.srcset.as_ref().filter(|s| !s.breakpoints.is_empty()) {
            let mut entries = Vec::with_capacity(srcset.breakpoints.len());
            for width in &srcset.breakpoints {
                let sized = self.asset.clone().transformation(
                    self.asset
                        .transformation_ref()
                        .clone()
                        .resize(Resize::scale().width(*width)),
                );
                entries.push(format!("{} {width}w", sized.to_url(config)?));
            }
            attributes.insert("srcset".to_string(), entries.join(", "));
            if srcset.sizes {
                let sizes: Vec<String> = srcset
                    .breakpoints
                    .iter()
                    .map(|w| format!("(max-width: {w}px) {w}px"))
                    .collect();
                attributes.insert("sizes".to_string(), sizes.join(", "));
            }
        }

        let q = config.tag.quotes_type.as_char();
        let responsive = self.responsive.unwrap_or(config.tag.responsive);
        let src = if responsive {
            attributes.insert("data-src".to_string(), url);
            add_class(&mut attributes, "cld-responsive");
            String::new()
        } else {
            format!(" src={q}{}{q}", html_escape(&url))
        };

        Ok(format!(
            "<img{src}{}>",
            render_attributes(&attributes, config.tag.quotes_type)
        ))
    }
}

/// Convenience for an `<img>` of `public_id` with `transformation`.
pub fn image_tag(
    config: &Configuration,
    public_id: &str,
    transformation: Transformation,
) -> Result<String> {
    ImageTag::new(Asset::image(public_id).transformation(transformation)).to_html(config)
}
