//! Delivery URLs for stored and remote assets.
//!
//! ```
//! use cld_core::{Asset, Configuration};
//! use cld_core::transformation::{Resize, Transformation};
//!
//! let config = Configuration::for_cloud("demo");
//! let url = Asset::image("sample")
//!     .format("jpg")
//!     .transformation(Transformation::new().resize(Resize::scale().width(100)))
//!     .to_url(&config)
//!     .unwrap();
//! assert_eq!(url, "https://res.cloudinary.com/demo/image/upload/c_scale,w_100/sample.jpg");
//! ```

mod prefix;
mod types;
mod url;

pub use self::types::{AssetType, DeliveryType};
pub use self::url::UrlBuilder;

use crate::auth_token::AuthToken;
use crate::config::Configuration;
use crate::error::Result;
use crate::transformation::Transformation;

/// Identity of an asset and the per-asset URL options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetDescriptor {
    pub public_id: String,
    pub asset_type: AssetType,
    pub delivery_type: DeliveryType,
    /// Upload version, with or without the leading `v`.
    pub version: Option<String>,
    pub format: Option<String>,
    /// SEO suffix appended after the public id.
    pub suffix: Option<String>,
    /// Overrides the configured `force_version`.
    pub force_version: Option<bool>,
    /// Overrides the configured `sign_url`.
    pub sign_url: Option<bool>,
    /// Merged over the configured auth token.
    pub auth_token: Option<AuthToken>,
}

impl AssetDescriptor {
    pub fn new(public_id: impl Into<String>, asset_type: AssetType) -> Self {
        Self {
            public_id: public_id.into(),
            asset_type,
            ..Self::default()
        }
    }
}

/// An asset plus the transformation to deliver it with.
#[derive(Debug, Clone)]
pub struct Asset {
    descriptor: AssetDescriptor,
    transformation: Transformation,
}

impl Asset {
    pub fn new(descriptor: AssetDescriptor) -> Self {
        Self {
            descriptor,
            transformation: Transformation::new(),
        }
    }

    pub fn image(public_id: impl Into<String>) -> Self {
        Self::new(AssetDescriptor::new(public_id, AssetType::Image))
    }

    pub fn video(public_id: impl Into<String>) -> Self {
        Self::new(AssetDescriptor::new(public_id, AssetType::Video))
    }

    /// A raw file (documents, archives, LUTs, ...).
    pub fn file(public_id: impl Into<String>) -> Self {
        Self::new(AssetDescriptor::new(public_id, AssetType::Raw))
    }

    pub fn delivery_type(mut self, delivery_type: DeliveryType) -> Self {
        self.descriptor.delivery_type = delivery_type;
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.descriptor.version = Some(version.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.descriptor.format = Some(format.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.descriptor.suffix = Some(suffix.into());
        self
    }

    pub fn force_version(mut self, force: bool) -> Self {
        self.descriptor.force_version = Some(force);
        self
    }

    pub fn sign_url(mut self, sign: bool) -> Self {
        self.descriptor.sign_url = Some(sign);
        self
    }

    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.descriptor.auth_token = Some(token);
        self
    }

    /// Replace the delivery transformation.
    pub fn transformation(mut self, transformation: Transformation) -> Self {
        self.transformation = transformation;
        self
    }

    pub fn descriptor(&self) -> &AssetDescriptor {
        &self.descriptor
    }

    pub fn transformation_ref(&self) -> &Transformation {
        &self.transformation
    }

    pub fn to_url(&self, config: &Configuration) -> Result<String> {
        UrlBuilder::new(config).build(&self.descriptor, &self.transformation)
    }
}
