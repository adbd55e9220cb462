//! Resource and delivery type names used in URL paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kind of stored asset: the `<resource_type>` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    #[default]
    Image,
    Video,
    Raw,
}

impl AssetType {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Image => "image",
            AssetType::Video => "video",
            AssetType::Raw => "raw",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "image" => Ok(AssetType::Image),
            "video" => Ok(AssetType::Video),
            "raw" => Ok(AssetType::Raw),
            other => Err(Error::invalid_option(
                "resource_type",
                format!("unknown resource type {other}"),
            )),
        }
    }
}

/// How the asset is stored and accessed: the `<type>` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    #[default]
    Upload,
    Private,
    Authenticated,
    Fetch,
    Facebook,
    Twitter,
    Gravatar,
    Youtube,
    Vimeo,
    List,
    Multi,
    Sprite,
    Text,
    Asset,
}

impl DeliveryType {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryType::Upload => "upload",
            DeliveryType::Private => "private",
            DeliveryType::Authenticated => "authenticated",
            DeliveryType::Fetch => "fetch",
            DeliveryType::Facebook => "facebook",
            DeliveryType::Twitter => "twitter",
            DeliveryType::Gravatar => "gravatar",
            DeliveryType::Youtube => "youtube",
            DeliveryType::Vimeo => "vimeo",
            DeliveryType::List => "list",
            DeliveryType::Multi => "multi",
            DeliveryType::Sprite => "sprite",
            DeliveryType::Text => "text",
            DeliveryType::Asset => "asset",
        }
    }

    const ALL: [DeliveryType; 14] = [
        DeliveryType::Upload,
        DeliveryType::Private,
        DeliveryType::Authenticated,
        DeliveryType::Fetch,
        DeliveryType::Facebook,
        DeliveryType::Twitter,
        DeliveryType::Gravatar,
        DeliveryType::Youtube,
        DeliveryType::Vimeo,
        DeliveryType::List,
        DeliveryType::Multi,
        DeliveryType::Sprite,
        DeliveryType::Text,
        DeliveryType::Asset,
    ];
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DeliveryType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::invalid_option("type", format!("unknown delivery type {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        assert_eq!("video".parse::<AssetType>().unwrap(), AssetType::Video);
        assert_eq!("authenticated".parse::<DeliveryType>().unwrap(), DeliveryType::Authenticated);
        assert_eq!(DeliveryType::Fetch.to_string(), "fetch");
        assert!("cdn".parse::<DeliveryType>().is_err());
    }
}
