//! Delivery URL assembly:
//! `<prefix>/<resource>/<type>/<signature>/<transformation>/v<version>/<public_id>[/<suffix>][.<format>]`.

use tracing::debug;

use super::prefix::distribution_prefix;
use super::{AssetDescriptor, AssetType, DeliveryType};
use crate::auth_token::AuthToken;
use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::escape::{fully_unescape, smart_escape, unescape};
use crate::signature::{url_signature, SignatureAlgorithm};
use crate::transformation::Transformation;

/// Builds delivery URLs against one configuration.
#[derive(Debug, Clone, Copy)]
pub struct UrlBuilder<'a> {
    config: &'a Configuration,
}

impl<'a> UrlBuilder<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    /// Full delivery URL for `asset` with `transformation` applied.
    ///
    /// Remote `http(s)` sources of upload type and absolute paths are
    /// returned unchanged.
    pub fn build(&self, asset: &AssetDescriptor, transformation: &Transformation) -> Result<String> {
        let public_id = asset.public_id.as_str();
        if public_id.is_empty() {
            return Ok(String::new());
        }
        if asset.delivery_type == DeliveryType::Upload && is_remote(public_id) {
            return Ok(public_id.to_string());
        }
        if public_id.starts_with('/') {
            return Ok(public_id.to_string());
        }

        transformation.validate()?;
        let url_cfg = &self.config.url;
        let mut transformation = transformation.clone();
        if asset.delivery_type == DeliveryType::Fetch {
            if let Some(format) = asset.format.as_deref().filter(|f| !f.is_empty()) {
                transformation = transformation.add_raw(format!("f_{format}"));
            }
        }
        let transformation = collapse_double_slashes(&transformation.to_string());

        let suffix = asset.suffix.as_deref().filter(|s| !s.is_empty());
        let (resource, delivery) = resource_and_type(
            asset.asset_type,
            asset.delivery_type,
            suffix.is_some(),
            url_cfg.use_root_path,
            url_cfg.shorten,
        )?;
        let format = match asset.delivery_type {
            DeliveryType::Fetch => None,
            _ => asset.format.as_deref().filter(|f| !f.is_empty()),
        };
        let (source, source_to_sign) = finalize_source(public_id, format, suffix)?;

        let force_version = asset.force_version.unwrap_or(url_cfg.force_version);
        let version = match asset.version.as_deref().map(|v| v.trim_start_matches('v')) {
            Some(v) if !v.is_empty() => Some(format!("v{v}")),
            _ if force_version
                && source_to_sign.contains('/')
                && !starts_with_version(&source_to_sign)
                && !is_remote(&source_to_sign) =>
            {
                Some("v1".to_string())
            }
            _ => None,
        };

        let sign_url = asset.sign_url.unwrap_or(url_cfg.sign_url);
        let auth_token = self.auth_token(asset);
        let signature = if sign_url && auth_token.is_none() {
            let secret = self.config.cloud.api_secret()?;
            let to_sign = [transformation.as_str(), source_to_sign.as_str()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("/");
            let long = url_cfg.long_url_signature;
            let algorithm = if long {
                SignatureAlgorithm::Sha256
            } else {
                self.config.cloud.signature_algorithm
            };
            Some(url_signature(&fully_unescape(&to_sign), secret, algorithm, long))
        } else {
            None
        };

        let prefix = distribution_prefix(self.config, &source)?;
        let parts = [
            Some(prefix),
            resource,
            delivery,
            signature,
            Some(transformation),
            version,
            Some(source),
        ];
        let mut url = parts
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("/");

        if let (true, Some(token)) = (sign_url, auth_token) {
            let path = ::url::Url::parse(&url)
                .map(|u| u.path().to_string())
                .map_err(|e| Error::UnsupportedUrl(format!("{url}: {e}")))?;
            debug!("auth token replaces the url signature");
            let token = token.merge(&AuthToken::default().url(path)).generate()?;
            url = format!("{url}?{token}");
        }

        debug!(%url, "built delivery url");
        Ok(url)
    }

    fn auth_token(&self, asset: &AssetDescriptor) -> Option<AuthToken> {
        match (&self.config.auth_token, &asset.auth_token) {
            (Some(base), Some(over)) => Some(base.merge(over)),
            (Some(base), None) => Some(base.clone()),
            (None, Some(over)) => Some(over.clone()),
            (None, None) => None,
        }
        .filter(|t| !t.key.is_empty())
    }
}

fn is_remote(source: &str) -> bool {
    let lower = source.get(..8).unwrap_or(source).to_ascii_lowercase();
    lower.starts_with("http:/") || lower.starts_with("https:/")
}

fn starts_with_version(source: &str) -> bool {
    source
        .strip_prefix('v')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
}

/// `a//b` becomes `a/b`, but `https://` keeps its slashes.
fn collapse_double_slashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    let mut before_prev: Option<char> = None;
    for c in s.chars() {
        if c == '/' && prev == Some('/') && before_prev.is_some_and(|p| p != ':') {
            continue;
        }
        out.push(c);
        before_prev = prev;
        prev = Some(c);
    }
    out
}

/// Resource and type segments after applying suffix, root path and
/// shortening rules. `None` drops the segment.
fn resource_and_type(
    asset_type: AssetType,
    delivery_type: DeliveryType,
    has_suffix: bool,
    use_root_path: bool,
    shorten: bool,
) -> Result<(Option<String>, Option<String>)> {
    let mut resource = Some(asset_type.as_str().to_string());
    let mut delivery = Some(delivery_type.as_str().to_string());

    if has_suffix {
        let shortcut = match (asset_type, delivery_type) {
            (AssetType::Image, DeliveryType::Upload) => "images",
            (AssetType::Image, DeliveryType::Private) => "private_images",
            (AssetType::Image, DeliveryType::Authenticated) => "authenticated_images",
            (AssetType::Raw, DeliveryType::Upload) => "files",
            (AssetType::Video, DeliveryType::Upload) => "videos",
            _ => {
                return Err(Error::invalid_option(
                    "url_suffix",
                    "only supported for image/upload, image/private, image/authenticated, video/upload and raw/upload",
                ))
            }
        };
        resource = Some(shortcut.to_string());
        delivery = None;
    }

    if use_root_path {
        let root_ok = matches!(
            (resource.as_deref(), delivery.as_deref()),
            (Some("image"), Some("upload")) | (Some("images"), None)
        );
        if !root_ok {
            return Err(Error::invalid_option(
                "use_root_path",
                "root path only supported for image/upload",
            ));
        }
        resource = None;
        delivery = None;
    }

    if shorten && resource.as_deref() == Some("image") && delivery.as_deref() == Some("upload") {
        resource = Some("iu".to_string());
        delivery = None;
    }

    Ok((resource, delivery))
}

/// Escaped source for the URL and the form that is signed.
fn finalize_source(
    public_id: &str,
    format: Option<&str>,
    suffix: Option<&str>,
) -> Result<(String, String)> {
    let public_id = collapse_double_slashes(public_id);
    if is_remote(&public_id) {
        let escaped = smart_escape(&public_id);
        return Ok((escaped.clone(), escaped));
    }

    let mut source = smart_escape(&unescape(&public_id));
    let mut source_to_sign = source.clone();
    if let Some(suffix) = suffix {
        if suffix.contains(['.', '/']) {
            return Err(Error::invalid_option("url_suffix", "should not include . or /"));
        }
        source = format!("{source}/{suffix}");
    }
    if let Some(format) = format {
        source = format!("{source}.{format}");
        source_to_sign = format!("{source_to_sign}.{format}");
    }
    Ok((source, source_to_sign))
}
