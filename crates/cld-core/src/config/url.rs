//! Delivery URL section.

use serde::{Deserialize, Serialize};

/// Options that shape delivery URLs (host, sharding, signing, version).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    /// Use `https` (default).
    pub secure: bool,
    /// Custom domain for insecure URLs.
    pub cname: Option<String>,
    /// Custom domain for secure URLs (a.k.a. secure distribution).
    #[serde(alias = "secure_distribution")]
    pub secure_cname: Option<String>,
    /// Dedicated `<cloud>-res` host instead of the shared domain.
    pub private_cdn: bool,
    /// Shard assets across `res-1` .. `res-5` hosts.
    pub cdn_subdomain: bool,
    /// Sharding for secure URLs; defaults to `cdn_subdomain` on the shared domain.
    pub secure_cdn_subdomain: Option<bool>,
    /// Use the `iu` shorthand for image/upload.
    pub shorten: bool,
    /// Serve image/upload assets from the root path.
    pub use_root_path: bool,
    /// Add an `s--...--` signature component.
    pub sign_url: bool,
    /// 32 character SHA-256 signatures instead of 8 characters.
    pub long_url_signature: bool,
    /// Add `v1` to public ids in folders that carry no version.
    pub force_version: bool,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            secure: true,
            cname: None,
            secure_cname: None,
            private_cdn: false,
            cdn_subdomain: false,
            secure_cdn_subdomain: None,
            shorten: false,
            use_root_path: false,
            sign_url: false,
            long_url_signature: false,
            force_version: true,
        }
    }
}
