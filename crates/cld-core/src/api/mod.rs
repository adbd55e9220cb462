//! Signed parameters and endpoints for the upload and admin APIs.
//!
//! Nothing here talks to the network: the functions produce the endpoint
//! URL and the form or query parameters a client would send.

mod archive;
mod upload;

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use ::url::form_urlencoded;

pub use self::archive::{download_archive_url, download_folder_url, download_zip_url, ArchiveParams};
pub use self::upload::UploadParams;

use crate::config::Configuration;
use crate::error::Result;
use crate::signature::{hex_signature, SignatureAlgorithm};

/// A request parameter: a single value or a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Value(String),
    List(Vec<String>),
}

impl Param {
    pub fn is_empty(&self) -> bool {
        match self {
            Param::Value(v) => v.is_empty(),
            Param::List(l) => l.is_empty(),
        }
    }

    /// Form used in the string to sign: lists are joined with `,`.
    fn signing_value(&self) -> String {
        match self {
            Param::Value(v) => v.clone(),
            Param::List(l) => l.join(","),
        }
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Value(v.to_string())
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::Value(v)
    }
}

impl From<u64> for Param {
    fn from(v: u64) -> Self {
        Param::Value(v.to_string())
    }
}

impl From<Vec<String>> for Param {
    fn from(v: Vec<String>) -> Self {
        Param::List(v)
    }
}

/// Request parameters keyed by name.
pub type Params = BTreeMap<String, Param>;

/// Hex signature of `params`: empty values dropped, `k=v` pairs sorted and
/// joined with `&`, the secret appended, then digested.
pub fn sign_parameters(params: &Params, api_secret: &str, algorithm: SignatureAlgorithm) -> String {
    let mut pairs: Vec<String> = params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{k}={}", v.signing_value()))
        .collect();
    pairs.sort();
    hex_signature(&pairs.join("&"), api_secret, algorithm)
}

/// Drop empty values, then add `signature` and `api_key`.
pub fn sign_request(mut params: Params, config: &Configuration) -> Result<Params> {
    let api_key = config.cloud.api_key()?.to_string();
    let api_secret = config.cloud.api_secret()?;
    params.retain(|_, v| !v.is_empty());
    let signature = sign_parameters(&params, api_secret, config.cloud.signature_algorithm);
    params.insert("signature".to_string(), Param::Value(signature));
    params.insert("api_key".to_string(), Param::Value(api_key));
    Ok(params)
}

/// `<upload_prefix>/v1_1/<cloud>/<resource_type>/<action>`.
pub fn api_url(config: &Configuration, resource_type: &str, action: &str) -> Result<String> {
    let cloud_name = config.cloud.cloud_name()?;
    let prefix = config.api.upload_prefix.trim_end_matches('/');
    Ok(format!("{prefix}/v1_1/{cloud_name}/{resource_type}/{action}"))
}

/// URL-encoded query; list parameters repeat as `key[]=value`.
pub fn query_string(params: &Params) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        match value {
            Param::Value(v) => {
                query.append_pair(key, v);
            }
            Param::List(list) => {
                let key = format!("{key}[]");
                for v in list {
                    query.append_pair(&key, v);
                }
            }
        }
    }
    query.finish()
}

/// Signed URL that downloads a private or authenticated asset through the API.
pub fn private_download_url(
    config: &Configuration,
    public_id: &str,
    format: &str,
    options: &DownloadOptions,
) -> Result<String> {
    let mut params = Params::new();
    params.insert("public_id".into(), public_id.into());
    params.insert("format".into(), format.into());
    params.insert("timestamp".into(), options.timestamp.unwrap_or_else(unix_now).into());
    if let Some(t) = &options.delivery_type {
        params.insert("type".into(), t.as_str().into());
    }
    if options.attachment {
        params.insert("attachment".into(), "true".into());
    }
    if let Some(expires_at) = options.expires_at {
        params.insert("expires_at".into(), expires_at.into());
    }
    let params = sign_request(params, config)?;
    let endpoint = api_url(config, options.resource_type.as_str(), "download")?;
    Ok(format!("{endpoint}?{}", query_string(&params)))
}

/// Options for [`private_download_url`].
#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    pub resource_type: crate::asset::AssetType,
    pub delivery_type: Option<crate::asset::DeliveryType>,
    pub attachment: bool,
    pub expires_at: Option<u64>,
    /// Fixed signing time; the current time when unset.
    pub timestamp: Option<u64>,
}

pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs.iter().map(|(k, v)| (k.to_string(), Param::from(*v))).collect()
    }

    #[test]
    fn signature_skips_empty_values() {
        let with_empty = params(&[("public_id", "b"), ("timestamp", "1315060510"), ("tags", "")]);
        let without = params(&[("public_id", "b"), ("timestamp", "1315060510")]);
        assert_eq!(
            sign_parameters(&with_empty, "abcd", SignatureAlgorithm::Sha1),
            sign_parameters(&without, "abcd", SignatureAlgorithm::Sha1)
        );
        assert_eq!(
            sign_parameters(&without, "abcd", SignatureAlgorithm::Sha1),
            hex_signature("public_id=b&timestamp=1315060510", "abcd", SignatureAlgorithm::Sha1)
        );
    }

    #[test]
    fn lists_join_with_comma() {
        let mut p = Params::new();
        p.insert("tags".into(), Param::List(vec!["a".into(), "b".into()]));
        assert_eq!(
            sign_parameters(&p, "s", SignatureAlgorithm::Sha256),
            hex_signature("tags=a,b", "s", SignatureAlgorithm::Sha256)
        );
    }

    #[test]
    fn api_url_layout() {
        let cfg = Configuration::for_cloud("demo");
        assert_eq!(
            api_url(&cfg, "image", "upload").unwrap(),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
    }

    #[test]
    fn query_repeats_lists() {
        let mut p = params(&[("mode", "download")]);
        p.insert("tags".into(), Param::List(vec!["x y".into(), "z".into()]));
        assert_eq!(query_string(&p), "mode=download&tags%5B%5D=x+y&tags%5B%5D=z");
    }

    #[test]
    fn sign_request_requires_credentials() {
        let cfg = Configuration::for_cloud("demo");
        assert_eq!(
            sign_request(Params::new(), &cfg),
            Err(crate::Error::MissingConfig("api_key"))
        );
    }
}
