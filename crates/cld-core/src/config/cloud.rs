//! Account credentials section.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::signature::SignatureAlgorithm;

/// Account identity and secrets used for URL and API signatures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    /// Bearer token for the admin API; takes precedence over key/secret there.
    pub oauth_token: Option<String>,
    pub signature_algorithm: SignatureAlgorithm,
}

impl CloudConfig {
    pub fn cloud_name(&self) -> Result<&str> {
        non_empty(self.cloud_name.as_deref()).ok_or(Error::MissingConfig("cloud_name"))
    }

    pub fn api_key(&self) -> Result<&str> {
        non_empty(self.api_key.as_deref()).ok_or(Error::MissingConfig("api_key"))
    }

    pub fn api_secret(&self) -> Result<&str> {
        non_empty(self.api_secret.as_deref()).ok_or(Error::MissingConfig("api_secret"))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
