//! Upload/admin API section.

use serde::{Deserialize, Serialize};

pub const DEFAULT_UPLOAD_PREFIX: &str = "https://api.cloudinary.com";

/// Endpoint settings for API request builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme and host of the API, e.g. `https://api.cloudinary.com`.
    pub upload_prefix: String,
    /// Request timeout hint for callers that send the built requests.
    pub timeout_secs: Option<u64>,
    /// Chunk size for large uploads.
    pub chunk_size: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            upload_prefix: DEFAULT_UPLOAD_PREFIX.to_string(),
            timeout_secs: None,
            chunk_size: 20_000_000,
        }
    }
}
