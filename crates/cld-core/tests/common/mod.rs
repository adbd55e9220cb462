//! Shared fixtures for integration tests.

use cld_core::Configuration;

/// Credentials used by every signing test.
pub const CLOUDINARY_URL: &str = "cloudinary://a:b@test123";

pub fn config() -> Configuration {
    Configuration::from_cloudinary_url(CLOUDINARY_URL).expect("fixture url parses")
}

/// Configuration with `sign_url` enabled.
pub fn signing_config() -> Configuration {
    let mut cfg = config();
    cfg.url.sign_url = true;
    cfg
}
