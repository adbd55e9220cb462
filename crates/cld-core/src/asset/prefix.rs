//! Host part of delivery URLs.

use crc::{Crc, CRC_32_ISO_HDLC};

use crate::config::Configuration;
use crate::error::Result;

const SHARED_CDN: &str = "res.cloudinary.com";
const OLD_AKAMAI_SHARED_CDN: &str = "cloudinary-a.akamaihd.net";
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Shard number 1..=5 for `source`, stable across SDKs.
pub(crate) fn shard(source: &str) -> u32 {
    CRC32.checksum(source.as_bytes()) % 5 + 1
}

/// Scheme, host and (on shared domains) the cloud name, without a
/// trailing slash.
pub(crate) fn distribution_prefix(config: &Configuration, source: &str) -> Result<String> {
    let cloud_name = config.cloud.cloud_name()?;
    let url = &config.url;

    if cloud_name.starts_with('/') {
        return Ok(format!("/res{cloud_name}"));
    }

    let mut shared_domain = !url.private_cdn;
    let prefix = if url.secure {
        let mut distribution = match url.secure_cname.as_deref() {
            None | Some(OLD_AKAMAI_SHARED_CDN) | Some("") if url.private_cdn => {
                format!("{cloud_name}-res.cloudinary.com")
            }
            None | Some(OLD_AKAMAI_SHARED_CDN) | Some("") => SHARED_CDN.to_string(),
            Some(cname) => cname.to_string(),
        };
        shared_domain = shared_domain || distribution == SHARED_CDN;
        let subdomain = match url.secure_cdn_subdomain {
            None if shared_domain => url.cdn_subdomain,
            other => other.unwrap_or(false),
        };
        if subdomain {
            distribution = distribution.replace(
                SHARED_CDN,
                &format!("res-{}.cloudinary.com", shard(source)),
            );
        }
        format!("https://{distribution}")
    } else if let Some(cname) = url.cname.as_deref().filter(|c| !c.is_empty()) {
        let subdomain = if url.cdn_subdomain {
            format!("a{}.", shard(source))
        } else {
            String::new()
        };
        format!("http://{subdomain}{cname}")
    } else {
        let private = if url.private_cdn {
            format!("{cloud_name}-")
        } else {
            String::new()
        };
        let subdomain = if url.cdn_subdomain {
            format!("-{}", shard(source))
        } else {
            String::new()
        };
        format!("http://{private}res{subdomain}.cloudinary.com")
    };

    Ok(if shared_domain {
        format!("{prefix}/{cloud_name}")
    } else {
        prefix
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> Configuration {
        Configuration::for_cloud("test123")
    }

    #[test]
    fn shard_matches_crc32() {
        assert_eq!(shard("test"), 2);
    }

    #[test]
    fn secure_shared_domain() {
        assert_eq!(
            distribution_prefix(&cfg(), "test").unwrap(),
            "https://res.cloudinary.com/test123"
        );
    }

    #[test]
    fn insecure_with_subdomain() {
        let mut c = cfg();
        c.url.secure = false;
        c.url.cdn_subdomain = true;
        assert_eq!(
            distribution_prefix(&c, "test").unwrap(),
            "http://res-2.cloudinary.com/test123"
        );
    }

    #[test]
    fn private_cdn_secure() {
        let mut c = cfg();
        c.url.private_cdn = true;
        assert_eq!(
            distribution_prefix(&c, "test").unwrap(),
            "https://test123-res.cloudinary.com"
        );
    }

    #[test]
    fn secure_cname_keeps_cloud_name_on_shared_domain() {
        let mut c = cfg();
        c.url.secure_cname = Some("something.else.com".to_string());
        assert_eq!(
            distribution_prefix(&c, "test").unwrap(),
            "https://something.else.com/test123"
        );
    }

    #[test]
    fn insecure_cname_with_subdomain() {
        let mut c = cfg();
        c.url.secure = false;
        c.url.cname = Some("hello.com".to_string());
        c.url.cdn_subdomain = true;
        assert_eq!(
            distribution_prefix(&c, "test").unwrap(),
            "http://a2.hello.com/test123"
        );
    }

    #[test]
    fn secure_cdn_subdomain_follows_cdn_subdomain() {
        let mut c = cfg();
        c.url.cdn_subdomain = true;
        assert_eq!(
            distribution_prefix(&c, "test").unwrap(),
            "https://res-2.cloudinary.com/test123"
        );
        c.url.secure_cdn_subdomain = Some(false);
        assert_eq!(
            distribution_prefix(&c, "test").unwrap(),
            "https://res.cloudinary.com/test123"
        );
    }
}
