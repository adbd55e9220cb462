//! Token based access control for authenticated delivery.
//!
//! A token is `<name>=[ip=..~][st=..~]exp=..[~acl=..]~hmac=..` where the
//! HMAC-SHA256 is keyed with the hex decoded account key and covers every
//! part before it (plus `url=..` when the token is bound to a URL instead
//! of an ACL).

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::escape::escape_to_lower;
use crate::signature::hmac_sha256_hex;

pub const DEFAULT_TOKEN_NAME: &str = "__cld_token__";
const SEPARATOR: &str = "~";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthToken {
    /// Hex encoded HMAC key.
    pub key: String,
    /// Query parameter / cookie name; defaults to `__cld_token__`.
    pub name: Option<String>,
    /// Unix time the token becomes valid.
    pub start_time: Option<u64>,
    /// Unix time the token expires.
    pub expiration: Option<u64>,
    /// Seconds of validity from `start_time` (or now) when no expiration is set.
    pub duration: Option<u64>,
    pub ip: Option<String>,
    /// Path patterns the token grants access to, joined with `!`.
    pub acl: Vec<String>,
    /// Single URL path the token is bound to when there is no ACL.
    pub url: Option<String>,
}

impl AuthToken {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn start_time(mut self, unix: u64) -> Self {
        self.start_time = Some(unix);
        self
    }

    /// Valid from the current time.
    pub fn start_now(self) -> Self {
        self.start_time(now())
    }

    pub fn expiration(mut self, unix: u64) -> Self {
        self.expiration = Some(unix);
        self
    }

    pub fn duration(mut self, seconds: u64) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn acl(mut self, acl: impl Into<String>) -> Self {
        self.acl.push(acl.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// `self` with every field set in `overrides` replaced.
    pub fn merge(&self, overrides: &AuthToken) -> AuthToken {
        AuthToken {
            key: if overrides.key.is_empty() {
                self.key.clone()
            } else {
                overrides.key.clone()
            },
            name: overrides.name.clone().or_else(|| self.name.clone()),
            start_time: overrides.start_time.or(self.start_time),
            expiration: overrides.expiration.or(self.expiration),
            duration: overrides.duration.or(self.duration),
            ip: overrides.ip.clone().or_else(|| self.ip.clone()),
            acl: if overrides.acl.is_empty() {
                self.acl.clone()
            } else {
                overrides.acl.clone()
            },
            url: overrides.url.clone().or_else(|| self.url.clone()),
        }
    }

    pub fn token_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_TOKEN_NAME)
    }

    /// Render `<name>=<token>`.
    pub fn generate(&self) -> Result<String> {
        if self.key.is_empty() {
            return Err(Error::MissingConfig("auth_token.key"));
        }
        let expiration = match (self.expiration, self.duration) {
            (Some(exp), _) => exp,
            (None, Some(duration)) => self
                .start_time
                .unwrap_or_else(now)
                .checked_add(duration)
                .ok_or_else(|| Error::AuthToken("start time plus duration overflows".to_string()))?,
            (None, None) => {
                return Err(Error::AuthToken(
                    "must provide either expiration or duration".to_string(),
                ))
            }
        };
        let url = self.url.as_deref().filter(|u| !u.is_empty());
        if self.acl.is_empty() && url.is_none() {
            return Err(Error::AuthToken(
                "token must contain either an acl or a url".to_string(),
            ));
        }

        let mut parts = Vec::new();
        if let Some(ip) = &self.ip {
            parts.push(format!("ip={ip}"));
        }
        if let Some(st) = self.start_time {
            parts.push(format!("st={st}"));
        }
        parts.push(format!("exp={expiration}"));
        if !self.acl.is_empty() {
            parts.push(format!("acl={}", escape_to_lower(&self.acl.join("!"))));
        }

        let mut to_sign = parts.clone();
        if let (Some(url), true) = (url, self.acl.is_empty()) {
            to_sign.push(format!("url={}", escape_to_lower(url)));
        }
        let hmac = hmac_sha256_hex(&self.key, &to_sign.join(SEPARATOR))?;
        parts.push(format!("hmac={hmac}"));

        tracing::debug!(expiration, acl = self.acl.len(), "generated auth token");
        Ok(format!("{}={}", self.token_name(), parts.join(SEPARATOR)))
    }
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "00112233FF99";

    #[test]
    fn expiration_from_start_and_duration() {
        let token = AuthToken::new(KEY)
            .start_time(1111111111)
            .duration(300)
            .acl("/image/*")
            .generate()
            .unwrap();
        assert_eq!(
            token,
            "__cld_token__=st=1111111111~exp=1111111411~acl=%2fimage%2f*\
             ~hmac=1751370bcc6cfe9e03f30dd1a9722ba0f2cdca283fa3e6df3342a00a7528cc51"
        );
    }

    #[test]
    fn duration_overflow_is_an_error() {
        let result = AuthToken::new(KEY)
            .start_time(u64::MAX - 10)
            .duration(300)
            .acl("/*")
            .generate();
        assert!(matches!(result, Err(Error::AuthToken(_))));
    }

    #[test]
    fn url_is_signed_but_not_included() {
        let token = AuthToken::new(KEY)
            .expiration(2000000000)
            .url("/image/authenticated/sample.jpg")
            .generate()
            .unwrap();
        assert!(token.starts_with("__cld_token__=exp=2000000000~hmac="));

        let expected = hmac_sha256_hex(
            KEY,
            "exp=2000000000~url=%2fimage%2fauthenticated%2fsample.jpg",
        )
        .unwrap();
        assert!(token.ends_with(&expected));
    }

    #[test]
    fn ip_and_custom_name() {
        let mut t = AuthToken::new(KEY).ip("192.168.1.1").expiration(10).acl("/*");
        t.name = Some("tok".to_string());
        let token = t.generate().unwrap();
        assert!(token.starts_with("tok=ip=192.168.1.1~exp=10~acl=%2f*~hmac="));
    }

    #[test]
    fn missing_pieces_are_errors() {
        assert_eq!(
            AuthToken::default().generate(),
            Err(Error::MissingConfig("auth_token.key"))
        );
        assert!(matches!(
            AuthToken::new(KEY).acl("/*").generate(),
            Err(Error::AuthToken(_))
        ));
        assert!(matches!(
            AuthToken::new(KEY).duration(10).generate(),
            Err(Error::AuthToken(_))
        ));
    }

    #[test]
    fn merge_prefers_overrides() {
        let base = AuthToken::new(KEY).duration(300).acl("/a/*");
        let merged = base.merge(&AuthToken::default().url("/x").duration(60));
        assert_eq!(merged.key, KEY);
        assert_eq!(merged.duration, Some(60));
        assert_eq!(merged.acl, vec!["/a/*".to_string()]);
        assert_eq!(merged.url.as_deref(), Some("/x"));
    }
}
