//! Digests used for URL signatures, API request signatures and auth tokens.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Hash used when signing URLs and API parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl SignatureAlgorithm {
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            SignatureAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            SignatureAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha1 => "sha1",
            SignatureAlgorithm::Sha256 => "sha256",
        }
    }
}

impl std::str::FromStr for SignatureAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(SignatureAlgorithm::Sha1),
            "sha256" => Ok(SignatureAlgorithm::Sha256),
            other => Err(Error::invalid_option(
                "signature_algorithm",
                format!("unsupported algorithm {other}"),
            )),
        }
    }
}

/// Short URL signature: `s--XXXXXXXX--`.
///
/// The first 8 characters (32 for long signatures) of the URL-safe base64
/// digest of `to_sign + secret`.
pub fn url_signature(
    to_sign: &str,
    api_secret: &str,
    algorithm: SignatureAlgorithm,
    long: bool,
) -> String {
    let digest = algorithm.digest(format!("{to_sign}{api_secret}").as_bytes());
    let encoded = URL_SAFE_NO_PAD.encode(digest);
    let len = if long { 32 } else { 8 };
    let cut = encoded.len().min(len);
    format!("s--{}--", &encoded[..cut])
}

/// Hex digest of `to_sign + secret`, as used by API request signatures.
pub fn hex_signature(to_sign: &str, api_secret: &str, algorithm: SignatureAlgorithm) -> String {
    hex::encode(algorithm.digest(format!("{to_sign}{api_secret}").as_bytes()))
}

/// HMAC-SHA256 of `data` keyed with the hex-decoded `hex_key`, hex encoded.
pub fn hmac_sha256_hex(hex_key: &str, data: &str) -> Result<String> {
    let key = hex::decode(hex_key)
        .map_err(|e| Error::AuthToken(format!("key must be hex encoded: {e}")))?;
    let mut mac = Hmac::<Sha256>::new_from_slice(&key)
        .map_err(|e| Error::AuthToken(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_signature_sha1_known_value() {
        // sha1("abc")
        assert_eq!(
            hex_signature("ab", "c", SignatureAlgorithm::Sha1),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn hex_signature_sha256_known_value() {
        assert_eq!(
            hex_signature("a", "bc", SignatureAlgorithm::Sha256),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn url_signature_shape() {
        let short = url_signature("c_scale,w_100/sample.jpg", "secret", SignatureAlgorithm::Sha1, false);
        assert!(short.starts_with("s--") && short.ends_with("--"));
        assert_eq!(short.len(), 3 + 8 + 2);

        let long = url_signature("sample.jpg", "secret", SignatureAlgorithm::Sha256, true);
        assert_eq!(long.len(), 3 + 32 + 2);
    }

    #[test]
    fn url_signature_uses_urlsafe_alphabet() {
        let sig = url_signature("sample.jpg", "secret", SignatureAlgorithm::Sha1, true);
        assert!(!sig[3..sig.len() - 2].contains('+'));
        assert!(!sig[3..sig.len() - 2].contains('/'));
    }

    #[test]
    fn hmac_rejects_non_hex_key() {
        assert!(hmac_sha256_hex("zz", "data").is_err());
    }

    #[test]
    fn hmac_known_value() {
        // RFC 4231 test case 2: key "Jefe".
        let mac = hmac_sha256_hex("4a656665", "what do ya want for nothing?").unwrap();
        assert_eq!(
            mac,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }
}
