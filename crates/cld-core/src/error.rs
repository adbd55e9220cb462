//! Error type shared by every builder in the crate.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while building transformations, URLs or API requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A configuration value needed for the operation is absent.
    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),

    #[error("invalid CLOUDINARY_URL: {0}")]
    InvalidCloudinaryUrl(String),

    /// A numeric qualifier fell outside the range the service accepts.
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: String,
        min: f64,
        max: f64,
    },

    #[error("invalid variable name: {0}")]
    InvalidVariableName(String),

    #[error("invalid layer: {0}")]
    InvalidLayer(String),

    /// An option has a value of the wrong shape (legacy options, API params).
    #[error("invalid option `{name}`: {reason}")]
    InvalidOption { name: String, reason: String },

    /// URL suffix / root path / shorten combination the CDN does not serve.
    #[error("unsupported URL: {0}")]
    UnsupportedUrl(String),

    #[error("invalid auth token: {0}")]
    AuthToken(String),
}

impl Error {
    pub(crate) fn invalid_option(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidOption {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message() {
        let err = Error::OutOfRange {
            name: "sepia",
            value: "150".to_string(),
            min: 1.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "sepia must be between 1 and 100, got 150");
    }

    #[test]
    fn invalid_option_message() {
        let err = Error::invalid_option("border", "expected string or object");
        assert_eq!(
            err.to_string(),
            "invalid option `border`: expected string or object"
        );
    }
}
