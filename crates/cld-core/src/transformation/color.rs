//! Colors: named, `#RRGGBB[AA]` hex and `rgb:` forms.

use std::fmt;

/// A color value as the CDN expects it (`red`, `rgb:FF0000`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color(String);

impl Color {
    /// Accepts a name, a `#hex` string or an `rgb:hex` string.
    pub fn new(color: &str) -> Self {
        Color(normalize(color))
    }

    /// Hex digits with or without a leading `#`.
    pub fn rgb(hex: &str) -> Self {
        Color(format!("rgb:{}", hex.trim_start_matches('#')))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn black() -> Self {
        Color::new("black")
    }

    pub fn white() -> Self {
        Color::new("white")
    }

    pub fn red() -> Self {
        Color::new("red")
    }

    pub fn green() -> Self {
        Color::new("green")
    }

    pub fn blue() -> Self {
        Color::new("blue")
    }

    pub fn transparent() -> Self {
        Color::new("transparent")
    }
}

/// `#abc` -> `rgb:abc`; everything else is passed through.
pub fn normalize(color: &str) -> String {
    match color.strip_prefix('#') {
        Some(hex) => format!("rgb:{hex}"),
        None => color.to_string(),
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::new(s)
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::new(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_becomes_rgb() {
        assert_eq!(Color::new("#FF0000").to_string(), "rgb:FF0000");
        assert_eq!(Color::new("#f00").to_string(), "rgb:f00");
        assert_eq!(Color::rgb("00ff0080").to_string(), "rgb:00ff0080");
    }

    #[test]
    fn names_pass_through() {
        assert_eq!(Color::from("red").to_string(), "red");
        assert_eq!(Color::new("rgb:112233").to_string(), "rgb:112233");
    }
}
