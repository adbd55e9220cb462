//! Qualifier values and their string rendering.

use std::fmt;

use super::expression::Expression;
use crate::error::Error;

/// The value half of a `key_value` qualifier.
///
/// Integers render plainly, floats always carry a decimal part (`2.0`,
/// `0.5`), strings (keywords, `$variables`, normalised expressions) are
/// emitted as given.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Reference to a user variable: `$name`.
    pub fn variable(name: &str) -> Self {
        Value::Str(format!("${}", name.trim_start_matches('$')))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Str(s) => s.parse().ok(),
        }
    }

    /// Same number rendered as a float (`2` -> `2.0`); strings unchanged.
    pub fn to_float(self) -> Self {
        match self {
            Value::Int(i) => Value::Float(i as f64),
            other => other,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Str(s) if s.is_empty())
    }
}

/// Render a float the way the CDN expects: `1.0`, `0.5`, `29.97`.
pub fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{f:.1}")
    } else {
        format!("{f}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Str(s) => f.write_str(s),
        }
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(v as i64)
            }
        })*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        // Go through the shortest decimal form so 0.1f32 stays 0.1.
        Value::Float(v.to_string().parse().unwrap_or(v as f64))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Str(v.clone())
    }
}

impl From<Expression> for Value {
    fn from(v: Expression) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<super::Color> for Value {
    fn from(v: super::Color) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<super::Gravity> for Value {
    fn from(v: super::Gravity) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<super::Args> for Value {
    fn from(v: super::Args) -> Self {
        Value::Str(v.to_string())
    }
}

/// `v` as a float value (`2` -> `2.0`).
pub(crate) fn float(v: impl Into<Value>) -> Value {
    let v: Value = v.into();
    v.to_float()
}

/// Returns an error when `value` is numeric and outside `min..=max`.
/// Non-numeric values (variables, expressions, keywords) are not checked.
pub(crate) fn check_range(name: &'static str, value: &Value, min: f64, max: f64) -> Option<Error> {
    let n = match value {
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f,
        Value::Str(_) => return None,
    };
    if n < min || n > max {
        Some(Error::OutOfRange {
            name,
            value: value.to_string(),
            min,
            max,
        })
    } else {
        None
    }
}

/// Numeric `value` must be one of `allowed`; strings (variables,
/// expressions) are not checked.
pub(crate) fn check_one_of(name: &'static str, value: &Value, allowed: &[f64]) -> Option<Error> {
    let n = match value {
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f,
        Value::Str(_) => return None,
    };
    if allowed.contains(&n) {
        return None;
    }
    let choices: Vec<String> = allowed.iter().map(|a| a.to_string()).collect();
    Some(Error::invalid_option(
        name,
        format!("must be one of {}, got {value}", choices.join(", ")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_numbers() {
        assert_eq!(Value::from(100).to_string(), "100");
        assert_eq!(Value::from(-5i64).to_string(), "-5");
        assert_eq!(Value::from(2.0).to_string(), "2.0");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
        assert_eq!(Value::from(29.97f32).to_string(), "29.97");
    }

    #[test]
    fn to_float_promotes_integers() {
        assert_eq!(Value::from(2).to_float().to_string(), "2.0");
        assert_eq!(Value::from("auto").to_float().to_string(), "auto");
    }

    #[test]
    fn variable_reference() {
        assert_eq!(Value::variable("width").to_string(), "$width");
        assert_eq!(Value::variable("$w").to_string(), "$w");
    }

    #[test]
    fn range_check_skips_strings() {
        assert!(check_range("level", &Value::from("$lvl"), 0.0, 100.0).is_none());
        assert!(check_range("level", &Value::from(50), 0.0, 100.0).is_none());
        assert!(check_range("level", &Value::from(101), 0.0, 100.0).is_some());
        assert!(check_range("level", &Value::from(-0.5), 0.0, 100.0).is_some());
    }
}
