//! A single transformation action: qualifiers plus flags.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::qualifier::Qualifier;
use super::value::{check_range, Value};
use crate::error::Error;

/// One `/`-delimited step of a transformation, e.g. `c_fill,g_auto,h_200,w_300`.
///
/// Qualifiers are keyed by their short URL key; setting a key twice keeps
/// the last value. Rendering sorts qualifiers and `fl_` flags together.
#[derive(Debug, Clone, Default)]
pub struct Action {
    qualifiers: BTreeMap<String, String>,
    flags: BTreeSet<String>,
    errors: Vec<Error>,
}

impl Action {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Action::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Set `key` to `value`, replacing an earlier value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.qualifiers.insert(key.into(), value.into().to_string());
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.add_flag(flag);
        self
    }

    pub fn add_flag(&mut self, flag: impl Into<String>) {
        self.flags.insert(flag.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.qualifiers.get(key).map(String::as_str)
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.qualifiers.remove(key)
    }

    /// Set `key` after checking the numeric range; violations are kept
    /// and surfaced by [`Action::errors`].
    pub fn set_checked(
        &mut self,
        name: &'static str,
        key: impl Into<String>,
        value: Value,
        min: f64,
        max: f64,
    ) {
        if let Some(err) = check_range(name, &value, min, max) {
            self.errors.push(err);
        }
        self.set(key, value);
    }

    pub fn record_error(&mut self, err: Error) {
        self.errors.push(err);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Fold `other` into this action; its qualifiers win on conflicts.
    pub fn merge(&mut self, other: Action) {
        self.qualifiers.extend(other.qualifiers);
        self.flags.extend(other.flags);
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.qualifiers.is_empty() && self.flags.is_empty()
    }

    /// Qualifiers in key order.
    pub fn qualifiers(&self) -> impl Iterator<Item = Qualifier> + '_ {
        self.qualifiers.iter().map(|(k, v)| Qualifier::new(k.as_str(), v))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self
            .qualifiers()
            .map(|q| q.to_string())
            .filter(|q| !q.is_empty())
            .collect();
        parts.extend(self.flags.iter().map(|flag| format!("fl_{flag}")));
        parts.sort();
        f.write_str(&parts.join(","))
    }
}
