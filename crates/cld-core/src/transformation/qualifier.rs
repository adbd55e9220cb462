//! `key_value` qualifiers and `:`-joined argument lists.

use std::fmt;

/// A single `key_value` fragment of an action, e.g. `w_100` or `e_sepia:50`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifier {
    key: String,
    value: String,
}

impl Qualifier {
    pub fn new(key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            f.write_str(&self.key)
        } else {
            write!(f, "{}_{}", self.key, self.value)
        }
    }
}

/// Ordered argument list rendered as `a:b:c`.
///
/// Arguments are set by position. An unset position before a set one
/// renders empty (`inner::200`) so later arguments keep their meaning;
/// trailing unset positions are dropped. Keyword slots and labelled
/// arguments (`colors:5`) carry their own meaning and are skipped when
/// unset instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    values: Vec<Option<String>>,
    keyword_slots: Vec<usize>,
    labelled: bool,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments that each name themselves (`duration_5`, `colors:5`).
    pub fn labelled() -> Self {
        Self {
            labelled: true,
            ..Self::default()
        }
    }

    pub fn push(&mut self, value: impl fmt::Display) {
        self.values.push(Some(value.to_string()));
    }

    pub fn set(&mut self, index: usize, value: impl fmt::Display) {
        if self.values.len() <= index {
            self.values.resize(index + 1, None);
        }
        self.values[index] = Some(value.to_string());
    }

    /// Position `index` holds a keyword and may be left out when unset.
    pub fn keyword_slot(&mut self, index: usize) {
        if !self.keyword_slots.contains(&index) {
            self.keyword_slots.push(index);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|a| a.as_deref().map_or(true, str::is_empty))
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self
            .values
            .iter()
            .rposition(|a| a.as_deref().is_some_and(|a| !a.is_empty()));
        let Some(last) = last else {
            return Ok(());
        };
        let mut parts = Vec::with_capacity(last + 1);
        for (index, value) in self.values[..=last].iter().enumerate() {
            match value.as_deref().filter(|v| !v.is_empty()) {
                Some(v) => parts.push(v),
                None if self.labelled || self.keyword_slots.contains(&index) => {}
                None => parts.push(""),
            }
        }
        f.write_str(&parts.join(":"))
    }
}

/// `name` followed by its arguments: `sepia`, `sepia:50`, `outline:inner:5`.
pub(crate) fn with_args(name: &str, args: &Args) -> String {
    if args.is_empty() {
        name.to_string()
    } else {
        format!("{name}:{args}")
    }
}
