//! Named transformations (`t_`).

use super::{component_from_action, Action};

/// One or more transformations defined in the account, applied by name.
#[derive(Debug, Clone)]
pub struct NamedTransformation {
    names: Vec<String>,
}

impl NamedTransformation {
    pub fn name(name: &str) -> Self {
        Self {
            names: vec![name.to_string()],
        }
    }

    /// Several named transformations in one action: `t_a.b`.
    pub fn names(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

impl From<NamedTransformation> for Action {
    fn from(t: NamedTransformation) -> Self {
        Action::new().with("t", t.names.join("."))
    }
}

component_from_action!(NamedTransformation);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_and_multiple_names() {
        assert_eq!(Action::from(NamedTransformation::name("thumb")).to_string(), "t_thumb");
        assert_eq!(
            Action::from(NamedTransformation::names(&["small", "grayscale"])).to_string(),
            "t_small.grayscale"
        );
    }
}
