//! Conditional transformations: `if_<expr>/.../if_else/.../if_end`.

use std::fmt;

use super::{Component, Expression, Transformation};
use crate::error::Error;

/// Actions applied only when an expression holds, with an optional
/// fallback branch.
#[derive(Debug, Clone)]
pub struct Conditional {
    condition: Expression,
    then: Transformation,
    otherwise: Option<Transformation>,
}

impl Conditional {
    /// Start a conditional; `condition` is normalised
    /// (`width > 400` becomes `w_gt_400`).
    pub fn if_condition(condition: impl Into<Expression>, then: impl Into<Component>) -> Self {
        let mut branch = Transformation::new();
        branch.push(then);
        Self {
            condition: condition.into(),
            then: branch,
            otherwise: None,
        }
    }

    /// Add another action to the `if` branch.
    pub fn then(mut self, component: impl Into<Component>) -> Self {
        self.then.push(component);
        self
    }

    /// Add an action to the `else` branch.
    pub fn otherwise(mut self, component: impl Into<Component>) -> Self {
        self.otherwise
            .get_or_insert_with(Transformation::new)
            .push(component);
        self
    }

    pub(crate) fn collect_errors(&self, out: &mut Vec<Error>) {
        out.extend(self.then.errors());
        if let Some(otherwise) = &self.otherwise {
            out.extend(otherwise.errors());
        }
    }
}

impl fmt::Display for Conditional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = vec![format!("if_{}", self.condition)];
        parts.push(self.then.to_string());
        if let Some(otherwise) = &self.otherwise {
            parts.push("if_else".to_string());
            parts.push(otherwise.to_string());
        }
        parts.push("if_end".to_string());
        let parts: Vec<&str> = parts.iter().map(String::as_str).filter(|p| !p.is_empty()).collect();
        f.write_str(&parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformation::{Effect, Resize};

    #[test]
    fn if_only() {
        let c = Conditional::if_condition("width > 400", Resize::scale().width(400));
        assert_eq!(c.to_string(), "if_w_gt_400/c_scale,w_400/if_end");
    }

    #[test]
    fn if_else_with_several_actions() {
        let c = Conditional::if_condition(
            "initial_height < 300 && face_count >= 1",
            Resize::fill().width(300).height(300),
        )
        .then(Effect::sepia())
        .otherwise(Resize::scale().width(200));
        assert_eq!(
            c.to_string(),
            "if_ih_lt_300_and_fc_gte_1/c_fill,h_300,w_300/e_sepia/if_else/c_scale,w_200/if_end"
        );
    }

    #[test]
    fn branch_errors_are_collected() {
        let c = Conditional::if_condition("width > 10", Effect::blur().level(5000))
            .otherwise(Effect::sepia().level(0));
        let mut errors = Vec::new();
        c.collect_errors(&mut errors);
        assert_eq!(errors.len(), 2);
    }
}
