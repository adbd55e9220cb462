//! User-defined variables (`$name_value`).

use super::expression::{is_expression, normalize};
use super::layer::layer_id;
use super::{component_from_action, Action, Expression, Value};
use crate::error::Error;

/// Assignment of a value to a user variable.
///
/// Numbers render as given, expressions are normalised, strings and lists
/// are wrapped in `!..!`.
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    value: String,
    cast: Option<&'static str>,
    error: Option<Error>,
}

impl Variable {
    fn assign(name: &str, value: String) -> Self {
        let name = name.trim_start_matches('$').to_string();
        let error = (!is_valid_name(&name)).then(|| Error::InvalidVariableName(name.clone()));
        Self {
            name,
            value,
            cast: None,
            error,
        }
    }

    /// Numeric value, an expression in human form (`initial_width * 2`) or
    /// a string constant. Strings that are not expressions are wrapped in
    /// `!..!` as [`Variable::set_string`] does.
    pub fn set(name: &str, value: impl Into<Value>) -> Self {
        let value = match value.into() {
            Value::Str(s) if is_expression(&s) => normalize(&s),
            Value::Str(s) => format!("!{s}!"),
            other => other.to_string(),
        };
        Self::assign(name, value)
    }

    pub fn set_expression(name: &str, expression: Expression) -> Self {
        Self::assign(name, expression.to_string())
    }

    /// A string constant: `$name_!value!`.
    pub fn set_string(name: &str, value: &str) -> Self {
        Self::assign(name, format!("!{value}!"))
    }

    /// A list of strings: `$name_!a:b:c!`.
    pub fn set_list(name: &str, values: &[&str]) -> Self {
        Self::assign(name, format!("!{}!", values.join(":")))
    }

    /// Value of a contextual metadata key of the asset.
    pub fn set_from_context(name: &str, key: &str) -> Self {
        Self::assign(name, format!("ctx:!{key}!"))
    }

    /// Value of a structured metadata field of the asset.
    pub fn set_from_metadata(name: &str, field: &str) -> Self {
        Self::assign(name, format!("md:!{field}!"))
    }

    /// Reference to another asset, e.g. for use as a layer source.
    pub fn set_asset_reference(name: &str, public_id: &str) -> Self {
        Self::assign(name, format!("ref:!{}!", layer_id(public_id)))
    }

    /// Cast the value to a float (`_to_f`).
    pub fn as_float(mut self) -> Self {
        self.cast = Some("to_f");
        self
    }

    /// Cast the value to an integer (`_to_i`).
    pub fn as_integer(mut self) -> Self {
        self.cast = Some("to_i");
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// `[A-Za-z][A-Za-z0-9_]*`
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl From<Variable> for Action {
    fn from(v: Variable) -> Self {
        let value = match v.cast {
            Some(cast) => format!("{}_{cast}", v.value),
            None => v.value,
        };
        let mut action = Action::new().with(format!("${}", v.name), value);
        if let Some(err) = v.error {
            action.record_error(err);
        }
        action
    }
}

component_from_action!(Variable);

#[cfg(test)]
mod tests {
    use super::*;

    fn render(v: Variable) -> String {
        Action::from(v).to_string()
    }

    #[test]
    fn numbers_and_expressions() {
        assert_eq!(render(Variable::set("width", 200)), "$width_200");
        assert_eq!(render(Variable::set("$ratio", 0.5)), "$ratio_0.5");
        assert_eq!(render(Variable::set("w2", "initial_width * 2")), "$w2_iw_mul_2");
        assert_eq!(render(Variable::set("x", "$y + 10")), "$x_$y_add_10");
        assert_eq!(render(Variable::set("title", "hello world")), "$title_!hello world!");
        assert_eq!(render(Variable::set("t", "!sale!")), "$t_!sale!");
    }

    #[test]
    fn strings_and_lists() {
        assert_eq!(render(Variable::set_string("name", "john")), "$name_!john!");
        assert_eq!(render(Variable::set_list("tags", &["a", "b"])), "$tags_!a:b!");
        assert_eq!(render(Variable::set_from_context("c", "color")), "$c_ctx:!color!");
        assert_eq!(render(Variable::set_from_metadata("m", "sku")), "$m_md:!sku!");
        assert_eq!(
            render(Variable::set_asset_reference("img", "docs/logo")),
            "$img_ref:!docs:logo!"
        );
    }

    #[test]
    fn casts() {
        assert_eq!(render(Variable::set("n", "$v").as_integer()), "$n_$v_to_i");
        assert_eq!(render(Variable::set_from_context("f", "count").as_float()), "$f_ctx:!count!_to_f");
    }

    #[test]
    fn invalid_names_are_recorded() {
        assert!(is_valid_name("abc_1"));
        assert!(!is_valid_name("1abc"));
        assert!(!is_valid_name("a-b"));
        let action = Action::from(Variable::set("9lives", 1));
        assert_eq!(action.errors(), &[Error::InvalidVariableName("9lives".to_string())]);
    }
}
