//! Human readable expressions (`width > 100 && face_count < 2`) rendered
//! into the URL form (`w_gt_100_and_fc_lt_2`).

use std::fmt;

/// Operators in match order: longer tokens first so `<=` wins over `<`.
const OPERATORS: &[(&str, &str)] = &[
    ("!=", "ne"),
    ("<=", "lte"),
    (">=", "gte"),
    ("&&", "and"),
    ("||", "or"),
    ("=", "eq"),
    ("<", "lt"),
    (">", "gt"),
    ("*", "mul"),
    ("/", "div"),
    ("+", "add"),
    ("-", "sub"),
    ("^", "pow"),
];

/// Predefined variable names, longest first.
const PREDEFINED: &[(&str, &str)] = &[
    ("initial_aspect_ratio", "iar"),
    ("trimmed_aspect_ratio", "tar"),
    ("illustration_score", "ils"),
    ("initial_duration", "idu"),
    ("initial_height", "ih"),
    ("initial_width", "iw"),
    ("aspect_ratio", "ar"),
    ("current_page", "cp"),
    ("aspectRatio", "ar"),
    ("face_count", "fc"),
    ("page_count", "pc"),
    ("duration", "du"),
    ("context", "ctx"),
    ("height", "h"),
    ("page_x", "px"),
    ("page_y", "py"),
    ("width", "w"),
];

/// A normalised conditional or arithmetic expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression(String);

impl Expression {
    /// Normalise `expr` into URL form.
    pub fn new(expr: &str) -> Self {
        Expression(normalize(expr))
    }

    /// Wrap an already URL-formed expression without touching it.
    pub fn raw(expr: impl Into<String>) -> Self {
        Expression(expr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Expression {
    fn from(s: &str) -> Self {
        Expression::new(s)
    }
}

impl From<String> for Expression {
    fn from(s: String) -> Self {
        Expression::new(&s)
    }
}

/// Whether the normalised form of `value` reads as an expression: every
/// `_`-separated token is a number, a `$variable`, a predefined variable or
/// an operator. Literals already wrapped in `!..!` count as expressions.
pub(crate) fn is_expression(value: &str) -> bool {
    let normalized = normalize(value);
    if normalized.is_empty() || normalized.contains('!') {
        return !normalized.is_empty();
    }
    normalized.split('_').all(|token| {
        token.parse::<f64>().is_ok()
            || (token.len() > 1 && token.starts_with('$'))
            || token == "tags"
            || PREDEFINED.iter().any(|(_, short)| *short == token)
            || OPERATORS.iter().any(|(_, name)| *name == token)
    })
}

/// Replace operators and predefined variable names, then collapse runs of
/// spaces and underscores into a single `_`.
///
/// String literals (`!text!`) are returned unchanged. Operators are only
/// replaced when followed by a space or underscore; variable names only
/// when they stand alone and are not `$`-prefixed.
pub fn normalize(expr: &str) -> String {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.len() >= 2 && trimmed.starts_with('!') && trimmed.ends_with('!') {
        return trimmed.to_string();
    }
    if trimmed.parse::<f64>().is_ok() {
        return trimmed.to_string();
    }

    let mut replaced = String::with_capacity(trimmed.len() + 8);
    let mut i = 0;
    let mut prev: Option<char> = None;
    'outer: while i < trimmed.len() {
        let rest = &trimmed[i..];

        for (op, name) in OPERATORS {
            if let Some(after) = rest.strip_prefix(op) {
                if after.starts_with(' ') || after.starts_with('_') {
                    replaced.push_str(name);
                    i += op.len();
                    prev = op.chars().last();
                    continue 'outer;
                }
            }
        }

        let at_word_start = prev.map_or(true, |p| p != '$' && !p.is_ascii_alphanumeric());
        if at_word_start {
            for (long, short) in PREDEFINED {
                if let Some(after) = rest.strip_prefix(long) {
                    if !after.starts_with(|c: char| c.is_ascii_alphanumeric()) {
                        replaced.push_str(short);
                        i += long.len();
                        prev = long.chars().last();
                        continue 'outer;
                    }
                }
            }
        }

        let Some(c) = rest.chars().next() else {
            break;
        };
        replaced.push(c);
        i += c.len_utf8();
        prev = Some(c);
    }

    collapse_separators(&replaced)
}

fn collapse_separators(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c == ' ' || c == '_' {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_operators() {
        assert_eq!(normalize("width > 100"), "w_gt_100");
        assert_eq!(normalize("height <= 50"), "h_lte_50");
        assert_eq!(normalize("aspect_ratio != 1.5"), "ar_ne_1.5");
        assert_eq!(normalize("face_count = 2"), "fc_eq_2");
    }

    #[test]
    fn logical_and_arithmetic() {
        assert_eq!(
            normalize("width > 100 && initial_height < 200"),
            "w_gt_100_and_ih_lt_200"
        );
        assert_eq!(normalize("initial_width / 2"), "iw_div_2");
        assert_eq!(normalize("$small * 3"), "$small_mul_3");
        assert_eq!(normalize("w || h"), "w_or_h");
    }

    #[test]
    fn already_normalised_is_stable() {
        assert_eq!(normalize("w_gt_100"), "w_gt_100");
        assert_eq!(normalize("iw_div_2_add_10"), "iw_div_2_add_10");
    }

    #[test]
    fn dollar_prefixed_names_are_kept() {
        assert_eq!(normalize("$width + 10"), "$width_add_10");
    }

    #[test]
    fn partial_words_are_kept() {
        assert_eq!(normalize("widths"), "widths");
        assert_eq!(normalize("$foo_width"), "$foo_w");
    }

    #[test]
    fn operators_need_a_separator() {
        assert_eq!(normalize("-5"), "-5");
        assert_eq!(normalize("w_sub_-5"), "w_sub_-5");
    }

    #[test]
    fn string_literals_and_numbers_pass_through() {
        assert_eq!(normalize("!my text!"), "!my text!");
        assert_eq!(normalize("0.5"), "0.5");
    }

    #[test]
    fn collapses_spaces() {
        assert_eq!(normalize("width   >   100"), "w_gt_100");
    }

    #[test]
    fn tags_and_context() {
        assert_eq!(normalize("context = !x!"), "ctx_eq_!x!");
        assert_eq!(normalize("page_count > 1"), "pc_gt_1");
    }
}
