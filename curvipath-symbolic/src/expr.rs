use std::{collections::HashSet, fmt, sync::Arc};

use ndarray::{Array1, ArrayView1};
use symb_anafis::{CompiledEvaluator, Diff, Simplify};

use crate::{
    EvalError, ParseError, Scope, TIME_VARIABLE,
    canonical::{MAX_DEPTH, canonicalize},
};

/// Tree depth the engine may reach while simplifying or differentiating.
///
/// Derivatives grow deeper than the text they come from, so this leaves
/// headroom above [`MAX_DEPTH`].
const MAX_TREE_DEPTH: usize = 4 * MAX_DEPTH;
const MAX_TREE_NODES: usize = 10_000;

/// A simplified expression in `t`, compiled for numeric evaluation.
///
/// Two expressions are equal when their simplified text is equal.
#[derive(Clone)]
pub struct Expr {
    text: String,
    evaluator: Arc<CompiledEvaluator>,
}

/// Parses `source` into a simplified expression in `t`.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text is not a valid expression or uses a
/// symbol other than `t`, `pi` or `e`.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_in(source, &Scope::new())
}

/// Parses `source`, resolving extra identifiers through `scope`.
///
/// Adjacent operands are multiplied (`2t`, `t(t+1)`, `(t+1)(t-1)`) and
/// `**` is a power. A comma separated list keeps only its first element.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text is not a valid expression, nests
/// deeper than [`MAX_DEPTH`], or uses an identifier that is neither `t`, a
/// constant, a function, nor in `scope`.
pub fn parse_in(source: &str, scope: &Scope) -> Result<Expr, ParseError> {
    let canonical = canonicalize(source, scope)?;
    let simplified = Simplify::new()
        .domain_safe(true)
        .max_depth(MAX_TREE_DEPTH)
        .max_nodes(MAX_TREE_NODES)
        .simplify_str(&canonical, &[])
        .map_err(ParseError::rejected)?;
    Expr::from_text(&simplified)
}

impl Expr {
    fn from_text(text: &str) -> Result<Self, ParseError> {
        let parsed = symb_anafis::parse(text, &HashSet::new(), &HashSet::new(), None)
            .map_err(ParseError::rejected)?;
        let evaluator = CompiledEvaluator::compile(&parsed, &[TIME_VARIABLE], None)
            .map_err(ParseError::rejected)?;
        Ok(Self {
            text: parsed.to_string(),
            evaluator: Arc::new(evaluator),
        })
    }

    /// The simplified text of this expression.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the expression simplified to the constant zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.text.trim().parse::<f64>() == Ok(0.0)
    }

    /// Differentiates with respect to `t` and simplifies the result.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Derivative`] if the derivative outgrows the
    /// engine's size limits.
    pub fn derivative(&self) -> Result<Self, ParseError> {
        if !self.mentions_time() {
            return Self::from_text("0");
        }
        let derivative = Diff::new()
            .domain_safe(true)
            .max_depth(MAX_TREE_DEPTH)
            .max_nodes(MAX_TREE_NODES)
            .diff_str(&self.text, TIME_VARIABLE, &[])
            .map_err(|error| ParseError::Derivative {
                message: error.to_string(),
            })?;
        Self::from_text(&derivative)
    }

    /// Differentiates `order` times.
    ///
    /// # Errors
    ///
    /// See [`Expr::derivative`].
    pub fn nth_derivative(&self, order: usize) -> Result<Self, ParseError> {
        let mut expr = self.clone();
        for _ in 0..order {
            expr = expr.derivative()?;
        }
        Ok(expr)
    }

    /// Evaluates the expression at time `t`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if the value is undefined or infinite.
    pub fn eval(&self, t: f64) -> Result<f64, EvalError> {
        let value = self.evaluator.evaluate(&[t]);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::at(t, value))
        }
    }

    /// Evaluates the expression at every time in `times`.
    ///
    /// # Errors
    ///
    /// Fails on the first sample that is undefined or infinite.
    pub fn eval_array(&self, times: ArrayView1<'_, f64>) -> Result<Array1<f64>, EvalError> {
        times
            .iter()
            .map(|&t| self.eval(t))
            .collect::<Result<Vec<_>, _>>()
            .map(Array1::from)
    }

    fn mentions_time(&self) -> bool {
        self.text
            .split(|ch: char| !(ch.is_alphanumeric() || ch == '_'))
            .any(|word| word == TIME_VARIABLE)
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Expr").field(&self.text).finish()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn evaluates_polynomials_with_implicit_products() {
        let expr = parse("2t^2 + 3t - 1").unwrap();
        assert_relative_eq!(expr.eval(2.0).unwrap(), 13.0);
    }

    #[test]
    fn scope_values_are_folded_in() {
        let scope = Scope::new().with("r", 3.0).with("ω", 2.0);
        let expr = parse_in("r cos(ω t)", &scope).unwrap();
        assert_relative_eq!(expr.eval(0.5).unwrap(), 3.0 * 1.0_f64.cos(), epsilon = 1e-12);
    }

    #[test]
    fn differentiates_trigonometric_motion() {
        let position = parse("2 sin(3t)").unwrap();
        let velocity = position.derivative().unwrap();
        let acceleration = velocity.derivative().unwrap();
        assert_relative_eq!(velocity.eval(0.0).unwrap(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(
            acceleration.eval(0.4).unwrap(),
            -18.0 * 1.2_f64.sin(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn constants_have_zero_derivatives() {
        let constant = parse("pi * 4").unwrap();
        assert!(!constant.is_zero());
        assert!(constant.derivative().unwrap().is_zero());
        assert!(parse("t^3").unwrap().nth_derivative(4).unwrap().is_zero());
    }

    #[test]
    fn logarithms_are_natural() {
        let expr = parse("log(t)").unwrap();
        assert_relative_eq!(expr.eval(std::f64::consts::E).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(expr.derivative().unwrap().eval(4.0).unwrap(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn reports_undefined_and_infinite_values() {
        let expr = parse("sqrt(t - 2)").unwrap();
        assert_eq!(expr.eval(1.0), Err(EvalError::Undefined { t: 1.0 }));

        let expr = parse("1/t").unwrap();
        assert!(matches!(expr.eval(0.0), Err(EvalError::Infinite { t }) if t == 0.0));
    }

    #[test]
    fn evaluates_arrays() {
        let expr = parse("t^2").unwrap();
        let values = expr.eval_array(array![0.0, 1.0, 2.0].view()).unwrap();
        assert_eq!(values, array![0.0, 1.0, 4.0]);

        let expr = parse("1/(t-1)").unwrap();
        assert!(expr.eval_array(array![0.0, 1.0, 2.0].view()).is_err());
    }

    #[test]
    fn deep_nesting_is_an_error_not_an_overflow() {
        let source = format!("{}t{}", "(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(parse(&source), Err(ParseError::TooDeep { limit: MAX_DEPTH }));
    }

    #[test]
    fn engine_rejections_are_parse_errors() {
        assert!(matches!(parse("sin(t"), Err(ParseError::Rejected { .. })));
        assert!(matches!(parse("2*"), Err(ParseError::Rejected { .. })));
    }
}
