use crate::quantity::{Provided, Symbol};

use super::{ComputeError, Config};

/// Values bound to a candidate's required symbols.
///
/// Reading a symbol that was not provided yields NaN, which the candidate
/// reports as a non-finite result.
#[derive(Debug, Clone, Copy)]
pub struct Inputs<'a> {
    provided: &'a Provided,
}

impl Inputs<'_> {
    #[must_use]
    pub fn get(&self, symbol: Symbol) -> f64 {
        self.provided.get(symbol).unwrap_or(f64::NAN)
    }
}

pub type Compute = fn(&Inputs<'_>) -> Result<f64, ComputeError>;
pub type Guard = fn(&Inputs<'_>, &Config) -> bool;

/// One formula for an unknown.
///
/// A candidate applies when every symbol in `requires` is provided and its
/// optional `guard` holds. Its `template` is the derivation text: `{key}`
/// placeholders are replaced by provided values and `{result}` by the
/// computed value, all with four decimals.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub requires: &'static [Symbol],
    pub guard: Option<Guard>,
    pub compute: Compute,
    pub template: &'static str,
}

impl Candidate {
    #[must_use]
    pub fn is_satisfied(&self, provided: &Provided, config: &Config) -> bool {
        provided.contains_all(self.requires)
            && self
                .guard
                .is_none_or(|guard| guard(&Inputs { provided }, config))
    }

    /// Evaluates the formula.
    ///
    /// # Errors
    ///
    /// Returns a [`ComputeError`] if the arithmetic fails or the result is
    /// not finite.
    pub fn evaluate(&self, provided: &Provided) -> Result<f64, ComputeError> {
        let value = (self.compute)(&Inputs { provided })?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ComputeError::NonFinite)
        }
    }

    /// Fills in the derivation template.
    #[must_use]
    pub fn render(&self, provided: &Provided, result: f64) -> String {
        let mut text = String::with_capacity(self.template.len() + 32);
        let mut rest = self.template;
        while let Some(open) = rest.find('{') {
            text.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                text.push_str(&rest[open..]);
                return text;
            };
            let name = &after[..close];
            let value = if name == "result" {
                Some(result)
            } else {
                Symbol::from_key(name).and_then(|symbol| provided.get(symbol))
            };
            match value {
                Some(value) => text.push_str(&format!("{value:.4}")),
                None => text.push_str(&rest[open..open + close + 2]),
            }
            rest = &after[close + 1..];
        }
        text.push_str(rest);
        text
    }

    /// Requirement list as shown to users, e.g. `(θ, ω)`.
    #[must_use]
    pub fn requirement_label(&self) -> String {
        let labels: Vec<_> = self.requires.iter().map(|symbol| symbol.label()).collect();
        format!("({})", labels.join(", "))
    }
}

/// `numerator / denominator`, failing on a zero denominator.
pub(crate) fn div(numerator: f64, denominator: f64) -> Result<f64, ComputeError> {
    if denominator == 0.0 {
        Err(ComputeError::DivisionByZero)
    } else {
        Ok(numerator / denominator)
    }
}

/// Real square root, failing on a negative radicand.
pub(crate) fn sqrt(radicand: f64) -> Result<f64, ComputeError> {
    if radicand < 0.0 {
        Err(ComputeError::NegativeRadicand(radicand))
    } else {
        Ok(radicand.sqrt())
    }
}
