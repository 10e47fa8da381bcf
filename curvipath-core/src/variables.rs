//! Request-level auxiliary quantities.

use std::{collections::BTreeMap, fmt};

use curvipath_symbolic::{Scope, TIME_VARIABLE};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

/// Keys whose values are angles given in degrees.
pub const ANGLE_KEYS: [&str; 2] = ["θ", "theta"];

/// A value as it arrives from a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

/// A raw quantity mapping, keyed by quantity name.
pub type RawQuantities = BTreeMap<String, RawValue>;

impl RawValue {
    /// Best-effort numeric coercion.
    ///
    /// Numbers are taken as-is and text is trimmed and parsed. Booleans,
    /// nulls and non-finite values are not numbers.
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        let value = match self {
            RawValue::Number(value) => *value,
            RawValue::Text(text) => text.trim().parse().ok()?,
            RawValue::Bool(_) | RawValue::Null => return None,
        };
        value.is_finite().then_some(value)
    }

    fn is_blank(&self) -> bool {
        match self {
            RawValue::Null => true,
            RawValue::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(value) => write!(f, "{value}"),
            RawValue::Text(text) => f.write_str(text),
            RawValue::Bool(value) => write!(f, "{value}"),
            RawValue::Null => f.write_str("null"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("angle `{key}` is not a valid number: {value}")]
    InvalidAngle { key: String, value: String },
}

/// Prepared auxiliary quantities for one request.
///
/// Blank entries are gone and angles are in radians. The same prepared
/// values feed both equation substitution and the formula solver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: BTreeMap<String, RawValue>,
}

impl Variables {
    /// Prepares a raw quantity mapping.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidAngle`] if an angle key holds a value that
    /// cannot be read as a number of degrees.
    pub fn prepare(raw: RawQuantities) -> Result<Self, InputError> {
        let mut values = BTreeMap::new();
        for (key, value) in raw {
            if value.is_blank() {
                continue;
            }
            let value = if ANGLE_KEYS.contains(&key.as_str()) {
                let degrees = value.to_number().ok_or_else(|| InputError::InvalidAngle {
                    key: key.clone(),
                    value: value.to_string(),
                })?;
                RawValue::Number(degrees_to_radians(degrees))
            } else {
                value
            };
            values.insert(key, value);
        }
        Ok(Self { values })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.values.get(key)
    }

    /// The value under `key`, if present and numeric.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(RawValue::to_number)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Numeric entries as named constants for equation parsing.
    ///
    /// The time variable is never shadowed.
    #[must_use]
    pub fn scope(&self) -> Scope {
        self.values
            .iter()
            .filter(|(key, _)| key.as_str() != TIME_VARIABLE)
            .filter_map(|(key, value)| Some((key.as_str(), value.to_number()?)))
            .collect()
    }
}

fn degrees_to_radians(degrees: f64) -> f64 {
    Angle::new::<degree>(degrees).get::<radian>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn raw<const N: usize>(entries: [(&str, RawValue); N]) -> RawQuantities {
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    #[test]
    fn coerces_numbers_and_numeric_text() {
        assert_eq!(RawValue::Number(2.5).to_number(), Some(2.5));
        assert_eq!(RawValue::from(" 4 ").to_number(), Some(4.0));
        assert_eq!(RawValue::from("0").to_number(), Some(0.0));
        assert_eq!(RawValue::from("abc").to_number(), None);
        assert_eq!(RawValue::from("inf").to_number(), None);
        assert_eq!(RawValue::Bool(true).to_number(), None);
        assert_eq!(RawValue::Null.to_number(), None);
    }

    #[test]
    fn deserializes_untagged_values() {
        let raw: RawQuantities =
            serde_json::from_str(r#"{"r": 2, "v": "3.5", "f": null, "ok": false}"#).unwrap();
        assert_eq!(raw["r"], RawValue::Number(2.0));
        assert_eq!(raw["v"], RawValue::Text("3.5".into()));
        assert_eq!(raw["f"], RawValue::Null);
        assert_eq!(raw["ok"], RawValue::Bool(false));
    }

    #[test]
    fn converts_angles_to_radians() {
        let variables = Variables::prepare(raw([
            ("θ", RawValue::Number(90.0)),
            ("theta", "45".into()),
        ]))
        .unwrap();
        assert_relative_eq!(variables.number("θ").unwrap(), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(variables.number("theta").unwrap(), FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn drops_blank_entries() {
        let variables =
            Variables::prepare(raw([("r", "".into()), ("v", RawValue::Null), ("θ", " ".into())]))
                .unwrap();
        assert!(variables.is_empty());
    }

    #[test]
    fn rejects_non_numeric_angles() {
        let error = Variables::prepare(raw([("θ", "north".into())])).unwrap_err();
        assert_eq!(
            error,
            InputError::InvalidAngle {
                key: "θ".into(),
                value: "north".into()
            }
        );
    }

    #[test]
    fn scope_keeps_numeric_entries_except_time() {
        let variables = Variables::prepare(raw([
            ("r", RawValue::Number(2.0)),
            ("t", RawValue::Number(5.0)),
            ("label", "orbit".into()),
            ("θ", RawValue::Number(180.0)),
        ]))
        .unwrap();

        let scope = variables.scope();
        assert_eq!(scope.get("r"), Some(2.0));
        assert_eq!(scope.get("t"), None);
        assert_eq!(scope.get("label"), None);
        assert_relative_eq!(scope.get("θ").unwrap(), PI, epsilon = 1e-12);
    }
}
