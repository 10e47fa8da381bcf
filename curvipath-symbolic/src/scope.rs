use std::collections::BTreeMap;

/// The free variable every expression is written in.
pub const TIME_VARIABLE: &str = "t";

/// Named numeric values substituted into an expression while it is parsed.
///
/// The time variable is never looked up here, so a scope entry named `t`
/// has no effect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    values: BTreeMap<String, f64>,
}

impl Scope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named value, replacing any previous value with the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Scope {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut scope = Self::new();
        for (name, value) in iter {
            scope.insert(name, value);
        }
        scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_replace_earlier_ones() {
        let scope = Scope::new().with("r", 1.0).with("r", 2.5);
        assert_eq!(scope.get("r"), Some(2.5));
        assert_eq!(scope.get("ω"), None);
    }

    #[test]
    fn collects_from_pairs() {
        let scope: Scope = [("a", 1.0), ("b", 2.0)].into_iter().collect();
        assert!(!scope.is_empty());
        assert_eq!(scope.get("b"), Some(2.0));
    }
}
