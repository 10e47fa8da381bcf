//! Physical quantities understood by the formula solver.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A named physical quantity.
///
/// Each symbol has a wire key (used in raw quantity mappings and in solution
/// mappings), a display label used in derivation text, and an SI unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Radius,
    AngularVelocity,
    Speed,
    Period,
    Frequency,
    CentripetalAcceleration,
    Angle,
    Time,
    Revolutions,
    InitialAngularVelocity,
    FinalAngularVelocity,
    AngularAcceleration,
    TangentialAcceleration,
    TotalAcceleration,
    InitialSpeed,
    Gravity,
    HorizontalPosition,
    VerticalPosition,
    MaxHeight,
    Range,
    InitialHorizontalSpeed,
    InitialVerticalSpeed,
    CurvatureRadius,
}

impl Symbol {
    pub const ALL: [Symbol; 23] = [
        Symbol::Radius,
        Symbol::AngularVelocity,
        Symbol::Speed,
        Symbol::Period,
        Symbol::Frequency,
        Symbol::CentripetalAcceleration,
        Symbol::Angle,
        Symbol::Time,
        Symbol::Revolutions,
        Symbol::InitialAngularVelocity,
        Symbol::FinalAngularVelocity,
        Symbol::AngularAcceleration,
        Symbol::TangentialAcceleration,
        Symbol::TotalAcceleration,
        Symbol::InitialSpeed,
        Symbol::Gravity,
        Symbol::HorizontalPosition,
        Symbol::VerticalPosition,
        Symbol::MaxHeight,
        Symbol::Range,
        Symbol::InitialHorizontalSpeed,
        Symbol::InitialVerticalSpeed,
        Symbol::CurvatureRadius,
    ];

    /// Primary key of the symbol in raw and solution mappings.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Symbol::Radius => "r",
            Symbol::AngularVelocity => "ω",
            Symbol::Speed => "v",
            Symbol::Period => "T",
            Symbol::Frequency => "f",
            Symbol::CentripetalAcceleration => "a_c",
            Symbol::Angle => "θ",
            Symbol::Time => "t",
            Symbol::Revolutions => "N",
            Symbol::InitialAngularVelocity => "ω_i",
            Symbol::FinalAngularVelocity => "ω_f",
            Symbol::AngularAcceleration => "alpha",
            Symbol::TangentialAcceleration => "a_t",
            Symbol::TotalAcceleration => "a",
            Symbol::InitialSpeed => "v_0",
            Symbol::Gravity => "g",
            Symbol::HorizontalPosition => "x",
            Symbol::VerticalPosition => "y",
            Symbol::MaxHeight => "H",
            Symbol::Range => "R",
            Symbol::InitialHorizontalSpeed => "v_0x",
            Symbol::InitialVerticalSpeed => "v_0y",
            Symbol::CurvatureRadius => "rho",
        }
    }

    /// Alternative keys accepted when the primary key is missing.
    #[must_use]
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Symbol::Angle => &["theta"],
            Symbol::InitialSpeed => &["v0"],
            Symbol::InitialHorizontalSpeed => &["v0x"],
            Symbol::InitialVerticalSpeed => &["v0y"],
            _ => &[],
        }
    }

    /// Label used in derivation text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Symbol::AngularAcceleration => "α",
            Symbol::InitialSpeed => "v₀",
            Symbol::InitialHorizontalSpeed => "v₀ₓ",
            Symbol::InitialVerticalSpeed => "v₀ᵧ",
            Symbol::CurvatureRadius => "ρ",
            other => other.key(),
        }
    }

    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Symbol::Radius
            | Symbol::HorizontalPosition
            | Symbol::VerticalPosition
            | Symbol::MaxHeight
            | Symbol::Range
            | Symbol::CurvatureRadius => "m",
            Symbol::AngularVelocity
            | Symbol::InitialAngularVelocity
            | Symbol::FinalAngularVelocity => "rad/s",
            Symbol::Speed
            | Symbol::InitialSpeed
            | Symbol::InitialHorizontalSpeed
            | Symbol::InitialVerticalSpeed => "m/s",
            Symbol::Period | Symbol::Time => "s",
            Symbol::Frequency => "Hz",
            Symbol::CentripetalAcceleration
            | Symbol::TangentialAcceleration
            | Symbol::TotalAcceleration
            | Symbol::Gravity => "m/s²",
            Symbol::Angle => "rad",
            Symbol::Revolutions => "rev",
            Symbol::AngularAcceleration => "rad/s²",
        }
    }

    /// Human readable name, used in explanatory text.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Radius => "radius",
            Symbol::AngularVelocity => "angular velocity",
            Symbol::Speed => "speed",
            Symbol::Period => "period",
            Symbol::Frequency => "frequency",
            Symbol::CentripetalAcceleration => "centripetal acceleration",
            Symbol::Angle => "angle",
            Symbol::Time => "time",
            Symbol::Revolutions => "number of revolutions",
            Symbol::InitialAngularVelocity => "initial angular velocity",
            Symbol::FinalAngularVelocity => "final angular velocity",
            Symbol::AngularAcceleration => "angular acceleration",
            Symbol::TangentialAcceleration => "tangential acceleration",
            Symbol::TotalAcceleration => "total acceleration",
            Symbol::InitialSpeed => "initial speed",
            Symbol::Gravity => "gravitational acceleration",
            Symbol::HorizontalPosition => "horizontal position",
            Symbol::VerticalPosition => "vertical position",
            Symbol::MaxHeight => "maximum height",
            Symbol::Range => "horizontal range",
            Symbol::InitialHorizontalSpeed => "initial horizontal speed",
            Symbol::InitialVerticalSpeed => "initial vertical speed",
            Symbol::CurvatureRadius => "radius of curvature",
        }
    }

    /// Looks a symbol up by its primary key or one of its synonyms.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.key() == key || symbol.synonyms().contains(&key))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// An exercise category, each with its own quantity vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    UniformCircular,
    NonUniformCircular,
    Projectile,
    GeneralCurvilinear,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::UniformCircular,
        Category::NonUniformCircular,
        Category::Projectile,
        Category::GeneralCurvilinear,
    ];

    /// Short code used by clients (`MCU`, `MCNU`, `TP`, `MCG`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Category::UniformCircular => "MCU",
            Category::NonUniformCircular => "MCNU",
            Category::Projectile => "TP",
            Category::GeneralCurvilinear => "MCG",
        }
    }

    /// Descriptive slug also accepted when parsing.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::UniformCircular => "uniform-circular",
            Category::NonUniformCircular => "non-uniform-circular",
            Category::Projectile => "projectile",
            Category::GeneralCurvilinear => "general-curvilinear",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::UniformCircular => "uniform circular motion",
            Category::NonUniformCircular => "non-uniform circular motion",
            Category::Projectile => "projectile motion",
            Category::GeneralCurvilinear => "general curvilinear motion",
        }
    }

    /// Symbols a raw quantity mapping is resolved against.
    #[must_use]
    pub fn vocabulary(self) -> &'static [Symbol] {
        use Symbol::*;
        match self {
            Category::UniformCircular => &[
                Radius,
                AngularVelocity,
                Speed,
                Period,
                Frequency,
                CentripetalAcceleration,
                Angle,
                Time,
                Revolutions,
            ],
            Category::NonUniformCircular => &[
                Radius,
                InitialAngularVelocity,
                FinalAngularVelocity,
                AngularAcceleration,
                Angle,
                TangentialAcceleration,
                CentripetalAcceleration,
                TotalAcceleration,
                Time,
                Speed,
            ],
            Category::Projectile => &[
                InitialSpeed,
                Angle,
                Gravity,
                HorizontalPosition,
                VerticalPosition,
                MaxHeight,
                Range,
                Time,
                InitialHorizontalSpeed,
                InitialVerticalSpeed,
            ],
            Category::GeneralCurvilinear => &[
                Speed,
                TangentialAcceleration,
                CentripetalAcceleration,
                CurvatureRadius,
                TotalAcceleration,
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a category name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized exercise category: {0}")]
pub struct UnrecognizedCategory(pub String);

impl FromStr for Category {
    type Err = UnrecognizedCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.code() == s || category.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnrecognizedCategory(s.to_string()))
    }
}

/// The quantities known for one solve request.
///
/// Zero is a valid value and is distinct from absence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Provided {
    values: BTreeMap<Symbol, f64>,
}

impl Provided {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, symbol: Symbol, value: f64) -> Self {
        self.insert(symbol, value);
        self
    }

    pub fn insert(&mut self, symbol: Symbol, value: f64) {
        self.values.insert(symbol, value);
    }

    #[must_use]
    pub fn get(&self, symbol: Symbol) -> Option<f64> {
        self.values.get(&symbol).copied()
    }

    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.values.contains_key(&symbol)
    }

    /// Returns `true` if every symbol in `symbols` has a value.
    #[must_use]
    pub fn contains_all(&self, symbols: &[Symbol]) -> bool {
        symbols.iter().all(|symbol| self.contains(*symbol))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, f64)> + '_ {
        self.values.iter().map(|(symbol, value)| (*symbol, *value))
    }
}

impl FromIterator<(Symbol, f64)> for Provided {
    fn from_iter<I: IntoIterator<Item = (Symbol, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_lookup() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_key(symbol.key()), Some(symbol));
        }
    }

    #[test]
    fn synonyms_resolve_to_primary_symbol() {
        assert_eq!(Symbol::from_key("v0"), Some(Symbol::InitialSpeed));
        assert_eq!(Symbol::from_key("theta"), Some(Symbol::Angle));
        assert_eq!(Symbol::from_key("v0y"), Some(Symbol::InitialVerticalSpeed));
        assert_eq!(Symbol::from_key("omega"), None);
    }

    #[test]
    fn categories_parse_from_code_or_slug() {
        assert_eq!("MCU".parse::<Category>(), Ok(Category::UniformCircular));
        assert_eq!("TP".parse::<Category>(), Ok(Category::Projectile));
        assert_eq!(
            "Non-Uniform-Circular".parse::<Category>(),
            Ok(Category::NonUniformCircular)
        );
        assert_eq!(
            "orbital".parse::<Category>(),
            Err(UnrecognizedCategory("orbital".into()))
        );
    }

    #[test]
    fn vocabularies_have_no_duplicates() {
        for category in Category::ALL {
            let vocabulary = category.vocabulary();
            for (i, symbol) in vocabulary.iter().enumerate() {
                assert!(
                    !vocabulary[i + 1..].contains(symbol),
                    "{category}: duplicate {symbol}"
                );
            }
        }
    }

    #[test]
    fn zero_is_provided() {
        let provided = Provided::new().with(Symbol::Angle, 0.0);
        assert!(provided.contains(Symbol::Angle));
        assert!(!provided.contains(Symbol::Time));
        assert!(provided.contains_all(&[Symbol::Angle]));
        assert!(!provided.contains_all(&[Symbol::Angle, Symbol::Time]));
    }

    #[test]
    fn symbols_serialize_as_keys() {
        let json = serde_json::to_string(&Symbol::AngularAcceleration).unwrap();
        assert_eq!(json, "\"alpha\"");
    }
}
