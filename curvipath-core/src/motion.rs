//! Position, velocity and acceleration curves from parametric equations.

use std::{collections::BTreeMap, fmt};

use curvipath_symbolic::{Expr, ParseError, Scope, parse_in};
use serde::Serialize;
use thiserror::Error;

use crate::{
    analysis::add_measures,
    grid::TimeGrid,
    normalize::normalize,
    observe::{Event, Observer},
    sample::sample,
    variables::Variables,
};

/// A spatial component of a parametric equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Which equation an axis component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    /// A 1-based vector-function index.
    Indexed(usize),
    /// The standalone z function.
    Standalone,
}

/// Identifies one equation component of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EquationId {
    pub axis: Axis,
    pub slot: Slot,
}

impl fmt::Display for EquationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            Slot::Indexed(index) => write!(f, "{} equation {index}", self.axis.name()),
            Slot::Standalone => write!(f, "{} function", self.axis.name()),
        }
    }
}

/// The curve computed for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Position,
    Velocity,
    Acceleration,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Position, Kind::Velocity, Kind::Acceleration];

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Kind::Position => "eq",
            Kind::Velocity => "v",
            Kind::Acceleration => "a",
        }
    }
}

/// Bundle key for a component curve: `x_v_2`, or `z_a` for the standalone
/// z function.
#[must_use]
pub fn bundle_key(equation: EquationId, kind: Kind) -> String {
    match equation.slot {
        Slot::Indexed(index) => format!("{}_{}_{index}", equation.axis.name(), kind.tag()),
        Slot::Standalone => format!("{}_{}", equation.axis.name(), kind.tag()),
    }
}

/// Equation text for one request.
///
/// The axis lists may have different lengths; shorter lists are treated as
/// padded with empty equations. Empty or blank equations are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Equations {
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub z: Vec<String>,
    pub z_function: Option<String>,
}

impl Equations {
    /// Number of vector-function slots after padding.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.x.len().max(self.y.len()).max(self.z.len())
    }

    fn axis(&self, axis: Axis) -> &[String] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Non-blank components in processing order.
    fn components(&self) -> impl Iterator<Item = (EquationId, &str)> + '_ {
        let indexed = (0..self.slot_count()).flat_map(move |index| {
            Axis::ALL.into_iter().filter_map(move |axis| {
                let source = self.axis(axis).get(index)?;
                let equation = EquationId {
                    axis,
                    slot: Slot::Indexed(index + 1),
                };
                Some((equation, source.as_str()))
            })
        });
        let standalone = self.z_function.iter().map(|source| {
            let equation = EquationId {
                axis: Axis::Z,
                slot: Slot::Standalone,
            };
            (equation, source.as_str())
        });
        indexed
            .chain(standalone)
            .map(|(equation, source)| (equation, source.trim()))
            .filter(|(_, source)| !source.is_empty())
    }
}

/// Sampled curves.
///
/// Component curves are keyed by [`bundle_key`]. Every indexed slot with at
/// least one component also carries its [`Measure`](crate::analysis::Measure)
/// curves, keyed by [`measure_key`](crate::analysis::measure_key).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultBundle {
    curves: BTreeMap<String, Vec<f64>>,
}

impl ResultBundle {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.curves.get(key).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.curves.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.curves
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Vec<f64>> {
        self.curves
    }

    fn insert(&mut self, equation: EquationId, kind: Kind, values: Vec<f64>) {
        self.insert_key(bundle_key(equation, kind), values);
    }

    pub(crate) fn insert_key(&mut self, key: String, values: Vec<f64>) {
        self.curves.insert(key, values);
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("error parsing {equation}: {source}")]
    Parse {
        equation: EquationId,
        source: ParseError,
    },
}

impl MotionError {
    /// The component that failed.
    #[must_use]
    pub fn equation(&self) -> EquationId {
        match self {
            MotionError::Parse { equation, .. } => *equation,
        }
    }
}

/// Computes position, velocity and acceleration curves for every present
/// equation component over `grid`, then the arc length, curvature and
/// acceleration split of every indexed slot.
///
/// Named numeric values in `variables` are substituted into the equations.
///
/// # Errors
///
/// Returns a [`MotionError`] naming the first component that cannot be
/// parsed. No partial bundle is returned.
pub fn evaluate_motion<O>(
    equations: &Equations,
    grid: &TimeGrid,
    variables: &Variables,
    mut observer: O,
) -> Result<ResultBundle, MotionError>
where
    O: for<'a> Observer<Event<'a>>,
{
    let scope = variables.scope();
    let mut bundle = ResultBundle::default();

    for (equation, source) in equations.components() {
        let [position, velocity, acceleration] =
            component_curves(equation, source, &scope, grid, &mut observer)?;
        bundle.insert(equation, Kind::Position, position);
        bundle.insert(equation, Kind::Velocity, velocity);
        bundle.insert(equation, Kind::Acceleration, acceleration);
    }
    add_measures(&mut bundle, equations.slot_count());

    Ok(bundle)
}

/// Computes motion curves without observation.
///
/// # Errors
///
/// See [`evaluate_motion`].
pub fn evaluate_motion_unobserved(
    equations: &Equations,
    grid: &TimeGrid,
    variables: &Variables,
) -> Result<ResultBundle, MotionError> {
    evaluate_motion(equations, grid, variables, ())
}

fn component_curves<O>(
    equation: EquationId,
    source: &str,
    scope: &Scope,
    grid: &TimeGrid,
    observer: &mut O,
) -> Result<[Vec<f64>; 3], MotionError>
where
    O: for<'a> Observer<Event<'a>>,
{
    let normalized = normalize(source);
    let failed = |source| MotionError::Parse { equation, source };
    let position = parse_in(&normalized, scope).map_err(failed)?;
    observer.observe(&Event::Parsed {
        equation,
        normalized: &normalized,
        expr: &position,
    });

    let velocity = position.derivative().map_err(failed)?;
    let acceleration = velocity.derivative().map_err(failed)?;

    Ok([&position, &velocity, &acceleration].map(|expr: &Expr| sample(expr, grid, observer)))
}
