//! Query parsing and evaluation for `GET /get_data`.

use std::{collections::BTreeMap, str::FromStr};

use curvipath_core::{
    Equations, GridError, InputError, MotionError, RawQuantities, ResultBundle, Solution, Status,
    Symbol, TimeGrid, TracingObserver, Variables, evaluate_motion, solve,
};
use serde::Serialize;
use thiserror::Error;
use uom::si::time::second;

pub const DEFAULT_T_MAX: f64 = 10.0;
pub const DEFAULT_INTERVALS: usize = 100;

/// Everything that turns a request into an HTTP 400.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("too many intervals: {requested} requested, at most {limit} allowed")]
    TooManyIntervals { requested: usize, limit: usize },

    #[error("invalid variables: {0}")]
    Variables(#[from] serde_json::Error),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Motion(#[from] MotionError),
}

/// A requested exercise solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub category: String,
    pub unknown: String,
}

/// A parsed `get_data` query.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRequest {
    pub t_max: f64,
    pub intervals: usize,
    pub equations: Equations,
    pub variables: RawQuantities,
    pub exercise: Option<Exercise>,
}

impl Default for DataRequest {
    fn default() -> Self {
        Self {
            t_max: DEFAULT_T_MAX,
            intervals: DEFAULT_INTERVALS,
            equations: Equations::default(),
            variables: RawQuantities::new(),
            exercise: None,
        }
    }
}

impl DataRequest {
    /// Builds a request from decoded query pairs.
    ///
    /// Equation keys may repeat and keep their order. For any other key the
    /// last occurrence wins. An exercise is only requested when both
    /// `exercise_type` and `solve_for` are non-empty.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if `t_max` or `intervals` is not a number
    /// or if `variables` is not a JSON object.
    pub fn from_pairs<K, V>(pairs: &[(K, V)]) -> Result<Self, RequestError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = Self::default();
        let mut category = None;
        let mut unknown = None;

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "t_max" => request.t_max = parse_param("t_max", value)?,
                "intervals" => request.intervals = parse_param("intervals", value)?,
                "x_equations" => request.equations.x.push(value.to_string()),
                "y_equations" => request.equations.y.push(value.to_string()),
                "z_equations" => request.equations.z.push(value.to_string()),
                "z_function" => request.equations.z_function = Some(value.to_string()),
                "variables" => request.variables = serde_json::from_str(value)?,
                "exercise_type" => category = non_empty(value),
                "solve_for" => unknown = non_empty(value),
                _ => {}
            }
        }

        request.exercise = category
            .zip(unknown)
            .map(|(category, unknown)| Exercise { category, unknown });
        Ok(request)
    }
}

impl DataRequest {
    /// Rejects a request whose grid is finer than `max_intervals`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::TooManyIntervals`] if `intervals` exceeds
    /// `max_intervals`.
    pub fn within(self, max_intervals: usize) -> Result<Self, RequestError> {
        if self.intervals > max_intervals {
            return Err(RequestError::TooManyIntervals {
                requested: self.intervals,
                limit: max_intervals,
            });
        }
        Ok(self)
    }
}

fn parse_param<T: FromStr>(name: &'static str, value: &str) -> Result<T, RequestError> {
    value
        .trim()
        .parse()
        .map_err(|_| RequestError::InvalidParameter {
            name,
            value: value.to_string(),
        })
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Response body for `get_data`.
///
/// Curves are flattened next to `t`. The solution fields are present only
/// when an exercise was requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataResponse {
    pub t: Vec<f64>,
    #[serde(flatten)]
    pub curves: ResultBundle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_data: Option<BTreeMap<Symbol, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_status: Option<Status>,
}

/// Evaluates a parsed request.
///
/// # Errors
///
/// Returns a [`RequestError`] if the grid is invalid, an angle cannot be
/// read, or an equation fails to parse. Solver outcomes are never errors.
pub fn get_data(request: DataRequest, solver: &solve::Config) -> Result<DataResponse, RequestError> {
    let grid = TimeGrid::new::<second>(request.t_max, request.intervals)?;
    let variables = Variables::prepare(request.variables)?;
    let curves = evaluate_motion(&request.equations, &grid, &variables, TracingObserver)?;

    let solution = request.exercise.map(|exercise| {
        solve(
            &exercise.category,
            &exercise.unknown,
            &variables,
            solver,
            TracingObserver,
        )
    });
    let (solution, solution_data, solution_status) = match solution {
        Some(Solution {
            status,
            text,
            values,
        }) => (Some(text), Some(values), Some(status)),
        None => (None, None, None),
    };

    Ok(DataResponse {
        t: grid.as_slice().to_vec(),
        curves,
        solution,
        solution_data,
        solution_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use curvipath_core::RawValue;

    #[test]
    fn defaults_apply_without_parameters() {
        let request = DataRequest::from_pairs::<&str, &str>(&[]).unwrap();
        assert_eq!(request, DataRequest::default());
        assert_eq!(request.t_max, 10.0);
        assert_eq!(request.intervals, 100);
    }

    #[test]
    fn collects_repeated_equations_in_order() {
        let request = DataRequest::from_pairs(&[
            ("x_equations", "cos(t)"),
            ("y_equations", "sin(t)"),
            ("x_equations", "2t"),
            ("z_function", "t^2"),
            ("t_max", "5"),
            ("intervals", " 50 "),
        ])
        .unwrap();
        assert_eq!(request.equations.x, ["cos(t)", "2t"]);
        assert_eq!(request.equations.y, ["sin(t)"]);
        assert!(request.equations.z.is_empty());
        assert_eq!(request.equations.z_function.as_deref(), Some("t^2"));
        assert_eq!(request.t_max, 5.0);
        assert_eq!(request.intervals, 50);
    }

    #[test]
    fn parses_variables_as_json() {
        let request =
            DataRequest::from_pairs(&[("variables", r#"{"r": 2, "θ": "30", "g": ""}"#)]).unwrap();
        assert_eq!(request.variables["r"], RawValue::Number(2.0));
        assert_eq!(request.variables["θ"], RawValue::Text("30".into()));
        assert_eq!(request.variables["g"], RawValue::Text(String::new()));
    }

    #[test]
    fn exercise_needs_both_keys() {
        let only_type = DataRequest::from_pairs(&[("exercise_type", "MCU")]).unwrap();
        assert_eq!(only_type.exercise, None);

        let blank = DataRequest::from_pairs(&[("exercise_type", "MCU"), ("solve_for", " ")]).unwrap();
        assert_eq!(blank.exercise, None);

        let both = DataRequest::from_pairs(&[("solve_for", "v"), ("exercise_type", "MCU")]).unwrap();
        assert_eq!(
            both.exercise,
            Some(Exercise {
                category: "MCU".into(),
                unknown: "v".into()
            })
        );
    }

    #[test]
    fn rejects_malformed_parameters() {
        let error = DataRequest::from_pairs(&[("t_max", "ten")]).unwrap_err();
        assert_eq!(error.to_string(), "invalid parameter `t_max`: ten");

        let error = DataRequest::from_pairs(&[("intervals", "-3")]).unwrap_err();
        assert!(matches!(error, RequestError::InvalidParameter { name: "intervals", .. }));

        let error = DataRequest::from_pairs(&[("variables", "{r: 2")]).unwrap_err();
        assert!(matches!(error, RequestError::Variables(_)));
    }

    #[test]
    fn interval_limit_is_inclusive() {
        let request = DataRequest::from_pairs(&[("intervals", "500")]).unwrap();
        assert_eq!(request.clone().within(500).unwrap().intervals, 500);

        let error = request.within(499).unwrap_err();
        assert!(matches!(
            error,
            RequestError::TooManyIntervals {
                requested: 500,
                limit: 499
            }
        ));
        assert_eq!(
            error.to_string(),
            "too many intervals: 500 requested, at most 499 allowed"
        );
    }

    #[test]
    fn evaluates_curves_over_the_grid() {
        let request = DataRequest {
            t_max: 2.0,
            intervals: 4,
            equations: Equations {
                x: vec!["r*cos(t)".into()],
                y: vec!["r*sin(t)".into()],
                ..Equations::default()
            },
            variables: RawQuantities::from([("r".to_string(), RawValue::Number(3.0))]),
            exercise: None,
        };
        let response = get_data(request, &solve::Config::default()).unwrap();

        assert_eq!(response.t, [0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(response.curves.len(), 6 + 4);
        assert_relative_eq!(
            response.curves.get("curvature_1").unwrap()[3],
            1.0 / 3.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(response.curves.get("x_eq_1").unwrap()[0], 3.0);
        assert_relative_eq!(response.curves.get("y_a_1").unwrap()[2], -3.0 * 1.0_f64.sin());
        assert!(response.solution.is_none());
    }

    #[test]
    fn solves_the_requested_exercise() {
        let request = DataRequest {
            variables: RawQuantities::from([
                ("v".to_string(), RawValue::Number(4.0)),
                ("r".to_string(), RawValue::Text("2".into())),
            ]),
            exercise: Some(Exercise {
                category: "MCU".into(),
                unknown: "a_c".into(),
            }),
            ..DataRequest::default()
        };
        let response = get_data(request, &solve::Config::default()).unwrap();

        assert!(response.curves.is_empty());
        assert_eq!(response.t.len(), DEFAULT_INTERVALS + 1);
        assert_eq!(response.solution_status, Some(Status::Solved));
        assert_relative_eq!(
            response.solution_data.unwrap()[&Symbol::CentripetalAcceleration],
            8.0
        );
    }

    #[test]
    fn unsolvable_exercises_are_not_errors() {
        let request = DataRequest {
            exercise: Some(Exercise {
                category: "orbital".into(),
                unknown: "v".into(),
            }),
            ..DataRequest::default()
        };
        let response = get_data(request, &solve::Config::default()).unwrap();
        assert_eq!(response.solution_status, Some(Status::UnrecognizedCategory));
        assert_eq!(response.solution_data, Some(BTreeMap::new()));
    }

    #[test]
    fn surfaces_core_failures() {
        let bad_grid = DataRequest {
            t_max: 0.0,
            ..DataRequest::default()
        };
        let error = get_data(bad_grid, &solve::Config::default()).unwrap_err();
        assert!(matches!(error, RequestError::Grid(GridError::NotPositive(_))));

        let bad_equation = DataRequest {
            equations: Equations {
                y: vec!["sin(".into()],
                ..Equations::default()
            },
            ..DataRequest::default()
        };
        let error = get_data(bad_equation, &solve::Config::default()).unwrap_err();
        assert!(error.to_string().starts_with("error parsing y equation 1"));
    }
}
