//! Closed-form kinematics solver.
//!
//! A solve request names an exercise category, the unknown to find and the
//! quantities already known. The solver walks the category's candidate
//! formulas for that unknown in priority order and evaluates the first one
//! whose inputs are all known.
//!
//! Solving never fails: unknown categories, missing data and arithmetic
//! failures are all reported through [`Solution::text`] and
//! [`Solution::status`].

mod candidate;
mod catalog;
mod config;
mod error;
mod resolve;
mod solution;

pub use candidate::{Candidate, Compute, Guard, Inputs};
pub use catalog::{candidates, unknowns};
pub use config::Config;
pub use error::ComputeError;
pub use resolve::resolve;
pub use solution::{Solution, Status};

use crate::{
    observe::{Event, Observer},
    quantity::{Category, Provided, Symbol},
    variables::Variables,
};

/// Solves for the quantity keyed `unknown` in the category named `category`.
///
/// `category` may be a short code (`MCU`, `MCNU`, `TP`, `MCG`) or a
/// descriptive name such as `projectile`. `variables` are resolved against
/// the category's vocabulary before solving.
pub fn solve<O>(
    category: &str,
    unknown: &str,
    variables: &Variables,
    config: &Config,
    mut observer: O,
) -> Solution
where
    O: for<'a> Observer<Event<'a>>,
{
    let solution = match category.parse::<Category>() {
        Ok(category) => {
            let provided = resolve(category, variables, config);
            observer.observe(&Event::Resolved {
                category,
                provided: &provided,
            });
            let unknown = Symbol::from_key(unknown).ok_or(unknown);
            find_solution(category, unknown, &provided, config, &mut observer)
        }
        Err(error) => Solution::unsolved(
            Status::UnrecognizedCategory,
            format!("Unrecognized exercise category: {}", error.0),
        ),
    };

    finish(solution, &mut observer)
}

/// Solves without observation.
#[must_use]
pub fn solve_unobserved(
    category: &str,
    unknown: &str,
    variables: &Variables,
    config: &Config,
) -> Solution {
    solve(category, unknown, variables, config, ())
}

/// Solves for `unknown` from an already resolved set of quantities.
///
/// The result depends only on the arguments.
pub fn solve_provided<O>(
    category: Category,
    unknown: Symbol,
    provided: &Provided,
    config: &Config,
    mut observer: O,
) -> Solution
where
    O: for<'a> Observer<Event<'a>>,
{
    let solution = find_solution(category, Ok(unknown), provided, config, &mut observer);
    finish(solution, &mut observer)
}

fn finish<O>(solution: Solution, observer: &mut O) -> Solution
where
    O: for<'a> Observer<Event<'a>>,
{
    observer.observe(&Event::Solved {
        status: solution.status,
        text: &solution.text,
    });
    solution
}

fn find_solution<O>(
    category: Category,
    unknown: Result<Symbol, &str>,
    provided: &Provided,
    config: &Config,
    observer: &mut O,
) -> Solution
where
    O: for<'a> Observer<Event<'a>>,
{
    if let Err(reason) = config.validate() {
        return computation_failed(format_args!("invalid config: {reason}"));
    }

    if provided.is_empty() {
        return Solution::unsolved(
            Status::InsufficientData,
            "Insufficient data to compute a solution. Please provide at least one value.".into(),
        );
    }

    let unknown = match unknown {
        Ok(symbol) if unknowns(category).contains(&symbol) => symbol,
        Ok(symbol) => return not_solvable(symbol.key(), category),
        Err(key) => return not_solvable(key, category),
    };

    let Some(candidate) = candidates(category, unknown)
        .iter()
        .find(|candidate| candidate.is_satisfied(provided, config))
    else {
        return Solution::unsolved(Status::InsufficientData, insufficient_hint(category, unknown));
    };

    observer.observe(&Event::CandidateSelected {
        category,
        unknown,
        requires: candidate.requires,
    });

    match candidate.evaluate(provided) {
        Ok(value) => Solution::solved(candidate.render(provided, value), unknown, value),
        Err(error) => computation_failed(error),
    }
}

fn computation_failed(reason: impl std::fmt::Display) -> Solution {
    Solution::unsolved(
        Status::ComputationFailed,
        format!("Error computing the solution: {reason}"),
    )
}

fn not_solvable(key: &str, category: Category) -> Solution {
    Solution::unsolved(
        Status::InsufficientData,
        format!("`{key}` cannot be solved for in {}.", category.name()),
    )
}

/// Explains which input combinations would let `unknown` be solved.
fn insufficient_hint(category: Category, unknown: Symbol) -> String {
    let mut options: Vec<String> = Vec::new();
    for candidate in candidates(category, unknown) {
        let label = candidate.requirement_label();
        if !options.contains(&label) {
            options.push(label);
        }
    }

    let options = match options.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    };

    format!(
        "Insufficient data. To compute the {} ({}) in {}, provide: {options}",
        unknown.name(),
        unknown.label(),
        category.name(),
    )
}
