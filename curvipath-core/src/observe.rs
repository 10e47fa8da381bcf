use curvipath_symbolic::{EvalError, Expr};

use crate::{
    motion::EquationId,
    quantity::{Category, Provided, Symbol},
    solve::Status,
};

/// Receives diagnostic events from the motion assembler and formula solver.
///
/// Observers let callers log or inspect what the core did without the core
/// depending on any process-wide logging setup.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer.
pub trait Observer<E> {
    /// Observes a single event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}

/// Diagnostic event emitted by the core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// An equation component was normalized and parsed.
    Parsed {
        equation: EquationId,
        normalized: &'a str,
        expr: &'a Expr,
    },
    /// Whole-array evaluation failed; samples are evaluated one at a time.
    VectorizedFallback { error: &'a EvalError },
    /// One sample could not be evaluated and was replaced with `0.0`.
    SampleDefaulted { t: f64, error: &'a EvalError },
    /// Raw quantities were resolved against a category's vocabulary.
    Resolved {
        category: Category,
        provided: &'a Provided,
    },
    /// A formula candidate was chosen for the requested unknown.
    CandidateSelected {
        category: Category,
        unknown: Symbol,
        requires: &'static [Symbol],
    },
    /// Solving finished.
    Solved { status: Status, text: &'a str },
}

/// Forwards events to [`tracing`].
///
/// The core never installs a subscriber; events go wherever the caller's
/// subscriber sends them, or nowhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer<Event<'_>> for TracingObserver {
    fn observe(&mut self, event: &Event<'_>) {
        match event {
            Event::Parsed {
                equation,
                normalized,
                expr,
            } => {
                tracing::debug!(%equation, normalized, %expr, "parsed equation");
            }
            Event::VectorizedFallback { error } => {
                tracing::debug!(%error, "vectorized evaluation failed, falling back to per-sample");
            }
            Event::SampleDefaulted { t, error } => {
                tracing::trace!(t, %error, "sample defaulted to 0.0");
            }
            Event::Resolved { category, provided } => {
                tracing::debug!(%category, ?provided, "resolved quantities");
            }
            Event::CandidateSelected {
                category,
                unknown,
                requires,
            } => {
                tracing::debug!(%category, %unknown, ?requires, "selected formula");
            }
            Event::Solved { status, text } => match status {
                Status::ComputationFailed => tracing::warn!(?status, text, "solve failed"),
                _ => tracing::debug!(?status, text, "solve finished"),
            },
        }
    }
}
