//! Core of CurviPath.
//!
//! Two request shapes are supported:
//!
//! - **Motion evaluation**: parametric `x(t)`, `y(t)`, `z(t)` equations are
//!   normalized, parsed, differentiated twice and sampled over a
//!   [`TimeGrid`], producing position, velocity and acceleration curves in a
//!   [`ResultBundle`], together with the arc length, curvature and
//!   tangential/normal acceleration of each vector function.
//! - **Physics solving**: for an exercise category (uniform circular,
//!   non-uniform circular, projectile or general curvilinear motion), the
//!   requested unknown is computed from the provided quantities with a
//!   closed-form formula, returning a [`Solution`] with a derivation text.
//!
//! Both shapes are synchronous and keep no state between calls.

pub mod analysis;
pub mod grid;
pub mod motion;
pub mod observe;
pub mod quantity;
pub mod sample;
pub mod solve;
pub mod variables;

mod normalize;

pub use analysis::{Measure, Trajectory, measure_key};
pub use grid::{GridError, TimeGrid};
pub use motion::{
    Axis, EquationId, Equations, Kind, MotionError, ResultBundle, Slot, evaluate_motion,
    evaluate_motion_unobserved,
};
pub use normalize::normalize;
pub use observe::{Event, Observer, TracingObserver};
pub use quantity::{Category, Provided, Symbol};
pub use solve::{Solution, Status, solve, solve_provided, solve_unobserved};
pub use variables::{InputError, RawQuantities, RawValue, Variables};
