//! Single-variable symbolic expressions for CurviPath.
//!
//! Equations are written the way students type them: implicit products,
//! `**` powers, `log` for the natural logarithm, named values. [`parse_in`]
//! rewrites that text into strict syntax and hands it to `symb_anafis`,
//! which simplifies it, differentiates it with respect to time, and compiles
//! it for evaluation at a single instant or over a whole array of samples.
//!
//! The only free variable is time, spelled `t`. Other identifiers must be
//! known constants (`pi`, `e`) or named values supplied through a [`Scope`].

mod canonical;
mod error;
mod expr;
mod lexer;
mod scope;

pub use canonical::MAX_DEPTH;
pub use error::{EvalError, ParseError};
pub use expr::{Expr, parse, parse_in};
pub use scope::{Scope, TIME_VARIABLE};
