use thiserror::Error;

/// Errors that can occur while turning text into an [`Expr`](crate::Expr).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character `{ch}` at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number `{text}` at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unknown symbol `{name}`")]
    UnknownSymbol { name: String },

    #[error("function `{name}` must be followed by `(`")]
    BareFunction { name: String },

    /// Parentheses, signs or powers nest deeper than the supported limit.
    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("invalid expression: {message}")]
    Rejected { message: String },

    #[error("cannot differentiate: {message}")]
    Derivative { message: String },
}

impl ParseError {
    pub(crate) fn rejected(error: impl std::fmt::Display) -> Self {
        Self::Rejected {
            message: error.to_string(),
        }
    }
}

/// Errors that can occur while evaluating an expression numerically.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvalError {
    /// Division by zero or a function outside its real domain.
    #[error("expression is undefined at t = {t}")]
    Undefined { t: f64 },

    #[error("expression is infinite at t = {t}")]
    Infinite { t: f64 },
}

impl EvalError {
    pub(crate) fn at(t: f64, value: f64) -> Self {
        if value.is_nan() {
            Self::Undefined { t }
        } else {
            Self::Infinite { t }
        }
    }
}
