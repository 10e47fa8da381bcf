//! Rewrites user text into the strict syntax the symbolic engine reads.
//!
//! User equations multiply by juxtaposition (`2t`, `(t+1)(t-1)`), spell
//! powers as `**`, use `log` or `arcsin` for function names and refer to
//! named values. The engine expects explicit `*`, `^` and its own function
//! names, so every equation passes through [`canonicalize`] first.

use std::f64::consts::{E, PI};

use crate::{
    ParseError, Scope, TIME_VARIABLE,
    lexer::{Spanned, Token, tokenize},
};

/// Deepest nesting of parentheses, signs and powers an expression may use.
pub const MAX_DEPTH: usize = 100;

/// One rewritten token and whether it may sit next to another operand.
struct Piece {
    text: String,
    starts_operand: bool,
    ends_operand: bool,
}

/// Produces the canonical text for `source`.
///
/// A comma separated list keeps only its first element.
pub(crate) fn canonicalize(source: &str, scope: &Scope) -> Result<String, ParseError> {
    let mut tokens = tokenize(source)?;
    tokens.truncate(first_element_len(&tokens));
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    check_depth(&tokens)?;

    let mut text = String::with_capacity(source.len() * 2);
    let mut after_operand = false;
    for (index, spanned) in tokens.iter().enumerate() {
        let next = tokens.get(index + 1).map(|spanned| &spanned.token);
        let piece = rewrite(&spanned.token, next, scope)?;
        if after_operand && piece.starts_operand {
            text.push('*');
        }
        text.push_str(&piece.text);
        after_operand = piece.ends_operand;
    }
    Ok(text)
}

fn first_element_len(tokens: &[Spanned]) -> usize {
    let mut open = 0_usize;
    for (index, Spanned { token, .. }) in tokens.iter().enumerate() {
        match token {
            Token::LParen => open += 1,
            Token::RParen => open = open.saturating_sub(1),
            Token::Comma if open == 0 => return index,
            _ => {}
        }
    }
    tokens.len()
}

/// Rejects expressions whose syntax tree would nest past [`MAX_DEPTH`].
///
/// Each open parenthesis counts as one level. Within a parenthesis level,
/// a run of unary signs and right associative powers counts one level per
/// operator until a binary operator ends the run.
fn check_depth(tokens: &[Spanned]) -> Result<(), ParseError> {
    let mut runs = vec![0_usize];
    let mut previous: Option<&Token> = None;

    for Spanned { token, .. } in tokens {
        let follows_operand = previous.is_some_and(Token::ends_operand);
        match token {
            Token::LParen => runs.push(0),
            Token::RParen if runs.len() > 1 => {
                runs.pop();
            }
            Token::Caret => bump(&mut runs),
            Token::Plus | Token::Minus if !follows_operand => bump(&mut runs),
            Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::Comma => {
                if let Some(run) = runs.last_mut() {
                    *run = 0;
                }
            }
            _ => {}
        }

        let depth = runs.len() - 1 + runs.iter().sum::<usize>();
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }
        previous = Some(token);
    }
    Ok(())
}

fn bump(runs: &mut [usize]) {
    if let Some(run) = runs.last_mut() {
        *run += 1;
    }
}

fn rewrite(token: &Token, next: Option<&Token>, scope: &Scope) -> Result<Piece, ParseError> {
    let operand = |text: String| Piece {
        text,
        starts_operand: true,
        ends_operand: true,
    };

    let piece = match token {
        Token::Num(_) => operand(token.to_string()),
        Token::Ident(name) => return resolve(name, next, scope),
        Token::LParen => Piece {
            text: "(".into(),
            starts_operand: true,
            ends_operand: false,
        },
        Token::RParen => Piece {
            text: ")".into(),
            starts_operand: false,
            ends_operand: true,
        },
        other => Piece {
            text: other.to_string(),
            starts_operand: false,
            ends_operand: false,
        },
    };
    Ok(piece)
}

fn resolve(name: &str, next: Option<&Token>, scope: &Scope) -> Result<Piece, ParseError> {
    let value = |value: f64| Piece {
        text: format!("({value})"),
        starts_operand: true,
        ends_operand: true,
    };

    if name == TIME_VARIABLE {
        return Ok(Piece {
            text: TIME_VARIABLE.into(),
            starts_operand: true,
            ends_operand: true,
        });
    }
    if let Some(found) = scope.get(name) {
        return Ok(value(found));
    }
    match name {
        "pi" | "π" => return Ok(value(PI)),
        "e" | "E" => return Ok(value(E)),
        _ => {}
    }

    let Some(function) = function_name(name) else {
        return Err(ParseError::UnknownSymbol { name: name.into() });
    };
    if next != Some(&Token::LParen) {
        return Err(ParseError::BareFunction { name: name.into() });
    }
    Ok(Piece {
        text: function.into(),
        starts_operand: true,
        ends_operand: false,
    })
}

/// Maps an accepted function spelling to the engine's name for it.
fn function_name(name: &str) -> Option<&'static str> {
    let function = match name {
        "sin" => "sin",
        "cos" => "cos",
        "tan" => "tan",
        "asin" | "arcsin" => "asin",
        "acos" | "arccos" => "acos",
        "atan" | "arctan" => "atan",
        "sinh" => "sinh",
        "cosh" => "cosh",
        "tanh" => "tanh",
        "sqrt" => "sqrt",
        "exp" => "exp",
        "log" | "ln" => "ln",
        "abs" => "abs",
        _ => return None,
    };
    Some(function)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(source: &str) -> String {
        canonicalize(source, &Scope::new()).expect("should canonicalize")
    }

    #[test]
    fn inserts_implicit_multiplication() {
        assert_eq!(canonical("2t"), "2*t");
        assert_eq!(canonical("(t+1)(t-1)"), "(t+1)*(t-1)");
        assert_eq!(canonical("3sin(t)"), "3*sin(t)");
        assert_eq!(canonical("t(t+1)"), "t*(t+1)");
    }

    #[test]
    fn renames_functions_and_powers() {
        assert_eq!(canonical("log(t)**2"), "ln(t)^2");
        assert_eq!(canonical("arctan(t)"), "atan(t)");
    }

    #[test]
    fn substitutes_constants_and_scope_values() {
        let scope = Scope::new().with("r", 2.0).with("t", 9.0);
        assert_eq!(canonicalize("r cos(t)", &scope).unwrap(), "(2)*cos(t)");
        assert_eq!(canonical("pi"), format!("({PI})"));
    }

    #[test]
    fn keeps_the_first_list_element() {
        assert_eq!(canonical("t^2, sin(t), 4"), "t^2");
        assert_eq!(canonical("abs(t), 1"), "abs(t)");
    }

    #[test]
    fn rejects_unknown_and_bare_names() {
        assert_eq!(
            canonicalize("k*t", &Scope::new()),
            Err(ParseError::UnknownSymbol { name: "k".into() })
        );
        assert_eq!(
            canonicalize("sin t", &Scope::new()),
            Err(ParseError::BareFunction { name: "sin".into() })
        );
        assert_eq!(canonicalize(" , t", &Scope::new()), Err(ParseError::Empty));
    }

    #[test]
    fn limits_nesting_depth() {
        let parens = format!("{}t{}", "(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(
            canonicalize(&parens, &Scope::new()),
            Err(ParseError::TooDeep { limit: MAX_DEPTH })
        );

        let signs = format!("{}t", "-".repeat(MAX_DEPTH + 1));
        assert!(matches!(
            canonicalize(&signs, &Scope::new()),
            Err(ParseError::TooDeep { .. })
        ));

        let powers = vec!["t"; MAX_DEPTH + 2].join("^");
        assert!(matches!(
            canonicalize(&powers, &Scope::new()),
            Err(ParseError::TooDeep { .. })
        ));
    }

    #[test]
    fn long_flat_sums_are_not_deep() {
        let sum = vec!["t^2"; 5 * MAX_DEPTH].join(" - ");
        assert!(canonicalize(&sum, &Scope::new()).is_ok());

        let nested = format!("{}t{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert!(canonicalize(&nested, &Scope::new()).is_ok());
    }
}
