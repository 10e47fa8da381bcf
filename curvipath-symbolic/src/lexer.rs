use std::fmt;

use crate::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
}

impl Token {
    /// Returns `true` if the token can close an operand, so that a sign
    /// after it is a binary operator.
    pub(crate) fn ends_operand(&self) -> bool {
        matches!(self, Self::Num(_) | Self::Ident(_) | Self::RParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(value) => write!(f, "{value}"),
            Self::Ident(name) => f.write_str(name),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Caret => f.write_str("^"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Comma => f.write_str(","),
        }
    }
}

/// A token together with its character offset in the source.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub pos: usize,
}

/// Splits `source` into tokens.
///
/// `**` is read as a power operator, the same as `^`.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let pos = i;

        if ch.is_whitespace() {
            i += 1;
            continue;
        }

        if ch.is_ascii_digit() || ch == '.' {
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let text: String = chars[pos..i].iter().collect();
            let value = text
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber { text, pos })?;
            tokens.push(Spanned {
                token: Token::Num(value),
                pos,
            });
            continue;
        }

        if ch.is_alphabetic() || ch == '_' {
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let name: String = chars[pos..i].iter().collect();
            tokens.push(Spanned {
                token: Token::Ident(name),
                pos,
            });
            continue;
        }

        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 1;
                Token::Caret
            }
            '*' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            _ => return Err(ParseError::UnexpectedChar { ch, pos }),
        };
        tokens.push(Spanned { token, pos });
        i += 1;
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .expect("should tokenize")
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    #[test]
    fn reads_numbers_identifiers_and_operators() {
        assert_eq!(
            kinds("2.5*t^2 - v_0"),
            vec![
                Token::Num(2.5),
                Token::Star,
                Token::Ident("t".into()),
                Token::Caret,
                Token::Num(2.0),
                Token::Minus,
                Token::Ident("v_0".into()),
            ]
        );
    }

    #[test]
    fn double_star_is_power() {
        assert_eq!(
            kinds("t**3"),
            vec![Token::Ident("t".into()), Token::Caret, Token::Num(3.0)]
        );
    }

    #[test]
    fn accepts_greek_identifiers() {
        assert_eq!(kinds("ω"), vec![Token::Ident("ω".into())]);
    }

    #[test]
    fn rejects_stray_characters() {
        assert_eq!(
            tokenize("t $ 2"),
            Err(ParseError::UnexpectedChar { ch: '$', pos: 2 })
        );
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(matches!(
            tokenize("1.2.3"),
            Err(ParseError::InvalidNumber { pos: 0, .. })
        ));
    }
}
