//! Tokenizer for normalized expressions.

use super::error::EvalError;

/// A lexical token together with its character offset in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Power,
    LParen,
    RParen,
}

impl Token {
    /// Human readable description for error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Number(n) => format!("number {}", n),
            Self::Ident(name) => format!("identifier '{}'", name),
            Self::Plus => "'+'".to_string(),
            Self::Minus => "'-'".to_string(),
            Self::Star => "'*'".to_string(),
            Self::Slash => "'/'".to_string(),
            Self::Power => "'**'".to_string(),
            Self::LParen => "'('".to_string(),
            Self::RParen => "')'".to_string(),
        }
    }
}

/// Split a normalized expression into tokens.
///
/// Whitespace is skipped. Anything outside the grammar, including a leftover
/// `^`, is rejected here.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, EvalError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        let start = pos;

        let token = match c {
            c if c.is_whitespace() => {
                pos += 1;
                continue;
            }
            '0'..='9' | '.' => {
                let (number, end) = lex_number(&chars, pos)?;
                pos = end;
                number
            }
            c if is_ident_start(c) => {
                let (ident, end) = lex_ident(&chars, pos);
                pos = end;
                Token::Ident(ident)
            }
            '+' => {
                pos += 1;
                Token::Plus
            }
            '-' => {
                pos += 1;
                Token::Minus
            }
            '*' if chars.get(pos + 1) == Some(&'*') => {
                pos += 2;
                Token::Power
            }
            '*' => {
                pos += 1;
                Token::Star
            }
            '/' => {
                pos += 1;
                Token::Slash
            }
            '(' => {
                pos += 1;
                Token::LParen
            }
            ')' => {
                pos += 1;
                Token::RParen
            }
            other => {
                return Err(EvalError::UnexpectedChar {
                    found: other,
                    position: pos,
                })
            }
        };

        tokens.push(Spanned {
            token,
            position: start,
        });
    }

    Ok(tokens)
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Identifiers may be namespaced with `::`, e.g. `math::sqrt`.
fn lex_ident(chars: &[char], start: usize) -> (String, usize) {
    let mut pos = start;
    loop {
        while pos < chars.len() && is_ident_continue(chars[pos]) {
            pos += 1;
        }
        let has_segment = chars.get(pos) == Some(&':')
            && chars.get(pos + 1) == Some(&':')
            && chars.get(pos + 2).is_some_and(|c| is_ident_start(*c));
        if !has_segment {
            break;
        }
        pos += 2;
    }
    (chars[start..pos].iter().collect(), pos)
}

/// Digits with an optional fraction and exponent: `12`, `1.5`, `.5`, `5.`, `1e-3`.
fn lex_number(chars: &[char], start: usize) -> Result<(Token, usize), EvalError> {
    let mut pos = start;
    let digits = |pos: &mut usize| {
        let from = *pos;
        while *pos < chars.len() && chars[*pos].is_ascii_digit() {
            *pos += 1;
        }
        *pos - from
    };

    let mut mantissa = digits(&mut pos);
    if chars.get(pos) == Some(&'.') {
        pos += 1;
        mantissa += digits(&mut pos);
    }

    if matches!(chars.get(pos), Some('e') | Some('E')) {
        let mut probe = pos + 1;
        if matches!(chars.get(probe), Some('+') | Some('-')) {
            probe += 1;
        }
        if chars.get(probe).is_some_and(|c| c.is_ascii_digit()) {
            pos = probe;
            digits(&mut pos);
        }
    }

    // A literal running straight into a letter (`2e`, `3x`) is malformed.
    let runs_into_word = chars.get(pos).is_some_and(|c| is_ident_continue(*c));
    let text: String = chars[start..pos].iter().collect();

    if mantissa == 0 || runs_into_word {
        let end = if runs_into_word {
            let mut end = pos;
            while end < chars.len() && is_ident_continue(chars[end]) {
                end += 1;
            }
            end
        } else {
            pos
        };
        return Err(EvalError::MalformedNumber {
            text: chars[start..end].iter().collect(),
            position: start,
        });
    }

    text.parse::<f64>()
        .map(|value| (Token::Number(value), pos))
        .map_err(|_| EvalError::MalformedNumber {
            text,
            position: start,
        })
}
