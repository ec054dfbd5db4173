//! Tokenizer for propositional formulas.
//!
//! Operators follow the usual Python/SymPy spelling:
//!
//! | token | meaning        |
//! |-------|----------------|
//! | `~`   | negation       |
//! | `&`   | conjunction    |
//! | `|`   | disjunction    |
//! | `^`   | exclusive or   |
//! | `>>`  | implication    |
//! | `==`  | bi-conditional |
//!
//! `True`/`1` and `False`/`0` are boolean literals.

use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Tok {
    Ident(String),
    Literal(bool),
    Not,
    And,
    Or,
    Xor,
    Implies,
    Equiv,
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Ident(name) => write!(f, "`{}`", name),
            Tok::Literal(true) => write!(f, "`True`"),
            Tok::Literal(false) => write!(f, "`False`"),
            Tok::Not => write!(f, "`~`"),
            Tok::And => write!(f, "`&`"),
            Tok::Or => write!(f, "`|`"),
            Tok::Xor => write!(f, "`^`"),
            Tok::Implies => write!(f, "`>>`"),
            Tok::Equiv => write!(f, "`==`"),
            Tok::LParen => write!(f, "`(`"),
            Tok::RParen => write!(f, "`)`"),
            Tok::Comma => write!(f, "`,`"),
        }
    }
}

/// A token together with the 1-based column it starts at.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Spanned {
    pub tok: Tok,
    pub column: usize,
}

/// A lexical error: the offending column and a message.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LexError {
    pub column: usize,
    pub message: String,
}

pub fn tokenize(s: &str) -> Result<Vec<Spanned>, LexError> {
    let mut tokens = Vec::new();
    let mut chars = s.chars().enumerate().peekable();

    while let Some(&(i, c)) = chars.peek() {
        let column = i + 1;
        let single = |tok| Spanned { tok, column };
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                tokens.push(single(Tok::LParen));
                chars.next();
            }
            ')' => {
                tokens.push(single(Tok::RParen));
                chars.next();
            }
            ',' => {
                tokens.push(single(Tok::Comma));
                chars.next();
            }
            '~' => {
                tokens.push(single(Tok::Not));
                chars.next();
            }
            '&' => {
                tokens.push(single(Tok::And));
                chars.next();
            }
            '|' => {
                tokens.push(single(Tok::Or));
                chars.next();
            }
            '^' => {
                tokens.push(single(Tok::Xor));
                chars.next();
            }
            '>' | '=' => {
                chars.next();
                match chars.peek() {
                    Some(&(_, next)) if next == c => {
                        chars.next();
                        let tok = if c == '>' { Tok::Implies } else { Tok::Equiv };
                        tokens.push(single(tok));
                    }
                    _ => {
                        return Err(LexError {
                            column,
                            message: format!("unexpected character '{}' (did you mean '{}{}'?)", c, c, c),
                        });
                    }
                }
            }
            c if c.is_ascii_digit() => {
                let mut digits = String::new();
                while let Some(&(_, d)) = chars.peek() {
                    if d.is_alphanumeric() || d == '_' {
                        digits.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let tok = match digits.as_str() {
                    "0" => Tok::Literal(false),
                    "1" => Tok::Literal(true),
                    _ => {
                        return Err(LexError {
                            column,
                            message: format!("'{}' is neither a boolean literal nor a variable name", digits),
                        });
                    }
                };
                tokens.push(single(tok));
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut ident = String::new();
                while let Some(&(_, d)) = chars.peek() {
                    if d.is_alphanumeric() || d == '_' {
                        ident.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let tok = match ident.as_str() {
                    "True" => Tok::Literal(true),
                    "False" => Tok::Literal(false),
                    _ => Tok::Ident(ident),
                };
                tokens.push(single(tok));
            }
            _ => {
                return Err(LexError {
                    column,
                    message: format!("unexpected character '{}'", c),
                });
            }
        }
    }

    Ok(tokens)
}
