//! Recursive-descent parser for propositional formulas.
//!
//! # Grammar
//!
//! ```text
//! expr    := equiv
//! equiv   := implies ( "==" implies )*
//! implies := or ( ">>" implies )?
//! or      := xor ( "|" xor )*
//! xor     := and ( "^" and )*
//! and     := unary ( "&" unary )*
//! unary   := "~" unary | primary
//! primary := literal | IDENT | FUNC "(" expr ( "," expr )* ")" | "(" expr ")"
//! ```
//!
//! Precedence, tightest first: `~`, `&`, `^`, `|`, `>>`, `==`.
//! Implication is right-associative, every other binary operator is
//! left-associative, so `A ^ B ^ C` is `(A ^ B) ^ C`.
//!
//! The function forms `Not`, `And`, `Or`, `Xor`, `Implies`, `Eq` and
//! `Equivalent` are accepted as well; `And`, `Or` and `Xor` take two or more
//! arguments.
//!
//! # Examples
//!
//! ```
//! use truth_table::ast::Expr;
//! use truth_table::parser::{parse, ParseError};
//!
//! let expr = parse("A ^ B").unwrap();
//! assert_eq!(expr, Expr::xor(Expr::var("A"), Expr::var("B")));
//!
//! assert!(matches!(parse("A |& B"), Err(ParseError::Syntax { .. })));
//! assert_eq!(parse("True"), Err(ParseError::NotSymbolic));
//! ```

use std::fmt;

use log::debug;

use crate::ast::Expr;
use crate::lexer::{tokenize, LexError, Spanned, Tok};

/// Maximum height of a parsed tree, and maximum nesting of parentheses,
/// negations and calls.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// Malformed input: unknown token, unbalanced parentheses, bad call.
    Syntax { message: String, column: usize },
    /// The input is a bare boolean constant.
    NotSymbolic,
}

impl ParseError {
    fn syntax(column: usize, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            message: message.into(),
            column,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax { message, column } => {
                write!(f, "invalid logical expression: {} (column {})", message, column)
            }
            ParseError::NotSymbolic => {
                write!(f, "expression evaluates to a boolean constant; provide symbolic variables")
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::syntax(e.column, e.message)
    }
}

/// Parses `text` into an expression tree.
///
/// Fails with [`ParseError::Syntax`] on malformed input and with
/// [`ParseError::NotSymbolic`] when the whole input is a single literal such
/// as `True` or `(0)`. Trees that merely *contain* no variables
/// (`True & False`) are accepted here and rejected by the evaluator.
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(text)?;
    debug!("parse({:?}): {} tokens", text, tokens.len());

    if tokens.is_empty() {
        return Err(ParseError::syntax(1, "empty expression"));
    }

    let mut parser = Parser::new(&tokens, text.chars().count());
    let Node { expr, .. } = parser.parse_expr()?;
    if let Some(t) = parser.peek() {
        return Err(ParseError::syntax(t.column, format!("unexpected {} after expression", t.tok)));
    }

    if expr.is_const() {
        debug!("parse: constant {}", expr);
        return Err(ParseError::NotSymbolic);
    }

    debug!("parse: {} ({} nodes)", expr, expr.size());
    Ok(expr)
}

/// A parsed subtree and its height (a leaf has height 0).
struct Node {
    expr: Expr,
    height: usize,
}

impl Node {
    fn leaf(expr: Expr) -> Self {
        Node { expr, height: 0 }
    }

    fn not(column: usize, inner: Node) -> Result<Node, ParseError> {
        Ok(Node {
            height: grow(column, inner.height)?,
            expr: Expr::not(inner.expr),
        })
    }

    fn binary(column: usize, mk: fn(Expr, Expr) -> Expr, lhs: Node, rhs: Node) -> Result<Node, ParseError> {
        Ok(Node {
            height: grow(column, lhs.height.max(rhs.height))?,
            expr: mk(lhs.expr, rhs.expr),
        })
    }
}

/// Height of a node over a subtree of height `height`.
fn grow(column: usize, height: usize) -> Result<usize, ParseError> {
    if height >= MAX_DEPTH {
        return Err(ParseError::syntax(column, "expression is nested too deeply"));
    }
    Ok(height + 1)
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    /// Current recursion depth of the parser itself.
    depth: usize,
    /// Column reported for errors at end of input.
    end_column: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Spanned], text_len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            end_column: text_len + 1,
        }
    }

    fn peek(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.pos)
    }

    fn peek_tok(&self) -> Option<&'a Tok> {
        self.peek().map(|t| &t.tok)
    }

    fn bump(&mut self) -> Option<&'a Spanned> {
        let t = self.tokens.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn eat(&mut self, tok: &Tok) -> bool {
        if self.peek_tok() == Some(tok) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, tok: &Tok) -> Result<(), ParseError> {
        match self.bump() {
            Some(t) if &t.tok == tok => Ok(()),
            Some(t) => Err(ParseError::syntax(t.column, format!("expected {}, found {}", tok, t.tok))),
            None => Err(ParseError::syntax(self.end_column, format!("expected {}, found end of input", tok))),
        }
    }

    fn enter(&mut self, column: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::syntax(column, "expression is nested too deeply"));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_expr(&mut self) -> Result<Node, ParseError> {
        self.parse_equiv()
    }

    fn parse_equiv(&mut self) -> Result<Node, ParseError> {
        self.parse_left_assoc(&Tok::Equiv, Self::parse_implies, Expr::equiv)
    }

    fn parse_implies(&mut self) -> Result<Node, ParseError> {
        let lhs = self.parse_or()?;
        if let Some(t) = self.peek() {
            if t.tok == Tok::Implies {
                self.pos += 1;
                self.enter(t.column)?;
                let rhs = self.parse_implies();
                self.leave();
                return Node::binary(t.column, Expr::implies, lhs, rhs?);
            }
        }
        Ok(lhs)
    }

    fn parse_or(&mut self) -> Result<Node, ParseError> {
        self.parse_left_assoc(&Tok::Or, Self::parse_xor, Expr::or)
    }

    fn parse_xor(&mut self) -> Result<Node, ParseError> {
        self.parse_left_assoc(&Tok::Xor, Self::parse_and, Expr::xor)
    }

    fn parse_and(&mut self) -> Result<Node, ParseError> {
        self.parse_left_assoc(&Tok::And, Self::parse_unary, Expr::and)
    }

    /// `operand ( op operand )*`, folded to the left.
    fn parse_left_assoc(
        &mut self,
        op: &Tok,
        operand: fn(&mut Self) -> Result<Node, ParseError>,
        mk: fn(Expr, Expr) -> Expr,
    ) -> Result<Node, ParseError> {
        let mut lhs = operand(self)?;
        while let Some(t) = self.peek() {
            if &t.tok != op {
                break;
            }
            self.pos += 1;
            let rhs = operand(self)?;
            lhs = Node::binary(t.column, mk, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Node, ParseError> {
        match self.peek() {
            Some(t) if t.tok == Tok::Not => {
                self.pos += 1;
                self.enter(t.column)?;
                let inner = self.parse_unary();
                self.leave();
                Node::not(t.column, inner?)
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let t = match self.bump() {
            Some(t) => t,
            None => return Err(ParseError::syntax(self.end_column, "unexpected end of input")),
        };
        match &t.tok {
            Tok::Literal(value) => Ok(Node::leaf(Expr::constant(*value))),
            Tok::Ident(name) => {
                if self.peek_tok() == Some(&Tok::LParen) {
                    self.parse_call(name, t.column)
                } else if Function::from_name(name).is_some() {
                    Err(ParseError::syntax(t.column, format!("function `{}` requires arguments", name)))
                } else {
                    Ok(Node::leaf(Expr::var(name.as_str())))
                }
            }
            Tok::LParen => {
                self.enter(t.column)?;
                let inner = self.parse_expr();
                self.leave();
                let inner = inner?;
                self.expect(&Tok::RParen)?;
                Ok(inner)
            }
            tok => Err(ParseError::syntax(t.column, format!("expected an operand, found {}", tok))),
        }
    }

    fn parse_call(&mut self, name: &str, column: usize) -> Result<Node, ParseError> {
        let function = match Function::from_name(name) {
            Some(f) => f,
            None => return Err(ParseError::syntax(column, format!("unknown function `{}`", name))),
        };

        self.expect(&Tok::LParen)?;
        self.enter(column)?;
        let args = self.parse_args();
        self.leave();
        let args = args?;

        function.build(column, args)
    }

    fn parse_args(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut args = vec![self.parse_expr()?];
        while self.eat(&Tok::Comma) {
            args.push(self.parse_expr()?);
        }
        self.expect(&Tok::RParen)?;
        Ok(args)
    }
}

/// Functions accepted in call syntax, e.g. `Xor(A, B)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Function {
    Not,
    And,
    Or,
    Xor,
    Implies,
    Equiv,
}

impl Function {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Not" => Some(Function::Not),
            "And" => Some(Function::And),
            "Or" => Some(Function::Or),
            "Xor" => Some(Function::Xor),
            "Implies" => Some(Function::Implies),
            "Eq" | "Equivalent" => Some(Function::Equiv),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Function::Not => "Not",
            Function::And => "And",
            Function::Or => "Or",
            Function::Xor => "Xor",
            Function::Implies => "Implies",
            Function::Equiv => "Eq",
        }
    }

    /// Applies the function to its arguments; n-ary forms fold to the left,
    /// one tree level per extra argument.
    fn build(self, column: usize, args: Vec<Node>) -> Result<Node, ParseError> {
        let n = args.len();
        let arity_error = |expected: &str| {
            ParseError::syntax(column, format!("`{}` takes {} arguments, got {}", self.name(), expected, n))
        };
        match self {
            Function::Not => {
                let [a]: [Node; 1] = args.try_into().map_err(|_| arity_error("exactly 1"))?;
                Node::not(column, a)
            }
            Function::Implies | Function::Equiv => {
                let [a, b]: [Node; 2] = args.try_into().map_err(|_| arity_error("exactly 2"))?;
                let mk: fn(Expr, Expr) -> Expr = if self == Function::Implies {
                    Expr::implies
                } else {
                    Expr::equiv
                };
                Node::binary(column, mk, a, b)
            }
            Function::And | Function::Or | Function::Xor => {
                if n < 2 {
                    return Err(arity_error("at least 2"));
                }
                let mk: fn(Expr, Expr) -> Expr = match self {
                    Function::And => Expr::and,
                    Function::Or => Expr::or,
                    _ => Expr::xor,
                };
                let mut args = args.into_iter();
                let first = args.next().ok_or_else(|| arity_error("at least 2"))?;
                args.try_fold(first, |acc, arg| Node::binary(column, mk, acc, arg))
            }
        }
    }
}
