//! Expression trees for propositional formulas.
//!
//! An [`Expr`] owns its children exclusively; trees are built once (usually by
//! [`parse`][crate::parser::parse]) and never mutated afterwards.

use std::collections::BTreeSet;
use std::fmt;

use crate::types::Var;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Const(bool),
    Var(Var),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Xor(Box<Expr>, Box<Expr>),
    Implies(Box<Expr>, Box<Expr>),
    Equiv(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn constant(value: bool) -> Self {
        Expr::Const(value)
    }

    pub fn var(name: impl Into<Var>) -> Self {
        Expr::Var(name.into())
    }

    pub fn not(value: Self) -> Self {
        Expr::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Expr::Xor(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn equiv(lhs: Self, rhs: Self) -> Self {
        Expr::Equiv(Box::new(lhs), Box::new(rhs))
    }
}

impl Expr {
    /// Returns `true` for a bare boolean literal.
    pub fn is_const(&self) -> bool {
        matches!(self, Expr::Const(_))
    }

    /// Collects the free variables of the expression, sorted by name.
    ///
    /// ```
    /// use truth_table::parser::parse;
    ///
    /// let expr = parse("c & (a | ~b) >> a").unwrap();
    /// let names: Vec<_> = expr.variables().iter().map(|v| v.name().to_string()).collect();
    /// assert_eq!(names, ["a", "b", "c"]);
    /// ```
    pub fn variables(&self) -> BTreeSet<Var> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<Var>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(v) => {
                if !vars.contains(v.name()) {
                    vars.insert(v.clone());
                }
            }
            Expr::Not(a) => a.collect_variables(vars),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Xor(a, b) | Expr::Implies(a, b) | Expr::Equiv(a, b) => {
                a.collect_variables(vars);
                b.collect_variables(vars);
            }
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(_) => 1,
            Expr::Not(a) => 1 + a.size(),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Xor(a, b) | Expr::Implies(a, b) | Expr::Equiv(a, b) => {
                1 + a.size() + b.size()
            }
        }
    }

    /// Binding strength of the root operator. Higher binds tighter.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Expr::Equiv(..) => 1,
            Expr::Implies(..) => 2,
            Expr::Or(..) => 3,
            Expr::Xor(..) => 4,
            Expr::And(..) => 5,
            Expr::Not(_) => 6,
            Expr::Const(_) | Expr::Var(_) => 7,
        }
    }

    /// Whether a child operand needs parentheses under this (binary) node.
    ///
    /// `Implies` associates to the right, every other binary operator to the left.
    pub(crate) fn child_needs_parens(&self, child: &Expr, is_left: bool) -> bool {
        let (parent, child) = (self.precedence(), child.precedence());
        let right_assoc = matches!(self, Expr::Implies(..));
        if is_left == right_assoc {
            child <= parent
        } else {
            child < parent
        }
    }

    /// Infix symbol of a binary node, `None` for leaves and negation.
    pub(crate) fn operator_symbol(&self) -> Option<&'static str> {
        match self {
            Expr::And(..) => Some("&"),
            Expr::Or(..) => Some("|"),
            Expr::Xor(..) => Some("^"),
            Expr::Implies(..) => Some(">>"),
            Expr::Equiv(..) => Some("=="),
            Expr::Const(_) | Expr::Var(_) | Expr::Not(_) => None,
        }
    }

    /// Operands of a binary node.
    pub(crate) fn operands(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Xor(a, b) | Expr::Implies(a, b) | Expr::Equiv(a, b) => {
                Some((a, b))
            }
            Expr::Const(_) | Expr::Var(_) | Expr::Not(_) => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(true) => write!(f, "True"),
            Expr::Const(false) => write!(f, "False"),
            Expr::Var(v) => write!(f, "{}", v),
            Expr::Not(a) => {
                if a.precedence() < self.precedence() {
                    write!(f, "~({})", a)
                } else {
                    write!(f, "~{}", a)
                }
            }
            _ => {
                let (lhs, rhs) = self.operands().ok_or(fmt::Error)?;
                let op = self.operator_symbol().ok_or(fmt::Error)?;
                if self.child_needs_parens(lhs, true) {
                    write!(f, "({})", lhs)?;
                } else {
                    write!(f, "{}", lhs)?;
                }
                write!(f, " {} ", op)?;
                if self.child_needs_parens(rhs, false) {
                    write!(f, "({})", rhs)
                } else {
                    write!(f, "{}", rhs)
                }
            }
        }
    }
}
