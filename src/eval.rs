//! Evaluation of a tree under one assignment, supplied through the [`Valuation`] trait.

use std::collections::{BTreeMap, HashMap};

use crate::ast::Expr;
use crate::types::Var;

/// Source of truth values for variables.
pub trait Valuation {
    /// Value of the variable `name`, or `None` if it is unbound.
    fn value(&self, name: &str) -> Option<bool>;
}

impl Valuation for HashMap<String, bool> {
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Valuation for BTreeMap<Var, bool> {
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Expr {
    /// Evaluates the expression under `env`.
    ///
    /// Returns `None` if some variable of the expression is unbound in `env`.
    /// Both operands of every binary node are always evaluated.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use truth_table::parser::parse;
    ///
    /// let expr = parse("A >> B").unwrap();
    /// let env = HashMap::from([("A".to_string(), true), ("B".to_string(), false)]);
    /// assert_eq!(expr.eval(&env), Some(false));
    /// ```
    pub fn eval<V: Valuation + ?Sized>(&self, env: &V) -> Option<bool> {
        Some(match self {
            Expr::Const(value) => *value,
            Expr::Var(v) => env.value(v.name())?,
            Expr::Not(a) => !a.eval(env)?,
            Expr::And(a, b) => {
                let (a, b) = (a.eval(env)?, b.eval(env)?);
                a & b
            }
            Expr::Or(a, b) => {
                let (a, b) = (a.eval(env)?, b.eval(env)?);
                a | b
            }
            Expr::Xor(a, b) => {
                let (a, b) = (a.eval(env)?, b.eval(env)?);
                a ^ b
            }
            Expr::Implies(a, b) => {
                let (a, b) = (a.eval(env)?, b.eval(env)?);
                !a | b
            }
            Expr::Equiv(a, b) => {
                let (a, b) = (a.eval(env)?, b.eval(env)?);
                a == b
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn env(pairs: &[(&str, bool)]) -> HashMap<String, bool> {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    fn table2(expr: &Expr) -> Vec<bool> {
        let mut results = Vec::new();
        for a in [false, true] {
            for b in [false, true] {
                results.push(expr.eval(&env(&[("A", a), ("B", b)])).unwrap());
            }
        }
        results
    }

    #[test]
    fn test_eval_binary_operators() {
        let a = || Expr::var("A");
        let b = || Expr::var("B");
        assert_eq!(table2(&Expr::and(a(), b())), [false, false, false, true]);
        assert_eq!(table2(&Expr::or(a(), b())), [false, true, true, true]);
        assert_eq!(table2(&Expr::xor(a(), b())), [false, true, true, false]);
        assert_eq!(table2(&Expr::implies(a(), b())), [true, true, false, true]);
        assert_eq!(table2(&Expr::equiv(a(), b())), [true, false, false, true]);
    }

    #[test]
    fn test_eval_not_and_constants() {
        let e = Expr::not(Expr::var("A"));
        assert_eq!(e.eval(&env(&[("A", true)])), Some(false));
        assert_eq!(e.eval(&env(&[("A", false)])), Some(true));

        let c = Expr::or(Expr::constant(false), Expr::not(Expr::constant(false)));
        assert_eq!(c.eval(&env(&[])), Some(true));
    }

    #[test]
    fn test_eval_unbound_variable() {
        let e = Expr::and(Expr::var("A"), Expr::var("B"));
        assert_eq!(e.eval(&env(&[("A", false)])), None);
    }

    #[test]
    fn test_eval_btreemap() {
        let e = Expr::xor(Expr::var("p"), Expr::var("q"));
        let env: BTreeMap<Var, bool> = [(Var::new("p"), true), (Var::new("q"), true)].into_iter().collect();
        assert_eq!(e.eval(&env), Some(false));
    }
}
