//! LaTeX rendering of expressions.
//!
//! Parenthesization follows the same rules as the plain-text rendering, with
//! `\left(` / `\right)` delimiters.

use crate::ast::Expr;

impl Expr {
    /// Renders the expression as a LaTeX math-mode string.
    ///
    /// ```
    /// use truth_table::parser::parse;
    ///
    /// let expr = parse("~A >> (B ^ C)").unwrap();
    /// assert_eq!(expr.to_latex(), r"\neg A \Rightarrow B \veebar C");
    /// ```
    pub fn to_latex(&self) -> String {
        let mut out = String::new();
        self.write_latex(&mut out);
        out
    }

    fn write_latex(&self, out: &mut String) {
        match self {
            Expr::Const(true) => out.push_str(r"\text{True}"),
            Expr::Const(false) => out.push_str(r"\text{False}"),
            Expr::Var(v) => write_latex_name(v.name(), out),
            Expr::Not(a) => {
                out.push_str(r"\neg ");
                write_operand(a, a.precedence() < self.precedence(), out);
            }
            _ => {
                if let (Some((lhs, rhs)), Some(op)) = (self.operands(), latex_operator(self)) {
                    write_operand(lhs, self.child_needs_parens(lhs, true), out);
                    out.push(' ');
                    out.push_str(op);
                    out.push(' ');
                    write_operand(rhs, self.child_needs_parens(rhs, false), out);
                }
            }
        }
    }
}

fn latex_operator(expr: &Expr) -> Option<&'static str> {
    match expr {
        Expr::And(..) => Some(r"\wedge"),
        Expr::Or(..) => Some(r"\vee"),
        Expr::Xor(..) => Some(r"\veebar"),
        Expr::Implies(..) => Some(r"\Rightarrow"),
        Expr::Equiv(..) => Some(r"\Leftrightarrow"),
        Expr::Const(_) | Expr::Var(_) | Expr::Not(_) => None,
    }
}

fn write_operand(expr: &Expr, parens: bool, out: &mut String) {
    if parens {
        out.push_str(r"\left(");
        expr.write_latex(out);
        out.push_str(r"\right)");
    } else {
        expr.write_latex(out);
    }
}

/// Writes a variable name; a trailing `_suffix` or digit run becomes a subscript.
fn write_latex_name(name: &str, out: &mut String) {
    let split = match name.find('_') {
        Some(i) if i > 0 && i + 1 < name.len() => Some((&name[..i], &name[i + 1..])),
        _ => {
            let base_len = name.trim_end_matches(|c: char| c.is_ascii_digit()).len();
            if base_len > 0 && base_len < name.len() {
                Some((&name[..base_len], &name[base_len..]))
            } else {
                None
            }
        }
    };
    match split {
        Some((base, sub)) => {
            out.push_str(&format!("{}_{{{}}}", escape(base), escape(sub)));
        }
        None => out.push_str(&escape(name)),
    }
}

fn escape(s: &str) -> String {
    s.replace('_', r"\_")
}
