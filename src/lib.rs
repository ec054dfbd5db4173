//! # truth-table: truth tables for propositional formulas
//!
//! **`truth-table`** parses a propositional formula, enumerates every assignment
//! of its variables and reports the resulting truth table together with a
//! classification: *tautology*, *contradiction* or *contingency*.
//!
//! ## Syntax
//!
//! | operator       | spelling | function form      |
//! |----------------|----------|--------------------|
//! | NOT            | `~A`     | `Not(A)`           |
//! | AND            | `A & B`  | `And(A, B, ...)`   |
//! | XOR            | `A ^ B`  | `Xor(A, B, ...)`   |
//! | OR             | `A \| B` | `Or(A, B, ...)`    |
//! | IMPLICATION    | `A >> B` | `Implies(A, B)`    |
//! | BI-CONDITIONAL | `A == B` | `Eq(A, B)`         |
//!
//! Operators are listed from tightest to loosest binding. Variables are words
//! (`A`, `rain`, `x_1`); `True`, `False`, `1` and `0` are literals.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table::parser::parse;
//! use truth_table::table::{evaluate, Classification};
//!
//! // 1. Parse the formula
//! let expr = parse("A & B").unwrap();
//!
//! // 2. Build the table: one row per assignment, variables in name order
//! let table = evaluate(&expr).unwrap();
//! assert_eq!(table.header(), vec!["A", "B", "A & B"]);
//! assert_eq!(
//!     table.to_bits(),
//!     vec![vec![0, 0, 0], vec![0, 1, 0], vec![1, 0, 0], vec![1, 1, 1]]
//! );
//!
//! // 3. Inspect the verdict
//! assert_eq!(table.classification(), Classification::Contingency);
//! ```
//!
//! ## Core Components
//!
//! - **[`parser`]**: text to [`Expr`][crate::ast::Expr], with [`ParseError`][crate::parser::ParseError].
//! - **[`table`]**: [`evaluate`][crate::table::evaluate] and the [`TruthTable`][crate::table::TruthTable] it returns.
//! - **[`csv`]** and **[`latex`]**: renderings for the presentation layer.
//!
//! Both stages are pure functions without shared state, so they can be called
//! from any number of threads.

pub mod assignment;
pub mod ast;
pub mod csv;
pub mod error;
pub mod eval;
pub mod latex;
pub mod lexer;
pub mod parser;
pub mod table;
pub mod types;

pub use error::{truth_table, truth_table_with, Error};
