//! Truth tables and their classification.
//!
//! [`evaluate`] walks the free variables of an expression, enumerates every
//! assignment (see [`assignment`][crate::assignment] for the order) and
//! records the value of the expression under each one.
//!
//! # Examples
//!
//! ```
//! use truth_table::parser::parse;
//! use truth_table::table::{evaluate, Classification};
//!
//! let table = evaluate(&parse("A | ~A").unwrap()).unwrap();
//! assert_eq!(table.header(), vec!["A", "A | ~A"]);
//! assert_eq!(table.to_bits(), vec![vec![0, 1], vec![1, 1]]);
//! assert_eq!(table.classification(), Classification::Tautology);
//! ```

use std::fmt;

use log::{debug, trace};

use crate::assignment::{Assignments, MAX_VARIABLES};
use crate::ast::Expr;
use crate::types::Var;

/// Errors raised while building a truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EvalError {
    /// The expression has no free variables.
    EmptyVariableSet,
    /// The expression has more variables than allowed.
    TooManyVariables { found: usize, limit: usize },
    /// The rows for this many variables cannot be allocated.
    TableTooLarge { variables: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::EmptyVariableSet => {
                write!(f, "no variables found in the expression; use symbols like A, B, C")
            }
            EvalError::TooManyVariables { found, limit } => {
                write!(f, "expression has {} variables, at most {} are allowed", found, limit)
            }
            EvalError::TableTooLarge { variables } => {
                write!(f, "truth table over {} variables does not fit in memory", variables)
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Variable ceiling of [`EvalConfig::default`]: about a million rows.
pub const DEFAULT_MAX_VARIABLES: usize = 20;

/// Limits applied by [`evaluate_with`].
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Reject expressions with more free variables than this
    /// (default: [`DEFAULT_MAX_VARIABLES`]).
    /// `None` leaves only the hard limit of [`MAX_VARIABLES`].
    pub max_variables: Option<usize>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_variables: Some(DEFAULT_MAX_VARIABLES),
        }
    }
}

impl EvalConfig {
    pub fn with_max_variables(max_variables: usize) -> Self {
        Self {
            max_variables: Some(max_variables),
        }
    }

    fn limit(&self) -> usize {
        self.max_variables.map_or(MAX_VARIABLES, |m| m.min(MAX_VARIABLES))
    }
}

/// Overall verdict on a truth table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Classification {
    /// True under every assignment.
    Tautology,
    /// False under every assignment.
    Contradiction,
    /// Neither.
    Contingency,
}

impl Classification {
    /// Classifies a sequence of results.
    ///
    /// An empty sequence is vacuously a tautology; [`evaluate`] never produces one.
    pub fn from_results(results: impl IntoIterator<Item = bool>) -> Self {
        let (mut any_true, mut any_false) = (false, false);
        for r in results {
            if r {
                any_true = true;
            } else {
                any_false = true;
            }
        }
        match (any_true, any_false) {
            (_, false) => Classification::Tautology,
            (false, true) => Classification::Contradiction,
            (true, true) => Classification::Contingency,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Classification::Tautology => "Always True",
            Classification::Contradiction => "Always False",
            Classification::Contingency => "Not always True or False",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Tautology => write!(f, "Tautology"),
            Classification::Contradiction => write!(f, "Contradiction"),
            Classification::Contingency => write!(f, "Contingency"),
        }
    }
}

/// One row: the assignment (in variable order) and the result under it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Row {
    inputs: Vec<bool>,
    output: bool,
}

impl Row {
    pub fn inputs(&self) -> &[bool] {
        &self.inputs
    }

    pub fn output(&self) -> bool {
        self.output
    }

    /// Inputs followed by the output, as `0`/`1`.
    pub fn to_bits(&self) -> Vec<u8> {
        self.inputs
            .iter()
            .chain(std::iter::once(&self.output))
            .map(|&b| u8::from(b))
            .collect()
    }
}

/// Complete truth table of an expression.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<Var>,
    expression: String,
    rows: Vec<Row>,
    classification: Classification,
}

impl TruthTable {
    /// Free variables, sorted by name.
    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    /// Rendering of the evaluated expression.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Column titles: variable names, then the expression.
    pub fn header(&self) -> Vec<&str> {
        self.variables
            .iter()
            .map(Var::name)
            .chain(std::iter::once(self.expression.as_str()))
            .collect()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Number of rows, always `2^N` for `N` variables.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false`: a table has at least two rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows under which the expression is true.
    pub fn models(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter().filter(|row| row.output)
    }

    /// All rows as `0`/`1` vectors, inputs followed by the output.
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.rows.iter().map(Row::to_bits).collect()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.header();
        let widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();

        write_padded(f, header.iter().map(|h| h.to_string()), &widths)?;
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;
        for row in &self.rows {
            write_padded(f, row.to_bits().into_iter().map(|b| b.to_string()), &widths)?;
        }
        Ok(())
    }
}

fn write_padded(f: &mut fmt::Formatter<'_>, cells: impl Iterator<Item = String>, widths: &[usize]) -> fmt::Result {
    let cells: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect();
    writeln!(f, "{}", cells.join(" | ").trim_end())
}

/// Builds the truth table of `expr` with the default [`EvalConfig`].
pub fn evaluate(expr: &Expr) -> Result<TruthTable, EvalError> {
    evaluate_with(expr, &EvalConfig::default())
}

/// Builds the truth table of `expr`.
///
/// Fails with [`EvalError::EmptyVariableSet`] if `expr` has no free variables
/// and with [`EvalError::TooManyVariables`] if it has more than the configured
/// limit. A limit raised past what memory holds gives
/// [`EvalError::TableTooLarge`] instead of aborting.
pub fn evaluate_with(expr: &Expr, config: &EvalConfig) -> Result<TruthTable, EvalError> {
    let variables: Vec<Var> = expr.variables().into_iter().collect();
    debug!("evaluate({}): variables = {:?}", expr, variables.iter().map(Var::name).collect::<Vec<_>>());

    if variables.is_empty() {
        return Err(EvalError::EmptyVariableSet);
    }
    let limit = config.limit();
    if variables.len() > limit {
        return Err(EvalError::TooManyVariables {
            found: variables.len(),
            limit,
        });
    }

    let mut rows = Vec::new();
    let row_count = 1usize.checked_shl(variables.len() as u32);
    if row_count.map_or(true, |n| rows.try_reserve_exact(n).is_err()) {
        return Err(EvalError::TableTooLarge {
            variables: variables.len(),
        });
    }
    for assignment in Assignments::new(&variables) {
        let output = match expr.eval(&assignment) {
            Some(value) => value,
            None => unreachable!("assignment covers every free variable"),
        };
        let inputs: Vec<bool> = assignment.values().collect();
        trace!("row {}: {:?} -> {}", assignment.index(), inputs, output);
        rows.push(Row { inputs, output });
    }

    let classification = Classification::from_results(rows.iter().map(Row::output));
    debug!("evaluate: {} rows, {}", rows.len(), classification);

    Ok(TruthTable {
        variables,
        expression: expr.to_string(),
        rows,
        classification,
    })
}
