//! Errors of the whole text-to-table pipeline.

use std::fmt;

use crate::parser::{parse, ParseError};
use crate::table::{evaluate_with, EvalConfig, EvalError, TruthTable};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    Parse(ParseError),
    Eval(EvalError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{}", e),
            Error::Eval(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Eval(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Error::Eval(e)
    }
}

/// Parses `text` and builds its truth table in one step.
///
/// ```
/// use truth_table::truth_table;
///
/// let table = truth_table("A == B").unwrap();
/// assert_eq!(table.to_bits(), vec![vec![0, 0, 1], vec![0, 1, 0], vec![1, 0, 0], vec![1, 1, 1]]);
/// ```
pub fn truth_table(text: &str) -> Result<TruthTable, Error> {
    truth_table_with(text, &EvalConfig::default())
}

/// Like [`truth_table`], with an explicit [`EvalConfig`].
pub fn truth_table_with(text: &str, config: &EvalConfig) -> Result<TruthTable, Error> {
    let expr = parse(text)?;
    Ok(evaluate_with(&expr, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_pipeline_errors() {
        assert!(matches!(truth_table("A |& B"), Err(Error::Parse(ParseError::Syntax { .. }))));
        assert_eq!(truth_table("False"), Err(Error::Parse(ParseError::NotSymbolic)));
        assert_eq!(truth_table("True | False"), Err(Error::Eval(EvalError::EmptyVariableSet)));
        assert_eq!(
            truth_table_with("a & b & c", &EvalConfig::with_max_variables(2)),
            Err(Error::Eval(EvalError::TooManyVariables { found: 3, limit: 2 }))
        );
    }

    #[test]
    fn test_display_and_source() {
        let err = Error::from(EvalError::EmptyVariableSet);
        assert_eq!(err.to_string(), EvalError::EmptyVariableSet.to_string());
        assert!(err.source().is_some());
    }
}
