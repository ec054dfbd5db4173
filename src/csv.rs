//! Truth table to CSV conversion.
//!
//! The first record holds the column titles (variable names, then the
//! expression), followed by one record per row with `0`/`1` cells only.
//! Records are written with the [`csv`](::csv) crate, so header cells that
//! contain the delimiter are quoted.
//!
//! # Examples
//!
//! ```
//! use truth_table::parser::parse;
//! use truth_table::table::evaluate;
//!
//! let table = evaluate(&parse("A ^ B").unwrap()).unwrap();
//! let csv = table.to_csv().unwrap();
//! assert_eq!(csv, "A,B,A ^ B\n0,0,0\n0,1,1\n1,0,1\n1,1,0\n");
//! ```

use std::io;

use ::csv::WriterBuilder;
pub use ::csv::Terminator;

use crate::table::TruthTable;

/// Configuration options for CSV output.
///
/// # Examples
///
/// ```
/// use truth_table::csv::{CsvConfig, Terminator};
/// use truth_table::parser::parse;
/// use truth_table::table::evaluate;
///
/// let table = evaluate(&parse("~p").unwrap()).unwrap();
/// let config = CsvConfig {
///     delimiter: b';',
///     include_header: false,
///     line_terminator: Terminator::CRLF,
/// };
/// assert_eq!(table.to_csv_with_config(&config).unwrap(), "0;1\r\n1;0\r\n");
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Field separator (default: `,`)
    pub delimiter: u8,
    /// Whether to emit the header record (default: true)
    pub include_header: bool,
    /// Record terminator (default: `\n`)
    pub line_terminator: Terminator,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_header: true,
            line_terminator: Terminator::Any(b'\n'),
        }
    }
}

impl TruthTable {
    /// Renders the table as CSV with the default [`CsvConfig`].
    pub fn to_csv(&self) -> Result<String, ::csv::Error> {
        self.to_csv_with_config(&CsvConfig::default())
    }

    /// Renders the table as CSV.
    pub fn to_csv_with_config(&self, config: &CsvConfig) -> Result<String, ::csv::Error> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf, config)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }

    /// Writes the table as CSV records to `writer`.
    pub fn write_csv<W: io::Write>(&self, writer: W, config: &CsvConfig) -> Result<(), ::csv::Error> {
        let mut wtr = WriterBuilder::new()
            .delimiter(config.delimiter)
            .terminator(config.line_terminator)
            .from_writer(writer);

        if config.include_header {
            wtr.write_record(self.header())?;
        }
        for row in self.rows() {
            wtr.write_record(row.to_bits().iter().map(|b| b.to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::table::evaluate;

    #[test]
    fn test_to_csv_basic() {
        let table = evaluate(&parse("A & B").unwrap()).unwrap();
        let csv = table.to_csv().unwrap();
        assert_eq!(csv, "A,B,A & B\n0,0,0\n0,1,0\n1,0,0\n1,1,1\n");
    }

    #[test]
    fn test_to_csv_line_count() {
        let table = evaluate(&parse("a | b | c").unwrap()).unwrap();
        let csv = table.to_csv().unwrap();
        assert_eq!(csv.lines().count(), 1 + 8);
        for line in csv.lines().skip(1) {
            assert!(line.split(',').all(|cell| cell == "0" || cell == "1"));
        }
    }

    #[test]
    fn test_custom_delimiter_quotes_header() {
        let table = evaluate(&parse("A | B").unwrap()).unwrap();
        let config = CsvConfig {
            delimiter: b'|',
            ..CsvConfig::default()
        };
        let csv = table.to_csv_with_config(&config).unwrap();
        assert_eq!(csv.lines().next(), Some("A|B|\"A | B\""));
        assert_eq!(csv.lines().nth(1), Some("0|0|0"));
    }

    #[test]
    fn test_crlf_without_header() {
        let table = evaluate(&parse("x >> y").unwrap()).unwrap();
        let config = CsvConfig {
            include_header: false,
            line_terminator: Terminator::CRLF,
            ..CsvConfig::default()
        };
        let csv = table.to_csv_with_config(&config).unwrap();
        assert_eq!(csv, "0,0,1\r\n0,1,1\r\n1,0,0\r\n1,1,1\r\n");
    }

    #[test]
    fn test_write_csv_matches_to_csv() {
        let table = evaluate(&parse("p == q").unwrap()).unwrap();
        let mut out = Vec::new();
        table.write_csv(&mut out, &CsvConfig::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), table.to_csv().unwrap());
    }
}
