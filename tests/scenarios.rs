//! End-to-end tests: text in, truth table out.
//!
//! Tests cover the reference scenarios, row ordering, classification and the
//! error paths of both stages.

use std::collections::HashSet;

use truth_table::parser::{parse, ParseError};
use truth_table::table::{evaluate, Classification, EvalError, TruthTable};
use truth_table::{truth_table, Error};

fn table(text: &str) -> TruthTable {
    evaluate(&parse(text).unwrap()).unwrap()
}

fn names(t: &TruthTable) -> Vec<&str> {
    t.variables().iter().map(|v| v.name()).collect()
}

// ─── Reference Scenarios ───────────────────────────────────────────────────────

#[test]
fn and_is_contingent() {
    let t = table("A & B");
    assert_eq!(names(&t), ["A", "B"]);
    assert_eq!(t.to_bits(), vec![vec![0, 0, 0], vec![0, 1, 0], vec![1, 0, 0], vec![1, 1, 1]]);
    assert_eq!(t.classification(), Classification::Contingency);
}

#[test]
fn excluded_middle_is_tautology() {
    let t = table("A | ~A");
    assert_eq!(names(&t), ["A"]);
    assert_eq!(t.to_bits(), vec![vec![0, 1], vec![1, 1]]);
    assert_eq!(t.classification(), Classification::Tautology);
}

#[test]
fn non_contradiction_violated_is_contradiction() {
    let t = table("A & ~A");
    assert_eq!(names(&t), ["A"]);
    assert_eq!(t.to_bits(), vec![vec![0, 0], vec![1, 0]]);
    assert_eq!(t.classification(), Classification::Contradiction);
}

#[test]
fn xor_table() {
    let t = table("A ^ B");
    assert_eq!(names(&t), ["A", "B"]);
    assert_eq!(t.to_bits(), vec![vec![0, 0, 0], vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
    assert_eq!(t.classification(), Classification::Contingency);
}

#[test]
fn biconditional_table() {
    let t = table("A == B");
    assert_eq!(names(&t), ["A", "B"]);
    assert_eq!(t.to_bits(), vec![vec![0, 0, 1], vec![0, 1, 0], vec![1, 0, 0], vec![1, 1, 1]]);
    assert_eq!(t.classification(), Classification::Contingency);
}

#[test]
fn implication_table() {
    let t = table("A >> B");
    assert_eq!(t.to_bits(), vec![vec![0, 0, 1], vec![0, 1, 1], vec![1, 0, 0], vec![1, 1, 1]]);
}

#[test]
fn malformed_input_is_syntax_error() {
    assert!(matches!(parse("A |& B"), Err(ParseError::Syntax { .. })));
}

#[test]
fn constant_input_never_yields_a_table() {
    for text in ["True", "False", "1", "0", "(True)", "True & False", "~0", "1 >> 0"] {
        match truth_table(text) {
            Err(Error::Parse(ParseError::NotSymbolic)) | Err(Error::Eval(EvalError::EmptyVariableSet)) => {}
            other => panic!("{:?} produced {:?}", text, other),
        }
    }
}

// ─── Compound XOR and Bi-conditional ───────────────────────────────────────────

#[test]
fn xor_of_compound_operand() {
    // (A & B) ^ C
    let t = table("(A & B) ^ C");
    let outputs: Vec<u8> = t.to_bits().iter().map(|r| r[3]).collect();
    assert_eq!(outputs, [0, 1, 0, 1, 0, 1, 1, 0]);
}

#[test]
fn chained_xor_is_parity() {
    let t = table("A ^ B ^ C");
    for row in t.rows() {
        let ones = row.inputs().iter().filter(|&&b| b).count();
        assert_eq!(row.output(), ones % 2 == 1);
    }
}

#[test]
fn function_forms_match_infix() {
    assert_eq!(table("Xor(A, B)").to_bits(), table("A ^ B").to_bits());
    assert_eq!(table("Eq(A, B)").to_bits(), table("A == B").to_bits());
    assert_eq!(table("Implies(p, q)").to_bits(), table("p >> q").to_bits());
}

// ─── Properties ────────────────────────────────────────────────────────────────

const FORMULAS: &[&str] = &[
    "A",
    "~x",
    "A & B",
    "a | b | c",
    "(p >> q) & (q >> r) >> (p >> r)",
    "A ^ B ^ C ^ D",
    "(A == B) | C & ~D",
    "w & x & y & z & v",
];

#[test]
fn single_variable_tables_have_two_ordered_rows() {
    for text in ["A", "~A", "A | A", "A >> A", "A ^ ~A"] {
        let t = table(text);
        assert_eq!(t.len(), 2);
        assert_eq!(t.rows()[0].inputs(), &[false]);
        assert_eq!(t.rows()[1].inputs(), &[true]);
    }
}

#[test]
fn row_count_is_power_of_two_and_assignments_are_distinct() {
    for &text in FORMULAS {
        let t = table(text);
        let n = t.variables().len();
        assert_eq!(t.len(), 1 << n, "{}", text);

        let distinct: HashSet<&[bool]> = t.rows().iter().map(|r| r.inputs()).collect();
        assert_eq!(distinct.len(), 1 << n, "{}", text);
    }
}

#[test]
fn rows_count_upward_in_binary() {
    for &text in FORMULAS {
        let t = table(text);
        for (i, row) in t.rows().iter().enumerate() {
            let index = row.inputs().iter().fold(0usize, |acc, &b| (acc << 1) | usize::from(b));
            assert_eq!(index, i, "{}", text);
        }
    }
}

#[test]
fn variables_are_sorted() {
    let t = table("zeta | beta & Alpha | alpha");
    assert_eq!(names(&t), ["Alpha", "alpha", "beta", "zeta"]);
}

#[test]
fn evaluation_is_deterministic() {
    for &text in FORMULAS {
        assert_eq!(table(text), table(text));
    }
}

#[test]
fn classification_matches_outputs() {
    for &text in FORMULAS.iter().chain(&["A | ~A", "A & ~A"]) {
        let t = table(text);
        let all_true = t.rows().iter().all(|r| r.output());
        let all_false = t.rows().iter().all(|r| !r.output());
        let expected = if all_true {
            Classification::Tautology
        } else if all_false {
            Classification::Contradiction
        } else {
            Classification::Contingency
        };
        assert_eq!(t.classification(), expected, "{}", text);
    }
}

#[test]
fn hypothetical_syllogism_is_tautology() {
    assert_eq!(table("(p >> q) & (q >> r) >> (p >> r)").classification(), Classification::Tautology);
}

#[test]
fn concurrent_evaluation() {
    let handles: Vec<_> = FORMULAS
        .iter()
        .map(|&text| std::thread::spawn(move || (text, table(text))))
        .collect();
    for handle in handles {
        let (text, t) = handle.join().unwrap();
        assert_eq!(t, table(text));
    }
}

// ─── Rendering ─────────────────────────────────────────────────────────────────

#[test]
fn header_renders_expression() {
    let t = table("Xor(A, B)");
    assert_eq!(t.header(), vec!["A", "B", "A ^ B"]);
}

#[test]
fn csv_export() {
    let csv = table("A == B").to_csv().unwrap();
    assert_eq!(csv, "A,B,A == B\n0,0,1\n0,1,0\n1,0,0\n1,1,1\n");
}
