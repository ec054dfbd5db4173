//! Enumeration of variable assignments.
//!
//! For an ordered variable list `v1 < v2 < ... < vN`, assignments are produced
//! in the order of an `N`-deep nested loop: `v1` is the outermost loop and
//! `vN` the innermost, and each variable takes `0` before `1`. Equivalently,
//! assignment number `i` gives `vj` the bit `N - j` of `i` (counting from 1),
//! so the rows read as binary numbers counting upward.
//!
//! ```
//! use truth_table::assignment::Assignments;
//! use truth_table::types::Var;
//!
//! let vars = [Var::new("A"), Var::new("B")];
//! let rows: Vec<Vec<u8>> = Assignments::new(&vars).map(|a| a.bits().collect()).collect();
//! assert_eq!(rows, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
//! ```

use crate::eval::Valuation;
use crate::types::Var;

/// Largest number of variables whose assignments can be indexed by a `u64`.
pub const MAX_VARIABLES: usize = 63;

/// One assignment of truth values to an ordered list of variables.
///
/// The variables are borrowed; the values are packed into a single word.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Assignment<'a> {
    vars: &'a [Var],
    bits: u64,
}

impl<'a> Assignment<'a> {
    /// Assignment number `index` over `vars` (see the module docs for the order).
    ///
    /// # Panics
    ///
    /// Panics if `vars` has more than [`MAX_VARIABLES`] entries.
    pub fn new(vars: &'a [Var], index: u64) -> Self {
        assert!(vars.len() <= MAX_VARIABLES, "At most {} variables are supported", MAX_VARIABLES);
        Self { vars, bits: index }
    }

    /// Position of this assignment in the enumeration order.
    pub fn index(&self) -> u64 {
        self.bits
    }

    pub fn variables(&self) -> &'a [Var] {
        self.vars
    }

    /// Value of the `j`-th variable (0-based, in variable order).
    pub fn get(&self, j: usize) -> bool {
        assert!(j < self.vars.len(), "Variable index {} out of range", j);
        let shift = self.vars.len() - 1 - j;
        (self.bits >> shift) & 1 == 1
    }

    /// Values in variable order.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.vars.len()).map(move |j| self.get(j))
    }

    /// Values in variable order, as `0`/`1`.
    pub fn bits(&self) -> impl Iterator<Item = u8> + '_ {
        self.values().map(u8::from)
    }
}

impl Valuation for Assignment<'_> {
    fn value(&self, name: &str) -> Option<bool> {
        // Variables are sorted, so a binary search finds the column.
        let j = self.vars.binary_search_by(|v| v.name().cmp(name)).ok()?;
        Some(self.get(j))
    }
}

/// Iterator over all `2^N` assignments of `N` sorted variables.
#[derive(Debug, Clone)]
pub struct Assignments<'a> {
    vars: &'a [Var],
    next: u64,
    /// One past the last index, `2^N`.
    end: u64,
}

impl<'a> Assignments<'a> {
    /// Enumerates the assignments of `vars`, which must be sorted and distinct.
    ///
    /// # Panics
    ///
    /// Panics if `vars` has more than [`MAX_VARIABLES`] entries.
    pub fn new(vars: &'a [Var]) -> Self {
        assert!(vars.len() <= MAX_VARIABLES, "At most {} variables are supported", MAX_VARIABLES);
        debug_assert!(vars.windows(2).all(|w| w[0] < w[1]), "variables must be sorted and distinct");
        Self {
            vars,
            next: 0,
            end: 1u64 << vars.len(),
        }
    }
}

impl<'a> Iterator for Assignments<'a> {
    type Item = Assignment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let assignment = Assignment {
            vars: self.vars,
            bits: self.next,
        };
        self.next += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(names: &[&str]) -> Vec<Var> {
        names.iter().map(|&n| Var::new(n)).collect()
    }

    #[test]
    fn test_single_variable_order() {
        let vs = vars(&["A"]);
        let rows: Vec<Vec<bool>> = Assignments::new(&vs).map(|a| a.values().collect()).collect();
        assert_eq!(rows, vec![vec![false], vec![true]]);
    }

    #[test]
    fn test_nested_loop_order() {
        let vs = vars(&["A", "B", "C"]);

        let mut expected = Vec::new();
        for a in [0u8, 1] {
            for b in [0u8, 1] {
                for c in [0u8, 1] {
                    expected.push(vec![a, b, c]);
                }
            }
        }

        let rows: Vec<Vec<u8>> = Assignments::new(&vs).map(|a| a.bits().collect()).collect();
        assert_eq!(rows, expected);
    }

    #[test]
    fn test_count_and_size_hint() {
        let vs = vars(&["a", "b", "c", "d"]);
        let it = Assignments::new(&vs);
        assert_eq!(it.size_hint(), (16, Some(16)));
        assert_eq!(it.count(), 16);
    }

    #[test]
    fn test_valuation_lookup() {
        let vs = vars(&["p", "q", "r"]);
        // index 0b101 -> p=1, q=0, r=1
        let a = Assignment::new(&vs, 0b101);
        assert_eq!(a.value("p"), Some(true));
        assert_eq!(a.value("q"), Some(false));
        assert_eq!(a.value("r"), Some(true));
        assert_eq!(a.value("s"), None);
        assert_eq!(a.index(), 5);
    }

    #[test]
    fn test_empty_variable_list() {
        let vs: Vec<Var> = Vec::new();
        let rows: Vec<Assignment> = Assignments::new(&vs).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].values().count(), 0);
    }

    #[test]
    #[should_panic(expected = "At most 63 variables are supported")]
    fn test_too_many_variables_panics() {
        let vs: Vec<Var> = (0..64).map(|i| Var::new(format!("x{:02}", i))).collect();
        Assignments::new(&vs);
    }
}
