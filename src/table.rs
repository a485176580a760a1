/*!

  Canonical truth tables: the full output bit-string of a gate across
  every input assignment, used as the deduplication key of the search.

*/

use crate::gate::GateRef;
use bitvec::vec::BitVec;

/// The output column of a gate across all `2^n` input assignments.
///
/// Row convention: in row `r`, input `i` takes bit `n - 1 - i` of `r`,
/// so input 0 is the high-order column and the rows for two inputs
/// enumerate (A, B) = (0,0), (0,1), (1,0), (1,1). The same convention
/// applies to evaluation and to target lookup, and row 0 comes first
/// in the rendered '0'/'1' string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct TruthTable {
    bits: BitVec,
}

impl TruthTable {
    /// Computes the table of `gate` over `input_count` inputs.
    ///
    /// Performs `2^input_count` evaluations, each re-walking the gate's
    /// construction tree from scratch. There is no memoization across
    /// rows; the tool is only meant for small input counts.
    pub fn of_gate(gate: &GateRef, input_count: usize) -> Self {
        let rows = 1usize << input_count;
        let mut bits = BitVec::with_capacity(rows);
        for row in 0..rows {
            bits.push(gate.eval(&Self::assignment(row, input_count)));
        }
        Self { bits }
    }

    /// Decodes a row index into its input assignment under the fixed
    /// row convention.
    pub fn assignment(row: usize, input_count: usize) -> Vec<bool> {
        (0..input_count)
            .map(|i| row >> (input_count - 1 - i) & 1 == 1)
            .collect()
    }

    /// Builds a table directly from row values, row 0 first.
    pub fn from_bools(rows: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: rows.into_iter().collect(),
        }
    }

    /// Returns the number of rows in the table.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the output bit for row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> bool {
        self.bits[row]
    }
}

impl std::str::FromStr for TruthTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Truth table is empty".to_string());
        }
        let mut bits = BitVec::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(format!("Invalid truth table character '{c}'")),
            }
        }
        Ok(Self { bits })
    }
}

impl std::fmt::Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.bits.iter() {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
