/*!

  The frontier search: grow NAND combinations of the inputs in
  non-decreasing structural cost and keep the first gate discovered
  for each canonical truth table.

*/

use crate::gate::GateRef;
use crate::netlist::Netlist;
use crate::table::TruthTable;
use log::{debug, info, trace};
use std::collections::{BinaryHeap, HashMap};

/// A not-yet-classified candidate in the frontier.
struct Candidate {
    gate: GateRef,
    seq: u64,
}

impl Candidate {
    fn key(&self) -> (usize, u64) {
        (self.gate.cost(), self.seq)
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so the max-heap pops the cheapest candidate, ties broken
// by insertion sequence.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.key().cmp(&self.key())
    }
}

/// The mapping from canonical truth table to the cheapest gate
/// discovered for it, for one fixed input count.
///
/// A catalog is built once by [synthesize] and immutable afterwards;
/// rebuilding it is the dominant cost, so callers querying several
/// targets over the same input count should hold on to one catalog
/// rather than call [realize] repeatedly.
#[derive(Debug)]
pub struct Catalog {
    input_count: usize,
    map: HashMap<TruthTable, GateRef>,
    /// Acceptance order. Candidate generation walks this instead of the
    /// map so that tie-breaking between equal-cost candidates does not
    /// depend on hash iteration order.
    order: Vec<GateRef>,
}

impl Catalog {
    fn new(input_count: usize) -> Self {
        Self {
            input_count,
            map: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Returns the input count this catalog was built for.
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Returns the number of distinct truth tables discovered.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the catalog holds no functions, which only
    /// happens for a zero-input search.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if some gate realizing `table` was discovered.
    pub fn contains(&self, table: &TruthTable) -> bool {
        self.map.contains_key(table)
    }

    /// Returns the cheapest discovered gate realizing `table`.
    pub fn get(&self, table: &TruthTable) -> Option<&GateRef> {
        self.map.get(table)
    }

    /// Iterates over the discovered truth tables in no particular
    /// order.
    pub fn tables(&self) -> impl Iterator<Item = &TruthTable> {
        self.map.keys()
    }

    /// Iterates over the accepted gates in acceptance order.
    pub fn gates(&self) -> impl Iterator<Item = &GateRef> {
        self.order.iter()
    }

    /// Looks up `target` and renders the minimal discovered circuit as
    /// a named netlist.
    ///
    /// Fails without touching the catalog when `target` has the wrong
    /// row count for this input count, or when no realization was
    /// discovered (a zero-input catalog realizes nothing).
    pub fn netlist(&self, target: &TruthTable) -> Result<Netlist, String> {
        let rows = 1usize << self.input_count;
        if target.len() != rows {
            return Err(format!(
                "Table has {} rows, expected {} for {} inputs",
                target.len(),
                rows,
                self.input_count
            ));
        }
        let gate = self
            .get(target)
            .ok_or_else(|| format!("No realization found for table {target}"))?;
        Ok(Netlist::from_gate(gate, self.input_count))
    }
}

/// Enumerates every function reachable by NAND-combining the inputs
/// and previously accepted gates, cheapest realization first.
///
/// The frontier is seeded with each input and its self-NAND (negation
/// at unit cost). Each accepted gate is NANDed against every gate
/// accepted so far, itself included, so the search closes over all
/// pairs of discovered functions. Candidate volume grows very steeply
/// with the input count; past four inputs the search is impractical.
///
/// A zero-input search seeds nothing and returns an empty catalog.
pub fn synthesize(input_count: usize) -> Catalog {
    let mut catalog = Catalog::new(input_count);
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;

    let inputs: Vec<GateRef> = (0..input_count).map(GateRef::input).collect();
    for gate in &inputs {
        frontier.push(Candidate {
            gate: gate.clone(),
            seq,
        });
        seq += 1;
    }
    for gate in &inputs {
        frontier.push(Candidate {
            gate: GateRef::nand(gate, gate),
            seq,
        });
        seq += 1;
    }

    while let Some(Candidate { gate, .. }) = frontier.pop() {
        let table = TruthTable::of_gate(&gate, input_count);
        if catalog.contains(&table) {
            trace!("Prune: {gate} realizes already-known {table}");
            continue;
        }

        debug!("Accept: {table} <- {gate} (cost {})", gate.cost());
        catalog.map.insert(table, gate.clone());
        catalog.order.push(gate.clone());

        for accepted in &catalog.order {
            frontier.push(Candidate {
                gate: GateRef::nand(accepted, &gate),
                seq,
            });
            seq += 1;
        }
    }

    info!(
        "Search over {} inputs accepted {} functions",
        input_count,
        catalog.len()
    );
    catalog
}

/// Synthesizes from scratch and extracts `target` in one call: a pure
/// function from `(input_count, target)` to the rendered netlist.
///
/// Every call re-runs the full search; see [Catalog] for caching.
pub fn realize(input_count: usize, target: &TruthTable) -> Result<Netlist, String> {
    synthesize(input_count).netlist(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_input_catalog_is_complete() {
        let catalog = synthesize(1);
        assert_eq!(catalog.len(), 4);

        let identity: TruthTable = "01".parse().unwrap();
        assert!(catalog.get(&identity).unwrap().is_an_input());

        let negation: TruthTable = "10".parse().unwrap();
        assert_eq!(catalog.get(&negation).unwrap().cost(), 1);
    }

    #[test]
    fn degenerate_search_is_empty() {
        let catalog = synthesize(0);
        assert!(catalog.is_empty());
        let constant: TruthTable = "1".parse().unwrap();
        let err = catalog.netlist(&constant).unwrap_err();
        assert!(err.contains("No realization"));
    }

    #[test]
    fn rejects_mismatched_row_count() {
        let catalog = synthesize(2);
        let short: TruthTable = "01".parse().unwrap();
        let err = catalog.netlist(&short).unwrap_err();
        assert!(err.contains("expected 4"));
    }
}
