#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs, unreachable_pub)]
/*!

`nandsmith`

Exhaustive synthesis of minimal 2-input-NAND circuits for small boolean
functions. A frontier search enumerates NAND combinations of the inputs
in non-decreasing gate-cost order, keeps the first gate discovered for
each truth table, and renders any requested function as a named,
shared-subexpression-aware netlist.

## Simple Example

```
use nandsmith::search::synthesize;
use nandsmith::table::TruthTable;

// Build the catalog of every 2-input function once.
let catalog = synthesize(2);

// Extract the minimal discovered circuit for XOR.
let xor: TruthTable = "0110".parse().unwrap();
let netlist = catalog.netlist(&xor).unwrap();
print!("{netlist}");
```

*/

pub mod gate;
pub mod graph;
pub mod netlist;
pub mod search;
pub mod table;
pub mod util;
