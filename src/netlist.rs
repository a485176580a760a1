/*!

  Naming and serialization of synthesized circuits.

  A [Netlist] is the flattened, named rendering of one gate DAG: every
  distinct reachable gate gets exactly one name, shared sub-gates are
  declared once no matter how many parents reference them, and
  `Display` emits the `DEF GATE` document consumed by the caller.

*/

use crate::gate::{GateKind, GateRef, net_name};
use std::collections::HashMap;

/// One NAND instance in the emitted netlist: two operand nets and the
/// net it drives.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct Inst {
    left: String,
    right: String,
    out: String,
}

impl Inst {
    /// Returns the name of the left operand net.
    pub fn get_left(&self) -> &str {
        &self.left
    }

    /// Returns the name of the right operand net.
    pub fn get_right(&self) -> &str {
        &self.right
    }

    /// Returns the name of the net this instance drives.
    pub fn get_out(&self) -> &str {
        &self.out
    }
}

/// A named, deduplicated rendering of one synthesized gate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct Netlist {
    /// Diagnostic infix form of the target gate
    expr: String,
    /// Referenced input port names, in input-index order
    inputs: Vec<String>,
    /// The name of the net driven by the target gate
    output: String,
    /// Internal net names other than the output, in naming order
    nets: Vec<String>,
    /// One instance per internal gate, in naming order
    insts: Vec<Inst>,
}

impl Netlist {
    /// Names every distinct gate reachable from `target` and flattens
    /// the DAG into declaration and instance lists.
    ///
    /// The traversal is an iterative depth-first post-order: operands
    /// are named before their parent, inputs take their fixed name
    /// [net_name]`(index)` on first visit, and internal gates take the
    /// next name past the input alphabet in completion order. A gate
    /// reachable through several parents is visited and named once;
    /// its identity, not its function, keys the lookup.
    ///
    /// # Panics
    ///
    /// Panics if `target` references an input index at or above
    /// `input_count`.
    pub fn from_gate(target: &GateRef, input_count: usize) -> Self {
        let mut names: HashMap<GateRef, String> = HashMap::new();
        let mut used_inputs = vec![false; input_count];
        let mut insts = Vec::new();
        let mut next_net = input_count;

        let mut stack = vec![(target.clone(), false)];
        while let Some((gate, expanded)) = stack.pop() {
            if names.contains_key(&gate) {
                continue;
            }
            match gate.kind() {
                GateKind::Input(i) => {
                    used_inputs[*i] = true;
                    names.insert(gate.clone(), net_name(*i));
                }
                GateKind::Nand(x, y) if expanded => {
                    let name = net_name(next_net);
                    next_net += 1;
                    insts.push(Inst {
                        left: names[x].clone(),
                        right: names[y].clone(),
                        out: name.clone(),
                    });
                    names.insert(gate.clone(), name);
                }
                GateKind::Nand(x, y) => {
                    let (x, y) = (x.clone(), y.clone());
                    stack.push((gate, true));
                    stack.push((y, false));
                    stack.push((x, false));
                }
            }
        }

        let output = names[target].clone();
        let nets = insts
            .iter()
            .map(|inst| inst.out.clone())
            .filter(|name| *name != output)
            .collect();
        let inputs = used_inputs
            .iter()
            .enumerate()
            .filter(|(_, used)| **used)
            .map(|(i, _)| net_name(i))
            .collect();

        Self {
            expr: target.to_string(),
            inputs,
            output,
            nets,
            insts,
        }
    }

    /// Returns the diagnostic infix expression of the target gate.
    pub fn get_expression(&self) -> &str {
        &self.expr
    }

    /// Iterates over the referenced input port names, in input-index
    /// order.
    pub fn get_input_ports(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(String::as_str)
    }

    /// Returns the name of the output port.
    pub fn get_output_port(&self) -> &str {
        &self.output
    }

    /// Iterates over the internal net names, in naming order. The
    /// output net is not among them.
    pub fn get_net_names(&self) -> impl Iterator<Item = &str> {
        self.nets.iter().map(String::as_str)
    }

    /// Returns the NAND instances in naming order. The instance at
    /// position `k` is emitted as `NAND<k>`.
    pub fn get_instances(&self) -> &[Inst] {
        &self.insts
    }

    #[cfg(feature = "serde")]
    /// Serializes the netlist to a writer as JSON.
    pub fn serialize(&self, writer: impl std::io::Write) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, self)
    }

    #[cfg(feature = "serde")]
    /// Deserializes a netlist from a JSON reader.
    pub fn deserialize(reader: impl std::io::Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

impl std::fmt::Display for Netlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.expr)?;
        writeln!(f)?;
        writeln!(f, "DEF GATE")?;
        for name in &self.inputs {
            writeln!(f, "  PORT IN {name}")?;
        }
        writeln!(f, "  PORT OUT {}", self.output)?;
        for name in &self.nets {
            writeln!(f, "  NET {name}")?;
        }
        for (k, inst) in self.insts.iter().enumerate() {
            writeln!(
                f,
                "  INST NAND{k} NAND {} {} {}",
                inst.left, inst.right, inst.out
            )?;
        }
        writeln!(f, "ENDDEF")
    }
}

#[test]
fn test_shared_subgate_named_once() {
    let a = GateRef::input(0);
    let b = GateRef::input(1);
    let nand = GateRef::nand(&a, &b);
    let and = GateRef::nand(&nand, &nand);

    let netlist = Netlist::from_gate(&and, 2);
    assert_eq!(netlist.get_output_port(), "D");
    assert_eq!(netlist.get_net_names().collect::<Vec<_>>(), vec!["C"]);
    assert_eq!(netlist.get_instances().len(), 2);
    assert_eq!(netlist.get_instances()[1].get_left(), "C");
    assert_eq!(netlist.get_instances()[1].get_right(), "C");
}
