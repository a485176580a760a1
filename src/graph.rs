/*!

  Analyses over emitted netlists.

*/

use crate::netlist::{Inst, Netlist};
#[cfg(feature = "graph")]
use petgraph::graph::DiGraph;
use std::collections::HashMap;

/// A common trait of analyses that can be performed on a netlist.
pub trait Analysis<'a>
where
    Self: Sized + 'a,
{
    /// Construct the analysis for the given netlist.
    fn build(netlist: &'a Netlist) -> Result<Self, String>;
}

/// A table that maps each named net to the instances reading it.
pub struct FanOutTable<'a> {
    // A reference to the underlying netlist
    _netlist: &'a Netlist,
    // Maps a net name to one entry per operand slot reading it, so an
    // instance taking the same net twice appears twice
    users: HashMap<&'a str, Vec<&'a Inst>>,
}

impl<'a> FanOutTable<'a> {
    /// Returns an iterator over the instances that read `net`, one
    /// entry per operand slot.
    pub fn get_net_users(&self, net: &str) -> impl Iterator<Item = &'a Inst> {
        self.users
            .get(net)
            .into_iter()
            .flat_map(|users| users.iter().copied())
    }

    /// Returns `true` if any instance reads `net`.
    pub fn net_has_uses(&self, net: &str) -> bool {
        self.users.get(net).is_some_and(|users| !users.is_empty())
    }
}

impl<'a> Analysis<'a> for FanOutTable<'a> {
    fn build(netlist: &'a Netlist) -> Result<Self, String> {
        let mut users: HashMap<&'a str, Vec<&'a Inst>> = HashMap::new();

        for inst in netlist.get_instances() {
            users.entry(inst.get_left()).or_default().push(inst);
            users.entry(inst.get_right()).or_default().push(inst);
        }

        Ok(FanOutTable {
            _netlist: netlist,
            users,
        })
    }
}

/// The netlist as a directed graph: one node per named port or net,
/// one edge per operand read, weighted by the operand position.
#[cfg(feature = "graph")]
pub struct CircuitGraph<'a> {
    _netlist: &'a Netlist,
    graph: DiGraph<String, usize>,
}

#[cfg(feature = "graph")]
impl CircuitGraph<'_> {
    /// Return a reference to the graph constructed by this analysis
    pub fn get_graph(&self) -> &DiGraph<String, usize> {
        &self.graph
    }
}

#[cfg(feature = "graph")]
impl<'a> Analysis<'a> for CircuitGraph<'a> {
    fn build(netlist: &'a Netlist) -> Result<Self, String> {
        let mut mapping = HashMap::new();
        let mut graph = DiGraph::new();

        for name in netlist.get_input_ports() {
            let id = graph.add_node(name.to_string());
            mapping.insert(name, id);
        }

        for inst in netlist.get_instances() {
            let id = graph.add_node(inst.get_out().to_string());
            mapping.insert(inst.get_out(), id);
        }

        for inst in netlist.get_instances() {
            let target = mapping[inst.get_out()];
            for (pos, operand) in [inst.get_left(), inst.get_right()].into_iter().enumerate() {
                let source = *mapping
                    .get(operand)
                    .ok_or_else(|| format!("Net {operand} has no driver"))?;
                graph.add_edge(source, target, pos);
            }
        }

        Ok(Self {
            _netlist: netlist,
            graph,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::synthesize;
    use crate::table::TruthTable;

    fn and_netlist() -> Netlist {
        let and: TruthTable = "0001".parse().unwrap();
        synthesize(2).netlist(&and).unwrap()
    }

    #[test]
    fn fanout_counts_operand_slots() {
        let netlist = and_netlist();
        let analysis = FanOutTable::build(&netlist).unwrap();

        // The inner NAND feeds both operand slots of the outer one.
        assert_eq!(analysis.get_net_users("C").count(), 2);
        assert_eq!(analysis.get_net_users("A").count(), 1);
        assert!(!analysis.net_has_uses("D"), "Output net has no users");
    }

    #[cfg(feature = "graph")]
    #[test]
    fn graph_mirrors_the_netlist() {
        let netlist = and_netlist();
        let analysis = CircuitGraph::build(&netlist).unwrap();
        let graph = analysis.get_graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
    }
}
