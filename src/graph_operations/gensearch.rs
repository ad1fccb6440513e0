// SPDX-License-Identifier: MPL-2.0
//! Implements the generalized graph search algorithm used to compute
//! ancestor/descendant closures.

use rustc_hash::FxHashSet;

use crate::{dag::Dag, dag::Edge, graph_operations::ruletables::RuleTable};

/// General reachability graph search algorithm: walks the graph starting
/// from `starting_vertices`, following both incoming and outgoing edges,
/// and at each step consults `ruletable` to decide whether to keep
/// expanding through a candidate neighbour and whether to add it to the
/// result set.
pub fn gensearch<'a>(
    dag: &Dag,
    ruletable: impl RuleTable,
    starting_vertices: impl Iterator<Item = &'a usize>,
    yield_starting_vertices: bool,
) -> FxHashSet<usize> {
    // Holds the edge traversed to get to some node and the node itself.
    let mut to_visit_stack = Vec::<(Edge, usize)>::new();

    let mut result = FxHashSet::default();

    for s in starting_vertices {
        to_visit_stack.push((Edge::Init, *s));
        if yield_starting_vertices {
            result.insert(*s);
        }
    }

    let mut visited_in = FxHashSet::default();
    let mut visited_out = FxHashSet::default();

    while let Some((current_edge, current_node)) = to_visit_stack.pop() {
        match current_edge {
            Edge::Incoming => {
                visited_in.insert(current_node);
            }
            Edge::Outgoing => {
                visited_out.insert(current_node);
            }
            Edge::Init => (),
        }

        for (next_edge, is_incoming) in [(Edge::Incoming, true), (Edge::Outgoing, false)] {
            let neighborhood: Vec<usize> = match next_edge {
                Edge::Incoming => dag.successors(current_node).iter().copied().collect(),
                Edge::Outgoing => dag.predecessors(current_node).iter().copied().collect(),
                Edge::Init => unreachable!(),
            };

            for next_node in neighborhood {
                let (continue_to_next, yield_next) =
                    ruletable.lookup(&current_edge, &current_node, &next_edge, &next_node);
                if continue_to_next
                    && (is_incoming && !visited_in.contains(&next_node)
                        || !is_incoming && !visited_out.contains(&next_node))
                {
                    to_visit_stack.push((next_edge, next_node));
                }
                if yield_next {
                    result.insert(next_node);
                }
            }
        }
    }

    result
}
