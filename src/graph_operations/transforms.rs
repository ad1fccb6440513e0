// SPDX-License-Identifier: MPL-2.0
//! Derived-graph transforms used when evaluating the M-adjustment
//! conditions: the proper backdoor graph and the two treatment-edge-pruned
//! graphs.

use crate::dag::Dag;

/// Returns a copy of `dag` with the first edge of every proper causal path
/// in `paths` removed.
///
/// Removal is idempotent: multiple paths sharing the same first edge cause
/// no error, since [`Dag::remove_edge`] on an absent edge is a no-op.
pub fn make_proper_backdoor(dag: &Dag, paths: &[Vec<usize>]) -> Dag {
    let mut copy = dag.clone();
    for path in paths {
        if path.len() >= 2 {
            copy.remove_edge(path[0], path[1]);
        }
    }
    copy
}

/// Returns a copy of `dag` with every edge into `x` removed.
pub fn make_incoming_pruned(dag: &Dag, x: usize) -> Dag {
    let mut copy = dag.clone();
    let parents: Vec<usize> = dag.predecessors(x).iter().copied().collect();
    for parent in parents {
        copy.remove_edge(parent, x);
    }
    copy
}

/// Returns a copy of `dag` with every edge out of `x` removed.
pub fn make_outgoing_pruned(dag: &Dag, x: usize) -> Dag {
    let mut copy = dag.clone();
    let children: Vec<usize> = dag.successors(x).iter().copied().collect();
    for child in children {
        copy.remove_edge(x, child);
    }
    copy
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph_operations::causal_paths::find_proper_causal_paths;

    fn chain() -> (Dag, usize, usize, usize) {
        let mut g = Dag::new();
        let a = g.add_node("A");
        let m = g.add_node("M");
        let y = g.add_node("Y");
        g.add_edge(a, m);
        g.add_edge(m, y);
        (g, a, m, y)
    }

    #[test]
    fn proper_backdoor_severs_first_edge_of_every_path() {
        let (g, a, m, y) = chain();
        let paths = find_proper_causal_paths(&g, a, y).unwrap();
        let pbd = make_proper_backdoor(&g, &paths);
        assert!(!pbd.has_edge(a, m));
        // downstream edges untouched
        assert!(pbd.has_edge(m, y));
    }

    #[test]
    fn proper_backdoor_removal_is_idempotent_across_shared_first_edges() {
        let mut g = Dag::new();
        let a = g.add_node("A");
        let m1 = g.add_node("M1");
        let m2 = g.add_node("M2");
        let y = g.add_node("Y");
        g.add_edge(a, m1);
        g.add_edge(m1, m2);
        g.add_edge(m1, y);
        g.add_edge(m2, y);
        // two proper causal paths both start with A -> M1
        let paths = vec![vec![a, m1, y], vec![a, m1, m2, y]];
        let pbd = make_proper_backdoor(&g, &paths);
        assert!(!pbd.has_edge(a, m1));
    }

    #[test]
    fn incoming_pruned_removes_only_edges_into_x() {
        let (g, a, m, y) = chain();
        let above = make_incoming_pruned(&g, m);
        assert!(!above.has_edge(a, m));
        assert!(above.has_edge(m, y));
    }

    #[test]
    fn outgoing_pruned_removes_only_edges_out_of_x() {
        let (g, a, m, y) = chain();
        let below = make_outgoing_pruned(&g, m);
        assert!(below.has_edge(a, m));
        assert!(!below.has_edge(m, y));
    }
}
