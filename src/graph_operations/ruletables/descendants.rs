// SPDX-License-Identifier: MPL-2.0
//! Ruletable for getting all descendants of a set of nodes.

use crate::dag::Edge;

use super::ruletable::RuleTable;

/// ```text
/// | current_edge | current_node | next_edge | next_node | continue | yield W |
/// |--------------|--------------|-----------|-----------|----------|---------|
/// | spawn        | V            | ->        | W         | true     | true    |
/// | spawn        | V            | <-        | W         | false    | false   |
/// | ->           | V            | ->        | W         | true     | true    |
/// | ->           | V            | <-        | W         | false    | false   |
/// | <-           | V            | <-        | W         | -        | -       |
/// | <-           | V            | ->        | W         | -        | -       |
/// ```
/// Implements a ruletable to get descendants.
pub struct Descendants {}

impl RuleTable for Descendants {
    fn lookup(
        &self,
        _current_edge: &Edge,
        _current_node: &usize,
        next_edge: &Edge,
        _next_node: &usize,
    ) -> (bool, bool) {
        match next_edge {
            Edge::Incoming => (true, true),
            _ => (false, false),
        }
    }
}

#[cfg(test)]
mod test {
    use rustc_hash::FxHashSet;

    use crate::{dag::Dag, graph_operations::gensearch, graph_operations::ruletables::Descendants};

    #[test]
    fn descendants_of_chain() {
        // 0 -> 1 -> 2
        let mut g = Dag::new();
        for name in ["0", "1", "2"] {
            g.add_node(name);
        }
        g.add_edge(0, 1);
        g.add_edge(1, 2);

        let result = gensearch(&g, Descendants {}, [2, 1].iter(), true);
        assert_eq!(result, FxHashSet::from_iter([1, 2]));

        let result = gensearch(&g, Descendants {}, [0].iter(), true);
        assert_eq!(result, FxHashSet::from_iter([0, 1, 2]));
    }

    #[test]
    fn descendants_with_branching() {
        // 0 -> 1 -> 2 -> 3
        //            ^    ^
        //             \_ _/
        //                4
        let mut g = Dag::new();
        for name in ["0", "1", "2", "3", "4"] {
            g.add_node(name);
        }
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(4, 2);
        g.add_edge(4, 3);

        let result = gensearch(&g, Descendants {}, [4].iter(), true);
        assert_eq!(result, FxHashSet::from_iter([2, 3, 4]));

        let result = gensearch(&g, Descendants {}, [0, 1].iter(), true);
        assert_eq!(result, FxHashSet::from_iter([0, 1, 2, 3]));
    }
}
