// SPDX-License-Identifier: MPL-2.0
//! Ruletable for getting all ancestors of a set of nodes.

use crate::dag::Edge;

use super::ruletable::RuleTable;

/// ```text
/// | current_edge | current_node | next_edge | next_node | continue | yield W |
/// |--------------|--------------|-----------|-----------|----------|---------|
/// | spawn        | V            | ->        | W         | false    | false   |
/// | spawn        | V            | <-        | W         | true     | true    |
/// | ->           | V            | ->        | W         | -        | -       |
/// | ->           | V            | <-        | W         | -        | -       |
/// | <-           | V            | <-        | W         | true     | true    |
/// | <-           | V            | ->        | W         | false    | false   |
/// ```
/// Implements a ruletable to get ancestors.
pub struct Ancestors {}

impl RuleTable for Ancestors {
    fn lookup(
        &self,
        _current_edge: &Edge,
        _current_node: &usize,
        next_edge: &Edge,
        _next_node: &usize,
    ) -> (bool, bool) {
        match next_edge {
            Edge::Outgoing => (true, true),
            _ => (false, false),
        }
    }
}

#[cfg(test)]
mod test {
    use rustc_hash::FxHashSet;

    use crate::{dag::Dag, graph_operations::gensearch, graph_operations::ruletables::Ancestors};

    fn chain() -> Dag {
        // 0 -> 1 -> 2
        let mut g = Dag::new();
        let a = g.add_node("0");
        let b = g.add_node("1");
        let c = g.add_node("2");
        g.add_edge(a, b);
        g.add_edge(b, c);
        g
    }

    #[test]
    fn ancestors_of_chain() {
        let g = chain();
        let result = gensearch(&g, Ancestors {}, [1, 2].iter(), true);
        assert_eq!(result, FxHashSet::from_iter([0, 1, 2]));

        let result = gensearch(&g, Ancestors {}, [0].iter(), true);
        assert_eq!(result, FxHashSet::from_iter([0]));
    }

    #[test]
    fn ancestors_with_branching() {
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

        let result = gensearch(&g, Ancestors {}, [2].iter(), true);
        assert_eq!(result, FxHashSet::from_iter([0, 1, 2, 4]));

        let result = gensearch(&g, Ancestors {}, [4].iter(), true);
        assert_eq!(result, FxHashSet::from_iter([4]));

        let result = gensearch(&g, Ancestors {}, [3].iter(), true);
        assert_eq!(result, FxHashSet::from_iter([0, 1, 2, 3, 4]));
    }
}
