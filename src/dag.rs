// SPDX-License-Identifier: MPL-2.0
//! A mutable directed-acyclic-graph container over interned node names.
//!
//! Unlike the CSR-encoded, build-once adjacency representation used for
//! dense structure-learning workloads, this container is built incrementally
//! (`add_node`/`add_edge`) and supports `remove_edge` on a cloned copy, which
//! the proper-backdoor-graph and edge-pruning transforms both require.

use std::cell::Cell;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::Error;

/// The direction an edge was traversed in during a graph search, relative to
/// the node it leads to. `Init` marks a starting node that has not yet been
/// reached by any edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Starting point of a search; no edge has been traversed yet.
    Init,
    /// Arrived via an edge pointing into the current node.
    Incoming,
    /// Arrived via an edge pointing out of the current node.
    Outgoing,
}

/// A directed acyclic graph over nodes named by interned string identifiers.
///
/// Node identity is a dense `usize` index; `names`/`by_name` intern the
/// string form so graph-search code can stay index-only and only pay for
/// name lookups at the edges of the crate (resolving CLI-facing arguments,
/// rendering results).
#[derive(Debug, Clone)]
pub struct Dag {
    names: Vec<String>,
    by_name: FxHashMap<String, usize>,
    children: Vec<FxHashSet<usize>>,
    parents: Vec<FxHashSet<usize>>,
    /// Set once a cycle check has passed since the last structural edit.
    /// Cleared by `add_node`/`add_edge`; consulted lazily by callers that
    /// require acyclicity before traversing. A `Cell` so the check can run
    /// from `&self` call sites (`find_proper_causal_paths`, `d_separated`)
    /// without forcing every query path to take `&mut Dag`.
    known_acyclic: Cell<bool>,
}

impl Dag {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Dag {
            names: Vec::new(),
            by_name: FxHashMap::default(),
            children: Vec::new(),
            parents: Vec::new(),
            known_acyclic: Cell::new(false),
        }
    }

    /// Returns the index of `name`, interning it as a fresh node if it has
    /// not been seen before. Idempotent: looking up an existing name returns
    /// its existing index and does not create a duplicate node.
    pub fn add_node(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.by_name.get(name) {
            return idx;
        }
        let idx = self.names.len();
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), idx);
        self.children.push(FxHashSet::default());
        self.parents.push(FxHashSet::default());
        self.known_acyclic.set(false);
        idx
    }

    /// Looks up the index of `name`, if it has been added.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Returns the display name of a node index.
    ///
    /// # Panics
    /// Panics if `idx` is not a node of this graph.
    pub fn name_of(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over all node indices, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.names.len()
    }

    /// Adds a directed edge `u -> v`.
    ///
    /// # Panics
    /// Panics if `u` or `v` is not a node of this graph. This is a
    /// construction-time contract violation, surfaced as a panic rather than
    /// a recoverable error, since a reference to an undeclared vertex is a
    /// programming error.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        assert!(u < self.names.len(), "add_edge: {u} is not a node");
        assert!(v < self.names.len(), "add_edge: {v} is not a node");
        self.children[u].insert(v);
        self.parents[v].insert(u);
        self.known_acyclic.set(false);
    }

    /// Removes the directed edge `u -> v`, if present. A no-op, not an
    /// error, if the edge is absent — callers that remove the same edge
    /// twice (e.g. two proper causal paths sharing a first edge) rely on
    /// this.
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        self.children[u].remove(&v);
        self.parents[v].remove(&u);
        // removing edges cannot introduce a cycle, so acyclicity is preserved
    }

    /// True iff the edge `u -> v` is present.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.children[u].contains(&v)
    }

    /// The set of nodes `v` such that `u -> v` is an edge.
    pub fn successors(&self, u: usize) -> &FxHashSet<usize> {
        &self.children[u]
    }

    /// The set of nodes `u` such that `u -> v` is an edge.
    pub fn predecessors(&self, v: usize) -> &FxHashSet<usize> {
        &self.parents[v]
    }

    /// Verifies the graph is acyclic via Kahn's algorithm, caching the
    /// result so repeated queries against an unchanged graph are free.
    ///
    /// Takes `&self` (the cache is a `Cell`) so this can be called from the
    /// entry point of any query that requires acyclicity — not just from a
    /// caller holding a `&mut Dag` — matching the "first time it matters"
    /// lazy-check contract.
    pub fn check_acyclic(&self) -> Result<(), Error> {
        if self.known_acyclic.get() {
            return Ok(());
        }
        let mut indegree: Vec<usize> = self.parents.iter().map(|p| p.len()).collect();
        let mut queue: Vec<usize> = indegree
            .iter()
            .enumerate()
            .filter(|(_, &d)| d == 0)
            .map(|(i, _)| i)
            .collect();
        let mut visited = 0usize;
        while let Some(u) = queue.pop() {
            visited += 1;
            for &v in &self.children[u] {
                indegree[v] -= 1;
                if indegree[v] == 0 {
                    queue.push(v);
                }
            }
        }
        if visited != self.names.len() {
            return Err(Error::MalformedGraph(
                "graph contains a directed cycle".to_string(),
            ));
        }
        self.known_acyclic.set(true);
        Ok(())
    }
}

impl Default for Dag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_node_is_idempotent() {
        let mut g = Dag::new();
        let a1 = g.add_node("A");
        let a2 = g.add_node("A");
        assert_eq!(a1, a2);
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn edges_are_queryable_both_directions() {
        let mut g = Dag::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        g.add_edge(a, b);
        assert!(g.has_edge(a, b));
        assert!(!g.has_edge(b, a));
        assert!(g.successors(a).contains(&b));
        assert!(g.predecessors(b).contains(&a));
    }

    #[test]
    fn remove_edge_is_idempotent_noop_when_absent() {
        let mut g = Dag::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        g.add_edge(a, b);
        g.remove_edge(a, b);
        g.remove_edge(a, b);
        assert!(!g.has_edge(a, b));
    }

    #[test]
    fn clone_is_structurally_independent() {
        let mut g = Dag::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        g.add_edge(a, b);
        let mut clone = g.clone();
        clone.remove_edge(a, b);
        assert!(g.has_edge(a, b));
        assert!(!clone.has_edge(a, b));
    }

    #[test]
    fn check_acyclic_detects_cycle() {
        let mut g = Dag::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        let c = g.add_node("C");
        g.add_edge(a, b);
        g.add_edge(b, c);
        g.add_edge(c, a);
        assert!(g.check_acyclic().is_err());
    }

    #[test]
    fn check_acyclic_passes_on_dag() {
        let mut g = Dag::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        g.add_edge(a, b);
        assert!(g.check_acyclic().is_ok());
    }
}
