// SPDX-License-Identifier: MPL-2.0
//! The d-separation oracle: decides whether every path between two node
//! sets is blocked by a conditioning set, using the Bayes-ball reachability
//! algorithm.

use rustc_hash::FxHashSet;

use crate::dag::Dag;
use crate::error::Error;
use crate::graph_operations::gensearch::gensearch;
use crate::graph_operations::ruletables::Ancestors;

/// The direction a Bayes-ball traversal is moving in when it arrives at a
/// node: `Up` means the edge just crossed pointed from the node toward the
/// node we came from (we are walking against edge direction, as when
/// leaving a collider's child or climbing to a common cause); `Down` means
/// the edge just crossed pointed from the node we came from into this node
/// (we are walking with edge direction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    Up,
    Down,
}

/// Returns true iff every path between a node in `a` and a node in `b` is
/// blocked by `z`, on the graph `dag`.
///
/// `a`, `b`, and `z` must be pairwise disjoint; violating this is a usage
/// error.
///
/// Implements the reachability formulation of Bayes-ball: a worklist of
/// `(node, arrival direction)` pairs, expanded according to the standard
/// collider/non-collider passability rules, with a visited set over the
/// same pairs preventing re-expansion. A node is blocking a non-collider
/// trail iff it is in `z`; a collider passes a trail iff it or one of its
/// descendants is in `z`, which is why the ancestor closure of `z` is
/// computed once up front.
pub fn d_separated(
    dag: &Dag,
    a: &FxHashSet<usize>,
    b: &FxHashSet<usize>,
    z: &FxHashSet<usize>,
) -> Result<bool, Error> {
    dag.check_acyclic()?;

    if !a.is_disjoint(b) {
        return Err(Error::InvalidArguments(
            "a and b must be disjoint in a d-separation query".to_string(),
        ));
    }
    if !a.is_disjoint(z) || !b.is_disjoint(z) {
        return Err(Error::InvalidArguments(
            "z must be disjoint from a and b in a d-separation query".to_string(),
        ));
    }

    let ancestors_of_z = gensearch(dag, Ancestors {}, z.iter(), true);

    let mut worklist: Vec<(usize, Direction)> =
        a.iter().map(|&n| (n, Direction::Up)).collect();
    let mut visited: FxHashSet<(usize, Direction)> = FxHashSet::default();
    let mut reachable: FxHashSet<usize> = FxHashSet::default();

    while let Some((node, dir)) = worklist.pop() {
        if !visited.insert((node, dir)) {
            continue;
        }
        if !z.contains(&node) {
            reachable.insert(node);
        }

        match dir {
            // Arrived moving up (e.g. from a child, or this is a starting
            // node): a non-collider here passes the trail onward in both
            // directions.
            Direction::Up => {
                if !z.contains(&node) {
                    for &parent in dag.predecessors(node) {
                        worklist.push((parent, Direction::Up));
                    }
                    for &child in dag.successors(node) {
                        worklist.push((child, Direction::Down));
                    }
                }
            }
            // Arrived moving down (from a parent): passes onward to
            // children as a non-collider (blocked if conditioned on), and
            // passes onward to parents only if this node is a collider
            // that is itself, or has a descendant, in z.
            Direction::Down => {
                if !z.contains(&node) {
                    for &child in dag.successors(node) {
                        worklist.push((child, Direction::Down));
                    }
                }
                if ancestors_of_z.contains(&node) {
                    for &parent in dag.predecessors(node) {
                        worklist.push((parent, Direction::Up));
                    }
                }
            }
        }
    }

    Ok(b.is_disjoint(&reachable))
}
