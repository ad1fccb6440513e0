// SPDX-License-Identifier: MPL-2.0
//! Proper causal path enumeration and the ancestor/descendant queries built
//! on top of the generalized search primitive.

use rustc_hash::FxHashSet;

use crate::dag::Dag;
use crate::error::Error;
use crate::graph_operations::gensearch::gensearch;
use crate::graph_operations::ruletables::{Ancestors, Descendants};

/// Finds every proper causal path from `x` to `y`: a directed path whose
/// only occurrence of `x` is at position 0.
///
/// Uses an explicit-stack depth-first traversal: each stack entry remembers
/// the node it was pushed from, and on pop the partial path is truncated
/// back to that parent before the popped node is appended. This correctly
/// backtracks without needing to materialize a path per stack frame.
///
/// Returns paths as node-index sequences (length >= 2, starting at `x` and
/// ending at `y`).
///
/// Performs the lazy acyclicity check (`Dag::check_acyclic`) before
/// traversing: a cycle reachable from `x` would otherwise make this DFS
/// loop forever rather than terminate with a wrong answer.
pub fn find_proper_causal_paths(dag: &Dag, x: usize, y: usize) -> Result<Vec<Vec<usize>>, Error> {
    dag.check_acyclic()?;

    let mut paths = Vec::new();

    let mut path_so_far: Vec<usize> = Vec::new();
    // stack entries are (node, the node that pushed it onto the stack)
    let mut stack: Vec<(usize, Option<usize>)> = vec![(x, None)];

    while let Some((current, pushed_by)) = stack.pop() {
        while path_so_far.last().copied() != pushed_by {
            if path_so_far.pop().is_none() {
                break;
            }
        }
        path_so_far.push(current);

        if current == y {
            paths.push(path_so_far.clone());
        }

        for &child in dag.successors(current) {
            stack.push((child, Some(current)));
        }
    }

    Ok(paths)
}

/// Returns `v` together with every node reachable from `v` by following
/// forward edges.
pub fn descendants(dag: &Dag, v: usize) -> FxHashSet<usize> {
    gensearch(dag, Descendants {}, [v].iter(), true)
}

/// Returns true iff `x` is reachable via backward edges from any member of
/// `targets` — equivalently, `x` is in the ancestor closure of `targets`.
pub fn is_ancestor<'a>(dag: &Dag, x: usize, targets: impl Iterator<Item = &'a usize>) -> bool {
    gensearch(dag, Ancestors {}, targets, true).contains(&x)
}
