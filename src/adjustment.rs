// SPDX-License-Identifier: MPL-2.0
//! Enumerates candidate adjustment sets and evaluates the four M-adjustment
//! conditions against each one.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::dag::Dag;
use crate::error::Error;
use crate::graph_operations::{
    d_separated, descendants, find_proper_causal_paths, is_ancestor, make_incoming_pruned,
    make_outgoing_pruned, make_proper_backdoor,
};
use crate::variable::{resolve, Variable};

/// The result of [`list_m_adjustment`]: every valid M-adjustment set found,
/// in canonical (ascending bitmask) order, plus the smallest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustmentReport {
    /// Every subset of `variables` that satisfies all four M-adjustment
    /// conditions, each as a list of variable names.
    pub valid_sets: Vec<Vec<String>>,
    /// The valid set of smallest cardinality, or `None` if `valid_sets` is
    /// empty. Ties are broken by ascending bitmask order, matching
    /// `valid_sets`'s own order.
    pub best_set: Option<Vec<String>>,
}

/// Evaluates the four M-adjustment conditions for one candidate bitmask,
/// short-circuiting on the first one that fails. Returns the candidate's Z
/// as node indices when all four hold.
fn evaluate_candidate(
    dag: &Dag,
    x_idx: usize,
    y_idx: usize,
    resolved: &[(usize, Option<usize>)],
    d_pcp: &FxHashSet<usize>,
    g_pbd: &Dag,
    g_above: &Dag,
    g_below: &Dag,
    mask: u64,
) -> Result<Option<Vec<usize>>, Error> {
    let mut z: Vec<usize> = Vec::new();
    let mut r_w: FxHashSet<usize> = FxHashSet::default();
    for (j, &(name_idx, indicator_idx)) in resolved.iter().enumerate() {
        let selected = (mask >> j) & 1 == 1;
        // X and Y are never valid members of an adjustment set, so their
        // bits are skipped here rather than selected into Z and left for C1
        // to reject — this also keeps Z free of X/Y even on the rare input
        // where no proper causal path exists and D_pcp is empty, so C2/C3's
        // d-separation queries never see X or Y inside both a query set and
        // the conditioning set.
        if selected && name_idx != x_idx && name_idx != y_idx {
            z.push(name_idx);
            if let Some(indicator) = indicator_idx {
                r_w.insert(indicator);
            }
        }
        if name_idx == x_idx || name_idx == y_idx {
            if let Some(indicator) = indicator_idx {
                r_w.insert(indicator);
            }
        }
    }

    // C1: no element of Z lies on, or descends from, a proper causal path node.
    if z.iter().any(|v| d_pcp.contains(v)) {
        return Ok(None);
    }

    let z_set: FxHashSet<usize> = z.iter().copied().collect();
    let mut z_and_rw = z_set;
    z_and_rw.extend(r_w.iter().copied());

    // C2: Y is d-separated from X given Z union R_W, in the proper backdoor graph.
    let c2 = d_separated(
        g_pbd,
        &FxHashSet::from_iter([y_idx]),
        &FxHashSet::from_iter([x_idx]),
        &z_and_rw,
    )?;
    if !c2 {
        return Ok(None);
    }

    // C3: Y is d-separated from R_W given X, in the graph with X's incoming edges removed.
    let c3 = d_separated(
        g_above,
        &FxHashSet::from_iter([y_idx]),
        &r_w,
        &FxHashSet::from_iter([x_idx]),
    )?;
    if !c3 {
        return Ok(None);
    }

    // C4: if X is an ancestor of R_W, X must additionally be d-separated
    // from Y in the graph with X's outgoing edges removed.
    if is_ancestor(dag, x_idx, r_w.iter()) {
        let c4 = d_separated(
            g_below,
            &FxHashSet::from_iter([x_idx]),
            &FxHashSet::from_iter([y_idx]),
            &FxHashSet::default(),
        )?;
        if !c4 {
            return Ok(None);
        }
    }

    Ok(Some(z))
}

/// Enumerates every M-adjustment set for the causal effect of `x` on `y`
/// in `dag`, given the variable list `variables` (substantive variables
/// paired with their optional missingness indicators).
///
/// Candidate subsets are sharded across rayon's thread pool and re-sorted
/// into ascending bitmask order before being returned, so the result is the
/// same regardless of how many threads evaluate it.
pub fn list_m_adjustment(
    dag: &Dag,
    x: &str,
    y: &str,
    variables: &[Variable],
) -> Result<AdjustmentReport, Error> {
    let (x_idx, y_idx, resolved) = resolve(dag, x, y, variables)?;

    let paths = find_proper_causal_paths(dag, x_idx, y_idx)?;

    let mut d_pcp: FxHashSet<usize> = FxHashSet::default();
    for path in &paths {
        for &node in path {
            d_pcp.extend(descendants(dag, node));
        }
    }

    let g_pbd = make_proper_backdoor(dag, &paths);
    let g_above = make_incoming_pruned(dag, x_idx);
    let g_below = make_outgoing_pruned(dag, x_idx);

    let n = resolved.len();
    assert!(
        n < 63,
        "variable slice of length {n} cannot be enumerated as a 64-bit bitmask"
    );
    let subset_count: u64 = 1u64 << n;

    let verdicts: Vec<(u64, Result<Option<Vec<usize>>, Error>)> = (0..subset_count)
        .into_par_iter()
        .map(|mask| {
            let verdict = evaluate_candidate(
                dag, x_idx, y_idx, &resolved, &d_pcp, &g_pbd, &g_above, &g_below, mask,
            );
            (mask, verdict)
        })
        .collect();

    let mut valid_sets: Vec<Vec<String>> = Vec::new();
    let mut best_indices: Option<Vec<usize>> = None;
    for (_, verdict) in verdicts {
        if let Some(z) = verdict? {
            if best_indices
                .as_ref()
                .map_or(true, |best| z.len() < best.len())
            {
                best_indices = Some(z.clone());
            }
            valid_sets.push(z.into_iter().map(|idx| dag.name_of(idx).to_string()).collect());
        }
    }

    let best_set = best_indices
        .map(|z| z.into_iter().map(|idx| dag.name_of(idx).to_string()).collect());

    Ok(AdjustmentReport {
        valid_sets,
        best_set,
    })
}
