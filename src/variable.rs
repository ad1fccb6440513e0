// SPDX-License-Identifier: MPL-2.0
//! The caller-facing variable list: substantive variables paired with an
//! optional missingness indicator.

use crate::dag::Dag;
use crate::error::Error;

/// One entry of the variable slice passed to [`crate::list_m_adjustment`].
///
/// `name` is a substantive variable. `missingness_indicator`, when present,
/// names the binary node that equals 1 when `name` is observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// Name of the substantive variable.
    pub name: String,
    /// Name of this variable's missingness indicator node, if it is
    /// partially observed.
    pub missingness_indicator: Option<String>,
}

impl Variable {
    /// Builds a fully observed variable (no missingness indicator).
    pub fn observed(name: impl Into<String>) -> Self {
        Variable {
            name: name.into(),
            missingness_indicator: None,
        }
    }

    /// Builds a partially observed variable with the given indicator name.
    pub fn partially_observed(name: impl Into<String>, indicator: impl Into<String>) -> Self {
        Variable {
            name: name.into(),
            missingness_indicator: Some(indicator.into()),
        }
    }
}

/// Validates a variable slice against a graph and a (treatment, outcome)
/// pair, returning the resolved node indices needed by the enumerator.
///
/// Checks, in order: `x != y`; `x` and `y` are nodes of `dag`; variable
/// names are pairwise distinct; every declared missingness indicator is
/// itself a node of `dag`.
pub(crate) fn resolve(
    dag: &Dag,
    x: &str,
    y: &str,
    variables: &[Variable],
) -> Result<(usize, usize, Vec<(usize, Option<usize>)>), Error> {
    if x == y {
        return Err(Error::InvalidArguments(format!(
            "treatment and outcome must differ, both are {x:?}"
        )));
    }
    let x_idx = dag
        .index_of(x)
        .ok_or_else(|| Error::InvalidArguments(format!("treatment {x:?} is not a node of the graph")))?;
    let y_idx = dag
        .index_of(y)
        .ok_or_else(|| Error::InvalidArguments(format!("outcome {y:?} is not a node of the graph")))?;

    for v in variables {
        if v.missingness_indicator.as_deref() == Some(x) {
            return Err(Error::InvalidArguments(format!(
                "treatment {x:?} names a missingness indicator of {:?}",
                v.name
            )));
        }
        if v.missingness_indicator.as_deref() == Some(y) {
            return Err(Error::InvalidArguments(format!(
                "outcome {y:?} names a missingness indicator of {:?}",
                v.name
            )));
        }
    }

    let mut seen = rustc_hash::FxHashSet::default();
    let mut resolved = Vec::with_capacity(variables.len());
    for v in variables {
        if !seen.insert(v.name.as_str()) {
            return Err(Error::InvalidArguments(format!(
                "duplicate variable name {:?}",
                v.name
            )));
        }
        let name_idx = dag.index_of(&v.name).ok_or_else(|| {
            Error::InvalidArguments(format!("variable {:?} is not a node of the graph", v.name))
        })?;
        let indicator_idx = match &v.missingness_indicator {
            Some(indicator) => Some(dag.index_of(indicator).ok_or_else(|| {
                Error::InvalidArguments(format!(
                    "missingness indicator {indicator:?} of {:?} is not a node of the graph",
                    v.name
                ))
            })?),
            None => None,
        };
        resolved.push((name_idx, indicator_idx));
    }
    Ok((x_idx, y_idx, resolved))
}
