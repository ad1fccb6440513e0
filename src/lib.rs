// SPDX-License-Identifier: MPL-2.0
#![warn(missing_docs)]
//! madjid - M-adjustment set identification for causal graphs augmented
//! with missingness mechanisms.
//!
//! Given a directed acyclic graph whose nodes are partitioned into
//! substantive variables and their missingness indicators, this crate
//! enumerates every subset of variables that satisfies the four-condition
//! M-adjustment criterion of Saadati & Tian for identifying the causal
//! effect of a treatment on an outcome under missing data.

mod adjustment;
mod dag;
mod error;
mod variable;

pub mod graph_operations;

pub use adjustment::{list_m_adjustment, AdjustmentReport};
pub use dag::Dag;
pub use error::Error;
pub use variable::Variable;

pub use graph_operations::{
    d_separated, descendants, find_proper_causal_paths, is_ancestor, make_incoming_pruned,
    make_outgoing_pruned, make_proper_backdoor,
};

#[cfg(test)]
mod test {
    use super::*;

    /// End-to-end smoke test exercising the public surface the way a
    /// caller would: build a graph by name, list adjustment sets, and read
    /// back names rather than indices.
    #[test]
    fn public_api_round_trip() {
        let mut dag = Dag::new();
        for n in ["X", "Y", "Z1"] {
            dag.add_node(n);
        }
        let x = dag.index_of("X").unwrap();
        let y = dag.index_of("Y").unwrap();
        let z1 = dag.index_of("Z1").unwrap();
        dag.add_edge(z1, x);
        dag.add_edge(z1, y);
        dag.add_edge(x, y);

        let variables = vec![
            Variable::observed("X"),
            Variable::observed("Y"),
            Variable::observed("Z1"),
        ];

        let report = list_m_adjustment(&dag, "X", "Y", &variables).unwrap();
        assert_eq!(report.best_set, Some(vec!["Z1".to_string()]));
    }
}
