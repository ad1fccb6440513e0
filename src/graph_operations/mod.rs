// SPDX-License-Identifier: MPL-2.0
//! Graph-theoretic primitives: path enumeration, derived-graph transforms,
//! and the d-separation oracle.

mod causal_paths;
mod dsep;
mod gensearch;
mod transforms;

pub(crate) mod ruletables;

pub use causal_paths::{descendants, find_proper_causal_paths, is_ancestor};
pub use dsep::d_separated;
pub use transforms::{make_incoming_pruned, make_outgoing_pruned, make_proper_backdoor};

pub(crate) use gensearch::gensearch;
