// SPDX-License-Identifier: MPL-2.0
//! Error types returned by the public API.

use std::{error::Error as StdError, fmt::Display};

/// Errors that can occur when identifying M-adjustment sets or querying the
/// graph primitives directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The caller passed arguments that violate a documented precondition:
    /// treatment equal to outcome, a name absent from the graph, duplicate
    /// variable names, a missingness indicator not present as a node, or
    /// overlapping node sets passed to a d-separation query.
    InvalidArguments(String),
    /// The graph is not acyclic.
    MalformedGraph(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArguments(msg) => write!(f, "invalid arguments: {msg}"),
            Error::MalformedGraph(msg) => write!(f, "malformed graph: {msg}"),
        }
    }
}

impl StdError for Error {}
