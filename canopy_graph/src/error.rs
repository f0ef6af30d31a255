// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy for graph mutations.

use alloc::string::String;
use core::fmt;

/// Errors raised by the mutating [`NodeGraph`](crate::NodeGraph) surface.
///
/// Every variant carries the offending node id. A failed mutation commits
/// nothing: the graph is left exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// A node with this id already exists.
    DuplicateNode(String),
    /// The requested parent id does not reference an existing node.
    ParentNotFound(String),
    /// The node data is missing a (non-empty) title.
    MissingTitle(String),
    /// The node id does not reference an existing node.
    NodeNotFound(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode(id) => write!(f, "node '{id}' already exists"),
            Self::ParentNotFound(id) => write!(f, "parent node '{id}' does not exist"),
            Self::MissingTitle(id) => write!(f, "node '{id}' must have a title"),
            Self::NodeNotFound(id) => write!(f, "node '{id}' does not exist"),
        }
    }
}

impl core::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_offending_id() {
        let err = GraphError::DuplicateNode("ceo".to_string());
        assert_eq!(err.to_string(), "node 'ceo' already exists");
        let err = GraphError::ParentNotFound("ghost".to_string());
        assert_eq!(err.to_string(), "parent node 'ghost' does not exist");
    }
}
