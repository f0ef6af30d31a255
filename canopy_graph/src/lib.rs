// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_graph --heading-base-level=0

//! Canopy Graph: node and edge storage for hierarchical diagrams.
//!
//! Canopy Graph is the data layer of the Canopy diagram engine. It owns the
//! node table, the explicit parent→child edge list, and the structural
//! mutation rules an org-chart style diagram needs.
//!
//! - Nodes are keyed by caller-supplied string ids and carry a required
//!   title plus an open attribute map ([`NodeData`]).
//! - Edges are stored as an explicit [`Edge`] list so renderers can
//!   enumerate connector lines without re-deriving them from children.
//! - Structural mutations bump a monotonic [`NodeGraph::revision`] counter;
//!   downstream caches compare revisions instead of sharing a dirty flag.
//!
//! ## Mutation rules
//!
//! - [`NodeGraph::add_node`] validates before it mutates: duplicate ids,
//!   missing parents, and empty titles are rejected with the graph left
//!   untouched.
//! - [`NodeGraph::remove_node`] cascades over the whole subtree and is a
//!   success no-op for absent ids, so cleanup code never needs an
//!   existence check.
//! - [`NodeGraph::update_node`] merges a [`NodePatch`] into an existing
//!   node. It never changes structure and never bumps the revision.
//! - A parent must exist before its children can be added. Cycles are
//!   therefore unrepresentable and roots always form a forest.
//!
//! ## Example
//!
//! ```rust
//! use canopy_graph::{NodeData, NodeGraph};
//!
//! let mut graph = NodeGraph::new();
//! graph.add_node("ceo", NodeData::new("CEO"), None).unwrap();
//! graph.add_node("eng", NodeData::new("Engineering"), Some("ceo")).unwrap();
//!
//! assert_eq!(graph.len(), 2);
//! assert_eq!(graph.children_of("ceo"), ["eng"]);
//! assert_eq!(graph.edge_count(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod graph;
mod types;

pub use error::GraphError;
pub use graph::NodeGraph;
pub use types::{AttrValue, Edge, NodeData, NodePatch, NodeSnapshot};
