// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_layout --heading-base-level=0

//! Canopy Layout: deterministic tiered placement for hierarchical diagrams.
//!
//! Given a [`canopy_graph::NodeGraph`] and fixed node/gap metrics
//! ([`LayoutParams`]), this crate computes one model-space position per
//! node such that:
//!
//! - every node sits horizontally centered over the span of its subtree,
//! - siblings never overlap and are separated by at least the horizontal
//!   gap,
//! - each tree level sits exactly `node_height + v_gap` below its parent
//!   level,
//! - multiple roots are placed sequentially left-to-right in insertion
//!   order, each allocated after the previous root's subtree plus one
//!   horizontal gap (the "sequential forest" convention; a single root is
//!   never assumed).
//!
//! The algorithm is two passes over the forest, O(n) in node count: a
//! post-order pass computing per-node subtree widths, then a pre-order
//! pass assigning positions from allocated horizontal spans.
//!
//! ## Coordinates
//!
//! A stored position is the node's horizontal **center** and vertical
//! **top**: `x = allocated_left + subtree_width / 2`,
//! `y = depth · (node_height + v_gap)`. The box a renderer or hit tester
//! should use is `[x − w/2, x + w/2] × [y, y + h]`, available as
//! [`LayoutResult::node_box`].
//!
//! ## Caching
//!
//! [`LayoutEngine`] caches the last computed [`LayoutResult`] against the
//! graph's structure revision. [`LayoutEngine::ensure`] recomputes in full
//! only when the revision moved; [`LayoutEngine::result`] always returns
//! the last completed result without recomputing, which is what hit
//! testing wants while a recompute is still pending. Payload-only updates
//! never move the revision, so they never trigger a recompute.
//!
//! ## Example
//!
//! ```rust
//! use canopy_graph::{NodeData, NodeGraph};
//! use canopy_layout::{LayoutEngine, LayoutParams};
//!
//! let mut graph = NodeGraph::new();
//! graph.add_node("r", NodeData::new("Root"), None).unwrap();
//! graph.add_node("c1", NodeData::new("One"), Some("r")).unwrap();
//! graph.add_node("c2", NodeData::new("Two"), Some("r")).unwrap();
//!
//! let mut engine = LayoutEngine::new(LayoutParams::default());
//! let layout = engine.ensure(&graph);
//!
//! // The parent is centered over its two children.
//! let (r, c1, c2) = (
//!     layout.position("r").unwrap(),
//!     layout.position("c1").unwrap(),
//!     layout.position("c2").unwrap(),
//! );
//! assert_eq!(r.x, (c1.x + c2.x) / 2.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod params;
mod result;

pub use engine::{LayoutEngine, compute};
pub use params::{LayoutParams, MIN_EXTENT};
pub use result::LayoutResult;
