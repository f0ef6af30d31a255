// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine: two-pass placement plus revision-based caching.

use alloc::string::String;
use alloc::vec::Vec;
use canopy_graph::NodeGraph;
use kurbo::Point;

use crate::params::LayoutParams;
use crate::result::LayoutResult;

/// Computes and caches node placements for a [`NodeGraph`].
///
/// The engine remembers which graph revision its cached [`LayoutResult`]
/// was computed against. [`LayoutEngine::ensure`] recomputes the whole
/// layout iff the revision moved; there is no partial recomputation.
/// [`LayoutEngine::result`] hands out the last completed
/// result without ever recomputing, so callers that must not block (hit
/// testing during a pending batch) read momentarily stale positions
/// instead.
#[derive(Clone, Debug)]
pub struct LayoutEngine {
    params: LayoutParams,
    cache: LayoutResult,
    computed_revision: Option<u64>,
}

impl LayoutEngine {
    /// Create an engine with the given metrics.
    ///
    /// The metrics are sanitized on the way in; see
    /// [`LayoutParams::sanitized`].
    pub fn new(params: LayoutParams) -> Self {
        Self {
            params: params.sanitized(),
            cache: LayoutResult::new(),
            computed_revision: None,
        }
    }

    /// The (sanitized) metrics this engine lays out with.
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Whether the cached result is stale relative to `graph`.
    pub fn is_dirty(&self, graph: &NodeGraph) -> bool {
        self.computed_revision != Some(graph.revision())
    }

    /// Recompute if stale, then return the (now current) result.
    pub fn ensure(&mut self, graph: &NodeGraph) -> &LayoutResult {
        if self.is_dirty(graph) {
            self.cache = compute(graph, &self.params);
            self.computed_revision = Some(graph.revision());
        }
        &self.cache
    }

    /// The last completed result, possibly stale. Never recomputes.
    pub fn result(&self) -> &LayoutResult {
        &self.cache
    }
}

/// Lay out `graph` with `params` as a pure function.
///
/// `params` is used as given; callers that accept untrusted metrics should
/// sanitize first (the engine does). Two passes:
///
/// 1. Post-order: a leaf's subtree width is the node width; an interior
///    node's is `max(node_width, Σ child widths + (k−1)·h_gap)`.
/// 2. Pre-order: each node is handed an allocated left edge and placed at
///    its center (`allocated_left + subtree_width/2`); children are
///    allocated left-to-right from the parent's own left edge, advancing
///    by each prior sibling's subtree width plus one gap. Roots are
///    allocated the same way, sequentially from zero.
pub fn compute(graph: &NodeGraph, params: &LayoutParams) -> LayoutResult {
    let mut out = LayoutResult::new();
    if graph.is_empty() {
        return out;
    }

    let node_width = params.node_size.width;
    let level_height = params.node_size.height + params.v_gap;

    // Pass 1: subtree widths, post-order over every root's tree. The
    // explicit stack carries an "expanded" marker: a node is measured only
    // after all of its children have been.
    let mut stack: Vec<(&String, bool)> = graph.roots().iter().map(|r| (r, false)).collect();
    while let Some((id, expanded)) = stack.pop() {
        let children = graph.children_of(id);
        if !expanded && !children.is_empty() {
            stack.push((id, true));
            for child in children {
                stack.push((child, false));
            }
            continue;
        }
        let width = if children.is_empty() {
            node_width
        } else {
            let combined: f64 = children
                .iter()
                .map(|c| out.subtree_widths[c.as_str()])
                .sum::<f64>()
                + (children.len() - 1) as f64 * params.h_gap;
            combined.max(node_width)
        };
        out.subtree_widths.insert(id.clone(), width);
    }

    // Pass 2: placement, pre-order. Each entry carries the allocated left
    // edge and the depth. The `.rev()` keeps sibling visit order equal to
    // insertion order; positions do not depend on it, but determinism of
    // the walk makes debugging saner.
    let mut cursor = 0.0_f64;
    let mut stack: Vec<(&String, f64, usize)> = Vec::new();
    for root in graph.roots() {
        stack.push((root, cursor, 0));
        cursor += out.subtree_widths[root.as_str()] + params.h_gap;
    }
    stack.reverse();
    while let Some((id, allocated_left, depth)) = stack.pop() {
        let width = out.subtree_widths[id.as_str()];
        out.positions.insert(
            id.clone(),
            Point::new(
                allocated_left + width / 2.0,
                depth as f64 * level_height,
            ),
        );
        let mut child_left = allocated_left;
        let children = graph.children_of(id);
        let mut entries: Vec<(&String, f64, usize)> = Vec::with_capacity(children.len());
        for child in children {
            entries.push((child, child_left, depth + 1));
            child_left += out.subtree_widths[child.as_str()] + params.h_gap;
        }
        for entry in entries.into_iter().rev() {
            stack.push(entry);
        }
    }

    out
}
