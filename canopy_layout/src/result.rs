// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The output of a layout pass: positions and cached subtree widths.

use alloc::string::String;
use hashbrown::HashMap;
use kurbo::{Point, Rect};

use crate::params::LayoutParams;

/// Model-space positions for every node of one computed layout.
///
/// A position is (center-x, top-y); see the crate docs for the coordinate
/// convention. The per-node subtree widths computed by the post-order
/// pass are retained because both tests and diagnostic overlays want
/// them, and they are free to keep.
#[derive(Clone, Debug, Default)]
pub struct LayoutResult {
    pub(crate) positions: HashMap<String, Point>,
    pub(crate) subtree_widths: HashMap<String, f64>,
}

impl LayoutResult {
    /// An empty result (the valid layout of an empty graph).
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of a node, if it was part of the computed graph.
    pub fn position(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }

    /// Iterate all `(id, position)` pairs in unspecified order.
    pub fn positions(&self) -> impl Iterator<Item = (&str, Point)> {
        self.positions.iter().map(|(id, p)| (id.as_str(), *p))
    }

    /// Horizontal span occupied by a node and all of its descendants.
    pub fn subtree_width(&self, id: &str) -> Option<f64> {
        self.subtree_widths.get(id).copied()
    }

    /// The node's box under the given metrics:
    /// `[x − w/2, x + w/2] × [y, y + h]`.
    pub fn node_box(&self, id: &str, params: &LayoutParams) -> Option<Rect> {
        let p = self.position(id)?;
        let size = params.node_size;
        Some(Rect::new(
            p.x - size.width / 2.0,
            p.y,
            p.x + size.width / 2.0,
            p.y + size.height,
        ))
    }

    /// Number of positioned nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the result holds no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
