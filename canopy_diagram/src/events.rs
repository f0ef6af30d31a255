// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed controller outputs and pointer input classification.

use alloc::string::String;
use canopy_graph::NodeSnapshot;
use kurbo::Point;

/// Which pointer button an input event carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// The primary button (usually left). Produces click events.
    Primary,
    /// The secondary button (usually right). Produces context-menu events.
    Secondary,
    /// Any other button. Currently ignored by the controller.
    Auxiliary,
}

/// An output of the [`DiagramController`](crate::DiagramController).
///
/// Events accumulate on an internal FIFO in emission order and are
/// consumed with [`drain_events`](crate::DiagramController::drain_events).
#[derive(Clone, Debug, PartialEq)]
pub enum DiagramEvent {
    /// A deferred recompute completed; consumers should re-read positions
    /// and edges. Emitted exactly once per mutation batch.
    LayoutChanged,
    /// The primary button went down once over a node.
    NodeClicked(NodeSnapshot),
    /// The primary button went down with a click count of two or more
    /// over a node.
    NodeDoubleClicked(NodeSnapshot),
    /// The secondary button went down over a node.
    NodeContextMenu {
        /// The node under the pointer.
        id: String,
        /// The pointer position, in screen pixels.
        at: Point,
    },
    /// A node's payload changed; hosts keeping per-node render caches
    /// should drop this id's entry. The cache format is the host's
    /// business.
    InvalidateRenderCache {
        /// The updated node.
        id: String,
    },
}
