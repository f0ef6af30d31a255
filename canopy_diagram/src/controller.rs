// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The diagram controller: mutation API, deferred recompute, input routing.

use alloc::collections::VecDeque;
use alloc::string::String;
use canopy_graph::{Edge, GraphError, NodeData, NodeGraph, NodePatch};
use canopy_hit::HitTester;
use canopy_layout::{LayoutEngine, LayoutParams, LayoutResult};
use canopy_view::{ViewTransform, WHEEL_ZOOM_STEP};
use kurbo::{Point, Rect, Vec2};

use crate::events::{DiagramEvent, PointerButton};

/// The controller's externally visible state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    /// The cached layout matches the graph; nothing is scheduled.
    Idle,
    /// A structural mutation happened; the next [`DiagramController::step`]
    /// will recompute.
    LayoutPending,
}

/// Owns and orchestrates the Canopy engine components.
///
/// All collaborators are constructor-owned fields; there are no globals
/// and no hidden registries, so a controller is fully testable in
/// isolation. See the crate docs for the scheduling and event model.
#[derive(Debug)]
pub struct DiagramController {
    graph: NodeGraph,
    layout: LayoutEngine,
    view: ViewTransform,
    hit: HitTester,
    state: ControllerState,
    events: VecDeque<DiagramEvent>,
}

impl DiagramController {
    /// Create a controller laying out with the given metrics.
    pub fn new(params: LayoutParams) -> Self {
        Self {
            graph: NodeGraph::new(),
            layout: LayoutEngine::new(params),
            view: ViewTransform::new(),
            hit: HitTester::new(params),
            state: ControllerState::Idle,
            events: VecDeque::new(),
        }
    }

    /// Current scheduling state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    // --- mutation API ---

    /// Add a node; schedules a deferred recompute on success.
    ///
    /// Failure semantics are [`NodeGraph::add_node`]'s: nothing is
    /// committed and nothing is scheduled.
    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        data: NodeData,
        parent_id: Option<&str>,
    ) -> Result<(), GraphError> {
        self.graph.add_node(id, data, parent_id)?;
        self.schedule_layout();
        Ok(())
    }

    /// Remove a node and its subtree; schedules a recompute if anything
    /// was removed. Absent ids are a success no-op.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let removed = self.graph.remove_node(id);
        if removed {
            self.schedule_layout();
        }
        removed
    }

    /// Merge a patch into a node's payload.
    ///
    /// Never structural: the state machine does not move and no recompute
    /// is scheduled. Emits [`DiagramEvent::InvalidateRenderCache`] so
    /// hosts can drop any pixel cache keyed by this node.
    pub fn update_node(&mut self, id: &str, patch: NodePatch) -> Result<(), GraphError> {
        self.graph.update_node(id, patch)?;
        self.events
            .push_back(DiagramEvent::InvalidateRenderCache { id: id.into() });
        Ok(())
    }

    /// Remove all nodes and edges; schedules a recompute.
    pub fn clear_nodes(&mut self) {
        self.graph.clear();
        self.schedule_layout();
    }

    // --- scheduling ---

    /// Run one scheduler tick. Hosts call this once per run-loop iteration.
    ///
    /// Performs the pending recompute, if any, from the *current* graph
    /// (an earlier snapshot is never replayed), emits
    /// [`DiagramEvent::LayoutChanged`] once, and returns to idle. Returns
    /// whether a recompute ran.
    pub fn step(&mut self) -> bool {
        if self.state != ControllerState::LayoutPending {
            return false;
        }
        self.layout.ensure(&self.graph);
        self.state = ControllerState::Idle;
        self.events.push_back(DiagramEvent::LayoutChanged);
        log::debug!(
            "layout recomputed: {} nodes, {} edges",
            self.graph.len(),
            self.graph.edge_count()
        );
        true
    }

    fn schedule_layout(&mut self) {
        // Re-scheduling while pending is a no-op: only the latest graph
        // matters when the recompute finally runs.
        if self.state == ControllerState::Idle {
            self.state = ControllerState::LayoutPending;
            log::debug!("layout recompute scheduled");
        }
    }

    // --- view API ---

    /// Set the zoom factor (clamped). Does not affect layout.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.view.set_zoom(zoom);
    }

    /// Zoom in by one wheel notch.
    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
    }

    /// Zoom out by one wheel notch.
    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
    }

    /// Add a pan delta in screen pixels. Unbounded.
    pub fn pan(&mut self, delta: Vec2) {
        self.view.pan(delta);
    }

    /// Read access to the view transform.
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Mutable access to the view transform, for hosts with their own
    /// gesture handling.
    pub fn view_mut(&mut self) -> &mut ViewTransform {
        &mut self.view
    }

    // --- input surface ---

    /// Route a pointer-down event.
    ///
    /// Hit testing runs against the last completed layout. A primary
    /// button press over a node emits [`DiagramEvent::NodeClicked`] (or
    /// [`DiagramEvent::NodeDoubleClicked`] when `click_count >= 2`); a
    /// secondary press emits [`DiagramEvent::NodeContextMenu`]. A miss
    /// emits nothing.
    pub fn on_pointer_down(&mut self, screen: Point, click_count: u32, button: PointerButton) {
        let hit_id: Option<String> = self
            .hit
            .hit(self.layout.result(), &self.view, screen)
            .map(Into::into);
        let Some(id) = hit_id else {
            log::trace!("pointer down at {screen:?}: no node");
            return;
        };
        log::trace!("pointer down at {screen:?}: node '{id}'");
        match button {
            PointerButton::Primary => {
                if let Some(snapshot) = self.graph.snapshot(&id) {
                    let event = if click_count >= 2 {
                        DiagramEvent::NodeDoubleClicked(snapshot)
                    } else {
                        DiagramEvent::NodeClicked(snapshot)
                    };
                    self.events.push_back(event);
                }
            }
            PointerButton::Secondary => {
                self.events
                    .push_back(DiagramEvent::NodeContextMenu { id, at: screen });
            }
            PointerButton::Auxiliary => {}
        }
    }

    /// Route a wheel event: anchored zoom at the pointer position.
    ///
    /// Positive `delta` zooms in by one notch, negative zooms out; zero is
    /// ignored. The model point under `screen` stays under it.
    pub fn on_wheel(&mut self, screen: Point, delta: f64) {
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        let factor = if delta > 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            1.0 / WHEEL_ZOOM_STEP
        };
        self.view.zoom_about(screen, factor);
    }

    // --- read surface ---

    /// Drain all pending events in emission order.
    pub fn drain_events(&mut self) -> impl Iterator<Item = DiagramEvent> + '_ {
        self.events.drain(..)
    }

    /// Model-space position of a node in the last completed layout.
    pub fn node_position(&self, id: &str) -> Option<Point> {
        self.layout.result().position(id)
    }

    /// Iterate `(id, position)` pairs of the last completed layout.
    pub fn positions(&self) -> impl Iterator<Item = (&str, Point)> {
        self.layout.result().positions()
    }

    /// Model-space box of a node in the last completed layout.
    pub fn node_box(&self, id: &str) -> Option<Rect> {
        self.layout.result().node_box(id, self.layout.params())
    }

    /// The last completed layout result (possibly stale while pending).
    pub fn layout(&self) -> &LayoutResult {
        self.layout.result()
    }

    /// The explicit edge list for connector rendering.
    pub fn edges(&self) -> &[Edge] {
        self.graph.edges()
    }

    /// Read access to the node graph.
    pub fn graph(&self) -> &NodeGraph {
        &self.graph
    }
}
