// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Hit: resolve screen points to diagram nodes.
//!
//! The [`HitTester`] maps a screen-space point into model space through a
//! [`ViewTransform`] and scans a completed [`LayoutResult`] for the node
//! whose box contains it. The layout guarantees boxes never overlap, so
//! at most one node can match and the scan stops at the first hit.
//!
//! Hit testing is a pure read: it never recomputes layout. Callers that
//! batch structural mutations should expect momentarily stale answers
//! until their next recompute step.
//!
//! Containment is closed on all edges: a point exactly on a node's border
//! hits that node, matching [`kurbo::Rect::contains`]' lower-edge
//! semantics extended to the far edges.
//!
//! ```rust
//! use canopy_graph::{NodeData, NodeGraph};
//! use canopy_hit::HitTester;
//! use canopy_layout::{compute, LayoutParams};
//! use canopy_view::ViewTransform;
//!
//! let mut graph = NodeGraph::new();
//! graph.add_node("r", NodeData::new("Root"), None).unwrap();
//! let params = LayoutParams::default();
//! let layout = compute(&graph, &params);
//! let view = ViewTransform::new();
//!
//! let tester = HitTester::new(params);
//! let center = layout.position("r").unwrap();
//! assert_eq!(tester.hit(&layout, &view, view.to_screen(center)), Some("r"));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use canopy_layout::{LayoutParams, LayoutResult};
use canopy_view::ViewTransform;
use kurbo::{Point, Rect};

/// Resolves screen points to node ids over a completed layout.
#[derive(Clone, Copy, Debug)]
pub struct HitTester {
    params: LayoutParams,
}

impl HitTester {
    /// Create a hit tester for layouts produced with `params`.
    ///
    /// The metrics are sanitized the same way the layout engine sanitizes
    /// them, so the boxes tested here are the boxes that were laid out.
    pub fn new(params: LayoutParams) -> Self {
        Self {
            params: params.sanitized(),
        }
    }

    /// The node whose box contains `screen`, if any.
    ///
    /// `layout` should be the most recently *completed* result; this
    /// method never triggers a recompute.
    pub fn hit<'a>(
        &self,
        layout: &'a LayoutResult,
        view: &ViewTransform,
        screen: Point,
    ) -> Option<&'a str> {
        let model = view.to_model(screen);
        layout
            .positions()
            .find(|(id, _)| {
                layout
                    .node_box(id, &self.params)
                    .is_some_and(|b| contains_closed(b, model))
            })
            .map(|(id, _)| id)
    }
}

/// Closed-box containment: all four edges are inclusive.
fn contains_closed(r: Rect, p: Point) -> bool {
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_graph::{NodeData, NodeGraph};
    use canopy_layout::compute;
    use kurbo::Vec2;

    fn three_level_graph() -> NodeGraph {
        let mut g = NodeGraph::new();
        g.add_node("r", NodeData::new("Root"), None).unwrap();
        g.add_node("a", NodeData::new("A"), Some("r")).unwrap();
        g.add_node("b", NodeData::new("B"), Some("r")).unwrap();
        g.add_node("a1", NodeData::new("A1"), Some("a")).unwrap();
        g
    }

    fn center_of(layout: &LayoutResult, params: &LayoutParams, id: &str) -> Point {
        layout.node_box(id, params).unwrap().center()
    }

    #[test]
    fn every_node_center_resolves_to_itself() {
        let g = three_level_graph();
        let params = LayoutParams::default();
        let layout = compute(&g, &params);
        let tester = HitTester::new(params);

        // Several zoom/pan combinations, including the extremes.
        let views = [
            (1.0, Vec2::ZERO),
            (0.1, Vec2::new(300.0, -80.0)),
            (3.0, Vec2::new(-512.0, 4096.0)),
            (1.7, Vec2::new(33.0, 91.0)),
        ];
        for (zoom, pan) in views {
            let mut view = ViewTransform::new();
            view.set_zoom(zoom);
            view.set_pan(pan);
            for (id, _) in layout.positions() {
                let screen = view.to_screen(center_of(&layout, &params, id));
                assert_eq!(
                    tester.hit(&layout, &view, screen),
                    Some(id),
                    "center miss at zoom {zoom}"
                );
            }
        }
    }

    #[test]
    fn empty_space_misses() {
        let g = three_level_graph();
        let params = LayoutParams::default();
        let layout = compute(&g, &params);
        let tester = HitTester::new(params);
        let view = ViewTransform::new();

        // Far outside the diagram.
        assert_eq!(
            tester.hit(&layout, &view, Point::new(-1000.0, -1000.0)),
            None
        );
        // Inside the vertical gap between two levels.
        let below_root = layout.node_box("r", &params).unwrap().y1 + 1.0;
        let root_x = layout.position("r").unwrap().x;
        let between = Point::new(root_x, below_root);
        // The root has two children, so its own column between levels is
        // clear of boxes (children are offset left and right).
        if layout
            .positions()
            .all(|(id, _)| !contains_closed(layout.node_box(id, &params).unwrap(), between))
        {
            assert_eq!(tester.hit(&layout, &view, view.to_screen(between)), None);
        }
    }

    #[test]
    fn box_edges_are_inclusive() {
        let g = three_level_graph();
        let params = LayoutParams::default();
        let layout = compute(&g, &params);
        let tester = HitTester::new(params);
        let view = ViewTransform::new();

        let b = layout.node_box("a1", &params).unwrap();
        // `a1` is the only node on its level, so its corners cannot be
        // claimed by a sibling.
        for corner in [
            Point::new(b.x0, b.y0),
            Point::new(b.x1, b.y0),
            Point::new(b.x0, b.y1),
            Point::new(b.x1, b.y1),
        ] {
            assert_eq!(tester.hit(&layout, &view, view.to_screen(corner)), Some("a1"));
        }
    }

    #[test]
    fn empty_layout_never_hits() {
        let layout = LayoutResult::new();
        let tester = HitTester::new(LayoutParams::default());
        let view = ViewTransform::new();
        assert_eq!(tester.hit(&layout, &view, Point::ZERO), None);
    }

    #[test]
    fn hit_reads_the_layout_it_is_given() {
        // Stale-result semantics: hitting against an old layout resolves
        // against the old positions.
        let mut g = NodeGraph::new();
        g.add_node("r", NodeData::new("Root"), None).unwrap();
        let params = LayoutParams::default();
        let old = compute(&g, &params);
        g.remove_node("r");

        let tester = HitTester::new(params);
        let view = ViewTransform::new();
        let screen = view.to_screen(center_of(&old, &params, "r"));
        assert_eq!(tester.hit(&old, &view, screen), Some("r"));
    }
}
