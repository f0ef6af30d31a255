// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds a small org chart through the controller and prints the result
//! of each interaction a host would normally forward from its event loop.

use canopy_diagram::{DiagramController, DiagramEvent, PointerButton};
use canopy_graph::{NodeData, NodePatch};
use canopy_layout::LayoutParams;
use kurbo::Vec2;

fn drain(label: &str, ctl: &mut DiagramController) {
    for event in ctl.drain_events() {
        match event {
            DiagramEvent::LayoutChanged => println!("[{label}] layout changed"),
            DiagramEvent::NodeClicked(snap) => {
                println!("[{label}] clicked '{}' ({})", snap.id, snap.title);
            }
            DiagramEvent::NodeDoubleClicked(snap) => {
                println!("[{label}] double-clicked '{}' ({})", snap.id, snap.title);
            }
            DiagramEvent::NodeContextMenu { id, at } => {
                println!("[{label}] context menu for '{id}' at {at:?}");
            }
            DiagramEvent::InvalidateRenderCache { id } => {
                println!("[{label}] render cache invalidated for '{id}'");
            }
        }
    }
}

fn print_layout(ctl: &DiagramController) {
    let mut rows: Vec<_> = ctl.layout().positions().collect();
    rows.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (id, pos) in rows {
        let b = ctl.node_box(id).unwrap();
        println!("  {id:<12} center-x {:>7.1}  top-y {:>6.1}  box {b:?}", pos.x, pos.y);
    }
    for edge in ctl.edges() {
        println!("  edge {} -> {}", edge.parent, edge.child);
    }
}

fn main() {
    let mut ctl = DiagramController::new(LayoutParams::default());

    // A burst of mutations coalesces into one recompute on the next step.
    ctl.add_node("ceo", NodeData::new("CEO").with_attr("dept", "exec"), None)
        .unwrap();
    ctl.add_node("cto", NodeData::new("CTO"), Some("ceo")).unwrap();
    ctl.add_node("cfo", NodeData::new("CFO"), Some("ceo")).unwrap();
    ctl.add_node("eng1", NodeData::new("Engineer"), Some("cto"))
        .unwrap();
    ctl.add_node("eng2", NodeData::new("Engineer"), Some("cto"))
        .unwrap();
    ctl.step();
    drain("build", &mut ctl);
    print_layout(&ctl);

    // Payload edits do not move anything; they only invalidate caches.
    ctl.update_node("eng1", NodePatch::new().with_title("Senior Engineer"))
        .unwrap();
    drain("rename", &mut ctl);

    // Pointer input resolves through the current view transform.
    let cto_screen = ctl.view().to_screen(ctl.node_box("cto").unwrap().center());
    ctl.on_pointer_down(cto_screen, 1, PointerButton::Primary);
    ctl.on_pointer_down(cto_screen, 2, PointerButton::Primary);
    ctl.on_pointer_down(cto_screen, 1, PointerButton::Secondary);
    drain("pointer", &mut ctl);

    // Anchored wheel zoom: the node under the cursor stays under it.
    ctl.on_wheel(cto_screen, 1.0);
    ctl.on_wheel(cto_screen, 1.0);
    ctl.pan(Vec2::new(30.0, -10.0));
    println!(
        "view: zoom {:.3}, pan {:?}",
        ctl.view().zoom(),
        ctl.view().pan_offset()
    );
    ctl.on_pointer_down(ctl.view().to_screen(ctl.node_box("cto").unwrap().center()), 1, PointerButton::Primary);
    drain("zoomed", &mut ctl);

    // Removing a node removes its whole subtree.
    ctl.remove_node("cto");
    ctl.step();
    drain("prune", &mut ctl);
    print_layout(&ctl);
}
