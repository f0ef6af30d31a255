// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_diagram --heading-base-level=0

//! Canopy Diagram: the orchestration layer of the Canopy engine.
//!
//! [`DiagramController`] owns the node graph, the layout engine, the view
//! transform, and the hit tester, and exposes the one externally visible
//! state machine: `Idle` and `LayoutPending`.
//!
//! ## Deferred recompute
//!
//! Structural mutations never recompute layout synchronously. They flip
//! the controller to [`ControllerState::LayoutPending`]; the host calls
//! [`DiagramController::step`] once per run-loop iteration (for example,
//! once per rendered frame), which performs at most one full recompute and
//! emits [`DiagramEvent::LayoutChanged`] exactly once per batch. Any burst
//! of mutations between two steps therefore coalesces into one recompute
//! and one event. There is no timer: scheduling is an explicit flag, and
//! supersession is the only cancellation (a later mutation simply makes
//! the pending recompute cover it too).
//!
//! ## Events
//!
//! Outputs are typed [`DiagramEvent`] values on an internal FIFO drained
//! with [`DiagramController::drain_events`], an explicit and testable
//! replacement for runtime-registered signal dispatch. Pointer input is
//! resolved against the last *completed* layout, so hits during a pending
//! batch are answered from momentarily stale positions rather than by
//! forcing a recompute.
//!
//! ## Threading
//!
//! Single-threaded by construction. Every call is synchronous and runs on
//! whatever thread owns the controller; hosts driving it from several
//! threads must serialize access through one owner. No locks are used or
//! needed.
//!
//! ## Example
//!
//! ```rust
//! use canopy_diagram::{DiagramController, DiagramEvent};
//! use canopy_graph::NodeData;
//! use canopy_layout::LayoutParams;
//!
//! let mut ctl = DiagramController::new(LayoutParams::default());
//! ctl.add_node("r", NodeData::new("Root"), None).unwrap();
//! ctl.add_node("a", NodeData::new("A"), Some("r")).unwrap();
//!
//! // Two mutations, one batch: the host's next tick recomputes once.
//! assert!(ctl.step());
//! let events: Vec<_> = ctl.drain_events().collect();
//! assert!(matches!(events[..], [DiagramEvent::LayoutChanged]));
//! assert!(ctl.node_position("a").is_some());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod events;

pub use controller::{ControllerState, DiagramController};
pub use events::{DiagramEvent, PointerButton};
