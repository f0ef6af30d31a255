// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Canopy diagram engine.
//!
//! This crate exists to host the `examples/` targets; it exports nothing.
//! Run one with, for instance:
//!
//! ```sh
//! cargo run -p canopy_demos --example org_chart
//! ```
