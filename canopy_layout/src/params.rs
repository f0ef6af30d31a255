// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout metrics: node size and gaps.

use kurbo::Size;

/// Smallest extent any metric is allowed to take after sanitization.
///
/// Degenerate configuration (zero, negative, or non-finite sizes/gaps) is
/// clamped to this value instead of being rejected, so layout always
/// terminates and always yields a drawable result.
pub const MIN_EXTENT: f64 = 1.0;

/// Fixed metrics for a layout pass.
///
/// All nodes share one size; gaps separate siblings horizontally and tree
/// levels vertically. Construct with struct syntax or start from
/// [`LayoutParams::default`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    /// Width and height of every node box.
    pub node_size: Size,
    /// Minimum horizontal space between sibling subtrees.
    pub h_gap: f64,
    /// Vertical space between tree levels.
    pub v_gap: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            node_size: Size::new(140.0, 90.0),
            h_gap: 20.0,
            v_gap: 40.0,
        }
    }
}

impl LayoutParams {
    /// Returns a copy with every metric clamped to at least [`MIN_EXTENT`].
    ///
    /// NaN metrics fail the comparison and clamp too, so the output is
    /// always finite and positive.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            node_size: Size::new(clamp_extent(self.node_size.width), clamp_extent(self.node_size.height)),
            h_gap: clamp_extent(self.h_gap),
            v_gap: clamp_extent(self.v_gap),
        }
    }
}

fn clamp_extent(v: f64) -> f64 {
    // `>=` is false for NaN, so non-finite input collapses to the minimum.
    if v >= MIN_EXTENT && v.is_finite() {
        v
    } else {
        MIN_EXTENT
    }
}
