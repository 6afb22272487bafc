// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alignment and padding positioning.
//!
//! Both adjustments are additive offsets applied to the origin a parent
//! allots. Leading and top are the coordinate origin sides, so a node anchored
//! there is never shifted by alignment.

use kurbo::{Size, Vec2};

use crate::frame::{Alignment, AxisAnchor, Padding};

/// Offset that places a node of size `node` at `alignment` inside `bounds`.
#[must_use]
pub fn align_offset(bounds: Size, node: Size, alignment: Alignment) -> Vec2 {
    let along = |anchor: AxisAnchor, space: f64, extent: f64| match anchor {
        AxisAnchor::Start => 0.0,
        AxisAnchor::Center => (space - extent) / 2.0,
        AxisAnchor::End => space - extent,
    };
    Vec2::new(
        along(alignment.horizontal(), bounds.width, node.width),
        along(alignment.vertical(), bounds.height, node.height),
    )
}

/// Offset applied for a node's own padding, given its frame alignment.
///
/// Padding on a start edge pushes the node forward and padding on an end edge
/// pulls it back. On a centered axis the offset is the signed average of the
/// two opposing edges, so symmetric padding cancels out. No alignment behaves
/// like [`Alignment::TopLeading`].
#[must_use]
pub fn padding_offset(padding: &Padding, alignment: Option<Alignment>) -> Vec2 {
    let alignment = alignment.unwrap_or(Alignment::TopLeading);
    let along = |anchor: AxisAnchor, start: f64, end: f64| match anchor {
        AxisAnchor::Start => start,
        AxisAnchor::Center => (start - end) / 2.0,
        AxisAnchor::End => -end,
    };
    Vec2::new(
        along(alignment.horizontal(), padding.leading, padding.trailing),
        along(alignment.vertical(), padding.top, padding.bottom),
    )
}

/// Returns the middle of three values.
///
/// The result is the first input equal to neither the maximum nor the
/// minimum. When no input qualifies (two or three inputs tie), the first
/// input is returned. The tie-break is arbitrary but stable.
#[must_use]
pub fn median_of(first: f64, second: f64, third: f64) -> f64 {
    let max = first.max(second).max(third);
    let min = first.min(second).min(third);
    [first, second, third]
        .into_iter()
        .find(|&v| v != max && v != min)
        .unwrap_or(first)
}
