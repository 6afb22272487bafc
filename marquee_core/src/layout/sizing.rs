// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-axis sizing rule and the per-variant sizing functions.
//!
//! Sizing never looks at a node's children. It turns an inbound
//! [`Constraints`] pair plus the node's declared [`Frame`] and [`Padding`]
//! into a [`Measured`] record; the pass in [`super`] positions the node and
//! recurses.

use kurbo::Size;

use crate::config::LayoutConfig;
use crate::dimension::{Constraints, Dimension};
use crate::frame::{AxisIntent, Frame, MaxDimension, Padding};
use crate::node::NodeKind;

/// Resolves one axis from the inbound constraint and the declared intent.
///
/// Precedence is fixed: a declared minimum wins over everything, then a
/// finite maximum clamps, then an infinite maximum passes the constraint
/// through, then an explicit extent applies, and finally the constraint
/// itself is used. On an unbounded axis a maximum of either kind leaves the
/// axis unresolved.
#[must_use]
pub fn resolve_axis(constraint: Dimension, intent: AxisIntent) -> Dimension {
    match constraint {
        Dimension::Unbounded => {
            if let Some(min) = intent.min {
                Dimension::Value(min)
            } else if intent.max.is_some() {
                Dimension::Unbounded
            } else if let Some(explicit) = intent.explicit {
                Dimension::Value(explicit)
            } else {
                Dimension::Unbounded
            }
        }
        Dimension::Value(v) => {
            if let Some(min) = intent.min {
                Dimension::Value(v.max(min))
            } else if let Some(max) = intent.max {
                match max {
                    MaxDimension::Finite(m) => Dimension::Value(m.min(v)),
                    MaxDimension::Infinite => Dimension::Value(v),
                }
            } else if let Some(explicit) = intent.explicit {
                Dimension::Value(explicit)
            } else {
                Dimension::Value(v)
            }
        }
    }
}

/// Picks the largest size with the given width/height `ratio` that fits
/// inside `candidate`.
///
/// When `candidate.width / ratio <= candidate.height` width is the limiting
/// axis; otherwise height is.
#[must_use]
pub fn fit_aspect(candidate: Size, ratio: f64) -> Size {
    if candidate.width / ratio <= candidate.height {
        Size::new(candidate.width, candidate.width / ratio)
    } else {
        Size::new(candidate.height * ratio, candidate.height)
    }
}

/// Builds the candidate box an aspect-ratio node is fitted into.
///
/// Unresolved axes take `fallback`. When both axes are unresolved the node is
/// measured against `root`: the root's limiting axis under `ratio` replaces
/// the matching candidate.
#[must_use]
pub fn aspect_candidate(
    width: Dimension,
    height: Dimension,
    ratio: f64,
    root: Size,
    fallback: f64,
) -> Size {
    let mut candidate = Size::new(width.value_or(fallback), height.value_or(fallback));
    if width.is_unbounded() && height.is_unbounded() {
        if root.width / ratio <= root.height {
            candidate.width = root.width;
        } else {
            candidate.height = root.height;
        }
    }
    candidate
}

/// A node's resolved size before it is positioned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Measured {
    /// Axes as resolved by the frame rule, before the zero default.
    pub(crate) resolved: Constraints,
    /// Final size.
    pub(crate) size: Size,
    /// Size minus padding, clamped at zero.
    pub(crate) content: Size,
    /// Padding in device pixels.
    pub(crate) padding: Padding,
}

impl Measured {
    /// Constraints handed to children: the content extent on resolved axes,
    /// `Unbounded` on axes the frame rule left open.
    pub(crate) fn child_constraints(&self) -> Constraints {
        self.resolved
            .shrink(self.padding.horizontal(), self.padding.vertical())
    }
}

/// Everything a sizing function reads besides the node itself.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SizingInput<'a> {
    pub(crate) constraints: Constraints,
    pub(crate) frame: Option<Frame>,
    pub(crate) padding: Option<Padding>,
    pub(crate) config: &'a LayoutConfig,
    /// Substitute bounds for aspect-ratio nodes with two unbounded axes.
    pub(crate) root: Size,
}

/// Sizes a node by dispatching on its variant.
pub(crate) fn size_node(kind: &NodeKind, input: &SizingInput<'_>) -> Measured {
    match *kind {
        NodeKind::Text { .. } | NodeKind::Image { .. } => {
            size_natural(kind.natural_size(), input)
        }
        NodeKind::Container { .. } => size_container(input),
        NodeKind::Carousel { .. } => size_carousel(input),
        NodeKind::Web | NodeKind::Rectangle => size_framed(input, None),
        NodeKind::Audio { .. } | NodeKind::Video { .. } => size_media(input),
    }
}

fn size_container(input: &SizingInput<'_>) -> Measured {
    size_framed(input, None)
}

fn size_carousel(input: &SizingInput<'_>) -> Measured {
    size_framed(input, None)
}

fn size_media(input: &SizingInput<'_>) -> Measured {
    size_framed(input, None)
}

/// Text and images: the bound natural size stands in for unresolved axes.
fn size_natural(natural: Option<Size>, input: &SizingInput<'_>) -> Measured {
    size_framed(input, natural.map(|s| s * input.config.density))
}

/// The shared frame rule.
///
/// `natural` replaces the zero default on axes the frame rule leaves
/// unresolved.
fn size_framed(input: &SizingInput<'_>, natural: Option<Size>) -> Measured {
    let density = input.config.density;
    let frame = input.frame.map(|f| f.scaled(density)).unwrap_or_default();
    let padding = input
        .padding
        .map(|p| p.scaled(density))
        .unwrap_or(Padding::ZERO);

    let width = resolve_axis(input.constraints.width, frame.horizontal());
    let height = resolve_axis(input.constraints.height, frame.vertical());

    let ratio = frame.aspect_ratio.filter(|r| {
        let valid = r.is_finite() && *r > 0.0;
        if !valid {
            log::warn!("ignoring invalid aspect ratio {r}");
        }
        valid
    });

    let (resolved, size) = if let Some(ratio) = ratio {
        let candidate = aspect_candidate(
            width,
            height,
            ratio,
            input.root,
            input.config.unbounded_candidate,
        );
        let size = fit_aspect(candidate, ratio);
        (Constraints::fixed(size), size)
    } else {
        let fallback = natural.unwrap_or(Size::ZERO);
        let size = Size::new(
            width.value_or(fallback.width),
            height.value_or(fallback.height),
        );
        (Constraints::new(width, height), size)
    };

    Measured {
        resolved,
        size,
        content: content_size(size, &padding),
        padding,
    }
}

/// Size minus padding, clamped at zero.
fn content_size(size: Size, padding: &Padding) -> Size {
    let width = size.width - padding.horizontal();
    let height = size.height - padding.vertical();
    if width < 0.0 || height < 0.0 {
        log::warn!(
            "padding {}x{} exceeds size {}x{}, clamping content to zero",
            padding.horizontal(),
            padding.vertical(),
            size.width,
            size.height
        );
    }
    Size::new(width.max(0.0), height.max(0.0))
}
