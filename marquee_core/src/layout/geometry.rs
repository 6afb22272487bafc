// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved geometry and the per-pass output map.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::node::NodeId;

/// The resolved box of one node, in the document's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Resolved width.
    pub width: f64,
    /// Resolved height.
    pub height: f64,
    /// Width minus horizontal padding, never negative.
    pub content_width: f64,
    /// Height minus vertical padding, never negative.
    pub content_height: f64,
    /// Left edge of the content box.
    pub content_x: f64,
    /// Top edge of the content box.
    pub content_y: f64,
}

impl Geometry {
    /// Top-left corner of the node.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Size of the node.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The node's frame rect.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }

    /// The node's content rect (frame minus padding).
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        Rect::from_origin_size(
            Point::new(self.content_x, self.content_y),
            Size::new(self.content_width, self.content_height),
        )
    }
}

/// The output of one layout pass: a geometry record per visited node.
///
/// Records are keyed by [`NodeId`]. A result is produced fresh by every pass
/// (or cleared and refilled by
/// [`Document::layout_into`](crate::node::Document::layout_into)); nothing
/// accumulates across passes.
///
/// The root's resolved size is recorded explicitly because aspect-ratio nodes
/// with two unbounded axes are measured against it.
#[derive(Clone, Debug, Default)]
pub struct LayoutResult {
    pub(crate) stamp: u32,
    pub(crate) geometry: Vec<Option<Geometry>>,
    pub(crate) order: Vec<u32>,
    pub(crate) root_size: Size,
}

impl LayoutResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all records and sizes the map for a tree of `len` nodes.
    pub(crate) fn reset(&mut self, stamp: u32, len: usize) {
        self.stamp = stamp;
        self.geometry.clear();
        self.geometry.resize(len, None);
        self.order.clear();
        self.root_size = Size::ZERO;
    }

    /// Stores the geometry of the node at slot `idx`.
    pub(crate) fn record(&mut self, idx: u32, geometry: Geometry) {
        let slot = &mut self.geometry[idx as usize];
        debug_assert!(
            slot.is_none(),
            "node slot {idx} received geometry twice in one pass"
        );
        if slot.is_none() {
            self.order.push(idx);
        }
        *slot = Some(geometry);
    }

    /// Returns the geometry of a node, if the pass visited it.
    ///
    /// Handles from another document return `None`.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Geometry> {
        if id.stamp != self.stamp {
            return None;
        }
        self.geometry.get(id.idx as usize)?.as_ref()
    }

    /// Returns the geometry at raw slot `idx`, if the pass visited it.
    #[must_use]
    pub fn get_at(&self, idx: u32) -> Option<&Geometry> {
        self.geometry.get(idx as usize)?.as_ref()
    }

    /// Iterates over visited nodes in depth-first pre-order.
    ///
    /// An owner comes before its background and overlay, which come before
    /// its children.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Geometry)> + '_ {
        self.order.iter().filter_map(move |&idx| {
            let geometry = self.geometry[idx as usize].as_ref()?;
            Some((
                NodeId {
                    idx,
                    stamp: self.stamp,
                },
                geometry,
            ))
        })
    }

    /// Number of nodes that received geometry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no node received geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolved size of the document root.
    #[must_use]
    pub fn root_size(&self) -> Size {
        self.root_size
    }
}
