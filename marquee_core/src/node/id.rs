// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node identity.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

/// Sentinel value indicating "no node" in index fields.
pub const INVALID: u32 = u32::MAX;

static NEXT_STAMP: AtomicU32 = AtomicU32::new(0);

/// Returns a stamp unique to one [`NodeTree`](super::NodeTree) instance.
pub(crate) fn next_stamp() -> u32 {
    NEXT_STAMP.fetch_add(1, Ordering::Relaxed)
}

/// A handle to a node in a [`NodeTree`](super::NodeTree).
///
/// Contains both a slot index and the stamp of the tree that allocated it, so
/// handles carried over from a previous document are detected instead of
/// silently addressing an unrelated node.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    /// Slot index into the tree's arrays.
    pub(crate) idx: u32,
    /// Stamp of the owning tree.
    pub(crate) stamp: u32,
}

impl NodeId {
    /// Returns the raw slot index.
    ///
    /// Slot indices are dense and start at zero, so backends may use them to
    /// index their own per-node arrays.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the stamp of the tree that allocated this handle.
    #[inline]
    #[must_use]
    pub const fn stamp(self) -> u32 {
        self.stamp
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}@tree{})", self.idx, self.stamp)
    }
}
