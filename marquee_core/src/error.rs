// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while building a node tree.
//!
//! The layout pass itself is infallible. Every structural problem it would
//! otherwise have to guard against is rejected here, before a
//! [`Document`](crate::node::Document) exists.

use alloc::string::String;

use thiserror::Error;

use crate::node::NodeId;

/// A structural violation detected while building or sealing a tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The handle refers to a slot that was never allocated in this tree.
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),
    /// The node already belongs to a parent or owner.
    #[error("node {0:?} already has a parent")]
    AlreadyAttached(NodeId),
    /// Attaching the node would make it its own ancestor.
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    Cycle {
        /// The would-be parent.
        parent: NodeId,
        /// The node being attached.
        child: NodeId,
    },
    /// The node kind does not accept children.
    #[error("node {0:?} cannot have children")]
    NotAContainer(NodeId),
    /// A carousel model was requested for a node that is not a carousel.
    #[error("node {0:?} is not a carousel")]
    NotACarousel(NodeId),
    /// The owner already has an auxiliary node in that slot.
    #[error("node {0:?} already has a {1}")]
    AuxiliaryOccupied(NodeId, &'static str),
    /// A looping carousel must own at least one page.
    #[error("looping carousel {0:?} has no pages")]
    EmptyLoopingCarousel(NodeId),
    /// Two nodes share the same document key.
    #[error("duplicate node key {0:?}")]
    DuplicateKey(String),
    /// The node chosen as the document root is attached to a parent.
    #[error("root {0:?} is attached to a parent")]
    RootHasParent(NodeId),
}
