// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node tree data model.
//!
//! A *node* is one element of an experience. Each node has:
//!
//! - An identity ([`NodeId`]): an arena handle stamped with the tree that
//!   allocated it, plus a document key used for tag-based lookup.
//! - A variant ([`NodeKind`]): the closed set of node types; the sizing
//!   resolver dispatches on it.
//! - Topology: an ordered child list (containers and carousels only) and
//!   two auxiliary slots, background and overlay, that any node may fill.
//! - **Declared properties** set by the parsing layer:
//!   [`frame`](NodeTree::set_frame), [`padding`](NodeTree::set_padding), and
//!   [`mask`](NodeTree::set_mask).
//!
//! Resolved geometry is *not* stored on nodes. A layout pass produces a fresh
//! [`LayoutResult`](crate::layout::LayoutResult) keyed by [`NodeId`], so a
//! document can be laid out any number of times without stale state.
//!
//! Nodes are stored in struct-of-arrays layout. Strict single ownership is
//! enforced when attaching: a node has at most one parent, and attaching a
//! node under its own descendant is rejected.

mod document;
mod id;
mod kind;
mod traverse;
mod tree;

pub use document::Document;
pub use id::{INVALID, NodeId};
pub use kind::NodeKind;
pub use traverse::{Children, Leaves};
pub use tree::{Auxiliary, NodeTree};
