// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node tree, constraint-based sizing, and carousel paging for
//! server-authored experiences.
//!
//! `marquee_core` turns a tree of typed nodes, each carrying declarative
//! sizing intent, into concrete pixel geometry for every node. It is `no_std`
//! compatible (with `alloc`) and stores nodes in struct-of-arrays form with
//! tree-stamped handles.
//!
//! # Architecture
//!
//! ```text
//!   parsed document (external)
//!       │
//!       ▼
//!   NodeTree ──► NodeTree::finish() ──► Document
//!                                          │
//!                 ┌────────────────────────┘
//!                 ▼
//!   Document::layout(config, constraints) ──► LayoutResult ──► Renderer::apply()
//!
//!   CarouselModel::select_page() ──► PageChange ──► MediaController
//! ```
//!
//! **[`dimension`]**: `Unbounded` / `Value` axis algebra and the
//! [`Constraints`](dimension::Constraints) pair passed from parent to child.
//!
//! **[`frame`]** and **[`mask`]**: Declared layout intent, such as explicit size,
//! min/max bounds, aspect ratio, alignment, padding, and clip descriptors.
//!
//! **[`node`]**: Struct-of-arrays node tree with tree-stamped handles.
//! Construction is validated once by [`NodeTree::finish`](node::NodeTree::finish),
//! which yields an immutable [`Document`](node::Document).
//!
//! **[`layout`]**: The sizing resolver and the alignment/padding positioner.
//! A pass is a pure function of the document and the root constraints and
//! produces a fresh [`LayoutResult`](layout::LayoutResult) keyed by node.
//!
//! **[`carousel`]**: Bounded and looping page models over a fixed set of
//! page sub-trees, plus autoplay media control on page change.
//!
//! **[`backend`]**: The [`Renderer`](backend::Renderer) and
//! [`MediaController`](backend::MediaController) traits implemented by the
//! host.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and the zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-node
//!   sizing events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod carousel;
pub mod config;
pub mod dimension;
pub mod error;
pub mod frame;
pub mod layout;
pub mod mask;
pub mod node;
pub mod trace;
