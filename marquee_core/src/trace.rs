// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for layout passes and carousel paging.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! layout pass and the carousel model call at each stage. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`): gates [`NodeSizedEvent`] and the
//!   corresponding `TraceSink` method.

use kurbo::Size;

use crate::dimension::Constraints;
#[cfg(feature = "trace-rich")]
use crate::layout::Geometry;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a layout pass starts.
#[derive(Clone, Copy, Debug)]
pub struct PassBeginEvent {
    /// Slot index of the document root.
    pub root: u32,
    /// Constraints the root is laid out against.
    pub constraints: Constraints,
}

/// Emitted when a layout pass completes.
#[derive(Clone, Copy, Debug)]
pub struct PassEndEvent {
    /// Slot index of the document root.
    pub root: u32,
    /// Number of nodes that received geometry.
    pub nodes: u32,
    /// Resolved size of the root.
    pub root_size: Size,
}

/// Emitted once per node after its geometry is final.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug)]
pub struct NodeSizedEvent {
    /// Slot index of the node.
    pub node: u32,
    /// Short name of the node kind.
    pub kind: &'static str,
    /// The node's final geometry.
    pub geometry: Geometry,
}

/// Emitted when a carousel selects a page.
#[derive(Clone, Copy, Debug)]
pub struct PageSelectedEvent {
    /// Slot index of the carousel.
    pub carousel: u32,
    /// Logical page index requested by the paging control.
    pub logical: usize,
    /// Physical page the logical index maps to, if any.
    pub physical: Option<usize>,
    /// Number of media commands issued.
    pub commands: u32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from layout passes and carousel models.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a layout pass starts.
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        _ = e;
    }

    /// Called when a layout pass completes.
    fn on_pass_end(&mut self, e: &PassEndEvent) {
        _ = e;
    }

    /// Called for every node once its geometry is final (requires
    /// `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_node_sized(&mut self, e: &NodeSizedEvent) {
        _ = e;
    }

    /// Called when a carousel selects a page.
    fn on_page_selected(&mut self, e: &PageSelectedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PassBeginEvent`].
    #[inline]
    pub fn pass_begin(&mut self, e: &PassBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PassEndEvent`].
    #[inline]
    pub fn pass_end(&mut self, e: &PassEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NodeSizedEvent`] (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn node_sized(&mut self, e: &NodeSizedEvent) {
        if let Some(s) = &mut self.sink {
            s.on_node_sized(e);
        }
    }

    /// Emits a [`PageSelectedEvent`].
    #[inline]
    pub fn page_selected(&mut self, e: &PageSelectedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_page_selected(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
