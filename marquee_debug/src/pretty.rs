// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use marquee_core::dimension::{Constraints, Dimension};
use marquee_core::trace::{
    NodeSizedEvent, PageSelectedEvent, PassBeginEvent, PassEndEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn dimension(d: Dimension) -> String {
    match d {
        Dimension::Unbounded => "unbounded".into(),
        Dimension::Value(v) => format!("{v:.1}"),
    }
}

fn constraints(c: Constraints) -> String {
    format!("{}x{}", dimension(c.width), dimension(c.height))
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:begin] root={} constraints={}",
            e.root,
            constraints(e.constraints),
        );
    }

    fn on_pass_end(&mut self, e: &PassEndEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:end] root={} nodes={} size={:.1}x{:.1}",
            e.root, e.nodes, e.root_size.width, e.root_size.height,
        );
    }

    fn on_node_sized(&mut self, e: &NodeSizedEvent) {
        let g = &e.geometry;
        let _ = writeln!(
            self.writer,
            "[node] {} {} at ({:.1}, {:.1}) size={:.1}x{:.1} content={:.1}x{:.1}",
            e.node, e.kind, g.x, g.y, g.width, g.height, g.content_width, g.content_height,
        );
    }

    fn on_page_selected(&mut self, e: &PageSelectedEvent) {
        let physical = match e.physical {
            Some(p) => p.to_string(),
            None => "none".into(),
        };
        let _ = writeln!(
            self.writer,
            "[page] carousel={} logical={} physical={physical} commands={}",
            e.carousel, e.logical, e.commands,
        );
    }
}
