// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Node kinds are stored as an index into [`KIND_NAMES`]; unknown indices
//! decode as `"unknown"`.

use kurbo::Size;
use marquee_core::dimension::{Constraints, Dimension};
use marquee_core::layout::Geometry;
use marquee_core::trace::{
    NodeSizedEvent, PageSelectedEvent, PassBeginEvent, PassEndEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_PASS_BEGIN: u8 = 1;
const TAG_PASS_END: u8 = 2;
const TAG_NODE_SIZED: u8 = 3;
const TAG_PAGE_SELECTED: u8 = 4;

/// Node kind names, in recording order.
pub const KIND_NAMES: [&str; 8] = [
    "container",
    "carousel",
    "text",
    "image",
    "web",
    "rectangle",
    "audio",
    "video",
];

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_usize(&mut self, v: usize) {
        self.write_u64(u64::try_from(v).unwrap_or(u64::MAX));
    }

    fn write_dimension(&mut self, d: Dimension) {
        match d {
            Dimension::Value(v) => {
                self.write_u8(1);
                self.write_f64(v);
            }
            Dimension::Unbounded => {
                self.write_u8(0);
                self.write_f64(0.0);
            }
        }
    }

    fn write_size(&mut self, s: Size) {
        self.write_f64(s.width);
        self.write_f64(s.height);
    }

    fn write_kind(&mut self, kind: &str) {
        let index = KIND_NAMES
            .iter()
            .position(|&name| name == kind)
            .and_then(|i| u8::try_from(i).ok())
            .unwrap_or(u8::MAX);
        self.write_u8(index);
    }
}

impl TraceSink for RecorderSink {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        self.write_u8(TAG_PASS_BEGIN);
        self.write_u32(e.root);
        self.write_dimension(e.constraints.width);
        self.write_dimension(e.constraints.height);
    }

    fn on_pass_end(&mut self, e: &PassEndEvent) {
        self.write_u8(TAG_PASS_END);
        self.write_u32(e.root);
        self.write_u32(e.nodes);
        self.write_size(e.root_size);
    }

    fn on_node_sized(&mut self, e: &NodeSizedEvent) {
        self.write_u8(TAG_NODE_SIZED);
        self.write_u32(e.node);
        self.write_kind(e.kind);
        let g = &e.geometry;
        for v in [
            g.x,
            g.y,
            g.width,
            g.height,
            g.content_width,
            g.content_height,
            g.content_x,
            g.content_y,
        ] {
            self.write_f64(v);
        }
    }

    fn on_page_selected(&mut self, e: &PageSelectedEvent) {
        self.write_u8(TAG_PAGE_SELECTED);
        self.write_u32(e.carousel);
        self.write_usize(e.logical);
        match e.physical {
            Some(p) => {
                self.write_u8(1);
                self.write_usize(p);
            }
            None => {
                self.write_u8(0);
                self.write_u64(0);
            }
        }
        self.write_u32(e.commands);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// A [`PassBeginEvent`].
    PassBegin(PassBeginEvent),
    /// A [`PassEndEvent`].
    PassEnd(PassEndEvent),
    /// A [`NodeSizedEvent`].
    NodeSized(NodeSizedEvent),
    /// A [`PageSelectedEvent`].
    PageSelected(PageSelectedEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?.try_into().ok()?;
        self.pos += N;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[b]| b)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take::<4>().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take::<8>().map(u64::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.take::<8>().map(f64::from_le_bytes)
    }

    fn read_usize(&mut self) -> Option<usize> {
        Some(usize::try_from(self.read_u64()?).unwrap_or(usize::MAX))
    }

    fn read_dimension(&mut self) -> Option<Dimension> {
        let bounded = self.read_u8()?;
        let v = self.read_f64()?;
        Some(if bounded != 0 {
            Dimension::Value(v)
        } else {
            Dimension::Unbounded
        })
    }

    fn read_size(&mut self) -> Option<Size> {
        Some(Size::new(self.read_f64()?, self.read_f64()?))
    }

    fn read_kind(&mut self) -> Option<&'static str> {
        let index = self.read_u8()?;
        Some(KIND_NAMES.get(usize::from(index)).copied().unwrap_or("unknown"))
    }

    fn decode_pass_begin(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PassBegin(PassBeginEvent {
            root: self.read_u32()?,
            constraints: Constraints::new(self.read_dimension()?, self.read_dimension()?),
        }))
    }

    fn decode_pass_end(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PassEnd(PassEndEvent {
            root: self.read_u32()?,
            nodes: self.read_u32()?,
            root_size: self.read_size()?,
        }))
    }

    fn decode_node_sized(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::NodeSized(NodeSizedEvent {
            node: self.read_u32()?,
            kind: self.read_kind()?,
            geometry: Geometry {
                x: self.read_f64()?,
                y: self.read_f64()?,
                width: self.read_f64()?,
                height: self.read_f64()?,
                content_width: self.read_f64()?,
                content_height: self.read_f64()?,
                content_x: self.read_f64()?,
                content_y: self.read_f64()?,
            },
        }))
    }

    fn decode_page_selected(&mut self) -> Option<RecordedEvent> {
        let carousel = self.read_u32()?;
        let logical = self.read_usize()?;
        let has_physical = self.read_u8()?;
        let physical = self.read_usize()?;
        Some(RecordedEvent::PageSelected(PageSelectedEvent {
            carousel,
            logical,
            physical: (has_physical != 0).then_some(physical),
            commands: self.read_u32()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_PASS_BEGIN => self.decode_pass_begin(),
            TAG_PASS_END => self.decode_pass_end(),
            TAG_NODE_SIZED => self.decode_node_sized(),
            TAG_PAGE_SELECTED => self.decode_page_selected(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
