// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON geometry dumps for marquee
//! diagnostics.
//!
//! This crate provides [`TraceSink`](marquee_core::trace::TraceSink)
//! implementations and layout inspection helpers for development:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`dump::export`]: writes the laid-out node tree, with geometry, as
//!   JSON.

pub mod dump;
pub mod pretty;
pub mod recorder;
