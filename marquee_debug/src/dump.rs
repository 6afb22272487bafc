// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON dumps of laid-out documents.
//!
//! [`export`] walks a [`Document`] from its root and writes one JSON object
//! per node, nesting background, overlay and children under their owner.
//! Nodes the pass did not reach carry no `frame` entry.

use std::io::{self, Write};

use serde_json::{Value, json};

use marquee_core::layout::LayoutResult;
use marquee_core::node::{Document, NodeId};

/// Builds the JSON tree for `document` with the geometry from `layout`.
#[must_use]
pub fn to_value(document: &Document, layout: &LayoutResult) -> Value {
    node_value(document, layout, document.root())
}

/// Writes the JSON tree for `document` to `writer`, pretty-printed.
pub fn export(document: &Document, layout: &LayoutResult, writer: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, &to_value(document, layout))?;
    Ok(())
}

fn node_value(document: &Document, layout: &LayoutResult, id: NodeId) -> Value {
    let tree = document.tree();
    let mut node = json!({
        "key": tree.key(id),
        "kind": tree.kind(id).name(),
    });
    if let Some(g) = layout.get(id) {
        node["frame"] = json!([g.x, g.y, g.width, g.height]);
        node["content"] = json!([g.content_x, g.content_y, g.content_width, g.content_height]);
    }
    if let Some(background) = tree.background(id) {
        node["background"] = node_value(document, layout, background);
    }
    if let Some(overlay) = tree.overlay(id) {
        node["overlay"] = node_value(document, layout, overlay);
    }
    let children: Vec<Value> = tree
        .children(id)
        .map(|child| node_value(document, layout, child))
        .collect();
    if !children.is_empty() {
        node["children"] = Value::Array(children);
    }
    node
}
