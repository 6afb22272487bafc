// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for rendering and media playback.
//!
//! Marquee stops at geometry. Everything that touches a platform lives in the
//! host, which provides two pieces:
//!
//! - **Renderer**: Implements [`Renderer`] to turn a [`LayoutResult`] into
//!   native views or draw calls. Node kinds, masks and keys are read from the
//!   [`Document`].
//!
//! - **Media controller**: Implements [`MediaController`] to start and stop
//!   audio/video players when a carousel changes page. Commands arrive through
//!   [`PageChange::dispatch`](crate::carousel::PageChange::dispatch).
//!
//! # Host loop pseudocode
//!
//! ```rust,ignore
//! fn on_document(doc: Document, viewport: Size) {
//!     let layout = doc.layout(&config, Constraints::fixed(viewport));
//!     renderer.apply(&doc, &layout);
//!
//!     let carousel = CarouselModel::new(&doc, doc.find("hero").unwrap())?;
//!     let page = carousel.initial_page();
//!     carousel.select_page(page).dispatch(&mut media);
//! }
//!
//! fn on_page_settled(offset: f64, page_width: f64) {
//!     let page = carousel.page_for_offset(offset, page_width);
//!     carousel.select_page(page).dispatch(&mut media);
//! }
//! ```

use crate::layout::LayoutResult;
use crate::node::{Document, NodeId};

/// Applies the geometry of a layout pass to a platform-native view tree.
///
/// Implemented by platform renderers and test doubles.
pub trait Renderer {
    /// Applies `layout` to the backing view tree, reading node properties
    /// from `document` as needed.
    fn apply(&mut self, document: &Document, layout: &LayoutResult);
}

/// Starts and stops media players by node.
pub trait MediaController {
    /// Starts playback of the media node if its player is visible.
    fn play(&mut self, node: NodeId);

    /// Pauses playback of the media node.
    fn pause(&mut self, node: NodeId);
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Rect, Size};

    use super::*;
    use crate::config::LayoutConfig;
    use crate::dimension::Constraints;
    use crate::frame::Frame;
    use crate::node::{NodeKind, NodeTree};

    /// Collects the frame rect of every node it is given.
    #[derive(Default)]
    struct RectRenderer {
        rects: Vec<(NodeId, &'static str, Rect)>,
    }

    impl Renderer for RectRenderer {
        fn apply(&mut self, document: &Document, layout: &LayoutResult) {
            self.rects.clear();
            for (id, geometry) in layout.iter() {
                let kind = document.tree().kind(id).name();
                self.rects.push((id, kind, geometry.rect()));
            }
        }
    }

    #[test]
    fn renderer_sees_every_laid_out_node() {
        let mut tree = NodeTree::new();
        let root = tree.create_node("root", NodeKind::CONTAINER);
        let web = tree.create_node("web", NodeKind::Web);
        tree.add_child(root, web).unwrap();
        tree.set_frame(web, Some(Frame::sized(40.0, 20.0)));
        let doc = tree.finish(root).unwrap();

        let layout = doc.layout(
            &LayoutConfig::default(),
            Constraints::fixed(Size::new(100.0, 100.0)),
        );
        let mut renderer = RectRenderer::default();
        renderer.apply(&doc, &layout);

        assert_eq!(
            renderer.rects,
            [
                (root, "container", Rect::new(0.0, 0.0, 100.0, 100.0)),
                (web, "web", Rect::new(30.0, 40.0, 70.0, 60.0)),
            ]
        );
    }
}
