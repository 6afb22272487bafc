// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout passes.
//!
//! A pass walks the document depth-first from the root and, for every node it
//! reaches:
//!
//! 1. **Size**: resolve width and height from the inbound [`Constraints`]
//!    and the node's frame ([`resolve_axis`], or [`fit_aspect`] when an
//!    aspect ratio is declared), then derive the content box.
//! 2. **Position**: offset the node inside the box its parent allotted
//!    ([`align_offset`]) and apply the padding shift ([`padding_offset`]).
//! 3. **Auxiliaries**: size the background and overlay against the node's
//!    own fixed size and place them over its frame rect.
//! 4. **Children**: containers and carousels lay out every child against
//!    their content box.
//!
//! The root is sized first; its size is recorded in the [`LayoutResult`] and
//! passed to every aspect-ratio node that has no concrete bound on either
//! axis.
//!
//! A pass is a pure function of the document, the [`LayoutConfig`] and the
//! root constraints. Nothing is written back to the document.

mod geometry;
mod position;
mod sizing;

pub use geometry::{Geometry, LayoutResult};
pub use position::{align_offset, median_of, padding_offset};
pub use sizing::{aspect_candidate, fit_aspect, resolve_axis};

use kurbo::{Point, Size};

use crate::config::LayoutConfig;
use crate::dimension::Constraints;
use crate::frame::Alignment;
use crate::node::{Document, INVALID, NodeKind, NodeTree};
#[cfg(feature = "trace-rich")]
use crate::trace::NodeSizedEvent;
use crate::trace::{PassBeginEvent, PassEndEvent, Tracer};

use sizing::{Measured, SizingInput};

impl Document {
    /// Lays out the document against `constraints` and returns the geometry
    /// of every reachable node.
    #[must_use]
    pub fn layout(&self, config: &LayoutConfig, constraints: Constraints) -> LayoutResult {
        let mut result = LayoutResult::new();
        self.layout_into(config, constraints, &mut result);
        result
    }

    /// Like [`layout`](Self::layout), but reuses a caller-provided buffer.
    ///
    /// The buffer is cleared first; records from earlier passes never
    /// survive.
    pub fn layout_into(
        &self,
        config: &LayoutConfig,
        constraints: Constraints,
        result: &mut LayoutResult,
    ) {
        self.layout_traced(config, constraints, result, &mut Tracer::none());
    }

    /// Like [`layout_into`](Self::layout_into), but reports pass events to
    /// `tracer`.
    pub fn layout_traced(
        &self,
        config: &LayoutConfig,
        constraints: Constraints,
        result: &mut LayoutResult,
        tracer: &mut Tracer<'_>,
    ) {
        let tree = self.tree();
        let root = self.root().index();
        result.reset(tree.stamp, tree.len());
        tracer.pass_begin(&PassBeginEvent { root, constraints });
        log::debug!("layout pass begin: root {root}, {constraints:?}");

        {
            let mut pass = Pass {
                tree,
                config,
                result: &mut *result,
                tracer: &mut *tracer,
                root_size: Size::new(config.unbounded_candidate, config.unbounded_candidate),
            };
            let sized = pass.size(root, constraints);
            pass.root_size = sized.size;
            pass.result.root_size = sized.size;
            pass.place(
                root,
                &sized,
                &Allotment {
                    origin: Point::ORIGIN,
                    bounds: constraints,
                    alignment: Alignment::TopLeading,
                },
            );
        }

        let nodes = u32::try_from(result.len()).unwrap_or(u32::MAX);
        let root_size = result.root_size();
        tracer.pass_end(&PassEndEvent {
            root,
            nodes,
            root_size,
        });
        log::debug!(
            "layout pass end: {nodes} nodes, root {}x{}",
            root_size.width,
            root_size.height
        );
    }
}

/// The box a parent hands to a child.
#[derive(Clone, Copy, Debug)]
struct Allotment {
    origin: Point,
    /// Unbounded axes take the child's own extent.
    bounds: Constraints,
    /// Used when the child's frame declares no alignment.
    alignment: Alignment,
}

struct Pass<'a, 't> {
    tree: &'a NodeTree,
    config: &'a LayoutConfig,
    result: &'a mut LayoutResult,
    #[cfg_attr(
        not(feature = "trace-rich"),
        expect(dead_code, reason = "only per-node events read the tracer")
    )]
    tracer: &'a mut Tracer<'t>,
    root_size: Size,
}

impl Pass<'_, '_> {
    fn size(&self, idx: u32, constraints: Constraints) -> Measured {
        let i = idx as usize;
        let input = SizingInput {
            constraints,
            frame: self.tree.frame[i],
            padding: self.tree.padding[i],
            config: self.config,
            root: self.root_size,
        };
        sizing::size_node(&self.tree.kind[i], &input)
    }

    fn place(&mut self, idx: u32, sized: &Measured, allot: &Allotment) {
        let i = idx as usize;
        let declared = self.tree.frame[i].and_then(|f| f.alignment);
        let bounds = Size::new(
            allot.bounds.width.value_or(sized.size.width),
            allot.bounds.height.value_or(sized.size.height),
        );
        let origin = allot.origin
            + align_offset(bounds, sized.size, declared.unwrap_or(allot.alignment))
            + padding_offset(&sized.padding, declared);

        let geometry = Geometry {
            x: origin.x,
            y: origin.y,
            width: sized.size.width,
            height: sized.size.height,
            content_width: sized.content.width,
            content_height: sized.content.height,
            content_x: origin.x + sized.padding.leading,
            content_y: origin.y + sized.padding.top,
        };
        self.result.record(idx, geometry);
        #[cfg(feature = "trace-rich")]
        self.tracer.node_sized(&NodeSizedEvent {
            node: idx,
            kind: self.tree.kind[i].name(),
            geometry,
        });

        // Background and overlay cover the owner's frame rect.
        for aux in [self.tree.background[i], self.tree.overlay[i]] {
            if aux != INVALID {
                let bounds = Constraints::fixed(sized.size);
                let aux_sized = self.size(aux, bounds);
                self.place(
                    aux,
                    &aux_sized,
                    &Allotment {
                        origin,
                        bounds,
                        alignment: Alignment::Center,
                    },
                );
            }
        }

        let alignment = match self.tree.kind[i] {
            NodeKind::Container { alignment } => alignment,
            NodeKind::Carousel { .. } => Alignment::Center,
            _ => return,
        };
        let inner = Allotment {
            origin: Point::new(geometry.content_x, geometry.content_y),
            bounds: sized.child_constraints(),
            alignment,
        };
        let mut child = self.tree.first_child[i];
        while child != INVALID {
            let child_sized = self.size(child, inner.bounds);
            self.place(child, &child_sized, &inner);
            child = self.tree.next_sibling[child as usize];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;
    use crate::frame::{Frame, MaxDimension, Padding};
    use crate::node::NodeId;

    fn screen() -> Constraints {
        Constraints::fixed(Size::new(400.0, 300.0))
    }

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    /// A centered container root with one child.
    fn with_child(kind: NodeKind, frame: Option<Frame>) -> (Document, NodeId, NodeId) {
        let mut tree = NodeTree::new();
        let root = tree.create_node("root", NodeKind::CONTAINER);
        let child = tree.create_node("child", kind);
        tree.set_frame(child, frame);
        tree.add_child(root, child).unwrap();
        (tree.finish(root).unwrap(), root, child)
    }

    #[test]
    fn root_fills_constraints_at_origin() {
        let (doc, root, _) = with_child(NodeKind::Web, None);
        let result = doc.layout(&config(), screen());
        let g = result.get(root).unwrap();
        assert_eq!(g.rect(), kurbo::Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(result.root_size(), Size::new(400.0, 300.0));
    }

    #[test]
    fn child_is_centered_in_container() {
        let (doc, _, child) = with_child(NodeKind::Rectangle, Some(Frame::sized(100.0, 50.0)));
        let result = doc.layout(&config(), screen());
        let g = result.get(child).unwrap();
        assert_eq!((g.x, g.y), (150.0, 125.0));
    }

    #[test]
    fn frame_alignment_overrides_container_alignment() {
        let frame = Frame::sized(100.0, 50.0).aligned(Alignment::BottomTrailing);
        let (doc, _, child) = with_child(NodeKind::Rectangle, Some(frame));
        let result = doc.layout(&config(), screen());
        let g = result.get(child).unwrap();
        assert_eq!((g.x, g.y), (300.0, 250.0));
    }

    #[test]
    fn children_fill_padded_content_box() {
        let mut tree = NodeTree::new();
        let root = tree.create_node("root", NodeKind::CONTAINER);
        let inner = tree.create_node("inner", NodeKind::CONTAINER);
        let leaf = tree.create_node("leaf", NodeKind::Web);
        tree.add_child(root, inner).unwrap();
        tree.add_child(inner, leaf).unwrap();
        tree.set_padding(inner, Some(Padding::uniform(20.0)));
        tree.set_frame(inner, Some(Frame::sized(200.0, 100.0).aligned(Alignment::Center)));
        let doc = tree.finish(root).unwrap();

        let result = doc.layout(&config(), screen());
        let inner_g = result.get(inner).unwrap();
        // Centered in 400x300, symmetric padding cancels.
        assert_eq!((inner_g.x, inner_g.y), (100.0, 100.0));
        assert_eq!(inner_g.content_rect(), kurbo::Rect::new(120.0, 120.0, 280.0, 180.0));

        let leaf_g = result.get(leaf).unwrap();
        assert_eq!(leaf_g.rect(), inner_g.content_rect());
    }

    #[test]
    fn unbounded_root_without_frame_is_empty() {
        let (doc, root, child) = with_child(NodeKind::Web, None);
        let result = doc.layout(&config(), Constraints::UNBOUNDED);
        assert_eq!(result.get(root).unwrap().size(), Size::ZERO);
        assert_eq!(result.get(child).unwrap().size(), Size::ZERO);
    }

    #[test]
    fn unresolved_parent_axis_propagates_unbounded() {
        // Parent width resolves from the screen; height stays open because
        // of the max. The child sees Value(width) and Unbounded height.
        let mut tree = NodeTree::new();
        let root = tree.create_node("root", NodeKind::CONTAINER);
        let child = tree.create_node("child", NodeKind::Text {
            measured: Some(Size::new(10.0, 30.0)),
        });
        tree.add_child(root, child).unwrap();
        tree.set_frame(
            root,
            Some(Frame {
                max_height: Some(MaxDimension::Finite(500.0)),
                ..Frame::default()
            }),
        );
        let doc = tree.finish(root).unwrap();

        let result = doc.layout(
            &config(),
            Constraints::new(Dimension::Value(320.0), Dimension::Unbounded),
        );
        assert_eq!(result.get(root).unwrap().size(), Size::new(320.0, 0.0));
        assert_eq!(result.get(child).unwrap().size(), Size::new(320.0, 30.0));
    }

    #[test]
    fn aspect_ratio_fits_parent_content_box() {
        // Infinite maxima pass the screen through, so the image is fitted
        // into 400x300: 400 / 2 <= 300, width limits.
        let mut tree = NodeTree::new();
        let root = tree.create_node("root", NodeKind::CONTAINER);
        let open = tree.create_node("open", NodeKind::CONTAINER);
        let image = tree.create_node("image", NodeKind::Image { intrinsic: None });
        tree.add_child(root, open).unwrap();
        tree.add_child(open, image).unwrap();
        tree.set_frame(
            open,
            Some(Frame {
                max_width: Some(MaxDimension::Infinite),
                max_height: Some(MaxDimension::Infinite),
                ..Frame::default()
            }),
        );
        tree.set_frame(
            image,
            Some(Frame {
                aspect_ratio: Some(2.0),
                ..Frame::default()
            }),
        );
        let doc = tree.finish(root).unwrap();

        let result = doc.layout(&config(), screen());
        assert_eq!(result.get(image).unwrap().size(), Size::new(400.0, 200.0));
    }

    #[test]
    fn unbounded_aspect_root_uses_candidate_extent() {
        let mut tree = NodeTree::new();
        let root = tree.create_node("root", NodeKind::CONTAINER);
        let child = tree.create_node("child", NodeKind::Web);
        tree.add_child(root, child).unwrap();
        tree.set_frame(
            root,
            Some(Frame {
                aspect_ratio: Some(2.0),
                ..Frame::default()
            }),
        );
        let doc = tree.finish(root).unwrap();

        let result = doc.layout(&config(), Constraints::UNBOUNDED);
        assert_eq!(result.root_size(), Size::new(10_000.0, 5_000.0));
        assert_eq!(
            result.get(child).unwrap().size(),
            result.root_size(),
            "aspect-ratio parents always propagate concrete bounds"
        );
    }

    #[test]
    fn auxiliaries_cover_owner() {
        let mut tree = NodeTree::new();
        let root = tree.create_node("root", NodeKind::CONTAINER);
        let card = tree.create_node("card", NodeKind::Rectangle);
        let bg = tree.create_node("bg", NodeKind::Rectangle);
        let badge = tree.create_node("badge", NodeKind::Rectangle);
        tree.add_child(root, card).unwrap();
        tree.set_background(card, bg).unwrap();
        tree.set_overlay(card, badge).unwrap();
        tree.set_frame(card, Some(Frame::sized(100.0, 80.0).aligned(Alignment::TopLeading)));
        tree.set_frame(badge, Some(Frame::sized(20.0, 20.0).aligned(Alignment::TopTrailing)));
        let doc = tree.finish(root).unwrap();

        let result = doc.layout(&config(), screen());
        assert_eq!(result.get(bg).unwrap().rect(), result.get(card).unwrap().rect());
        let badge_g = result.get(badge).unwrap();
        assert_eq!((badge_g.x, badge_g.y), (80.0, 0.0));
    }

    #[test]
    fn iteration_is_preorder_with_auxiliaries_first() {
        let mut tree = NodeTree::new();
        let root = tree.create_node("root", NodeKind::CONTAINER);
        let a = tree.create_node("a", NodeKind::CONTAINER);
        let a1 = tree.create_node("a1", NodeKind::Web);
        let b = tree.create_node("b", NodeKind::Web);
        let bg = tree.create_node("bg", NodeKind::Rectangle);
        tree.add_child(root, a).unwrap();
        tree.add_child(a, a1).unwrap();
        tree.add_child(root, b).unwrap();
        tree.set_background(a, bg).unwrap();
        let doc = tree.finish(root).unwrap();

        let result = doc.layout(&config(), screen());
        let order: alloc::vec::Vec<NodeId> = result.iter().map(|(id, _)| id).collect();
        assert_eq!(order, [root, a, bg, a1, b]);
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn unreachable_nodes_get_no_geometry() {
        let mut tree = NodeTree::new();
        let root = tree.create_node("root", NodeKind::CONTAINER);
        let stray = tree.create_node("stray", NodeKind::Web);
        let doc = tree.finish(root).unwrap();
        let result = doc.layout(&config(), screen());
        assert!(result.get(stray).is_none());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn density_scales_declared_lengths() {
        let (doc, _, child) = with_child(NodeKind::Rectangle, Some(Frame::sized(50.0, 25.0)));
        let result = doc.layout(&LayoutConfig::with_density(2.0), screen());
        assert_eq!(result.get(child).unwrap().size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn repeated_passes_are_identical() {
        let mut tree = NodeTree::new();
        let root = tree.create_node("root", NodeKind::CONTAINER);
        let carousel = tree.create_node("carousel", NodeKind::Carousel { looping: true });
        let page = tree.create_node("page", NodeKind::Image {
            intrinsic: Some(Size::new(64.0, 64.0)),
        });
        tree.add_child(root, carousel).unwrap();
        tree.add_child(carousel, page).unwrap();
        tree.set_padding(carousel, Some(Padding::new(20.0, 0.0, 4.0, 8.0)));
        let doc = tree.finish(root).unwrap();

        let first = doc.layout(&config(), screen());
        let mut buffer = LayoutResult::new();
        doc.layout_into(&config(), screen(), &mut buffer);
        doc.layout_into(&config(), screen(), &mut buffer);
        assert_eq!(buffer.len(), first.len());
        for (id, g) in first.iter() {
            assert_eq!(buffer.get(id), Some(g), "{id:?}");
        }
    }

    #[cfg(feature = "trace")]
    #[test]
    fn pass_events_reach_sink() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Counts {
            begins: u32,
            nodes: u32,
        }
        impl TraceSink for Counts {
            fn on_pass_begin(&mut self, _: &PassBeginEvent) {
                self.begins += 1;
            }
            fn on_pass_end(&mut self, e: &PassEndEvent) {
                self.nodes = e.nodes;
            }
        }

        let (doc, _, _) = with_child(NodeKind::Web, None);
        let mut sink = Counts::default();
        let mut result = LayoutResult::new();
        doc.layout_traced(&config(), screen(), &mut result, &mut Tracer::new(&mut sink));
        assert_eq!(sink.begins, 1);
        assert_eq!(sink.nodes, 2);
    }
}
