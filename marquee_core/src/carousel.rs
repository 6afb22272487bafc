// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel paging and autoplay media control.
//!
//! A carousel owns a fixed, ordered list of pages (its children). A paging
//! control addresses pages by *logical* index:
//!
//! - **Bounded** carousels expose exactly one logical index per page.
//! - **Looping** carousels expose the whole `usize` range; logical index `i`
//!   shows page `i % N`.
//!
//! Selecting a page never touches geometry. It yields a [`PageChange`] that
//! tells every autoplay media leaf in the carousel to play (on the selected
//! page) or pause (everywhere else).

use alloc::vec::Vec;

use crate::backend::MediaController;
use crate::error::TreeError;
use crate::node::{Document, NodeId, NodeKind};
use crate::trace::{PageSelectedEvent, Tracer};

/// An instruction for the host's media players.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaCommand {
    /// Start the player for this node.
    Play(NodeId),
    /// Stop the player for this node.
    Pause(NodeId),
}

/// The outcome of selecting a logical page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageChange {
    /// Logical index requested by the paging control.
    pub logical: usize,
    /// Page the logical index maps to, or `None` when a bounded carousel is
    /// addressed past its last page.
    pub physical: Option<usize>,
    /// One command per autoplay media leaf in the carousel.
    pub commands: Vec<MediaCommand>,
}

impl PageChange {
    /// Delivers every command to `controller`, in order.
    pub fn dispatch(&self, controller: &mut impl MediaController) {
        for command in &self.commands {
            match *command {
                MediaCommand::Play(node) => controller.play(node),
                MediaCommand::Pause(node) => controller.pause(node),
            }
        }
    }
}

/// Paging state derived from one carousel node of a [`Document`].
///
/// The page set and the autoplay media set are captured at construction and
/// never change.
#[derive(Clone, Debug)]
pub struct CarouselModel {
    carousel: NodeId,
    looping: bool,
    pages: Vec<NodeId>,
    /// Autoplay media leaves, each with the page that contains it.
    autoplay: Vec<(usize, NodeId)>,
}

impl CarouselModel {
    /// Builds the model for the carousel node `carousel`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotACarousel`] if the node is some other kind.
    ///
    /// # Panics
    ///
    /// Panics if `carousel` does not belong to the document.
    pub fn new(document: &Document, carousel: NodeId) -> Result<Self, TreeError> {
        let tree = document.tree();
        let NodeKind::Carousel { looping } = tree.kind(carousel) else {
            return Err(TreeError::NotACarousel(carousel));
        };

        let pages: Vec<NodeId> = tree.children(carousel).collect();
        let mut autoplay = Vec::new();
        for (index, &page) in pages.iter().enumerate() {
            for leaf in tree.leaves(page) {
                if tree.kind(leaf).is_autoplay_media() {
                    autoplay.push((index, leaf));
                }
            }
        }
        debug_assert!(
            !looping || !pages.is_empty(),
            "looping carousel {carousel:?} has no pages"
        );

        log::debug!(
            "carousel {carousel:?}: {} pages, {} autoplay media, looping={looping}",
            pages.len(),
            autoplay.len()
        );
        Ok(Self {
            carousel,
            looping,
            pages,
            autoplay,
        })
    }

    /// The carousel node this model pages.
    #[must_use]
    pub fn carousel(&self) -> NodeId {
        self.carousel
    }

    /// Returns `true` if logical indices wrap around.
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// The pages, in order.
    #[must_use]
    pub fn pages(&self) -> &[NodeId] {
        &self.pages
    }

    /// Number of logical pages a paging control should expose.
    ///
    /// Bounded carousels report their page count; looping carousels report
    /// `usize::MAX`.
    #[must_use]
    pub fn page_count(&self) -> usize {
        if self.looping {
            usize::MAX
        } else {
            self.pages.len()
        }
    }

    /// Maps a logical index to a page index.
    #[must_use]
    pub fn physical_index(&self, logical: usize) -> Option<usize> {
        if self.pages.is_empty() {
            None
        } else if self.looping {
            Some(logical % self.pages.len())
        } else if logical < self.pages.len() {
            Some(logical)
        } else {
            None
        }
    }

    /// Maps a logical index to the page node shown for it.
    #[must_use]
    pub fn page_for(&self, logical: usize) -> Option<NodeId> {
        self.physical_index(logical).map(|i| self.pages[i])
    }

    /// The logical index a paging control should start at.
    ///
    /// Looping carousels start near the middle of the logical range, on an
    /// index that shows the first page, so the user can page backwards
    /// immediately. Bounded carousels start at `0`.
    #[must_use]
    pub fn initial_page(&self) -> usize {
        if !self.looping || self.pages.is_empty() {
            return 0;
        }
        let middle = usize::MAX / 2;
        middle - middle % self.pages.len()
    }

    /// Maps a scroll offset to the nearest logical page.
    ///
    /// Bounded carousels are clamped to their last page. A non-positive or
    /// non-finite `page_extent` yields [`initial_page`](Self::initial_page).
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "page positions are rounded and clamped into range first"
    )]
    pub fn page_for_offset(&self, offset: f64, page_extent: f64) -> usize {
        if !(page_extent.is_finite() && page_extent > 0.0) || !offset.is_finite() {
            return self.initial_page();
        }
        let nearest = (offset / page_extent).round().max(0.0);
        if self.looping {
            return nearest as usize;
        }
        let Some(last) = self.pages.len().checked_sub(1) else {
            return 0;
        };
        nearest.min(last as f64) as usize
    }

    /// The autoplay media leaves in this carousel, in page order.
    pub fn autoplay_media(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.autoplay.iter().map(|&(_, node)| node)
    }

    /// Selects `logical` and returns the media commands to deliver.
    #[must_use]
    pub fn select_page(&self, logical: usize) -> PageChange {
        self.select_page_traced(logical, &mut Tracer::none())
    }

    /// Like [`select_page`](Self::select_page), but reports the selection to
    /// `tracer`.
    #[must_use]
    pub fn select_page_traced(&self, logical: usize, tracer: &mut Tracer<'_>) -> PageChange {
        let physical = self.physical_index(logical);
        let commands: Vec<MediaCommand> = self
            .autoplay
            .iter()
            .map(|&(page, node)| {
                if Some(page) == physical {
                    MediaCommand::Play(node)
                } else {
                    MediaCommand::Pause(node)
                }
            })
            .collect();

        tracer.page_selected(&PageSelectedEvent {
            carousel: self.carousel.index(),
            logical,
            physical,
            commands: u32::try_from(commands.len()).unwrap_or(u32::MAX),
        });
        log::debug!(
            "carousel {:?}: page {logical} -> {physical:?}",
            self.carousel
        );
        PageChange {
            logical,
            physical,
            commands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeTree;

    /// A carousel with one page per entry of `media`; each page is a
    /// container holding an optional video.
    fn carousel(looping: bool, media: &[Option<bool>]) -> (Document, NodeId, Vec<Option<NodeId>>) {
        let mut tree = NodeTree::new();
        let root = tree.create_node("carousel", NodeKind::Carousel { looping });
        let mut videos = Vec::new();
        for (i, autoplay) in media.iter().enumerate() {
            let page = tree.create_node(alloc::format!("page{i}"), NodeKind::CONTAINER);
            tree.add_child(root, page).unwrap();
            let video = autoplay.map(|autoplay| {
                let video = tree.create_node(alloc::format!("video{i}"), NodeKind::Video { autoplay });
                tree.add_child(page, video).unwrap();
                video
            });
            videos.push(video);
        }
        (tree.finish(root).unwrap(), root, videos)
    }

    #[test]
    fn looping_index_wraps() {
        let (doc, root, _) = carousel(true, &[None, None, None]);
        let model = CarouselModel::new(&doc, root).unwrap();
        assert_eq!(model.physical_index(5), Some(2));
        assert_eq!(model.page_for(5), Some(model.pages()[2]));
        assert_eq!(model.page_count(), usize::MAX);
    }

    #[test]
    fn bounded_count_matches_pages() {
        let (doc, root, _) = carousel(false, &[None, None, None, None]);
        let model = CarouselModel::new(&doc, root).unwrap();
        assert_eq!(model.page_count(), 4);
        assert_eq!(model.physical_index(3), Some(3));
        assert_eq!(model.physical_index(4), None);
    }

    #[test]
    fn initial_page_shows_first_page() {
        let (doc, root, _) = carousel(true, &[None, None, None]);
        let model = CarouselModel::new(&doc, root).unwrap();
        let start = model.initial_page();
        assert_eq!(model.physical_index(start), Some(0));
        assert!(start > 1_000_000, "room to page backwards");

        let (doc, root, _) = carousel(false, &[None, None]);
        assert_eq!(CarouselModel::new(&doc, root).unwrap().initial_page(), 0);
    }

    #[test]
    fn offsets_round_to_nearest_page() {
        let (doc, root, _) = carousel(false, &[None, None, None]);
        let model = CarouselModel::new(&doc, root).unwrap();
        assert_eq!(model.page_for_offset(0.0, 320.0), 0);
        assert_eq!(model.page_for_offset(170.0, 320.0), 1);
        assert_eq!(model.page_for_offset(5_000.0, 320.0), 2, "clamped to last");
        assert_eq!(model.page_for_offset(-400.0, 320.0), 0, "clamped to first");
        assert_eq!(model.page_for_offset(640.0, 320.0), 2, "exactly on the last page");
        assert_eq!(model.page_for_offset(600.0, 320.0), 2, "rounds onto the last page");
        assert_eq!(model.page_for_offset(100.0, 0.0), 0);

        let (doc, root, _) = carousel(false, &[None, None]);
        let model = CarouselModel::new(&doc, root).unwrap();
        assert_eq!(model.page_for_offset(320.0, 320.0), 1, "second of two pages");
        assert_eq!(model.page_for_offset(960.0, 320.0), 1, "clamped to second");

        let (doc, root, _) = carousel(true, &[None, None, None]);
        let model = CarouselModel::new(&doc, root).unwrap();
        assert_eq!(model.page_for_offset(5_000.0, 320.0), 16);
    }

    #[test]
    fn selecting_plays_visible_media_and_pauses_the_rest() {
        let (doc, root, videos) = carousel(true, &[Some(true), None, Some(true), Some(false)]);
        let model = CarouselModel::new(&doc, root).unwrap();
        let first = videos[0].unwrap();
        let third = videos[2].unwrap();
        assert_eq!(
            model.autoplay_media().collect::<Vec<_>>(),
            [first, third],
            "non-autoplay media is never controlled"
        );

        let change = model.select_page(6);
        assert_eq!(change.physical, Some(2));
        assert_eq!(
            change.commands,
            [MediaCommand::Pause(first), MediaCommand::Play(third)]
        );
    }

    #[test]
    fn dispatch_forwards_commands_in_order() {
        #[derive(Default)]
        struct Log(Vec<(bool, NodeId)>);
        impl MediaController for Log {
            fn play(&mut self, node: NodeId) {
                self.0.push((true, node));
            }
            fn pause(&mut self, node: NodeId) {
                self.0.push((false, node));
            }
        }

        let (doc, root, videos) = carousel(false, &[Some(true), Some(true)]);
        let model = CarouselModel::new(&doc, root).unwrap();
        let mut log = Log::default();
        model.select_page(0).dispatch(&mut log);
        assert_eq!(
            log.0,
            [(true, videos[0].unwrap()), (false, videos[1].unwrap())]
        );
    }

    #[test]
    fn out_of_range_bounded_page_pauses_everything() {
        let (doc, root, videos) = carousel(false, &[Some(true)]);
        let model = CarouselModel::new(&doc, root).unwrap();
        let change = model.select_page(3);
        assert_eq!(change.physical, None);
        assert_eq!(change.commands, [MediaCommand::Pause(videos[0].unwrap())]);
    }

    #[test]
    fn non_carousel_is_rejected() {
        let mut tree = NodeTree::new();
        let root = tree.create_node("root", NodeKind::CONTAINER);
        let doc = tree.finish(root).unwrap();
        assert_eq!(
            CarouselModel::new(&doc, root).unwrap_err(),
            TreeError::NotACarousel(root)
        );
    }
}
