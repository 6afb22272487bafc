// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of node variants.

use kurbo::Size;

use crate::frame::Alignment;

/// What a node is, and the variant-specific data its sizing rule needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeKind {
    /// A layered stack. Children are laid out against the content box and
    /// placed with their own frame alignment, falling back to `alignment`.
    Container {
        /// Default placement of children.
        alignment: Alignment,
    },
    /// A paged container; each child is one page.
    Carousel {
        /// Whether paging wraps around past the last page.
        looping: bool,
    },
    /// Text whose measured size is supplied by resource binding.
    Text {
        /// Measured size in points, if known.
        measured: Option<Size>,
    },
    /// A bitmap with an optional intrinsic size.
    Image {
        /// Intrinsic size in points, if known.
        intrinsic: Option<Size>,
    },
    /// Embedded web content.
    Web,
    /// A filled shape.
    Rectangle,
    /// An audio player.
    Audio {
        /// Whether playback follows carousel page visibility.
        autoplay: bool,
    },
    /// A video player.
    Video {
        /// Whether playback follows carousel page visibility.
        autoplay: bool,
    },
}

impl NodeKind {
    /// A container with centered children.
    pub const CONTAINER: Self = Self::Container {
        alignment: Alignment::Center,
    };

    /// Returns `true` if this kind owns an ordered list of children.
    #[must_use]
    pub const fn accepts_children(&self) -> bool {
        matches!(self, Self::Container { .. } | Self::Carousel { .. })
    }

    /// Returns `true` for audio/video nodes flagged for autoplay.
    #[must_use]
    pub const fn is_autoplay_media(&self) -> bool {
        matches!(
            self,
            Self::Audio { autoplay: true } | Self::Video { autoplay: true }
        )
    }

    /// Returns the natural size supplied by resource binding, if any.
    #[must_use]
    pub const fn natural_size(&self) -> Option<Size> {
        match *self {
            Self::Text { measured } => measured,
            Self::Image { intrinsic } => intrinsic,
            _ => None,
        }
    }

    /// Short lowercase name, for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Container { .. } => "container",
            Self::Carousel { .. } => "carousel",
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Web => "web",
            Self::Rectangle => "rectangle",
            Self::Audio { .. } => "audio",
            Self::Video { .. } => "video",
        }
    }
}
