// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declared layout intent: frames, alignment, and padding.
//!
//! Declared values are in points. The layout pass scales them to pixels with
//! [`LayoutConfig::density`](crate::config::LayoutConfig::density) before any
//! sizing rule sees them.

use kurbo::Insets;

/// Upper bound declared on one axis of a [`Frame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaxDimension {
    /// A finite maximum extent.
    Finite(f64),
    /// An explicit "fill whatever the parent offers".
    Infinite,
}

/// One of nine anchors a node can be aligned to inside a box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Top-left corner.
    TopLeading,
    /// Center of the top edge.
    Top,
    /// Top-right corner.
    TopTrailing,
    /// Center of the left edge.
    Leading,
    /// Center of the box.
    #[default]
    Center,
    /// Center of the right edge.
    Trailing,
    /// Bottom-left corner.
    BottomLeading,
    /// Center of the bottom edge.
    Bottom,
    /// Bottom-right corner.
    BottomTrailing,
}

/// Where an alignment places a node along a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisAnchor {
    /// Leading (horizontal) or top (vertical) edge.
    Start,
    /// Centered.
    Center,
    /// Trailing (horizontal) or bottom (vertical) edge.
    End,
}

impl Alignment {
    /// All nine alignments, row by row.
    pub const ALL: [Self; 9] = [
        Self::TopLeading,
        Self::Top,
        Self::TopTrailing,
        Self::Leading,
        Self::Center,
        Self::Trailing,
        Self::BottomLeading,
        Self::Bottom,
        Self::BottomTrailing,
    ];

    /// Returns the horizontal anchor.
    #[must_use]
    pub const fn horizontal(self) -> AxisAnchor {
        match self {
            Self::TopLeading | Self::Leading | Self::BottomLeading => AxisAnchor::Start,
            Self::Top | Self::Center | Self::Bottom => AxisAnchor::Center,
            Self::TopTrailing | Self::Trailing | Self::BottomTrailing => AxisAnchor::End,
        }
    }

    /// Returns the vertical anchor.
    #[must_use]
    pub const fn vertical(self) -> AxisAnchor {
        match self {
            Self::TopLeading | Self::Top | Self::TopTrailing => AxisAnchor::Start,
            Self::Leading | Self::Center | Self::Trailing => AxisAnchor::Center,
            Self::BottomLeading | Self::Bottom | Self::BottomTrailing => AxisAnchor::End,
        }
    }
}

/// Independent insets on each edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Left inset.
    pub leading: f64,
    /// Right inset.
    pub trailing: f64,
    /// Top inset.
    pub top: f64,
    /// Bottom inset.
    pub bottom: f64,
}

impl Padding {
    /// No padding on any edge.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Creates padding from the four edges.
    #[must_use]
    pub const fn new(leading: f64, trailing: f64, top: f64, bottom: f64) -> Self {
        Self {
            leading,
            trailing,
            top,
            bottom,
        }
    }

    /// Creates the same padding on every edge.
    #[must_use]
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// Sum of the leading and trailing insets.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.leading + self.trailing
    }

    /// Sum of the top and bottom insets.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Returns the padding scaled by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.leading * factor,
            self.trailing * factor,
            self.top * factor,
            self.bottom * factor,
        )
    }

    /// Converts to `kurbo` insets (leading is the left edge).
    #[must_use]
    pub fn to_insets(&self) -> Insets {
        Insets::new(self.leading, self.top, self.trailing, self.bottom)
    }
}

/// A node's declared sizing intent.
///
/// Every field is optional; an absent field never constrains anything.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    /// Explicit width.
    pub width: Option<f64>,
    /// Explicit height.
    pub height: Option<f64>,
    /// Minimum width.
    pub min_width: Option<f64>,
    /// Minimum height.
    pub min_height: Option<f64>,
    /// Maximum width.
    pub max_width: Option<MaxDimension>,
    /// Maximum height.
    pub max_height: Option<MaxDimension>,
    /// Width divided by height. Unitless.
    pub aspect_ratio: Option<f64>,
    /// Where the node sits inside the box its parent allots.
    pub alignment: Option<Alignment>,
}

/// The declared intent for a single axis, extracted from a [`Frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisIntent {
    /// Explicit extent.
    pub explicit: Option<f64>,
    /// Minimum extent.
    pub min: Option<f64>,
    /// Maximum extent.
    pub max: Option<MaxDimension>,
}

impl Frame {
    /// Creates a frame with an explicit size.
    #[must_use]
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Sets the alignment.
    #[must_use]
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Returns the horizontal intent.
    #[must_use]
    pub fn horizontal(&self) -> AxisIntent {
        AxisIntent {
            explicit: self.width,
            min: self.min_width,
            max: self.max_width,
        }
    }

    /// Returns the vertical intent.
    #[must_use]
    pub fn vertical(&self) -> AxisIntent {
        AxisIntent {
            explicit: self.height,
            min: self.min_height,
            max: self.max_height,
        }
    }

    /// Returns the frame with every length scaled by `factor`.
    ///
    /// The aspect ratio is unitless and left untouched.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        let scale_max = |m: Option<MaxDimension>| {
            m.map(|m| match m {
                MaxDimension::Finite(v) => MaxDimension::Finite(v * factor),
                MaxDimension::Infinite => MaxDimension::Infinite,
            })
        };
        Self {
            width: self.width.map(|v| v * factor),
            height: self.height.map(|v| v * factor),
            min_width: self.min_width.map(|v| v * factor),
            min_height: self.min_height.map(|v| v * factor),
            max_width: scale_max(self.max_width),
            max_height: scale_max(self.max_height),
            aspect_ratio: self.aspect_ratio,
            alignment: self.alignment,
        }
    }
}
