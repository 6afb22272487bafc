// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clip descriptors for node masks.
//!
//! A mask never influences sizing. It is resolved against a node's final frame
//! rect when the rendering backend needs a clip path.

use kurbo::{Rect, RoundedRect};

/// A shape used to clip a node's content and descendants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mask {
    /// An axis-aligned rectangle, optionally with rounded corners.
    Rectangle {
        /// Corner radius in points. Zero for square corners.
        corner_radius: f64,
    },
    /// A rectangle whose short sides are fully rounded.
    Capsule,
    /// The largest circle centered in the frame.
    Circle,
}

impl Mask {
    /// Resolves the mask against a frame rect.
    ///
    /// `density` scales declared point radii to pixels.
    #[must_use]
    pub fn clip(&self, rect: Rect, density: f64) -> RoundedRect {
        let short_side = rect.width().min(rect.height());
        match *self {
            Self::Rectangle { corner_radius } => {
                let radius = (corner_radius * density).clamp(0.0, short_side / 2.0);
                RoundedRect::from_rect(rect, radius)
            }
            Self::Capsule => RoundedRect::from_rect(rect, short_side / 2.0),
            Self::Circle => {
                let center = rect.center();
                let half = short_side / 2.0;
                let square = Rect::new(
                    center.x - half,
                    center.y - half,
                    center.x + half,
                    center.y + half,
                );
                RoundedRect::from_rect(square, half)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_radius_is_scaled_and_capped() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        let clip = Mask::Rectangle { corner_radius: 5.0 }.clip(rect, 2.0);
        assert_eq!(clip.rect(), rect);
        assert_eq!(clip.radii().top_left, 10.0);

        let clip = Mask::Rectangle {
            corner_radius: 500.0,
        }
        .clip(rect, 1.0);
        assert_eq!(clip.radii().top_left, 20.0, "radius capped at half short side");
    }

    #[test]
    fn capsule_and_circle() {
        let rect = Rect::new(10.0, 10.0, 110.0, 50.0);
        let capsule = Mask::Capsule.clip(rect, 1.0);
        assert_eq!(capsule.radii().bottom_right, 20.0);

        let circle = Mask::Circle.clip(rect, 1.0);
        assert_eq!(circle.rect(), Rect::new(40.0, 10.0, 80.0, 50.0));
        assert_eq!(circle.radii().top_left, 20.0);
    }
}
