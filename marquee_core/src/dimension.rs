// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constraint axis algebra.
//!
//! A [`Dimension`] is either [`Unbounded`](Dimension::Unbounded) or a concrete
//! [`Value`](Dimension::Value). Two dimensions form a [`Constraints`] pair that
//! a parent passes down to each child during layout.
//!
//! The comparison operators ([`min`](Dimension::min), [`max`](Dimension::max),
//! [`clamp`](Dimension::clamp)) are only defined when every operand is
//! concrete and return `None` otherwise. What "unbounded intersected with a
//! finite maximum" means is decided by each sizing rule, never here.

use kurbo::Size;

/// A single constraint axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Dimension {
    /// No bound on this axis.
    #[default]
    Unbounded,
    /// A concrete extent in pixels.
    Value(f64),
}

impl Dimension {
    /// Returns `true` if this axis has no bound.
    #[inline]
    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Returns the concrete value, if any.
    #[inline]
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Unbounded => None,
            Self::Value(v) => Some(v),
        }
    }

    /// Returns the concrete value, or `default` if unbounded.
    #[inline]
    #[must_use]
    pub const fn value_or(self, default: f64) -> f64 {
        match self {
            Self::Unbounded => default,
            Self::Value(v) => v,
        }
    }

    /// Returns the smaller of two concrete dimensions.
    ///
    /// Returns `None` if either operand is unbounded.
    #[must_use]
    pub fn min(self, other: Self) -> Option<Self> {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => Some(Self::Value(a.min(b))),
            _ => None,
        }
    }

    /// Returns the larger of two concrete dimensions.
    ///
    /// Returns `None` if either operand is unbounded.
    #[must_use]
    pub fn max(self, other: Self) -> Option<Self> {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => Some(Self::Value(a.max(b))),
            _ => None,
        }
    }

    /// Clamps a concrete dimension into `[lower, upper]`.
    ///
    /// The lower bound wins when the bounds cross. Returns `None` if any
    /// operand is unbounded.
    #[must_use]
    pub fn clamp(self, lower: Self, upper: Self) -> Option<Self> {
        self.min(upper)?.max(lower)
    }
}

impl From<f64> for Dimension {
    #[inline]
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

/// The `(width, height)` bounds a parent passes to a child.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Constraints {
    /// Horizontal bound.
    pub width: Dimension,
    /// Vertical bound.
    pub height: Dimension,
}

impl Constraints {
    /// Both axes unbounded.
    pub const UNBOUNDED: Self = Self {
        width: Dimension::Unbounded,
        height: Dimension::Unbounded,
    };

    /// Creates a constraint pair.
    #[inline]
    #[must_use]
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    /// Creates a constraint pair with both axes fixed to `size`.
    #[inline]
    #[must_use]
    pub const fn fixed(size: Size) -> Self {
        Self {
            width: Dimension::Value(size.width),
            height: Dimension::Value(size.height),
        }
    }

    /// Returns `true` if both axes are unbounded.
    #[inline]
    #[must_use]
    pub const fn is_fully_unbounded(self) -> bool {
        self.width.is_unbounded() && self.height.is_unbounded()
    }

    /// Shrinks concrete axes by the given insets, saturating at zero.
    ///
    /// Unbounded axes stay unbounded.
    #[must_use]
    pub fn shrink(self, horizontal: f64, vertical: f64) -> Self {
        let shrink_axis = |d: Dimension, by: f64| match d {
            Dimension::Unbounded => Dimension::Unbounded,
            Dimension::Value(v) => Dimension::Value((v - by).max(0.0)),
        };
        Self {
            width: shrink_axis(self.width, horizontal),
            height: shrink_axis(self.height, vertical),
        }
    }
}
