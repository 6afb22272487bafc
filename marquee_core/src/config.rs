// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout pass configuration.

/// Tuning knobs for a layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Scale from declared points to device pixels.
    ///
    /// Applied to every declared frame length and padding edge before sizing.
    pub density: f64,
    /// Substitute extent for an axis that is still unbounded when an
    /// aspect-ratio node computes its candidate size while the other axis is
    /// concrete.
    pub unbounded_candidate: f64,
}

impl LayoutConfig {
    /// Default candidate extent for unbounded aspect-ratio axes.
    pub const DEFAULT_UNBOUNDED_CANDIDATE: f64 = 10_000.0;

    /// Returns a config with the given density and default everything else.
    #[must_use]
    pub fn with_density(density: f64) -> Self {
        Self {
            density,
            ..Self::default()
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            unbounded_candidate: Self::DEFAULT_UNBOUNDED_CANDIDATE,
        }
    }
}
