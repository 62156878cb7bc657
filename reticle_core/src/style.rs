// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation styles.
//!
//! Two styles are supported: the classic wireframe square made of eight
//! segments that open while estimating and close once locked onto a plane,
//! and a colored fill plane whose material color reports the tracking state
//! at a glance.

use crate::segment::THICKNESS;

/// Linear RGBA color handed to the host's material system.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    /// Red component in `0.0..=1.0`.
    pub r: f32,
    /// Green component in `0.0..=1.0`.
    pub g: f32,
    /// Blue component in `0.0..=1.0`.
    pub b: f32,
    /// Opacity in `0.0..=1.0`.
    pub a: f32,
}

impl Color {
    /// An opaque color from its components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// A color from all four components.
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// The same color with a different opacity.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// A mesh for the host to generate, described by its dimensions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneMesh {
    /// Extent along the local x axis.
    pub width: f32,
    /// Extent along the local z axis.
    pub depth: f32,
}

impl PlaneMesh {
    /// The default fill plane for the colored style.
    ///
    /// Sized to sit inside the classic square's outline: a unit plane shrunk
    /// by the line thickness on each side, with a half-thickness correction to
    /// align the edges exactly.
    #[must_use]
    pub fn default_fill() -> Self {
        let correction = THICKNESS / 2.0;
        let length = 1.0 - THICKNESS * 2.0 + correction;
        Self {
            width: length,
            depth: length,
        }
    }
}

/// Visual style of the reticle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Style {
    /// The classic eight-segment wireframe square.
    Classic {
        /// Line color of the segments.
        color: Color,
    },
    /// A colored fill plane reporting the tracking state.
    Colored {
        /// Color while tracking the surface of a known plane.
        on_color: Color,
        /// Color while tracking an estimated plane.
        off_color: Color,
        /// Color while no surface tracking is achieved.
        non_tracking_color: Color,
        /// The fill mesh for the host to generate.
        mesh: PlaneMesh,
    },
}

impl Style {
    /// The classic style in its traditional gold.
    #[must_use]
    pub const fn classic() -> Self {
        Self::Classic {
            color: Color::rgb(1.0, 0.8, 0.0),
        }
    }

    /// The colored style with its traditional traffic-light palette.
    #[must_use]
    pub fn plane() -> Self {
        Self::Colored {
            on_color: Color::rgb(0.0, 1.0, 0.0),
            off_color: Color::rgb(1.0, 0.65, 0.0),
            non_tracking_color: Color::rgb(1.0, 0.0, 0.0).with_alpha(0.2),
            mesh: PlaneMesh::default_fill(),
        }
    }

    /// Returns `true` for the colored-fill style.
    #[must_use]
    pub fn is_colored(&self) -> bool {
        matches!(self, Self::Colored { .. })
    }

    /// The fill color for the colored style given the current tracking
    /// condition, or `None` for the classic style.
    #[must_use]
    pub fn fill_color(&self, tracking: bool, on_plane: bool) -> Option<Color> {
        match *self {
            Self::Classic { .. } => None,
            Self::Colored {
                on_color,
                off_color,
                non_tracking_color,
                ..
            } => Some(if !tracking {
                non_tracking_color
            } else if on_plane {
                on_color
            } else {
                off_color
            }),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::classic()
    }
}
