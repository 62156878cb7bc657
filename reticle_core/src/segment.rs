// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wireframe segment geometry for the classic style.
//!
//! The square consists of eight segments as follows, which can be
//! individually animated:
//!
//! ```text
//!     s0  s1
//!     _   _
//! s2 |     | s3
//!
//! s4 |     | s5
//!     -   -
//!     s6  s7
//! ```
//!
//! All segment geometry is expressed in the square's local space against a
//! 1×1 outline; the positioning node scales the whole assembly to the
//! physical [`SIZE`].

use glam::Vec3;

/// Original size of the square in meters.
pub const SIZE: f32 = 0.17;

/// Thickness of the square's lines in meters.
pub const THICKNESS: f32 = 0.018;

/// Scale factor for the square when it is closed, w.r.t. the original size.
pub const SCALE_FOR_CLOSED: f32 = 0.97;

/// Length of a segment's long side, w.r.t. a 1×1 square.
pub const LENGTH: f32 = 0.5;

/// Side length of a segment when the square is open, w.r.t. a 1×1 square.
pub const OPEN_LENGTH: f32 = 0.2;

/// Which corner of the square a segment belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Corner {
    /// Segments s0 and s2.
    TopLeft,
    /// Segments s1 and s3.
    TopRight,
    /// Segments s4 and s6.
    BottomLeft,
    /// Segments s5 and s7.
    BottomRight,
}

/// Whether a segment runs along the square's x axis or z axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Axis {
    /// Runs along x: s0, s1, s6, s7.
    Horizontal,
    /// Runs along z: s2, s3, s4, s5.
    Vertical,
}

/// Direction a segment slides when the square opens.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    /// Toward negative z.
    Up,
    /// Toward positive z.
    Down,
    /// Toward negative x.
    Left,
    /// Toward positive x.
    Right,
}

impl Direction {
    /// The opposite direction, used when closing.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// One of the eight wireframe segments.
///
/// The host realizes each segment as a unit plane mesh; `position` and
/// `scale` here are the local transform to apply to that mesh.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// The corner this segment belongs to.
    pub corner: Corner,
    /// The axis this segment runs along.
    pub axis: Axis,
    /// Local position within the square.
    pub position: Vec3,
    /// Local scale of the unit mesh.
    pub scale: Vec3,
}

impl Segment {
    fn new(corner: Corner, axis: Axis) -> Self {
        let scale = match axis {
            Axis::Horizontal => Vec3::new(LENGTH, 1.0, THICKNESS),
            Axis::Vertical => Vec3::new(THICKNESS, 1.0, LENGTH),
        };
        Self {
            corner,
            axis,
            position: Vec3::ZERO,
            scale,
        }
    }

    /// Direction this segment slides when the square opens.
    #[must_use]
    pub fn open_direction(&self) -> Direction {
        match (self.corner, self.axis) {
            (Corner::TopLeft, Axis::Horizontal) => Direction::Left,
            (Corner::TopLeft, Axis::Vertical) => Direction::Up,
            (Corner::TopRight, Axis::Horizontal) => Direction::Right,
            (Corner::TopRight, Axis::Vertical) => Direction::Up,
            (Corner::BottomLeft, Axis::Horizontal) => Direction::Left,
            (Corner::BottomLeft, Axis::Vertical) => Direction::Down,
            (Corner::BottomRight, Axis::Horizontal) => Direction::Right,
            (Corner::BottomRight, Axis::Vertical) => Direction::Down,
        }
    }

    /// Slide apart and shorten to the open length.
    pub fn open(&mut self) {
        match self.axis {
            Axis::Horizontal => self.scale.x = OPEN_LENGTH,
            Axis::Vertical => self.scale.z = OPEN_LENGTH,
        }
        let offset = LENGTH / 2.0 - OPEN_LENGTH / 2.0;
        self.slide(offset, self.open_direction());
    }

    /// Slide back together and restore the full length.
    pub fn close(&mut self) {
        let old_length = match self.axis {
            Axis::Horizontal => {
                let old = self.scale.x;
                self.scale.x = LENGTH;
                old
            }
            Axis::Vertical => {
                let old = self.scale.z;
                self.scale.z = LENGTH;
                old
            }
        };
        let offset = LENGTH / 2.0 - old_length / 2.0;
        self.slide(offset, self.open_direction().reversed());
    }

    fn slide(&mut self, offset: f32, direction: Direction) {
        match direction {
            Direction::Left => self.position.x -= offset,
            Direction::Right => self.position.x += offset,
            Direction::Up => self.position.z -= offset,
            Direction::Down => self.position.z += offset,
        }
    }
}

/// Build the eight segments in their closed layout.
#[must_use]
pub fn layout() -> [Segment; 8] {
    let mut segments = [
        Segment::new(Corner::TopLeft, Axis::Horizontal),
        Segment::new(Corner::TopRight, Axis::Horizontal),
        Segment::new(Corner::TopLeft, Axis::Vertical),
        Segment::new(Corner::TopRight, Axis::Vertical),
        Segment::new(Corner::BottomLeft, Axis::Vertical),
        Segment::new(Corner::BottomRight, Axis::Vertical),
        Segment::new(Corner::BottomLeft, Axis::Horizontal),
        Segment::new(Corner::BottomRight, Axis::Horizontal),
    ];

    let sl = LENGTH;
    // Half-thickness correction to align the line ends exactly.
    let c = THICKNESS / 2.0;
    segments[0].position += Vec3::new(-(sl / 2.0 - c), 0.0, -(sl - c));
    segments[1].position += Vec3::new(sl / 2.0 - c, 0.0, -(sl - c));
    segments[2].position += Vec3::new(-sl, 0.0, -sl / 2.0);
    segments[3].position += Vec3::new(sl, 0.0, -sl / 2.0);
    segments[4].position += Vec3::new(-sl, 0.0, sl / 2.0);
    segments[5].position += Vec3::new(sl, 0.0, sl / 2.0);
    segments[6].position += Vec3::new(-(sl / 2.0 - c), 0.0, sl - c);
    segments[7].position += Vec3::new(sl / 2.0 - c, 0.0, sl - c);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_symmetric() {
        let segments = layout();
        // Top-row segments mirror the bottom row across z = 0.
        assert_eq!(segments[0].position.x, segments[6].position.x);
        assert_eq!(segments[0].position.z, -segments[6].position.z);
        // Left column mirrors the right column across x = 0.
        assert_eq!(segments[2].position.x, -segments[3].position.x);
        assert_eq!(segments[2].position.z, segments[3].position.z);
    }

    #[test]
    fn horizontal_segments_are_wide_and_thin() {
        for segment in layout() {
            match segment.axis {
                Axis::Horizontal => {
                    assert_eq!(segment.scale.x, LENGTH);
                    assert_eq!(segment.scale.z, THICKNESS);
                }
                Axis::Vertical => {
                    assert_eq!(segment.scale.x, THICKNESS);
                    assert_eq!(segment.scale.z, LENGTH);
                }
            }
        }
    }

    #[test]
    fn open_then_close_round_trips() {
        for mut segment in layout() {
            let original = segment;
            segment.open();
            assert_ne!(segment, original);
            segment.close();
            let dp = (segment.position - original.position).length();
            let ds = (segment.scale - original.scale).length();
            assert!(dp < 1e-6, "position must round-trip");
            assert!(ds < 1e-6, "scale must round-trip");
        }
    }

    #[test]
    fn opening_shortens_along_the_run_axis() {
        let mut segment = layout()[0];
        segment.open();
        assert_eq!(segment.scale.x, OPEN_LENGTH);
        assert_eq!(segment.scale.z, THICKNESS);
    }

    #[test]
    fn opening_slides_away_from_center() {
        let mut top_left = layout()[0];
        let before = top_left.position.x;
        top_left.open();
        // s0 opens to the left.
        assert!(top_left.position.x < before);
    }

    #[test]
    fn closed_square_is_slightly_smaller() {
        assert!(SCALE_FOR_CLOSED < 1.0);
        assert!((SIZE * SCALE_FOR_CLOSED - 0.1649).abs() < 1e-4);
    }
}
