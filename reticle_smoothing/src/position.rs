// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sliding-window position averaging.

use glam::Vec3;
use smallvec::SmallVec;

/// Default number of recent positions retained by [`PositionWindow::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A fixed-capacity FIFO over recent world positions.
///
/// Hit-test results jitter frame to frame even against a stationary surface.
/// Pushing each measured position through this window and displaying the
/// running mean keeps the reticle visually steady while it still follows the
/// surface as the camera moves.
///
/// The reported position is always the arithmetic mean of at most the last
/// `capacity` inputs; while the window is filling it averages over however
/// many samples have arrived.
#[derive(Clone, Debug)]
pub struct PositionWindow {
    samples: SmallVec<[Vec3; DEFAULT_CAPACITY]>,
    capacity: usize,
}

impl Default for PositionWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionWindow {
    /// Create a window with the default capacity of [`DEFAULT_CAPACITY`] samples.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a window retaining up to `capacity` samples.
    ///
    /// A capacity of zero is treated as one; an empty window has no meaningful
    /// average.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: SmallVec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a measured position and return the smoothed position.
    ///
    /// Evicts the oldest sample once the window is full.
    pub fn push(&mut self, position: Vec3) -> Vec3 {
        if self.samples.len() == self.capacity {
            self.samples.remove(0);
        }
        self.samples.push(position);
        // Non-empty by construction, so the average exists.
        self.average().unwrap_or(position)
    }

    /// The mean of the retained samples, or `None` while the window is empty.
    #[must_use]
    pub fn average(&self) -> Option<Vec3> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: Vec3 = self.samples.iter().copied().sum();
        #[allow(
            clippy::cast_precision_loss,
            reason = "Window capacities are tiny; the count is exactly representable."
        )]
        Some(sum / self.samples.len() as f32)
    }

    /// Number of samples currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no samples have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop all retained samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_is_none_while_empty() {
        let window = PositionWindow::new();
        assert!(window.average().is_none());
        assert!(window.is_empty());
    }

    #[test]
    fn partial_window_averages_over_present_samples() {
        let mut window = PositionWindow::new();
        window.push(Vec3::new(0.0, 0.0, 0.0));
        window.push(Vec3::new(2.0, 4.0, 6.0));
        let avg = window.push(Vec3::new(4.0, 2.0, 0.0));
        assert_eq!(avg, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn full_window_evicts_oldest() {
        let mut window = PositionWindow::with_capacity(3);
        window.push(Vec3::splat(100.0));
        window.push(Vec3::splat(1.0));
        window.push(Vec3::splat(2.0));
        // The outlier at 100 falls out of the window here.
        let avg = window.push(Vec3::splat(3.0));
        assert_eq!(avg, Vec3::splat(2.0));
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn reported_position_matches_mean_of_last_ten() {
        let mut window = PositionWindow::new();
        let mut last = Vec3::ZERO;
        for i in 0..25 {
            last = window.push(Vec3::new(i as f32, 0.0, 0.0));
        }
        // Inputs 15..=24 remain; their mean is 19.5.
        assert_eq!(window.len(), DEFAULT_CAPACITY);
        assert!((last.x - 19.5).abs() < 1e-6);
    }

    #[test]
    fn clear_resets_average() {
        let mut window = PositionWindow::new();
        window.push(Vec3::splat(5.0));
        window.clear();
        assert!(window.average().is_none());
        assert_eq!(window.push(Vec3::splat(7.0)), Vec3::splat(7.0));
    }

    #[test]
    fn zero_capacity_behaves_as_single_sample() {
        let mut window = PositionWindow::with_capacity(0);
        window.push(Vec3::splat(1.0));
        let avg = window.push(Vec3::splat(9.0));
        assert_eq!(avg, Vec3::splat(9.0));
        assert_eq!(window.len(), 1);
    }
}
