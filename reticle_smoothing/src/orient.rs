// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation interpolation with a settle test.

use glam::{Quat, Vec3};

/// Interpolation factor applied per step while an orientation change animates.
pub const SLERP_STEP: f32 = 0.15;

/// Distance between rotated forward vectors below which the tracker snaps to
/// the target and stops animating.
pub const SETTLE_DISTANCE: f32 = 0.03;

/// Reference vector rotated by both orientations to measure their separation.
const FORWARD: Vec3 = Vec3::NEG_Z;

/// Eases the presented orientation toward a target orientation.
///
/// While animating, each [`step_toward`](Self::step_toward) call advances the
/// current orientation by a fixed spherical-interpolation step. Convergence is
/// measured by rotating a reference forward vector through both the current
/// and target orientations; once the rotated vectors are within
/// [`SETTLE_DISTANCE`] of each other the tracker assigns the raw target and
/// stops animating. When not animating, the target is assigned directly.
///
/// The step must be called on every frame the animation is desired, not just
/// the first.
#[derive(Clone, Copy, Debug)]
pub struct OrientationTracker {
    current: Quat,
    animating: bool,
}

impl Default for OrientationTracker {
    fn default() -> Self {
        Self::new(Quat::IDENTITY)
    }
}

impl OrientationTracker {
    /// Create a tracker resting at `initial`.
    #[must_use]
    pub fn new(initial: Quat) -> Self {
        Self {
            current: initial,
            animating: false,
        }
    }

    /// The orientation currently presented.
    #[must_use]
    pub fn current(&self) -> Quat {
        self.current
    }

    /// Returns `true` while an orientation change is easing in.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Assign an orientation directly, cancelling any animation in progress.
    pub fn set(&mut self, orientation: Quat) {
        self.current = orientation;
        self.animating = false;
    }

    /// Begin easing toward subsequent [`step_toward`](Self::step_toward) targets.
    pub fn begin_change(&mut self) {
        self.animating = true;
    }

    /// Advance one frame toward `target` and return the presented orientation.
    pub fn step_toward(&mut self, target: Quat) -> Quat {
        if !self.animating {
            self.current = target;
            return self.current;
        }
        self.current = self.current.slerp(target, SLERP_STEP);
        let presented = self.current * FORWARD;
        let goal = target * FORWARD;
        if presented.distance(goal) < SETTLE_DISTANCE {
            self.current = target;
            self.animating = false;
        }
        self.current
    }
}
