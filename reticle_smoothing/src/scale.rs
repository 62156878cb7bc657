// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance-based scale compensation.
//!
//! Reduce visual size change with distance by scaling up when close and down
//! when far away. The piecewise mapping yields a scale of 1.0 for a distance
//! of 0.7 m (estimated distance when looking at a table) and 1.2 for 1.5 m
//! (estimated distance when looking at the floor), with no jump at the knee.

use glam::Vec3;

/// Distance at which the compensated scale reaches 1.0.
pub const KNEE_DISTANCE: f32 = 0.7;

/// Compensated scale factor for a reticle at `distance` from the camera.
///
/// Linear from 0 at distance 0 up to 1.0 at [`KNEE_DISTANCE`]; beyond the
/// knee an affine ramp `0.25·d + 0.825` keeps apparent size roughly constant.
#[must_use]
pub fn scale_for_distance(distance: f32) -> f32 {
    if distance < KNEE_DISTANCE {
        distance / KNEE_DISTANCE
    } else {
        0.25 * distance + 0.825
    }
}

/// Compensated scale for a reticle at `position`, seen from `camera_position`.
///
/// Returns 1.0 when the camera position is unknown.
#[must_use]
pub fn scale_for_camera(position: Vec3, camera_position: Option<Vec3>) -> f32 {
    match camera_position {
        Some(cam) => scale_for_distance(position.distance(cam)),
        None => 1.0,
    }
}
