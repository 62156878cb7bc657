// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera yaw correction.
//!
//! A horizontal reticle should follow the camera's y rotation so its square
//! stays visually upright. Near straight-down tilts the camera's y euler angle
//! becomes unstable, so the correction blends toward a yaw derived from the
//! camera's rotation matrix across a tilt band and uses that yaw alone past
//! the band.

use core::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::Mat4;

/// Camera tilt at which euler y starts blending toward matrix yaw.
pub const TILT_BLEND_START: f32 = FRAC_PI_2 * 0.65;

/// Camera tilt past which the matrix yaw is used alone.
pub const TILT_BLEND_END: f32 = FRAC_PI_2 * 0.75;

#[cfg(feature = "std")]
fn atan2(y: f32, x: f32) -> f32 {
    y.atan2(x)
}

#[cfg(not(feature = "std"))]
fn atan2(y: f32, x: f32) -> f32 {
    libm::atan2f(y, x)
}

fn abs(x: f32) -> f32 {
    if x < 0.0 { -x } else { x }
}

/// Yaw angle derived from a camera's world transform.
///
/// This stays well-defined as the camera pitches toward straight down, unlike
/// the y euler angle.
#[must_use]
pub fn yaw_from_transform(transform: &Mat4) -> f32 {
    atan2(transform.x_axis.x, transform.y_axis.x)
}

/// Normalize `angle` in steps of 90° such that the rotation to `reference` is
/// minimal.
#[must_use]
pub fn normalize_toward(angle: f32, reference: f32) -> f32 {
    let mut normalized = angle;
    while abs(normalized - reference) > FRAC_PI_4 {
        if angle > reference {
            normalized -= FRAC_PI_2;
        } else {
            normalized += FRAC_PI_2;
        }
    }
    normalized
}

/// Corrected y rotation for the reticle given the camera's `tilt` (absolute x
/// euler angle), its y euler angle, and its matrix-derived `yaw`.
///
/// Below [`TILT_BLEND_START`] the euler angle is used directly; above
/// [`TILT_BLEND_END`] the yaw is used alone; in between the two are blended
/// linearly, with the euler angle first normalized for minimal rotation
/// toward the yaw.
#[must_use]
pub fn corrected_y_rotation(tilt: f32, euler_y: f32, yaw: f32) -> f32 {
    let tilt = abs(tilt);
    if tilt < TILT_BLEND_START {
        euler_y
    } else if tilt < TILT_BLEND_END {
        let relative = abs((tilt - TILT_BLEND_START) / (TILT_BLEND_END - TILT_BLEND_START));
        let normalized_y = normalize_toward(euler_y, yaw);
        normalized_y * (1.0 - relative) + yaw * relative
    } else {
        yaw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::PI;
    use glam::{Quat, Vec3};

    #[test]
    fn shallow_tilt_uses_euler_y() {
        assert_eq!(corrected_y_rotation(0.2, 1.1, -2.0), 1.1);
    }

    #[test]
    fn steep_tilt_uses_yaw_alone() {
        assert_eq!(corrected_y_rotation(FRAC_PI_2, 1.1, -0.4), -0.4);
    }

    #[test]
    fn band_blends_between_normalized_euler_and_yaw() {
        let tilt = (TILT_BLEND_START + TILT_BLEND_END) / 2.0;
        let euler_y = 0.3;
        let yaw = 0.5;
        let got = corrected_y_rotation(tilt, euler_y, yaw);
        // Midway through the band: equal parts of each.
        assert!((got - 0.4).abs() < 1e-5);
    }

    #[test]
    fn negative_tilt_is_folded() {
        assert_eq!(
            corrected_y_rotation(-0.2, 0.9, 0.0),
            corrected_y_rotation(0.2, 0.9, 0.0)
        );
    }

    #[test]
    fn normalize_lands_within_quarter_turn() {
        for &(angle, reference) in &[(PI, 0.0), (-PI, 0.1), (2.5, -2.5), (0.0, 0.0)] {
            let n = normalize_toward(angle, reference);
            assert!(
                (n - reference).abs() <= FRAC_PI_4 + 1e-6,
                "normalize_toward({angle}, {reference}) left {n}"
            );
        }
    }

    #[test]
    fn normalize_moves_in_quarter_turn_steps() {
        let n = normalize_toward(PI, 0.0);
        let steps = (PI - n) / FRAC_PI_2;
        assert!((steps - steps.round()).abs() < 1e-6);
    }

    #[test]
    fn yaw_of_identity_transform() {
        let m = Mat4::IDENTITY;
        // atan2(1, 0) for the identity: a quarter turn.
        assert!((yaw_from_transform(&m) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn yaw_tracks_rotation_about_z() {
        let m = Mat4::from_quat(Quat::from_axis_angle(Vec3::Z, 0.25));
        let base = yaw_from_transform(&Mat4::IDENTITY);
        assert!((yaw_from_transform(&m) - (base + 0.25)).abs() < 1e-5);
    }
}
