// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-platform seam.
//!
//! ## Overview
//!
//! The reticle never talks to an AR runtime directly. A host adapter hands it
//! the camera for the current frame and answers a center-screen raycast, and
//! the reticle hands back a placement for the host's renderer to apply. This
//! keeps everything above the seam deterministic and testable with scripted
//! inputs.
//!
//! The generic `K` is the host's plane-anchor key — any small, copyable
//! handle (a slotmap key, a UUID wrapper, an integer id).

use alloc::vec::Vec;

use bitflags::bitflags;
use glam::{Mat4, Quat, Vec3};
use reticle_smoothing::Alignment;

use crate::style::PlaneMesh;

/// Quality of the host's world-tracking estimate for the current frame.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum TrackingQuality {
    /// Tracking is working normally.
    Normal,
    /// Tracking is degraded (for example during fast motion or low light).
    Limited,
    /// No tracking estimate is available.
    #[default]
    NotAvailable,
}

/// Camera state for one frame, as reported by the host session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraPose {
    /// Camera-to-world transform.
    pub transform: Mat4,
    /// Euler angles of the camera orientation, in radians.
    pub euler_angles: Vec3,
    /// World-tracking quality for this frame.
    pub quality: TrackingQuality,
}

impl CameraPose {
    /// World-space position of the camera.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }
}

bitflags! {
    /// Which surface estimates a raycast is allowed to resolve against.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct RaycastTarget: u8 {
        /// Geometry of a plane the host is already tracking.
        const EXISTING_PLANE_GEOMETRY = 1 << 0;
        /// A plane the host is still estimating.
        const ESTIMATED_PLANE = 1 << 1;
    }
}

impl Default for RaycastTarget {
    fn default() -> Self {
        Self::all()
    }
}

/// A plane the host session is tracking persistently.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PlaneAnchor<K> {
    /// Host-assigned identity of the anchor.
    pub id: K,
    /// The detected surface's alignment.
    pub alignment: Alignment,
}

/// One surface intersection returned by a host raycast.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RaycastHit<K> {
    /// World-space position of the intersection.
    pub position: Vec3,
    /// World-space orientation of the intersected surface.
    pub orientation: Quat,
    /// Which target kind this hit resolved against.
    pub target: RaycastTarget,
    /// Alignment the raycast query estimated for the surface, if any.
    pub target_alignment: Option<Alignment>,
    /// The tracked plane anchor behind the hit, when one exists.
    pub anchor: Option<PlaneAnchor<K>>,
}

impl<K: Copy> RaycastHit<K> {
    /// The alignment observed for this hit: the anchor's if tracked,
    /// otherwise the query's estimate.
    #[must_use]
    pub fn observed_alignment(&self) -> Option<Alignment> {
        match self.anchor {
            Some(anchor) => Some(anchor.alignment),
            None => self.target_alignment,
        }
    }
}

/// The host AR session, as seen by the reticle.
///
/// Implementations wrap a live session (camera feed, plane detection,
/// raycasting). Tests and demos use scripted implementations instead; see
/// [`crate::adapters::ScriptedHost`].
pub trait HostEnvironment<K> {
    /// Camera state for the current frame, or `None` when the session has no
    /// current frame.
    fn camera(&self) -> Option<CameraPose>;

    /// Cast a ray from the screen center into the scene.
    ///
    /// Hits must be ordered nearest-first. `allowing` restricts which surface
    /// estimates may be reported.
    fn raycast(&self, allowing: RaycastTarget) -> Vec<RaycastHit<K>>;

    /// Realize the colored style's fill mesh and material.
    ///
    /// A host that cannot load the resources returns `false`; the session
    /// then falls back to the classic style. The default accepts.
    fn realize_fill_mesh(&mut self, mesh: &PlaneMesh) -> bool {
        let _ = mesh;
        true
    }
}

/// Select the best hit from a nearest-first candidate list.
///
/// Prefers the first hit on existing plane geometry; falls back to the first
/// hit on an estimated plane. `allowing` filters which of the two classes are
/// eligible at all.
#[must_use]
pub fn smart_raycast<K: Copy>(
    hits: &[RaycastHit<K>],
    allowing: RaycastTarget,
) -> Option<RaycastHit<K>> {
    if allowing.contains(RaycastTarget::EXISTING_PLANE_GEOMETRY)
        && let Some(hit) = hits
            .iter()
            .find(|h| h.target.contains(RaycastTarget::EXISTING_PLANE_GEOMETRY))
    {
        return Some(*hit);
    }
    if allowing.contains(RaycastTarget::ESTIMATED_PLANE) {
        return hits
            .iter()
            .find(|h| h.target.contains(RaycastTarget::ESTIMATED_PLANE))
            .copied();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(target: RaycastTarget, z: f32) -> RaycastHit<u32> {
        RaycastHit {
            position: Vec3::new(0.0, 0.0, z),
            orientation: Quat::IDENTITY,
            target,
            target_alignment: Some(Alignment::Horizontal),
            anchor: None,
        }
    }

    #[test]
    fn prefers_existing_geometry_over_nearer_estimate() {
        let hits = [
            hit(RaycastTarget::ESTIMATED_PLANE, -0.5),
            hit(RaycastTarget::EXISTING_PLANE_GEOMETRY, -2.0),
        ];
        let best = smart_raycast(&hits, RaycastTarget::all()).unwrap();
        assert_eq!(best.target, RaycastTarget::EXISTING_PLANE_GEOMETRY);
    }

    #[test]
    fn falls_back_to_estimated_plane() {
        let hits = [hit(RaycastTarget::ESTIMATED_PLANE, -1.0)];
        let best = smart_raycast(&hits, RaycastTarget::all()).unwrap();
        assert_eq!(best.target, RaycastTarget::ESTIMATED_PLANE);
    }

    #[test]
    fn filter_mask_excludes_classes() {
        let hits = [
            hit(RaycastTarget::ESTIMATED_PLANE, -0.5),
            hit(RaycastTarget::EXISTING_PLANE_GEOMETRY, -2.0),
        ];
        let best = smart_raycast(&hits, RaycastTarget::ESTIMATED_PLANE).unwrap();
        assert_eq!(best.target, RaycastTarget::ESTIMATED_PLANE);
        assert!(smart_raycast(&hits, RaycastTarget::empty()).is_none());
    }

    #[test]
    fn no_hits_is_not_an_error() {
        assert!(smart_raycast::<u32>(&[], RaycastTarget::all()).is_none());
    }

    #[test]
    fn anchor_alignment_outranks_query_estimate() {
        let mut h = hit(RaycastTarget::EXISTING_PLANE_GEOMETRY, -1.0);
        h.anchor = Some(PlaneAnchor {
            id: 7,
            alignment: Alignment::Vertical,
        });
        assert_eq!(h.observed_alignment(), Some(Alignment::Vertical));
    }
}
