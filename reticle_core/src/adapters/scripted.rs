// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic, scripted host.

use alloc::vec;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::host::{CameraPose, HostEnvironment, RaycastHit, RaycastTarget};

/// One scripted frame: the camera (if any) and the raycast hits it sees.
pub type ScriptedFrame<K> = (Option<CameraPose>, Vec<RaycastHit<K>>);

/// A [`HostEnvironment`] that replays a pre-recorded frame sequence.
///
/// Each call to [`camera`](HostEnvironment::camera) serves the next frame;
/// the final frame repeats once the script runs out. Raycasts answer from the
/// frame the camera was last served from, which matches the per-frame call
/// order of [`Reticle::update`](crate::Reticle::update).
#[derive(Debug)]
pub struct ScriptedHost<K> {
    frames: Vec<ScriptedFrame<K>>,
    cursor: Cell<usize>,
    active: Cell<usize>,
}

impl<K> ScriptedHost<K> {
    /// Replay `frames` in order, repeating the last one indefinitely.
    #[must_use]
    pub fn new(frames: Vec<ScriptedFrame<K>>) -> Self {
        assert!(!frames.is_empty(), "a script needs at least one frame");
        Self {
            frames,
            cursor: Cell::new(0),
            active: Cell::new(0),
        }
    }

    /// A host that serves the same frame forever.
    #[must_use]
    pub fn repeating(camera: Option<CameraPose>, hits: Vec<RaycastHit<K>>) -> Self {
        Self::new(vec![(camera, hits)])
    }

    /// Index of the frame the last camera query was served from.
    #[must_use]
    pub fn frame_index(&self) -> usize {
        self.active.get()
    }
}

impl<K: Copy> HostEnvironment<K> for ScriptedHost<K> {
    fn camera(&self) -> Option<CameraPose> {
        let index = self.cursor.get().min(self.frames.len() - 1);
        self.active.set(index);
        self.cursor.set(index + 1);
        self.frames[index].0
    }

    fn raycast(&self, allowing: RaycastTarget) -> Vec<RaycastHit<K>> {
        self.frames[self.active.get()]
            .1
            .iter()
            .filter(|hit| allowing.intersects(hit.target))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::TrackingQuality;
    use glam::{Mat4, Vec3};

    fn camera() -> CameraPose {
        CameraPose {
            transform: Mat4::IDENTITY,
            euler_angles: Vec3::ZERO,
            quality: TrackingQuality::Normal,
        }
    }

    #[test]
    fn frames_play_in_order_and_last_repeats() {
        let host: ScriptedHost<u32> =
            ScriptedHost::new(vec![(None, vec![]), (Some(camera()), vec![])]);
        assert!(host.camera().is_none());
        assert!(host.camera().is_some());
        // Script exhausted; final frame repeats.
        assert!(host.camera().is_some());
        assert_eq!(host.frame_index(), 1);
    }

    #[test]
    fn raycast_answers_from_the_active_frame() {
        use crate::host::RaycastHit;
        use glam::Quat;

        let hit = RaycastHit::<u32> {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            target: RaycastTarget::ESTIMATED_PLANE,
            target_alignment: None,
            anchor: None,
        };
        let host = ScriptedHost::new(vec![(Some(camera()), vec![]), (Some(camera()), vec![hit])]);
        host.camera();
        assert!(host.raycast(RaycastTarget::all()).is_empty());
        host.camera();
        assert_eq!(host.raycast(RaycastTarget::all()).len(), 1);
        // The filter mask applies at the host boundary too.
        assert!(
            host.raycast(RaycastTarget::EXISTING_PLANE_GEOMETRY)
                .is_empty()
        );
    }
}
