// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a reticle through a scripted tracking session and prints what the
//! host renderer would apply each frame: billboard in front of the camera,
//! then an estimated surface, then a locked plane, then tracking loss.
//!
//! Run with `RUST_LOG=debug` to see the reticle's own transition logging.

use glam::{Mat4, Quat, Vec3};
use reticle_core::adapters::{ScriptedFrame, ScriptedHost};
use reticle_core::delegate::ReticleDelegate;
use reticle_core::host::{
    CameraPose, PlaneAnchor, RaycastHit, RaycastTarget, TrackingQuality,
};
use reticle_core::{AnchorSpace, Reticle, ReticleSession};
use reticle_smoothing::Alignment;

struct Announcer;

impl ReticleDelegate for Announcer {
    fn entered_tracking(&mut self) {
        println!("-- surface acquired --");
    }

    fn entered_initializing(&mut self) {
        println!("-- surface lost, billboarding --");
    }
}

fn camera() -> CameraPose {
    CameraPose {
        transform: Mat4::from_translation(Vec3::new(0.0, 1.4, 0.0)),
        euler_angles: Vec3::ZERO,
        quality: TrackingQuality::Normal,
    }
}

fn estimated(z: f32) -> RaycastHit<u32> {
    RaycastHit {
        position: Vec3::new(0.0, 0.0, z),
        orientation: Quat::IDENTITY,
        target: RaycastTarget::ESTIMATED_PLANE,
        target_alignment: Some(Alignment::Horizontal),
        anchor: None,
    }
}

fn on_plane(z: f32) -> RaycastHit<u32> {
    RaycastHit {
        anchor: Some(PlaneAnchor {
            id: 7,
            alignment: Alignment::Horizontal,
        }),
        target: RaycastTarget::EXISTING_PLANE_GEOMETRY,
        ..estimated(z)
    }
}

fn main() {
    env_logger::init();

    // A few frames of nothing, a jittery estimated surface, a plane lock,
    // then the session loses the surface again.
    let mut frames: Vec<ScriptedFrame<u32>> = vec![(None, vec![]); 3];
    for i in 0..6 {
        let jitter = if i % 2 == 0 { -1.02 } else { -0.98 };
        frames.push((Some(camera()), vec![estimated(jitter)]));
    }
    for _ in 0..6 {
        frames.push((Some(camera()), vec![on_plane(-1.0)]));
    }
    frames.push((None, vec![]));

    let total = frames.len();
    let mut session = ReticleSession::new(Reticle::default());
    session.attach(ScriptedHost::new(frames));
    session
        .set_auto_update(true)
        .expect("host was just attached");

    let mut announcer = Announcer;
    for frame in 0..total {
        let Some(out) = session.tick_with(&mut announcer) else {
            continue;
        };
        let space = match out.placement.space {
            AnchorSpace::Camera => "camera",
            AnchorSpace::World => "world",
        };
        println!(
            "frame {frame:>2}: {space:>6} pos {:.3?} scale {:.3} segments {}",
            out.placement.position,
            out.placement.scale.x,
            if session.reticle().segments_open() {
                "open"
            } else {
                "closed"
            },
        );
        if out.new_plane {
            println!("          first visit to plane anchor");
        }
    }
}
