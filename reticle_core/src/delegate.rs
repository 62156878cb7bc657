// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State-transition notifications for the embedding application.

/// A state-transition edge, emitted at most once per transition.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReticleEvent {
    /// The reticle found a surface and is now placed in world space.
    EnteredTracking,
    /// The reticle lost its surface and reverted to the camera billboard.
    EnteredInitializing,
}

/// Observer for reticle state transitions.
///
/// All methods default to no-ops, so implementations only override the edges
/// they care about.
pub trait ReticleDelegate {
    /// The reticle is now tracking a surface in world space.
    fn entered_tracking(&mut self) {}

    /// The reticle is back to estimating and billboarding at the camera.
    fn entered_initializing(&mut self) {}
}

/// Forward a frame's transition events to a delegate.
pub fn notify<D: ReticleDelegate>(events: &[ReticleEvent], delegate: &mut D) {
    for event in events {
        match event {
            ReticleEvent::EnteredTracking => delegate.entered_tracking(),
            ReticleEvent::EnteredInitializing => delegate.entered_initializing(),
        }
    }
}
