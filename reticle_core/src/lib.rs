// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reticle Core: a surface-placement reticle for AR world tracking.
//!
//! ## Overview
//!
//! A placement reticle (the familiar "focus square") tells the user where
//! virtual content will land on a detected real-world surface. This crate
//! holds the reticle's state machine and presentation model; the smoothing
//! math lives in [`reticle_smoothing`], and everything platform-specific sits
//! behind a host adapter trait:
//!
//! - [`host::HostEnvironment`] — the seam to the AR runtime: camera state and
//!   center-screen raycasts in, placements out.
//! - [`Reticle`] — the per-frame state machine: initializing (billboard in
//!   front of the camera), tracking an estimated plane (segments open), or
//!   locked onto a tracked plane anchor (segments closed).
//! - [`style::Style`] — the classic eight-segment wireframe or a colored
//!   fill plane reporting the state through its material color.
//! - [`ReticleSession`] — host attachment and the auto-update toggle driven
//!   by the host's per-frame tick.
//! - [`delegate::ReticleDelegate`] — optional transition notifications for
//!   the embedding application, fired at most once per edge.
//!
//! ## Minimal example
//!
//! Drive a reticle with a scripted host and watch it acquire a surface:
//!
//! ```
//! use glam::{Mat4, Quat, Vec3};
//! use reticle_core::adapters::ScriptedHost;
//! use reticle_core::host::{
//!     CameraPose, PlaneAnchor, RaycastHit, RaycastTarget, TrackingQuality,
//! };
//! use reticle_core::{AnchorSpace, Reticle};
//! use reticle_smoothing::Alignment;
//!
//! let camera = CameraPose {
//!     transform: Mat4::IDENTITY,
//!     euler_angles: Vec3::ZERO,
//!     quality: TrackingQuality::Normal,
//! };
//! let hit = RaycastHit {
//!     position: Vec3::new(0.0, 0.0, -1.0),
//!     orientation: Quat::IDENTITY,
//!     target: RaycastTarget::EXISTING_PLANE_GEOMETRY,
//!     target_alignment: Some(Alignment::Horizontal),
//!     anchor: Some(PlaneAnchor { id: 1_u32, alignment: Alignment::Horizontal }),
//! };
//! let host = ScriptedHost::repeating(Some(camera), vec![hit]);
//!
//! let mut reticle: Reticle<u32> = Reticle::default();
//! let out = reticle.update(&host);
//! assert!(out.tracking && out.on_plane);
//! assert_eq!(out.placement.space, AnchorSpace::World);
//! ```
//!
//! ## Error handling
//!
//! There are only two failure modes, both benign: requesting auto-update with
//! no attached scene reports [`ReticleError::NoScene`], and a missing raycast
//! hit is not an error at all — the reticle reverts to its billboard and
//! keeps looking. A host that cannot realize the colored style's resources
//! degrades to the classic style with a logged warning.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod adapters;
pub mod delegate;
pub mod host;
pub mod segment;
pub mod style;

mod reticle;
mod session;

pub use reticle::{AnchorSpace, FrameOutput, Placement, Reticle};
pub use session::{ReticleError, ReticleSession};
