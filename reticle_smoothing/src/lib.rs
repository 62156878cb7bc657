// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reticle Smoothing: pure state-estimation math for a surface-placement reticle.
//!
//! ## Overview
//!
//! An AR placement reticle is driven by noisy per-frame measurements: hit-test
//! positions jitter, estimated surface alignments flicker between horizontal and
//! vertical, and the camera pose swings through gimbal-hostile tilts. This crate
//! holds the small filters that turn those raw measurements into a stable
//! presentation, decoupled from any scene graph or AR session:
//!
//! - [`PositionWindow`] — a fixed-capacity sliding window over world positions
//!   whose arithmetic mean suppresses hit-test jitter.
//! - [`AlignmentVote`] — a rolling vote over recent surface alignments with
//!   hysteresis thresholds, so the reticle does not flip between horizontal and
//!   vertical on a single stray sample.
//! - [`OrientationTracker`] — spherical interpolation toward a target
//!   orientation with a fixed step factor and a settle test, so alignment
//!   changes ease in rather than snap.
//! - [`scale`] — distance-based scale compensation that keeps the reticle's
//!   apparent size roughly constant across typical working distances.
//! - [`camera`] — yaw correction helpers that keep the reticle's y rotation
//!   sensible as the camera pitches toward straight down.
//!
//! Everything here operates on plain [`glam`] vectors and quaternions and is
//! deterministic given the input sequence, so each filter can be exercised with
//! synthetic measurement streams and no AR runtime present.
//!
//! ## Minimal example
//!
//! ```
//! use glam::Vec3;
//! use reticle_smoothing::PositionWindow;
//!
//! let mut window = PositionWindow::new();
//! window.push(Vec3::new(1.0, 0.0, 0.0));
//! let smoothed = window.push(Vec3::new(3.0, 0.0, 0.0));
//! assert_eq!(smoothed, Vec3::new(2.0, 0.0, 0.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `glam`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod alignment;
pub mod camera;
pub mod orient;
pub mod position;
pub mod scale;

pub use alignment::{Alignment, AlignmentVote, VoteOutcome};
pub use orient::OrientationTracker;
pub use position::PositionWindow;
