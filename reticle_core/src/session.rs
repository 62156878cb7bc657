// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session wiring: host attachment and the auto-update toggle.
//!
//! The host framework drives a single per-frame tick on its render thread.
//! [`ReticleSession`] sits between that tick and the [`Reticle`] state
//! machine: while auto-update is on, each [`tick`](ReticleSession::tick) runs
//! one update; turning it off simply stops listening. There is no internal
//! concurrency and no cancellation beyond the toggle.

use core::fmt;
use core::hash::Hash;

use crate::delegate::{ReticleDelegate, notify};
use crate::host::HostEnvironment;
use crate::reticle::{FrameOutput, Reticle};
use crate::style::Style;

/// Errors reported by [`ReticleSession`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReticleError {
    /// Auto-update was requested without an attached host scene.
    NoScene,
}

impl fmt::Display for ReticleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoScene => write!(f, "no host scene is attached"),
        }
    }
}

impl core::error::Error for ReticleError {}

/// A reticle bound to an optional host scene.
#[derive(Debug)]
pub struct ReticleSession<K, H> {
    reticle: Reticle<K>,
    host: Option<H>,
    auto_update: bool,
}

impl<K, H> ReticleSession<K, H>
where
    K: Copy + Eq + Hash,
    H: HostEnvironment<K>,
{
    /// Wrap a reticle with no host attached yet.
    #[must_use]
    pub fn new(reticle: Reticle<K>) -> Self {
        Self {
            reticle,
            host: None,
            auto_update: false,
        }
    }

    /// Attach the host scene.
    ///
    /// If the reticle uses the colored style and the host cannot realize its
    /// fill mesh, the reticle falls back to the classic style with a logged
    /// warning; this is the only resource failure and it is non-fatal.
    pub fn attach(&mut self, mut host: H) {
        if let Style::Colored { mesh, .. } = *self.reticle.style()
            && !host.realize_fill_mesh(&mesh)
        {
            log::warn!("reticle: fill mesh unavailable, falling back to the classic style");
            self.reticle.set_style(Style::classic());
        }
        self.host = Some(host);
    }

    /// Detach and return the host scene, disabling auto-update.
    pub fn detach(&mut self) -> Option<H> {
        self.auto_update = false;
        self.host.take()
    }

    /// Enable or disable per-frame updates.
    ///
    /// Enabling without an attached host reports [`ReticleError::NoScene`]
    /// and leaves auto-update off.
    pub fn set_auto_update(&mut self, enabled: bool) -> Result<(), ReticleError> {
        if enabled && self.host.is_none() {
            return Err(ReticleError::NoScene);
        }
        self.auto_update = enabled;
        Ok(())
    }

    /// `true` while the session runs an update on every tick.
    #[must_use]
    pub fn is_auto_updating(&self) -> bool {
        self.auto_update
    }

    /// The host's per-frame callback. No-op while auto-update is off.
    pub fn tick(&mut self) -> Option<FrameOutput> {
        if !self.auto_update {
            return None;
        }
        self.step()
    }

    /// Like [`tick`](Self::tick), forwarding transition events to `delegate`.
    pub fn tick_with<D: ReticleDelegate>(&mut self, delegate: &mut D) -> Option<FrameOutput> {
        let out = self.tick()?;
        notify(&out.events, delegate);
        Some(out)
    }

    /// Run a single update now, regardless of the auto-update setting.
    pub fn step(&mut self) -> Option<FrameOutput> {
        let host = self.host.as_ref()?;
        Some(self.reticle.update(host))
    }

    /// The wrapped reticle.
    #[must_use]
    pub fn reticle(&self) -> &Reticle<K> {
        &self.reticle
    }

    /// The wrapped reticle, mutably.
    pub fn reticle_mut(&mut self) -> &mut Reticle<K> {
        &mut self.reticle
    }
}
