// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host adapters.
//!
//! Production hosts wrap a live AR session behind
//! [`HostEnvironment`](crate::host::HostEnvironment). This module holds the
//! adapters that ship with the crate: currently a scripted host for tests,
//! demos, and offline replay.

mod scripted;

pub use scripted::{ScriptedFrame, ScriptedHost};
