// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Reticle crates; see the `examples/` directory.
//!
//! This crate is not published.
