// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reticle state machine.
//!
//! ## Overview
//!
//! Each frame the reticle asks the host for a camera and a center-screen
//! raycast, classifies the result into one of its tracking conditions, and
//! produces a [`Placement`] for the host's renderer:
//!
//! - no camera, degraded tracking, or no hit — **initializing**: the reticle
//!   billboards in front of the camera;
//! - a hit on an estimated plane — **tracking, off plane**: placed in world
//!   space, classic segments open;
//! - a hit on a tracked plane anchor — **tracking, on plane**: placed in
//!   world space, classic segments closed.
//!
//! Measured positions, alignments, and orientations pass through the
//! [`reticle_smoothing`] filters before they reach the placement, so the
//! presentation stays steady against raycast jitter.

use hashbrown::HashSet;
use smallvec::SmallVec;

use core::f32::consts::FRAC_PI_2;
use core::hash::Hash;

use glam::{Quat, Vec3};
use reticle_smoothing::camera::{corrected_y_rotation, yaw_from_transform};
use reticle_smoothing::scale::scale_for_camera;
use reticle_smoothing::{Alignment, AlignmentVote, OrientationTracker, PositionWindow, VoteOutcome};

use crate::delegate::ReticleEvent;
use crate::host::{
    CameraPose, HostEnvironment, RaycastHit, RaycastTarget, TrackingQuality, smart_raycast,
};
use crate::segment::{self, SCALE_FOR_CLOSED, SIZE, Segment};
use crate::style::{Color, Style};

/// Distance in front of the camera at which the billboard floats.
const BILLBOARD_DISTANCE: f32 = 0.8;

/// Which coordinate space a [`Placement`] is expressed in.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AnchorSpace {
    /// Relative to the camera; the reticle follows the device.
    Camera,
    /// Absolute world space; the reticle sticks to a surface.
    World,
}

/// The transform the host should apply to the reticle's root node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Space the transform is expressed in.
    pub space: AnchorSpace,
    /// Position in `space`.
    pub position: Vec3,
    /// Orientation in `space`.
    pub orientation: Quat,
    /// Uniform distance-compensation scale.
    pub scale: Vec3,
}

impl Placement {
    fn billboard(orientation: Quat) -> Self {
        Self {
            space: AnchorSpace::Camera,
            position: Vec3::new(0.0, 0.0, -BILLBOARD_DISTANCE),
            orientation,
            scale: Vec3::ONE,
        }
    }
}

/// Everything the host needs to present one frame.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    /// Root transform for the reticle.
    pub placement: Placement,
    /// `true` while a surface is being tracked.
    pub tracking: bool,
    /// `true` while the tracked surface is a known plane anchor.
    pub on_plane: bool,
    /// `true` the first frame a given plane anchor is visited.
    pub new_plane: bool,
    /// Transition edges crossed during this frame, in order.
    pub events: SmallVec<[ReticleEvent; 2]>,
}

/// A surface-placement reticle.
///
/// `K` is the host's plane-anchor key; see [`HostEnvironment`].
#[derive(Clone, Debug)]
pub struct Reticle<K> {
    tracking: bool,
    on_plane: bool,
    current_anchor: Option<K>,
    visited_anchors: HashSet<K>,

    positions: PositionWindow,
    vote: AlignmentVote,
    orientation: OrientationTracker,

    scale_with_distance: bool,
    raycast_targets: RaycastTarget,

    style: Style,
    segments: [Segment; 8],
    segments_open: bool,
    fill_color: Option<Color>,

    placement: Placement,
}

impl<K: Copy + Eq + Hash> Default for Reticle<K> {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

impl<K: Copy + Eq + Hash> Reticle<K> {
    /// Create a reticle with the given style, starting as a billboard.
    #[must_use]
    pub fn new(style: Style) -> Self {
        // The square mesh lies in the x/z plane; pitch it upright so the
        // billboard faces the camera.
        let orientation = OrientationTracker::new(Quat::from_rotation_x(FRAC_PI_2));
        let mut segments = segment::layout();
        for segment in &mut segments {
            segment.open();
        }
        let fill_color = style.fill_color(false, false);
        Self {
            tracking: false,
            on_plane: false,
            current_anchor: None,
            visited_anchors: HashSet::new(),
            positions: PositionWindow::new(),
            vote: AlignmentVote::new(),
            orientation,
            scale_with_distance: true,
            raycast_targets: RaycastTarget::default(),
            style,
            segments,
            segments_open: true,
            fill_color,
            placement: Placement::billboard(Quat::from_rotation_x(FRAC_PI_2)),
        }
    }

    /// Run one frame: raycast through the host, rebuild the placement, and
    /// report any transition edges.
    pub fn update<H: HostEnvironment<K>>(&mut self, host: &H) -> FrameOutput {
        let mut events: SmallVec<[ReticleEvent; 2]> = SmallVec::new();
        let mut new_plane = false;

        let camera = host
            .camera()
            .filter(|c| c.quality == TrackingQuality::Normal);
        let best = camera.and_then(|_| {
            smart_raycast(&host.raycast(self.raycast_targets), self.raycast_targets)
        });

        match (camera, best) {
            (Some(camera), Some(hit)) => self.track(hit, camera, &mut events, &mut new_plane),
            _ => self.initialize(&mut events),
        }

        self.fill_color = self.style.fill_color(self.tracking, self.on_plane);

        FrameOutput {
            placement: self.placement,
            tracking: self.tracking,
            on_plane: self.on_plane,
            new_plane,
            events,
        }
    }

    fn initialize(&mut self, events: &mut SmallVec<[ReticleEvent; 2]>) {
        if self.tracking {
            log::debug!("reticle: lost surface, reverting to billboard");
            events.push(ReticleEvent::EnteredInitializing);
        }
        self.tracking = false;
        self.on_plane = false;
        self.current_anchor = None;
        self.set_segments_open(true);
        self.placement = Placement::billboard(self.orientation.current());
    }

    fn track(
        &mut self,
        hit: RaycastHit<K>,
        camera: CameraPose,
        events: &mut SmallVec<[ReticleEvent; 2]>,
        new_plane: &mut bool,
    ) {
        if !self.tracking {
            log::debug!("reticle: acquired surface, entering world space");
            events.push(ReticleEvent::EnteredTracking);
        }
        self.tracking = true;

        match hit.anchor {
            Some(anchor) => {
                self.on_plane = true;
                *new_plane = self.visited_anchors.insert(anchor.id);
                self.current_anchor = Some(anchor.id);
                self.set_segments_open(false);
            }
            None => {
                self.on_plane = false;
                self.current_anchor = None;
                self.set_segments_open(true);
            }
        }

        // Move to the average of recent positions to avoid jitter.
        let position = self.positions.push(hit.position);
        let scale = if self.scale_with_distance {
            scale_for_camera(position, Some(camera.position()))
        } else {
            1.0
        };

        // Correct the y rotation against the camera, then run the alignment
        // vote before committing to an orientation.
        let yaw = yaw_from_transform(&camera.transform);
        let angle = corrected_y_rotation(camera.euler_angles.x, camera.euler_angles.y, yaw);
        let orientation = self.update_alignment(&hit, angle);

        self.placement = Placement {
            space: AnchorSpace::World,
            position,
            orientation,
            scale: Vec3::splat(scale),
        };
    }

    fn update_alignment(&mut self, hit: &RaycastHit<K>, y_rotation: f32) -> Quat {
        let observed = hit.observed_alignment();
        match self.vote.offer(observed, hit.anchor.is_some()) {
            VoteOutcome::Changed(_) => self.orientation.begin_change(),
            VoteOutcome::Confirmed(_) => {}
            // Outvoted sample: hold the previous orientation this frame.
            VoteOutcome::Rejected => return self.orientation.current(),
        }
        let target = hit.orientation * Quat::from_rotation_y(y_rotation);
        self.orientation.step_toward(target)
    }

    fn set_segments_open(&mut self, open: bool) {
        if self.segments_open == open {
            return;
        }
        self.segments_open = open;
        for segment in &mut self.segments {
            if open {
                segment.open();
            } else {
                segment.close();
            }
        }
    }

    /// Restrict which surface estimates raycasts may resolve against.
    pub fn set_raycast_targets(&mut self, allowing: RaycastTarget) {
        self.raycast_targets = allowing;
    }

    /// Enable or disable distance-based scale compensation.
    ///
    /// Disabling resets the placement scale to one.
    pub fn set_scale_with_distance(&mut self, enabled: bool) {
        self.scale_with_distance = enabled;
        if !enabled {
            self.placement.scale = Vec3::ONE;
        }
    }

    /// Replace the presentation style.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        self.fill_color = self.style.fill_color(self.tracking, self.on_plane);
    }

    /// The current presentation style.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// `true` while a surface is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// `true` while the tracked surface is a known plane anchor.
    #[must_use]
    pub fn on_plane(&self) -> bool {
        self.on_plane
    }

    /// The anchor key currently tracked, if any.
    #[must_use]
    pub fn current_anchor(&self) -> Option<K> {
        self.current_anchor
    }

    /// The alignment the vote currently reports.
    #[must_use]
    pub fn current_alignment(&self) -> Option<Alignment> {
        self.vote.current()
    }

    /// The most recent placement.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The classic style's segments in their current layout.
    #[must_use]
    pub fn segments(&self) -> &[Segment; 8] {
        &self.segments
    }

    /// `true` while the classic segments are slid apart.
    #[must_use]
    pub fn segments_open(&self) -> bool {
        self.segments_open
    }

    /// Scale for the segment assembly: the closed square contracts slightly.
    #[must_use]
    pub fn square_scale(&self) -> Vec3 {
        if self.segments_open {
            Vec3::splat(SIZE)
        } else {
            Vec3::splat(SIZE * SCALE_FOR_CLOSED)
        }
    }

    /// Fill color for the colored style, or `None` for the classic style.
    #[must_use]
    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    /// `true` while an alignment change is easing in.
    #[must_use]
    pub fn is_changing_alignment(&self) -> bool {
        self.orientation.is_animating()
    }
}
