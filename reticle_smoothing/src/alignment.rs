// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface-alignment voting with hysteresis.

use smallvec::SmallVec;

/// Default number of recent alignment samples retained by [`AlignmentVote::new`].
pub const DEFAULT_CAPACITY: usize = 20;

/// Orientation class of a tracked or estimated surface.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Alignment {
    /// A floor- or table-like surface.
    Horizontal,
    /// A wall-like surface.
    Vertical,
}

/// Result of offering one alignment sample to an [`AlignmentVote`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The dominant alignment changed. The presentation should begin an
    /// animated orientation change toward the new alignment's target.
    Changed(Alignment),
    /// The sample agrees with (or confirms) the current alignment; the target
    /// orientation may be applied for this frame.
    Confirmed(Alignment),
    /// The sample disagrees with the history and was outvoted; the previous
    /// orientation stands and nothing should be applied this frame.
    Rejected,
}

/// A rolling vote over recent surface alignments.
///
/// Estimated-plane raycasts flicker between horizontal and vertical near
/// edges and corners. This vote only lets the reported alignment flip once
/// one class dominates the recent history:
///
/// - horizontal wins when it holds more than 3/4 of the window,
/// - vertical wins when it holds more than 1/2 of the window,
/// - a hit on a tracked plane anchor short-circuits the vote entirely, since
///   the host has already committed to that surface's alignment.
///
/// An accepted change clears the history, so the vote restarts from scratch
/// and the new alignment enjoys the same hysteresis protection.
#[derive(Clone, Debug)]
pub struct AlignmentVote {
    history: SmallVec<[Alignment; DEFAULT_CAPACITY]>,
    capacity: usize,
    current: Option<Alignment>,
}

impl Default for AlignmentVote {
    fn default() -> Self {
        Self::new()
    }
}

impl AlignmentVote {
    /// Create a vote with the default window of [`DEFAULT_CAPACITY`] samples.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a vote retaining up to `capacity` samples.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: SmallVec::new(),
            capacity: capacity.max(1),
            current: None,
        }
    }

    /// The alignment the vote currently reports, if any has been accepted.
    #[must_use]
    pub fn current(&self) -> Option<Alignment> {
        self.current
    }

    /// Number of samples currently in the history window.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Offer one frame's observation.
    ///
    /// `observed` is the alignment suggested by this frame's raycast, if the
    /// hit carried one. `on_anchor` is `true` when the hit landed on a tracked
    /// plane anchor, which bypasses the vote.
    pub fn offer(&mut self, observed: Option<Alignment>, on_anchor: bool) -> VoteOutcome {
        if let Some(alignment) = observed {
            if self.history.len() == self.capacity {
                self.history.remove(0);
            }
            self.history.push(alignment);
        }

        let count = self.history.len();
        let horizontal = self
            .history
            .iter()
            .filter(|a| **a == Alignment::Horizontal)
            .count();
        let vertical = count - horizontal;

        let accepted = match observed {
            Some(Alignment::Horizontal) if horizontal > count * 3 / 4 => true,
            Some(Alignment::Vertical) if vertical > count / 2 => true,
            _ => on_anchor,
        };
        if !accepted {
            return VoteOutcome::Rejected;
        }
        // `observed` is present whenever the thresholds fired; an anchor hit
        // always carries the anchor's alignment.
        let Some(alignment) = observed else {
            return VoteOutcome::Rejected;
        };

        if self.current != Some(alignment) {
            self.current = Some(alignment);
            self.history.clear();
            VoteOutcome::Changed(alignment)
        } else {
            VoteOutcome::Confirmed(alignment)
        }
    }

    /// Forget the history and the accepted alignment.
    pub fn reset(&mut self) {
        self.history.clear();
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Alignment::{Horizontal, Vertical};

    #[test]
    fn first_consistent_samples_adopt_an_alignment() {
        let mut vote = AlignmentVote::new();
        // A single sample already dominates an otherwise empty window.
        assert_eq!(vote.offer(Some(Horizontal), false), VoteOutcome::Changed(Horizontal));
        assert_eq!(vote.current(), Some(Horizontal));
    }

    #[test]
    fn lone_vertical_sample_cannot_flip_a_horizontal_history() {
        let mut vote = AlignmentVote::new();
        for _ in 0..20 {
            vote.offer(Some(Horizontal), false);
        }
        assert_eq!(vote.current(), Some(Horizontal));
        // One stray vertical sample is far below the majority threshold.
        assert_eq!(vote.offer(Some(Vertical), false), VoteOutcome::Rejected);
        assert_eq!(vote.current(), Some(Horizontal));
    }

    #[test]
    fn horizontal_supermajority_flips_a_vertical_start() {
        let mut vote = AlignmentVote::new();
        for _ in 0..12 {
            vote.offer(Some(Vertical), false);
        }
        assert_eq!(vote.current(), Some(Vertical));
        // Keep feeding horizontal; eventually it exceeds 3/4 of the window
        // and the vote flips.
        let mut flipped = false;
        for _ in 0..40 {
            if vote.offer(Some(Horizontal), false) == VoteOutcome::Changed(Horizontal) {
                flipped = true;
                break;
            }
        }
        assert!(flipped, "horizontal supermajority must flip the vote");
        assert_eq!(vote.current(), Some(Horizontal));
    }

    #[test]
    fn vertical_needs_only_a_simple_majority() {
        let mut vote = AlignmentVote::with_capacity(20);
        for _ in 0..20 {
            vote.offer(Some(Horizontal), false);
        }
        // One vertical against a full horizontal window is outvoted…
        assert_eq!(vote.offer(Some(Vertical), false), VoteOutcome::Rejected);
        // …but vertical only needs a simple majority, so steady vertical
        // samples flip the vote after roughly half a window.
        let mut flips = 0;
        for _ in 0..25 {
            if vote.offer(Some(Vertical), false) == VoteOutcome::Changed(Vertical) {
                flips += 1;
            }
        }
        assert_eq!(flips, 1, "steady vertical input must flip exactly once");
        assert_eq!(vote.current(), Some(Vertical));
    }

    #[test]
    fn anchor_hit_short_circuits_the_vote() {
        let mut vote = AlignmentVote::new();
        for _ in 0..20 {
            vote.offer(Some(Horizontal), false);
        }
        // A tracked plane anchor overrides any amount of history.
        assert_eq!(vote.offer(Some(Vertical), true), VoteOutcome::Changed(Vertical));
        assert_eq!(vote.current(), Some(Vertical));
        // History restarted; confirmations follow without animation.
        assert_eq!(vote.offer(Some(Vertical), true), VoteOutcome::Confirmed(Vertical));
    }

    #[test]
    fn accepted_change_clears_history() {
        let mut vote = AlignmentVote::new();
        for _ in 0..20 {
            vote.offer(Some(Horizontal), false);
        }
        vote.offer(Some(Vertical), true);
        assert_eq!(vote.history_len(), 0);
    }

    #[test]
    fn missing_observation_is_rejected() {
        let mut vote = AlignmentVote::new();
        vote.offer(Some(Horizontal), false);
        assert_eq!(vote.offer(None, false), VoteOutcome::Rejected);
        assert_eq!(vote.current(), Some(Horizontal));
    }

    #[test]
    fn window_is_bounded() {
        let mut vote = AlignmentVote::with_capacity(5);
        for _ in 0..100 {
            vote.offer(Some(Vertical), false);
        }
        assert!(vote.history_len() <= 5);
    }

    #[test]
    fn reset_forgets_everything() {
        let mut vote = AlignmentVote::new();
        vote.offer(Some(Horizontal), false);
        vote.reset();
        assert_eq!(vote.current(), None);
        assert_eq!(vote.history_len(), 0);
    }
}
