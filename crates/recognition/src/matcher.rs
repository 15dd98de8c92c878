//! Per-frame gesture matching.
//!
//! ## Design
//!
//! [`best_match`] is a gate-then-rank classifier:
//! 1. a template whose joint count differs from the live sample is skipped;
//! 2. any single joint farther than the threshold from its stored position
//!    discards the template immediately (the gate);
//! 3. surviving templates are ranked by summed joint distance, strict
//!    less-than against the running minimum, so the earliest-inserted
//!    template wins exact ties (the rank).
//!
//! [`GestureRecognizer`] wraps the matcher with the event cadence the
//! machine control relies on: "recognized" handlers fire on every tick a
//! match persists, while "not recognized" fires exactly once per
//! match-to-none transition.

use std::sync::Arc;

use tracing::debug;

use gesturekit_core::{GestureError, HandTracking, JointSample, Result};

use crate::callback::CallbackSet;
use crate::store::{GestureStore, GestureTemplate};

/// A successful match: the winning template and its summed joint distance.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// The template that won the gate-then-rank scan.
    pub template: Arc<GestureTemplate>,
    /// Sum of per-joint distances between the live pose and the template.
    pub sum_distance: f32,
}

/// Find the best-matching template for a live pose.
///
/// Returns `None` when the live sample is empty, the template list is
/// empty, or every template is gated out.
pub fn best_match(
    live: &JointSample,
    templates: &[Arc<GestureTemplate>],
    threshold: f32,
) -> Option<MatchOutcome> {
    if live.is_empty() {
        return None;
    }

    let mut current_min = f32::INFINITY;
    let mut best: Option<MatchOutcome> = None;

    for template in templates {
        let stored = template.sample();
        // Joint counts from a different provider generation never match.
        if stored.len() != live.len() {
            continue;
        }

        let mut sum_distance = 0.0f32;
        let mut discarded = false;
        for (live_pos, stored_pos) in live.positions().iter().zip(stored.positions()) {
            let distance = live_pos.distance(*stored_pos);
            if distance > threshold {
                discarded = true;
                break;
            }
            sum_distance += distance;
        }

        if !discarded && sum_distance < current_min {
            current_min = sum_distance;
            best = Some(MatchOutcome {
                template: Arc::clone(template),
                sum_distance,
            });
        }
    }

    best
}

/// Per-frame classifier with edge-triggered "not recognized" events.
///
/// Drive it once per tick from the owning loop. The recognizer keeps a
/// single bit of state across ticks: whether the previous tick matched.
#[derive(Debug)]
pub struct GestureRecognizer {
    threshold: f32,
    not_recognized: CallbackSet,
    was_matched: bool,
}

impl GestureRecognizer {
    /// Default per-joint distance threshold.
    pub const DEFAULT_THRESHOLD: f32 = 0.1;

    /// Create a recognizer with the given per-joint threshold.
    ///
    /// # Errors
    /// [`GestureError::InvalidThreshold`] if the threshold is negative or
    /// not finite.
    pub fn new(threshold: f32) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(GestureError::InvalidThreshold { value: threshold });
        }
        Ok(Self {
            threshold,
            not_recognized: CallbackSet::new(),
            was_matched: false,
        })
    }

    /// The configured per-joint threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Register a handler for the match-to-none transition.
    ///
    /// Fires exactly once when a previously recognized gesture stops
    /// matching, never repeatedly while no match persists.
    pub fn on_not_recognized(&self, handler: impl Fn() + Send + Sync + 'static) {
        self.not_recognized.register(handler);
    }

    /// Whether the previous tick recognized a gesture.
    pub fn is_matched(&self) -> bool {
        self.was_matched
    }

    /// Pure matching entry point for callers that already hold a sample.
    ///
    /// No callbacks fire and the transition latch is untouched.
    pub fn classify(&self, live: &JointSample, store: &GestureStore) -> Option<MatchOutcome> {
        best_match(live, &store.snapshot(), self.threshold)
    }

    /// Run one recognition tick against the live provider.
    ///
    /// An unready provider skips the tick entirely: no matching, no
    /// callbacks, latch untouched. Otherwise the live pose is captured and
    /// fed to [`observe`](Self::observe).
    pub fn tick(
        &mut self,
        provider: &dyn HandTracking,
        store: &GestureStore,
    ) -> Option<MatchOutcome> {
        let live = match JointSample::capture(provider) {
            Ok(sample) => sample,
            Err(_) => return None,
        };
        self.observe(&live, store)
    }

    /// Feed one live sample through the matcher and fire events.
    ///
    /// While a match persists the winning template's `on_recognized`
    /// handlers fire every call, with no cross-tick de-duplication; the
    /// machine-side state machine depends on the repeated trigger. Only the
    /// none transition is edge-triggered.
    pub fn observe(&mut self, live: &JointSample, store: &GestureStore) -> Option<MatchOutcome> {
        match self.classify(live, store) {
            Some(outcome) => {
                self.was_matched = true;
                outcome.template.on_recognized().invoke();
                Some(outcome)
            }
            None => {
                if self.was_matched {
                    self.was_matched = false;
                    debug!("gesture no longer recognized");
                    self.not_recognized.invoke();
                }
                None
            }
        }
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            not_recognized: CallbackSet::new(),
            was_matched: false,
        }
    }
}
