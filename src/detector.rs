//! Main detector entry point for gesturekit.
//!
//! [`GestureDetector`] wires the template store, the per-tick recognizer,
//! and the per-action trigger table into one component, mirroring how a
//! host embeds the toolkit: register handlers, record or save templates,
//! then call [`tick`](GestureDetector::tick) every frame.

use std::sync::Arc;

use gesturekit_core::{HandTracking, JointSample, MachineAction, Result, TemplateId};
use gesturekit_recognition::{GestureRecognizer, GestureStore, MatchOutcome};
use gesturekit_session::{ActionTriggers, RecordingSession};

/// Detector configuration.
#[derive(Debug, Clone, Copy)]
pub struct DetectorConfig {
    /// Per-joint distance gate for matching.
    pub threshold: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: GestureRecognizer::DEFAULT_THRESHOLD,
        }
    }
}

/// The gesture detector.
///
/// Owns the gesture store, the recognizer, and the per-action trigger
/// table. Created with [`GestureDetector::new`] or
/// [`GestureDetector::with_config`].
///
/// # Example
///
/// ```ignore
/// let mut detector = GestureDetector::new();
/// detector.on_action(MachineAction::Press, || machine.press());
/// detector.save(MachineAction::Press, &hand)?;
/// detector.tick(&hand);
/// ```
#[derive(Debug)]
pub struct GestureDetector {
    store: Arc<GestureStore>,
    recognizer: GestureRecognizer,
    triggers: ActionTriggers,
}

impl GestureDetector {
    /// Create a detector with the default threshold.
    pub fn new() -> Self {
        Self {
            store: Arc::new(GestureStore::new()),
            recognizer: GestureRecognizer::default(),
            triggers: ActionTriggers::new(),
        }
    }

    /// Create a detector with explicit configuration.
    ///
    /// # Errors
    /// [`gesturekit_core::GestureError::InvalidThreshold`] for a negative
    /// or non-finite threshold.
    pub fn with_config(config: DetectorConfig) -> Result<Self> {
        Ok(Self {
            store: Arc::new(GestureStore::new()),
            recognizer: GestureRecognizer::new(config.threshold)?,
            triggers: ActionTriggers::new(),
        })
    }

    /// The shared template store.
    pub fn store(&self) -> &Arc<GestureStore> {
        &self.store
    }

    /// Register a handler fired while the action's gesture is recognized.
    ///
    /// Handlers fire on every tick a match persists. Templates share the
    /// action's trigger set, so handlers registered here reach gestures
    /// recorded earlier as well as later ones.
    pub fn on_action(&self, action: MachineAction, handler: impl Fn() + Send + Sync + 'static) {
        self.triggers.register(action, handler);
    }

    /// Register a handler for the match-to-none transition.
    ///
    /// Fires exactly once each time a recognized gesture is released.
    pub fn on_not_recognized(&self, handler: impl Fn() + Send + Sync + 'static) {
        self.recognizer.on_not_recognized(handler);
    }

    /// Run one recognition tick against the live provider.
    ///
    /// Skips entirely while the provider is unready.
    pub fn tick(&mut self, provider: &dyn HandTracking) -> Option<MatchOutcome> {
        self.recognizer.tick(provider, &self.store)
    }

    /// Match a sample the caller already holds; no events fire.
    pub fn classify(&self, live: &JointSample) -> Option<MatchOutcome> {
        self.recognizer.classify(live, &self.store)
    }

    /// Capture the current pose and store it immediately under `action`.
    ///
    /// The template carries the action's current trigger set.
    ///
    /// # Errors
    /// [`gesturekit_core::GestureError::ProviderNotReady`] if the provider
    /// has not signalled readiness.
    pub fn save(&self, action: MachineAction, provider: &dyn HandTracking) -> Result<TemplateId> {
        let sample = JointSample::capture(provider)?;
        Ok(self
            .store
            .append(action.name(), sample, self.triggers.for_action(action).clone()))
    }

    /// Begin a staged recording session over this detector's store.
    ///
    /// The session captures all three actions in order, appending to the
    /// store; recorded templates share this detector's trigger table.
    pub fn record(&self) -> RecordingSession {
        RecordingSession::new(Arc::clone(&self.store), self.triggers.clone())
    }
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new()
    }
}
