//! The staged recording state machine.
//!
//! ## Design
//!
//! `Idle → Countdown(up) → Capture(up) → Countdown(down) → Capture(down)
//! → Countdown(press) → Capture(press) → Done`, with an explicit `Aborted`
//! terminal state. Each countdown shows 3, 2, 1, 0 one second apart, and
//! the capture lands one second after the 0 — four time units per stage.
//!
//! Time is injected through [`RecordingSession::advance`]; the session
//! accumulates elapsed time and crosses whole one-second ticks, so the
//! host may call it at any frame rate (a single oversized `dt` replays all
//! the ticks it covers). Sessions are single-shot: once `Done` or
//! `Aborted`, a new session must be created.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use gesturekit_core::{GestureError, HandTracking, JointSample, MachineAction, Result};
use gesturekit_recognition::{CallbackSet, GestureStore};

use crate::display::CountdownDisplay;

/// Countdown starts at this value; the capture follows the 0 display.
const COUNTDOWN_START: u32 = 3;

/// Pause between countdown displays.
const TICK: Duration = Duration::from_secs(1);

/// The per-action "recognized" trigger sets handed to recorded templates.
///
/// Mirrors the three machine events: a template recorded for an action
/// carries a handle to that action's set, so handlers registered here fire
/// whenever the recorded gesture is recognized — whether they were
/// registered before or after the recording.
#[derive(Debug, Clone, Default)]
pub struct ActionTriggers {
    up: CallbackSet,
    down: CallbackSet,
    press: CallbackSet,
}

impl ActionTriggers {
    /// Create an empty trigger table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The trigger set for an action.
    pub fn for_action(&self, action: MachineAction) -> &CallbackSet {
        match action {
            MachineAction::Up => &self.up,
            MachineAction::Down => &self.down,
            MachineAction::Press => &self.press,
        }
    }

    /// Register a handler on an action's trigger set.
    pub fn register(&self, action: MachineAction, handler: impl Fn() + Send + Sync + 'static) {
        self.for_action(action).register(handler);
    }
}

/// Externally visible session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Created but not started.
    Idle,
    /// Counting down towards an action's capture.
    CountingDown {
        /// The action about to be captured.
        action: MachineAction,
        /// The countdown value currently on display.
        showing: u32,
    },
    /// All stages captured.
    Finished,
    /// Cancelled mid-sequence.
    Aborted,
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    Idle,
    Counting { action_index: usize, showing: u32 },
    Done,
    Aborted,
}

/// A timed, staged capture flow appending one template per machine action.
///
/// Repeated sessions accumulate templates; nothing is replaced. A capture
/// attempted while the provider is unready appends nothing for that stage
/// and the session moves on — the miss is logged and reported through
/// [`missed`](Self::missed) so the host can re-record.
pub struct RecordingSession {
    store: Arc<GestureStore>,
    triggers: ActionTriggers,
    stage: Stage,
    carry: Duration,
    missed: Vec<MachineAction>,
}

impl RecordingSession {
    /// Create a session in `Idle` targeting the given store.
    pub fn new(store: Arc<GestureStore>, triggers: ActionTriggers) -> Self {
        Self {
            store,
            triggers,
            stage: Stage::Idle,
            carry: Duration::ZERO,
            missed: Vec::new(),
        }
    }

    /// Begin the countdown for the first action.
    ///
    /// # Errors
    /// [`GestureError::SessionActive`] if a countdown is already running,
    /// [`GestureError::SessionFinished`] once the session reached a
    /// terminal state.
    pub fn start(&mut self, display: &mut dyn CountdownDisplay) -> Result<()> {
        match self.stage {
            Stage::Idle => {
                self.carry = Duration::ZERO;
                self.enter_stage(0, display);
                Ok(())
            }
            Stage::Counting { .. } => Err(GestureError::SessionActive),
            Stage::Done | Stage::Aborted => Err(GestureError::SessionFinished),
        }
    }

    /// Advance the session by `dt` of elapsed time.
    ///
    /// Cooperative and non-blocking: does nothing unless enough time has
    /// accumulated to cross the next one-second tick. Captures read the
    /// provider at the moment their tick is crossed.
    pub fn advance(
        &mut self,
        dt: Duration,
        provider: &dyn HandTracking,
        display: &mut dyn CountdownDisplay,
    ) -> SessionStatus {
        if !matches!(self.stage, Stage::Counting { .. }) {
            return self.status();
        }

        self.carry += dt;
        while self.carry >= TICK {
            self.carry -= TICK;
            match self.stage {
                Stage::Counting {
                    action_index,
                    showing,
                } => {
                    if showing > 0 {
                        let next = showing - 1;
                        display.count(next);
                        self.stage = Stage::Counting {
                            action_index,
                            showing: next,
                        };
                    } else {
                        // The pause after the 0 display has elapsed.
                        let action = MachineAction::ALL[action_index];
                        self.capture_stage(action, provider);
                        if action_index + 1 < MachineAction::ALL.len() {
                            self.enter_stage(action_index + 1, display);
                        } else {
                            display.status("Recording finished");
                            info!("recording session finished");
                            self.stage = Stage::Done;
                            self.carry = Duration::ZERO;
                        }
                    }
                }
                _ => break,
            }
        }

        self.status()
    }

    /// Cancel the session.
    ///
    /// Stages already captured stay in the store; stages not yet reached
    /// are never touched. A no-op once the session is terminal.
    pub fn abort(&mut self) {
        match self.stage {
            Stage::Done | Stage::Aborted => {}
            _ => {
                info!("recording session aborted");
                self.stage = Stage::Aborted;
            }
        }
    }

    /// Current externally visible state.
    pub fn status(&self) -> SessionStatus {
        match self.stage {
            Stage::Idle => SessionStatus::Idle,
            Stage::Counting {
                action_index,
                showing,
            } => SessionStatus::CountingDown {
                action: MachineAction::ALL[action_index],
                showing,
            },
            Stage::Done => SessionStatus::Finished,
            Stage::Aborted => SessionStatus::Aborted,
        }
    }

    /// Actions whose capture was skipped because the provider was unready.
    pub fn missed(&self) -> &[MachineAction] {
        &self.missed
    }

    /// Whether the session reached `Done`.
    pub fn is_finished(&self) -> bool {
        matches!(self.stage, Stage::Done)
    }

    fn enter_stage(&mut self, action_index: usize, display: &mut dyn CountdownDisplay) {
        let action = MachineAction::ALL[action_index];
        info!(action = action.name(), "recording countdown started");
        display.status(&format!("Recording gesture {}", action.name()));
        display.count(COUNTDOWN_START);
        self.stage = Stage::Counting {
            action_index,
            showing: COUNTDOWN_START,
        };
    }

    fn capture_stage(&mut self, action: MachineAction, provider: &dyn HandTracking) {
        match JointSample::capture(provider) {
            Ok(sample) => {
                let trigger = self.triggers.for_action(action).clone();
                let id = self.store.append(action.name(), sample, trigger);
                info!(action = action.name(), %id, "gesture captured");
            }
            Err(err) => {
                // The session neither retries nor aborts on a degraded
                // capture; the miss is reported through missed().
                warn!(action = action.name(), %err, "capture skipped");
                self.missed.push(action);
            }
        }
    }
}

impl std::fmt::Debug for RecordingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingSession")
            .field("stage", &self.stage)
            .field("carry", &self.carry)
            .field("missed", &self.missed)
            .finish()
    }
}
