//! # gesturekit
//!
//! Template-matching hand gesture capture and recognition for machine
//! control.
//!
//! gesturekit captures a skeletal hand pose as per-joint positions in the
//! hand-root frame, stores named reference gestures, and tests the live
//! pose against every stored gesture each tick with a per-joint distance
//! gate, triggering the matched action's callbacks.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gesturekit::prelude::*;
//!
//! let mut detector = GestureDetector::new();
//! detector.on_action(MachineAction::Up, || println!("head up"));
//! detector.on_not_recognized(|| println!("gesture released"));
//!
//! // Teach the store one pose per action with the staged countdown flow.
//! let mut session = detector.record();
//! session.start(&mut display)?;
//! loop {
//!     // host tick loop
//!     session.advance(frame_dt, &hand, &mut display);
//!     if session.is_finished() { break; }
//! }
//!
//! // Then classify every frame.
//! loop {
//!     detector.tick(&hand);
//! }
//! ```
//!
//! ## Crates
//!
//! - [`gesturekit_core`] — geometry, joint samples, provider seam, errors
//! - [`gesturekit_recognition`] — template store and gate-then-rank matcher
//! - [`gesturekit_session`] — the timed recording state machine

#![warn(missing_docs)]

mod detector;

pub mod prelude;

pub use detector::{DetectorConfig, GestureDetector};

// Re-export core types
pub use gesturekit_core::{
    GestureError, HandTracking, JointSample, MachineAction, Quat, Result, RootTransform,
    TemplateId, Vec3,
};

// Re-export recognition
pub use gesturekit_recognition::{
    best_match, CallbackSet, GestureRecognizer, GestureStore, GestureTemplate, MatchOutcome,
};

// Re-export session
pub use gesturekit_session::{
    ActionTriggers, CountdownDisplay, NullDisplay, RecordingSession, SessionStatus,
};
