//! Staged gesture recording session
//!
//! This crate drives the timed capture flow that teaches the store its
//! reference gestures: for each machine action in turn, a 3-2-1-0 countdown
//! is shown, the live hand pose is captured, and a new template is appended.
//!
//! ## Design
//!
//! The flow is an explicit state machine advanced by
//! [`RecordingSession::advance`] with an elapsed-time argument, so the
//! host's tick loop stays in control and nothing ever blocks. The display
//! collaborator is purely observational.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod display;
pub mod recorder;

pub use display::{CountdownDisplay, NullDisplay};
pub use recorder::{ActionTriggers, RecordingSession, SessionStatus};
