//! Gesture template store and per-frame matcher
//!
//! This crate holds the recognition half of the toolkit:
//! - [`CallbackSet`]: registrable zero-argument handlers, invoked in
//!   registration order
//! - [`GestureTemplate`] and the append-only [`GestureStore`]
//! - [`best_match`]: the gate-then-rank matching function
//! - [`GestureRecognizer`]: the per-tick classifier with edge-triggered
//!   "not recognized" events
//!
//! ## Design
//!
//! Matching is a hybrid classifier, not pure nearest-neighbor: every joint
//! of a template must lie within the threshold of the live pose (the gate),
//! and the closest surviving template by summed distance wins (the rank).
//! A single badly-off joint disqualifies a template even if its remaining
//! joints coincidentally sum low.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod callback;
pub mod matcher;
pub mod store;

pub use callback::CallbackSet;
pub use matcher::{best_match, GestureRecognizer, MatchOutcome};
pub use store::{GestureStore, GestureTemplate};
