//! Convenient imports for gesturekit.
//!
//! Re-exports the most commonly used types so you can get started with a
//! single import:
//!
//! ```ignore
//! use gesturekit::prelude::*;
//!
//! let mut detector = GestureDetector::new();
//! detector.tick(&hand);
//! ```

// Main entry point
pub use crate::detector::{DetectorConfig, GestureDetector};

// Error handling
pub use crate::{GestureError, Result};

// Core types
pub use crate::{JointSample, MachineAction, RootTransform, TemplateId, Vec3};

// Provider seam
pub use crate::HandTracking;

// Recognition
pub use crate::{GestureRecognizer, GestureStore, MatchOutcome};

// Recording
pub use crate::{CountdownDisplay, NullDisplay, RecordingSession, SessionStatus};
