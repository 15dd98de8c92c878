//! Unified error types for gesturekit.
//!
//! All failures in the toolkit are local and non-fatal: a capture against an
//! unready provider or a misused session surfaces as a typed error and never
//! terminates the host loop. Conditions the matcher absorbs by design
//! (length-mismatched templates, an empty store) are not errors at all.

use thiserror::Error;

/// All gesturekit errors.
///
/// This is the canonical error type for all gesture operations.
#[derive(Debug, Error)]
pub enum GestureError {
    /// Capture was attempted before the hand-tracking provider signalled
    /// readiness, or the provider exposes zero joints.
    #[error("hand tracking provider not ready")]
    ProviderNotReady,

    /// The recognizer threshold is negative or not finite.
    #[error("invalid threshold: {value}")]
    InvalidThreshold {
        /// The rejected threshold value
        value: f32,
    },

    /// A recording session was started while its countdown is already running.
    #[error("recording session already running")]
    SessionActive,

    /// A recording session was started after reaching a terminal state.
    /// Sessions are single-shot; create a new one to record again.
    #[error("recording session already finished")]
    SessionFinished,
}

/// Result type for gesturekit operations.
pub type Result<T> = std::result::Result<T, GestureError>;

impl GestureError {
    /// Check if this error means the hand-tracking provider is not ready.
    ///
    /// Retryable: the provider may become ready on a later tick.
    pub fn is_provider_not_ready(&self) -> bool {
        matches!(self, GestureError::ProviderNotReady)
    }

    /// Check if this is a session lifecycle misuse.
    pub fn is_session_error(&self) -> bool {
        matches!(
            self,
            GestureError::SessionActive | GestureError::SessionFinished
        )
    }
}
