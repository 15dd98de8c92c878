//! Countdown display collaborator.

/// Receives countdown numbers and status strings during a recording
/// session.
///
/// Purely observational: nothing the display does feeds back into the
/// session. Typical implementations forward to an on-screen text element.
pub trait CountdownDisplay {
    /// Show a status line ("Recording gesture up", "Recording finished").
    fn status(&mut self, text: &str);

    /// Show the current countdown value (3, 2, 1, 0).
    fn count(&mut self, value: u32);
}

/// A display that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl CountdownDisplay for NullDisplay {
    fn status(&mut self, _text: &str) {}
    fn count(&mut self, _value: u32) {}
}
