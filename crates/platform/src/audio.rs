//! Audio collaborator boundary.
//!
//! The core emits discrete tone and clip requests; tone synthesis, mixing
//! and the recorded-audio container format live behind the driver. All calls
//! must not block; the driver schedules the request and returns.

/// Tone and recorded-clip output collaborator.
pub trait ToneSink {
    /// Driver-side failure type.
    type Error: core::fmt::Debug;

    /// Request a tone of `frequency_hz` for `duration_ms`, replacing any
    /// tone currently sounding.
    fn tone(&mut self, frequency_hz: u16, duration_ms: u32) -> Result<(), Self::Error>;

    /// Start playback of a recorded clip by name, replacing any clip
    /// already playing.
    fn play_clip(&mut self, name: &str) -> Result<(), Self::Error>;

    /// Drain the end-of-playback event. Returns true exactly once after a
    /// clip finishes; tones do not raise it.
    fn take_playback_finished(&mut self) -> bool;

    /// Stop whatever is sounding.
    fn quiet(&mut self) -> Result<(), Self::Error>;
}
