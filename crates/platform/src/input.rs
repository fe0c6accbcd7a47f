//! Input collaborator boundary.
//!
//! Debounce, encoder quadrature and long-press detection all live in the
//! driver; the core consumes clean discrete events. Every event counts as
//! user activity for the power ladder.

/// Discrete input events from the rotary encoder and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Rotary detents moved; positive is clockwise.
    RotaryTurn(i8),
    /// Rotary encoder pressed.
    RotaryPress,
    /// Side button pressed.
    SideButton,
    /// Side button held.
    SideButtonLong,
}

/// Polled input source. The tick loop drains it once per tick.
pub trait InputSource {
    /// Next pending event, if any. Non-blocking.
    fn poll_event(&mut self) -> Option<InputEvent>;
}
