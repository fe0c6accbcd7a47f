//! Display collaborator boundary.
//!
//! The core never draws pixels on the main display; it hands the driver one
//! [`ViewFrame`] per tick describing *what* to show and the driver owns the
//! rendering. Exactly one [`DisplayLink::present`] call happens per tick.

/// What the display should show this tick.
///
/// Error frames always win, then an active notification, then the frame the
/// current behavior state selects. That priority is decided by the
/// coordinator; the driver just draws what it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFrame<'a> {
    /// Nothing to show (display dark, e.g. power ladder past dim).
    Blank,
    /// Boot/loading screen with the current status message.
    Loading {
        /// Status line for the active boot step.
        status: &'a str,
    },
    /// The idle home view.
    Home,
    /// The menu view at the given nesting depth.
    Menu {
        /// Current menu depth, 1-based.
        depth: u8,
    },
    /// A transient notification, preempting the normal view.
    Notification {
        /// Short header line.
        header: &'a str,
        /// Body text.
        body: &'a str,
        /// Icon key, interpreted by the driver.
        icon: &'a str,
    },
    /// An error screen.
    Error {
        /// Numeric error code shown to the user.
        code: u16,
        /// One-line summary.
        short: &'a str,
        /// Detail text.
        detail: &'a str,
        /// Fatal errors additionally show the manual-restart instruction.
        fatal: bool,
        /// Seconds left on a non-fatal auto-clear countdown.
        countdown_s: Option<u8>,
    },
}

/// Main display collaborator: consumes one frame per tick.
pub trait DisplayLink {
    /// Driver-side failure type.
    type Error: core::fmt::Debug;

    /// Render and present `frame`. Called exactly once per tick.
    fn present(&mut self, frame: &ViewFrame<'_>) -> Result<(), Self::Error>;
}
